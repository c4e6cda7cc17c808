//! SVG path description parsing.
//!
//! Paths are split on command letters. Each command keeps its raw text, its
//! single-letter name and a flat list of numeric arguments; repeated argument
//! groups (`L 1,2 3,4`) are not split into separate commands.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::error::{ChartError, ChartResult};

static COMMAND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[MmLlHhVvCcSsQqTtAaZz][^MmLlHhVvCcSsQqTtAaZz]*").expect("valid command regex")
});

static NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[-+]?(?:\d+\.?\d*|\.\d+)(?:[eE][-+]?\d+)?").expect("valid number regex")
});

/// Kind of drawing instruction, independent of absolute/relative form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// `M`: start a subpath.
    MoveTo,
    /// `L`: straight line.
    LineTo,
    /// `H`: horizontal line.
    HorizontalTo,
    /// `V`: vertical line.
    VerticalTo,
    /// `C`: cubic Bézier.
    CubicTo,
    /// `S`: smooth cubic Bézier.
    SmoothCubicTo,
    /// `Q`: quadratic Bézier.
    QuadTo,
    /// `T`: smooth quadratic Bézier.
    SmoothQuadTo,
    /// `A`: elliptical arc.
    ArcTo,
    /// `Z`: close the subpath.
    Close,
}

impl CommandKind {
    fn from_letter(letter: char) -> Option<Self> {
        let kind = match letter.to_ascii_uppercase() {
            'M' => Self::MoveTo,
            'L' => Self::LineTo,
            'H' => Self::HorizontalTo,
            'V' => Self::VerticalTo,
            'C' => Self::CubicTo,
            'S' => Self::SmoothCubicTo,
            'Q' => Self::QuadTo,
            'T' => Self::SmoothQuadTo,
            'A' => Self::ArcTo,
            'Z' => Self::Close,
            _ => return None,
        };
        Some(kind)
    }
}

/// One drawing instruction parsed from a path description.
#[derive(Debug, Clone, PartialEq)]
pub struct PathCommand {
    /// Source text of the command, including trailing separators.
    pub raw: String,
    /// Command letter as written.
    pub name: char,
    /// Numeric arguments in order.
    pub args: Vec<f64>,
}

impl PathCommand {
    /// Instruction kind.
    pub fn kind(&self) -> CommandKind {
        // Names only ever come from the command regex.
        CommandKind::from_letter(self.name).unwrap_or(CommandKind::Close)
    }

    /// Whether coordinates are relative to the current point.
    pub fn is_relative(&self) -> bool {
        self.name.is_ascii_lowercase()
    }

    /// Whether this command closes the subpath.
    pub fn is_close(&self) -> bool {
        self.kind() == CommandKind::Close
    }
}

/// Parse a path description into commands.
pub fn parse_path(path: &str) -> ChartResult<Vec<PathCommand>> {
    let mut commands = Vec::new();
    let mut cursor = 0;
    for found in COMMAND.find_iter(path) {
        if !path[cursor..found.start()].trim().is_empty() {
            return Err(ChartError::malformed(format!(
                "unexpected text `{}` before command",
                path[cursor..found.start()].trim()
            )));
        }
        cursor = found.end();
        let raw = found.as_str();
        let mut chars = raw.chars();
        let Some(name) = chars.next() else {
            continue;
        };
        let args = parse_args(chars.as_str())?;
        trace!(name = %name, args = args.len(), "parsed path command");
        commands.push(PathCommand {
            raw: raw.to_string(),
            name,
            args,
        });
    }
    if commands.is_empty() {
        return Err(ChartError::malformed(format!("no commands in `{path}`")));
    }
    Ok(commands)
}

fn parse_args(text: &str) -> ChartResult<Vec<f64>> {
    let mut args = Vec::new();
    let mut cursor = 0;
    for found in NUMBER.find_iter(text) {
        check_separator(&text[cursor..found.start()])?;
        cursor = found.end();
        let value = found
            .as_str()
            .parse::<f64>()
            .map_err(|_| ChartError::malformed(format!("bad number `{}`", found.as_str())))?;
        args.push(value);
    }
    check_separator(&text[cursor..])?;
    Ok(args)
}

fn check_separator(gap: &str) -> ChartResult<()> {
    if gap.chars().all(|c| c == ',' || c.is_ascii_whitespace()) {
        Ok(())
    } else {
        Err(ChartError::malformed(format!("unexpected text `{}` in arguments", gap.trim())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_alone_has_no_args() {
        let commands = parse_path("Z").unwrap();
        assert_eq!(
            commands,
            vec![PathCommand {
                raw: "Z".to_string(),
                name: 'Z',
                args: Vec::new(),
            }]
        );
    }

    #[test]
    fn splits_spaced_commands() {
        let commands = parse_path("M 10,20 L 10,80 L 50,80 L 50,20 Z").unwrap();
        let names: String = commands.iter().map(|c| c.name).collect();
        assert_eq!(names, "MLLLZ");
        assert_eq!(commands[0].raw, "M 10,20 ");
        assert_eq!(commands[0].args, vec![10.0, 20.0]);
        assert_eq!(commands[3].args, vec![50.0, 20.0]);
        assert!(commands[4].is_close());
    }

    #[test]
    fn splits_compact_commands() {
        let commands = parse_path("M0,100L100,0").unwrap();
        assert_eq!(commands.len(), 2);
        assert_eq!(commands[1].args, vec![100.0, 0.0]);
    }

    #[test]
    fn keeps_repeated_groups_flat() {
        let commands = parse_path("M0,0 L1,2 3,4 5-6").unwrap();
        assert_eq!(commands[1].args, vec![1.0, 2.0, 3.0, 4.0, 5.0, -6.0]);
    }

    #[test]
    fn arcs_keep_all_parameters() {
        let commands = parse_path("a5,5 0 0 1 -5,5").unwrap();
        assert_eq!(commands[0].kind(), CommandKind::ArcTo);
        assert!(commands[0].is_relative());
        assert_eq!(commands[0].args, vec![5.0, 5.0, 0.0, 0.0, 1.0, -5.0, 5.0]);
    }

    #[test]
    fn parses_exponents_and_fractions() {
        let commands = parse_path("L1e2,.5").unwrap();
        assert_eq!(commands[0].args, vec![100.0, 0.5]);
    }

    #[test]
    fn rejects_input_without_commands() {
        assert!(matches!(parse_path(""), Err(ChartError::MalformedPath { .. })));
        assert!(matches!(parse_path("10,20"), Err(ChartError::MalformedPath { .. })));
    }

    #[test]
    fn rejects_garbage_arguments() {
        assert!(matches!(parse_path("M 10,x"), Err(ChartError::MalformedPath { .. })));
        assert!(matches!(parse_path("junk M0,0"), Err(ChartError::MalformedPath { .. })));
    }
}
