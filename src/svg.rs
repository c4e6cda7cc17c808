//! Minimal SVG document helpers.

use std::fmt::Write;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ChartError, ChartResult};
use crate::parse::{PathCommand, parse_path};
use crate::plot::ChartProps;

static PATH_DATA: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<path\b[^>]*?\sd\s*=\s*(?:"([^"]*)"|'([^']*)')"#).expect("valid path regex")
});

/// Wrap path descriptions in an `<svg>` sized by the chart's view box.
pub fn render_document(props: &ChartProps, paths: &[String]) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" style="width:100%;height:100%">"#,
        props.width, props.height
    );
    for path in paths {
        let _ = write!(out, r#"<path d="{path}"/>"#);
    }
    out.push_str("</svg>");
    out
}

/// Extract the `d` attribute of the first `<path>` element.
pub fn path_data_from_svg(markup: &str) -> ChartResult<&str> {
    let captures = PATH_DATA
        .captures(markup)
        .ok_or(ChartError::MissingPathElement)?;
    captures
        .get(1)
        .or_else(|| captures.get(2))
        .map(|m| m.as_str())
        .ok_or(ChartError::MissingPathElement)
}

/// Parse the first `<path>` element's commands.
pub fn commands_from_svg(markup: &str) -> ChartResult<Vec<PathCommand>> {
    parse_path(path_data_from_svg(markup)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_carries_view_box() {
        let svg = render_document(&ChartProps::default(), &["M0,0L1,1".to_string()]);
        assert!(svg.contains(r#"viewBox="0 0 450 300""#));
        assert!(svg.contains(r#"<path d="M0,0L1,1"/>"#));
    }

    #[test]
    fn extracts_first_path_data() {
        let markup = r#"<svg><g><path class="bar" d='M 0,0 L 5,5'/></g><path d="M1,1"/></svg>"#;
        assert_eq!(path_data_from_svg(markup).unwrap(), "M 0,0 L 5,5");
        let commands = commands_from_svg(markup).unwrap();
        assert_eq!(commands.len(), 2);
    }

    #[test]
    fn missing_path_is_an_error() {
        assert!(matches!(
            path_data_from_svg("<svg><rect/></svg>"),
            Err(ChartError::MissingPathElement)
        ));
        assert!(matches!(
            path_data_from_svg(r#"<svg><path id="x"/></svg>"#),
            Err(ChartError::MissingPathElement)
        ));
    }
}
