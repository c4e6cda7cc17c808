//! Shape assertions over parsed paths.
//!
//! These helpers back chart tests: they check a rendered path against an
//! expected command sequence or measure the box spanned by its points.

use crate::error::{ChartError, ChartResult};
use crate::parse::{PathCommand, parse_path};

/// Command sequence of a bar with rounded corners: a move, then an arc and a
/// line per side, then a close.
pub const RECTANGULAR_BAR: &[char] = &['M', 'A', 'L', 'A', 'L', 'A', 'L', 'A', 'Z'];

/// Width and height of the box spanned by a path's points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarBounds {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

/// Check that a path's command names match `expected` position by position.
///
/// Both sequences must have the same length. `Z` and `z` are interchangeable.
pub fn exhibits_shape_sequence(path: &str, expected: &[char]) -> ChartResult<bool> {
    let commands = parse_path(path)?;
    Ok(commands.len() == expected.len()
        && commands
            .iter()
            .zip(expected)
            .all(|(command, name)| same_name(command.name, *name)))
}

fn same_name(actual: char, expected: char) -> bool {
    actual == expected || (actual.eq_ignore_ascii_case(&'z') && expected.eq_ignore_ascii_case(&'z'))
}

/// Check that a path draws a rectangular bar.
pub fn is_rectangular_bar(path: &str) -> ChartResult<bool> {
    exhibits_shape_sequence(path, RECTANGULAR_BAR)
}

/// Measure the box spanned by every non-closing command's first two
/// arguments.
pub fn measure_bar_bounds(path: &str) -> ChartResult<BarBounds> {
    let commands = parse_path(path)?;
    let mut xs = Vec::with_capacity(commands.len());
    let mut ys = Vec::with_capacity(commands.len());
    for (index, command) in commands.iter().enumerate() {
        if command.is_close() {
            continue;
        }
        let (x, y) = leading_pair(command, index)?;
        xs.push(x);
        ys.push(y);
    }
    if xs.is_empty() {
        return Err(ChartError::PrecisionAssumptionViolated {
            index: 0,
            name: '?',
            expected: 2,
            found: 0,
        });
    }
    Ok(BarBounds {
        width: spread(&xs),
        height: spread(&ys),
    })
}

/// Height of a four-corner bar, read from the y of the first and third
/// commands only.
pub fn measure_bar_height(path: &str) -> ChartResult<f64> {
    let commands = parse_path(path)?;
    let command = |index: usize| {
        commands
            .get(index)
            .ok_or(ChartError::PrecisionAssumptionViolated {
                index,
                name: '?',
                expected: 2,
                found: 0,
            })
    };
    let (_, top) = leading_pair(command(0)?, 0)?;
    let (_, bottom) = leading_pair(command(2)?, 2)?;
    Ok((top - bottom).abs())
}

fn leading_pair(command: &PathCommand, index: usize) -> ChartResult<(f64, f64)> {
    match command.args.as_slice() {
        [x, y, ..] => Ok((*x, *y)),
        args => Err(ChartError::PrecisionAssumptionViolated {
            index,
            name: command.name,
            expected: 2,
            found: args.len(),
        }),
    }
}

fn spread(values: &[f64]) -> f64 {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    max - min
}
