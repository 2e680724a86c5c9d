//! Parsing of coordinates typed by a human.

use derive_more::{Display, Error};

/// Input that is not a pair of coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Expected two numbers (row and column), got {:?}", input)]
pub struct InputError {
    /// The offending input, trimmed.
    pub input: String,
}

/// Parses `"row col"` (1-indexed, separated by spaces or a comma) into
/// 0-indexed signed coordinates.
///
/// Range checking is left to the board, so `"0 0"` parses to `(-1, -1)`
/// and is rejected as an invalid move rather than as bad input.
pub fn parse_coordinates(line: &str) -> Result<(isize, isize), InputError> {
    let error = || InputError {
        input: line.trim().to_string(),
    };

    let mut parts = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty());

    let (Some(row), Some(col), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(error());
    };

    let row: isize = row.parse().map_err(|_| error())?;
    let col: isize = col.parse().map_err(|_| error())?;
    Ok((row.saturating_sub(1), col.saturating_sub(1)))
}
