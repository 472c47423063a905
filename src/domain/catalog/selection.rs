//! Parsing and range-checking of 1-based menu selections.

use std::num::IntErrorKind;
use thiserror::Error;

/// Why a typed selection could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("selection {selected} is outside 1..={available}")]
    OutOfRange { selected: i64, available: usize },
}

/// Parses a typed selection. Signs are accepted so that "-1" is reported
/// as out of range rather than as garbage. Integers too large for `i64`
/// saturate, so they too fail the range check instead of parsing.
pub fn parse_selection(raw: &str) -> Result<i64, SelectionError> {
    match raw.trim().parse::<i64>() {
        Ok(n) => Ok(n),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(SelectionError::NotANumber(raw.to_string())),
        },
    }
}

/// Converts a 1-based selection into a position in a list of `len` items.
pub fn resolve_position(one_based: i64, len: usize) -> Result<usize, SelectionError> {
    let out_of_range = SelectionError::OutOfRange {
        selected: one_based,
        available: len,
    };
    let position = usize::try_from(one_based)
        .ok()
        .and_then(|n| n.checked_sub(1))
        .ok_or_else(|| out_of_range.clone())?;

    if position < len {
        Ok(position)
    } else {
        Err(out_of_range)
    }
}
