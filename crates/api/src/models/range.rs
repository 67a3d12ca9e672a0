use crate::error::{CorrelateError, CorrelateResult};
use serde::{Deserialize, Serialize};

/// A fully expanded source span. Lines and characters are zero-based.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Range {
    pub start_line: i32,
    pub start_character: i32,
    pub end_line: i32,
    pub end_character: i32,
}

impl Range {
    pub fn new(start_line: i32, start_character: i32, end_line: i32, end_character: i32) -> Self {
        Self {
            start_line,
            start_character,
            end_line,
            end_character,
        }
    }

    /// Parse a SCIP range, expanding the 3-integer single-line shorthand.
    pub fn from_scip(values: &[i32]) -> CorrelateResult<Self> {
        match *values {
            [line, start_character, end_character] => {
                Ok(Self::new(line, start_character, line, end_character))
            }
            [start_line, start_character, end_line, end_character] => Ok(Self::new(
                start_line,
                start_character,
                end_line,
                end_character,
            )),
            _ => Err(CorrelateError::InvalidRangeLength(values.len())),
        }
    }

    pub fn to_scip(&self) -> [i32; 4] {
        [
            self.start_line,
            self.start_character,
            self.end_line,
            self.end_character,
        ]
    }
}

/// Group a flat `[sl, sc, el, ec, ...]` buffer into ranges.
pub fn ranges_from_flat(values: &[i32]) -> CorrelateResult<Vec<Range>> {
    if values.len() % 4 != 0 {
        return Err(CorrelateError::InvalidRangeLength(values.len()));
    }
    Ok(values
        .chunks_exact(4)
        .map(|c| Range::new(c[0], c[1], c[2], c[3]))
        .collect())
}
