//! Delta-varint range encoding.
//!
//! A flat `[sl, sc, el, ec, ...]` list is split into two columns: even
//! positions (lines) and odd positions (characters). Each column is written as
//! deltas from the previous value in the same column, starting from zero, as
//! signed varints. The line column is written first, then the character
//! column. Sorted occurrence ranges produce mostly one-byte deltas.

use super::varint::{read_all_signed, write_signed};
use crate::error::{CorrelateError, Result};

/// Encode a flat range list. Empty input encodes to an empty buffer.
pub fn encode_ranges(ranges: &[i32]) -> Result<Vec<u8>> {
    if ranges.len() % 4 != 0 {
        return Err(CorrelateError::InvalidRangeLength(ranges.len()));
    }

    let mut buf = Vec::with_capacity(ranges.len());
    for column in [0, 1] {
        let mut previous = 0i64;
        for &value in ranges.iter().skip(column).step_by(2) {
            let value = i64::from(value);
            write_signed(&mut buf, value - previous);
            previous = value;
        }
    }

    Ok(buf)
}

/// Inverse of [`encode_ranges`].
pub fn decode_ranges(bytes: &[u8]) -> Result<Vec<i32>> {
    let deltas = read_all_signed(bytes)?;
    if deltas.len() % 4 != 0 {
        return Err(CorrelateError::InvalidRangeLength(deltas.len()));
    }

    let (lines, characters) = deltas.split_at(deltas.len() / 2);
    let lines = accumulate(lines)?;
    let characters = accumulate(characters)?;

    let mut out = Vec::with_capacity(deltas.len());
    for (line, character) in lines.into_iter().zip(characters) {
        out.push(line);
        out.push(character);
    }

    Ok(out)
}

fn accumulate(deltas: &[i64]) -> Result<Vec<i32>> {
    let mut current = 0i64;
    deltas
        .iter()
        .map(|&delta| {
            current = current
                .checked_add(delta)
                .ok_or_else(|| CorrelateError::MalformedRanges("delta overflow".to_string()))?;
            i32::try_from(current).map_err(|_| {
                CorrelateError::MalformedRanges(format!("value {current} out of range"))
            })
        })
        .collect()
}
