//! Signed varints: zig-zag mapping on top of the protobuf LEB128 varint.

use crate::error::{CorrelateError, Result};
use prost::encoding::{decode_varint, encode_varint};

#[inline]
pub fn zigzag_encode(v: i64) -> u64 {
    ((v << 1) ^ (v >> 63)) as u64
}

#[inline]
pub fn zigzag_decode(v: u64) -> i64 {
    ((v >> 1) as i64) ^ -((v & 1) as i64)
}

pub fn write_signed(buf: &mut Vec<u8>, v: i64) {
    encode_varint(zigzag_encode(v), buf);
}

/// Read every signed varint in `bytes`. A truncated trailing varint is an error.
pub fn read_all_signed(bytes: &[u8]) -> Result<Vec<i64>> {
    let mut buf = bytes;
    let mut out = Vec::with_capacity(bytes.len());
    while !buf.is_empty() {
        let raw = decode_varint(&mut buf)
            .map_err(|e| CorrelateError::MalformedRanges(e.to_string()))?;
        out.push(zigzag_decode(raw));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zigzag_small_magnitudes_stay_small() {
        assert_eq!(zigzag_encode(0), 0);
        assert_eq!(zigzag_encode(-1), 1);
        assert_eq!(zigzag_encode(1), 2);
        assert_eq!(zigzag_encode(-2), 3);
        for v in [0, 1, -1, 63, -64, i32::MAX as i64, i32::MIN as i64, i64::MAX, i64::MIN] {
            assert_eq!(zigzag_decode(zigzag_encode(v)), v);
        }
    }

    #[test]
    fn test_negative_delta_is_one_byte() {
        let mut buf = Vec::new();
        write_signed(&mut buf, -5);
        assert_eq!(buf, vec![9]);
    }

    #[test]
    fn test_truncated_varint() {
        let mut buf = Vec::new();
        write_signed(&mut buf, 1 << 20);
        buf.pop();
        assert!(matches!(
            read_all_signed(&buf),
            Err(CorrelateError::MalformedRanges(_))
        ));
    }
}
