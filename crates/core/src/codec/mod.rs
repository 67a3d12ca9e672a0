//! Compact binary encodings for stored range sets.

pub mod ranges;
pub mod varint;

pub use ranges::{decode_ranges, encode_ranges};
