//! Lookup table for the encoding alphabet.

/// First code point covered by the decoding table.
const TABLE_START: u32 = '-' as u32;

/// Six-bit values for the code point span `-` through `z`, with gaps
/// marked by `-1`.
///
/// The ordering is specific to this encoding and is not base64url: digits
/// follow the letters, and `-` and `_` carry the two highest values.
const DECODING_TABLE: [i8; 78] = [
    62, -1, -1, 52, 53, 54, 55, 56, 57, 58, 59, 60, 61, -1, -1, -1, -1, -1,
    -1, -1, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17,
    18, 19, 20, 21, 22, 23, 24, 25, -1, -1, -1, -1, 63, -1, 26, 27, 28, 29,
    30, 31, 32, 33, 34, 35, 36, 37, 38, 39, 40, 41, 42, 43, 44, 45, 46, 47,
    48, 49, 50, 51,
];

/// Decode a character to its six-bit value, if part of the alphabet.
pub fn decode(c: char) -> Option<u8> {
    let index = (c as u32).checked_sub(TABLE_START)?;
    let value = *DECODING_TABLE.get(index as usize)?;

    (value >= 0).then_some(value as u8)
}
