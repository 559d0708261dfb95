pub mod cursor;
pub mod encoding;
pub mod image;

use crate::Error;

pub fn sync_error(err: &str) -> Error {
    Error::Sync(err.to_string())
}
pub fn malformed(err: &str) -> Error {
    Error::Malformed(err.to_string())
}
pub fn unsupported(err: &str) -> Error {
    Error::Unsupported(err.to_string())
}

// is there a way to enforce slice length at compile time?
pub fn decode_int_be_u32(input: &[u8]) -> u32 {
    if input.len() > 4 {
        panic!(
            "decode_int_be_u32 expected a slice with max length 4, got slice with length {}",
            input.len()
        );
    }
    let mut result: u32 = 0;
    for (i, b) in input.iter().enumerate() {
        result |= u32::from(*b) << (8 * (input.len() - 1 - i));
    }
    result
}

pub fn encode_int_be_u32(input: u32) -> [u8; 4] {
    [
        (input >> 24) as u8,
        (input >> 16) as u8,
        (input >> 8) as u8,
        input as u8,
    ]
}
