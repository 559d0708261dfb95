use crate::tools::malformed;
use crate::tools::sync_error;
use crate::Error;

/// Decode a 28-bit synchsafe integer. Every byte must have its high bit
/// clear; a set bit means the size framework itself cannot be trusted, so
/// the whole read has to be abandoned.
pub fn decode_synch_int(input: &[u8]) -> Result<u32, Error> {
    let mut result: u32 = 0;
    for (i, b) in input.iter().enumerate() {
        // verify that this is a valid synchsafe int
        // (by checking that the msb of each byte is zero)
        if b & 0x80 != 0 {
            return Err(sync_error(&format!(
                "Invalid synch-safe byte at position {}",
                i
            )));
        }
        // move the 7 bit parts to proper places
        // (0000 0001 0111 1111 => 1111 1111)
        result |= u32::from(*b) << (7 * (input.len() - 1 - i));
    }
    Ok(result)
}

/// Encode a value as four synchsafe bytes. The value has to fit in 28
/// bits; the top nibble of anything larger is silently discarded.
pub fn encode_synch_int(input: u32) -> [u8; 4] {
    [
        ((input >> 21) & 0x7F) as u8,
        ((input >> 14) & 0x7F) as u8,
        ((input >> 7) & 0x7F) as u8,
        (input & 0x7F) as u8,
    ]
}

pub fn decode_frame_id(input: &[u8]) -> Result<String, Error> {
    let mut s = String::new();
    for c in input.iter() {
        if (*c >= b'A' && *c <= b'Z') || (*c >= b'0' && *c <= b'9') {
            s.push(*c as char);
        } else {
            return Err(malformed(&format!(
                "Cannot decode {:X?}: Invalid frame ID (contains characters that are not A-Z or 0-9)",
                input
            )));
        }
    }
    Ok(s)
}
