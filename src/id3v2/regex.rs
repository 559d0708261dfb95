use regex::Regex;

use crate::id3v1::genre_name;

/// Leading integer of a "7" or "7/16" style track/disc value.
pub fn leading_int(input: &str) -> Option<u32> {
    lazy_static! {
        static ref RE: Regex = Regex::new(r"^(\d+)").unwrap();
    }
    RE.captures(input.trim())
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
}

/// Resolve the ID3v1-compatible "(index)Label" genre form. The compact form
/// is only trusted when the index resolves, through the genre table, to the
/// label right after the parens; anything past the label is dropped, and
/// everything else is kept verbatim.
pub fn resolve_genre(input: &str) -> String {
    lazy_static! {
        static ref RE: Regex = Regex::new(r"^\((\d+)\)(\w+)").unwrap();
    }
    if let Some(c) = RE.captures(input) {
        let index = c.get(1).and_then(|m| m.as_str().parse::<u32>().ok());
        let label = c.get(2).map(|m| m.as_str()).unwrap_or("");
        if let Some(i) = index {
            if i < 256 && genre_name(i as u8) == label {
                return label.to_string();
            }
        }
    }
    input.to_string()
}
