/// MIME subtype of a raw image buffer, sniffed from its magic bytes.
/// Only the cover formats the writer cares about are recognized.
pub fn subtype(data: &[u8]) -> Option<&'static str> {
    if data.len() >= 2 && data[0..2] == [0xFF, 0xD8] {
        return Some("jpeg");
    }
    if data.len() >= 8 && data[0..8] == [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A] {
        return Some("png");
    }
    if data.len() >= 6 && (&data[0..6] == b"GIF87a" || &data[0..6] == b"GIF89a") {
        return Some("gif");
    }
    None
}
