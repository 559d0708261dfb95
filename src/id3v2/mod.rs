use chrono::Utc;

use crate::tools::encode_int_be_u32;
use crate::tools::encoding::encode_iso_8859_1;
use crate::tools::image;
use crate::Error;
use crate::Tags;

mod read;
mod regex;
mod structure;
mod tools;

pub use self::tools::decode_synch_int;
pub use self::tools::encode_synch_int;

/// Read a tag sitting at the very start of the buffer. Absence of a tag is
/// an empty record, not an error.
pub fn read_header(data: &[u8]) -> Result<Tags, Error> {
    match read::header(data)? {
        Some(h) => read::tags(data, &h),
        None => Ok(Tags::none()),
    }
}

/// Read an appended tag, located by scanning backwards for a signature.
pub fn read_footer(data: &[u8]) -> Result<Tags, Error> {
    match scan_footer(data)? {
        Some((pos, h)) => read::tags(&data[pos..], &h),
        None => Ok(Tags::none()),
    }
}

// appended tags carry the same layout as leading ones, so the reverse scan
// looks for a plausible header signature anywhere before the end
fn scan_footer(data: &[u8]) -> Result<Option<(usize, structure::Header)>, Error> {
    if data.len() < 10 {
        return Ok(None);
    }
    let mut pos = data.len() - 10;
    while pos > 0 {
        if &data[pos..pos + 3] == b"ID3"
            && (data[pos + 3] == 2 || data[pos + 3] == 3 || data[pos + 3] == 4)
            && data[pos + 4] == 0
        {
            return read::header(&data[pos..]).map(|h| h.map(|h| (pos, h)));
        }
        pos -= 1;
    }
    Ok(None)
}

/// Drop a leading tag if one is there. No-op without a signature; tags of
/// versions we cannot size are left untouched.
pub fn strip_header(data: &[u8]) -> Result<&[u8], Error> {
    match read::header(data) {
        Ok(Some(h)) => Ok(&data[h.total_len().min(data.len())..]),
        Ok(None) => Ok(data),
        Err(Error::Unsupported(_)) => Ok(data),
        Err(e) => Err(e),
    }
}

/// Excise an appended tag from wherever the reverse scan finds it.
pub fn strip_footer(data: &[u8]) -> Result<Vec<u8>, Error> {
    match scan_footer(data)? {
        Some((pos, h)) => {
            let end = (pos + h.total_len()).min(data.len());
            let mut vec = Vec::with_capacity(data.len() - (end - pos));
            vec.extend_from_slice(&data[..pos]);
            vec.extend_from_slice(&data[end..]);
            Ok(vec)
        }
        None => Ok(data.to_vec()),
    }
}

macro_rules! write_frame {
    ($vec:ident, $id:expr, $payload:expr) => {{
        let payload = $payload;
        $vec.extend_from_slice($id);
        $vec.extend_from_slice(&encode_int_be_u32(payload.len() as u32));
        // no flags
        $vec.extend_from_slice(b"\x00\x00");
        $vec.extend_from_slice(&payload);
    }};
}

/// Build a fresh ID3v2.4 tag from the record and prepend it to `audio`.
/// The input is expected to be stripped of existing tags already; whatever
/// version they carried is not preserved. A `TDTG` tagging timestamp is
/// always emitted.
pub fn write(audio: &[u8], tags: &Tags) -> Vec<u8> {
    let mut body: Vec<u8> = Vec::new();

    if let Some(ref x) = tags.title {
        write_frame!(body, b"TIT2", utf8_payload(x));
    }
    if let Some(ref x) = tags.artist {
        write_frame!(body, b"TPE1", utf8_payload(x));
    }
    if let Some(ref x) = tags.album {
        write_frame!(body, b"TALB", utf8_payload(x));
    }
    if let Some(x) = tags.track {
        write_frame!(body, b"TRCK", latin1_payload(&x.to_string()));
    }
    if let Some(x) = tags.disc {
        write_frame!(body, b"TPOS", latin1_payload(&x.to_string()));
    }
    if let Some(ref x) = tags.genre {
        write_frame!(body, b"TCON", utf8_payload(x));
    }
    if let Some(x) = tags.year {
        write_frame!(body, b"TYER", latin1_payload(&x.to_string()));
    }

    if let Some(ref x) = tags.comment {
        let mut payload = Vec::with_capacity(x.len() + 5);
        // encoding (utf-8), blank language code, empty description
        payload.extend_from_slice(b"\x03   \x00");
        payload.extend_from_slice(x.as_bytes());
        write_frame!(body, b"COMM", payload);
    }

    if let Some(ref x) = tags.cover {
        let mut payload = Vec::with_capacity(x.len() + 16);
        payload.push(0x00); // latin-1 mime and description
        payload.extend_from_slice(b"image/");
        if let Some(s) = image::subtype(x) {
            payload.extend_from_slice(s.as_bytes());
        }
        // mime terminator, picture type 3 (front cover), empty description
        payload.extend_from_slice(b"\x00\x03\x00");
        payload.extend_from_slice(x);
        write_frame!(body, b"APIC", payload);
    }

    let stamp = Utc::now().format("%Y-%m-%dT%H:%M:%S").to_string();
    write_frame!(body, b"TDTG", latin1_payload(&stamp));

    let mut vec = Vec::with_capacity(10 + body.len() + audio.len());
    vec.extend_from_slice(b"ID3\x04\x00\x00"); // id3v2.4, no flags
    vec.extend_from_slice(&self::tools::encode_synch_int(body.len() as u32));
    vec.extend_from_slice(&body);
    vec.extend_from_slice(audio);
    vec
}

fn utf8_payload(text: &str) -> Vec<u8> {
    let mut vec = Vec::with_capacity(text.len() + 1);
    vec.push(0x03);
    vec.extend_from_slice(text.as_bytes());
    vec
}

fn latin1_payload(text: &str) -> Vec<u8> {
    let mut vec = vec![0x00];
    vec.extend_from_slice(&encode_iso_8859_1(text));
    vec
}

#[cfg(test)]
mod tests;
