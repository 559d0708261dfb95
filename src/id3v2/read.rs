use log::warn;

use crate::id3v2::regex;
use crate::id3v2::structure::FrameHeader;
use crate::id3v2::structure::Header;
use crate::id3v2::structure::Version;
use crate::id3v2::tools::decode_frame_id;
use crate::id3v2::tools::decode_synch_int;
use crate::tools::cursor::Cursor;
use crate::tools::decode_int_be_u32;
use crate::tools::encoding::{decode_text, find_terminator, terminator_len};
use crate::types::put_num;
use crate::types::put_text;
use crate::Error;
use crate::Tags;

/// Parse the ten-byte tag header at the start of `data`, if one is there.
/// A recognizable signature with a version we have no codec for is an
/// `Unsupported` error; a missing signature is simply no tag.
pub fn header(data: &[u8]) -> Result<Option<Header>, Error> {
    if data.len() < 10 || &data[0..3] != b"ID3" || data[4] != 0 {
        return Ok(None);
    }

    let version = Version::from_byte(data[3])?;
    let flags = data[5];
    let size = decode_synch_int(&data[6..10])?;

    Ok(Some(Header {
        version,
        has_extended_header: flags & 0x40 != 0,
        has_footer: flags & 0x10 != 0,
        size,
    }))
}

/// Walk the frame table of a tag whose header has already been parsed.
/// `data` starts at the tag signature. Decoding stops at padding, at a
/// frame that overruns the declared tag size, or at the end of the body;
/// whatever was decoded up to that point is kept.
pub fn tags(data: &[u8], header: &Header) -> Result<Tags, Error> {
    let mut t = Tags::none();

    let mut end = header.size as usize + 10;
    if end > data.len() {
        warn!(
            "Tag claims {} bytes but only {} are available",
            end,
            data.len()
        );
        end = data.len();
    }

    let mut cur = Cursor::new(&data[10..end]);

    // v2.3/v2.4 may carry an extended header; its length field counts itself
    if header.has_extended_header && header.version != Version::V22 {
        let ext = decode_synch_int(cur.take(4)?)? as usize;
        cur.skip(ext.saturating_sub(4).min(cur.remaining()))?;
    }

    let header_len = header.version.frame_header_len();
    while cur.remaining() >= header_len && cur.peek() != Some(0x00) {
        // an unreadable frame header means padding or garbage; stop here
        let f = match frame_header(&mut cur, header.version) {
            Ok(f) => f,
            Err(_) => break,
        };
        let payload = match cur.take(f.size as usize) {
            Ok(p) => p,
            Err(e) => {
                warn!("Frame {} overruns the tag body: {}", f.id, e);
                break;
            }
        };
        decode_frame(&mut t, &f.id, payload);
    }

    Ok(t)
}

fn frame_header(cur: &mut Cursor, version: Version) -> Result<FrameHeader, Error> {
    let id = decode_frame_id(cur.take(version.id_len())?)?;
    let size = match version {
        Version::V22 => decode_int_be_u32(cur.take(3)?),
        _ => {
            let size = decode_int_be_u32(cur.take(4)?);
            cur.skip(2)?; // frame flags
            size
        }
    };
    Ok(FrameHeader { id, size })
}

// every frame feeds at most one record field
fn decode_frame(t: &mut Tags, id: &str, payload: &[u8]) {
    match id {
        "TIT2" | "TT2" => put_text(&mut t.title, text(payload)),
        "TPE1" | "TP1" => put_text(&mut t.artist, text(payload)),
        "TALB" | "TAL" => put_text(&mut t.album, text(payload)),
        "TCON" | "TCO" => put_text(&mut t.genre, regex::resolve_genre(&text(payload))),

        "TRCK" | "TRK" => {
            if let Some(n) = regex::leading_int(&text(payload)) {
                put_num(&mut t.track, n);
            }
        }
        "TPOS" | "TPA" => {
            if let Some(n) = regex::leading_int(&text(payload)) {
                put_num(&mut t.disc, n);
            }
        }
        "TYER" | "TDRL" | "TDRC" | "TYE" => {
            if let Some(n) = regex::leading_int(&text(payload)) {
                put_num(&mut t.year, n);
            }
        }

        "COMM" | "COM" => {
            if let Some(s) = comment(payload) {
                put_text(&mut t.comment, s);
            }
        }

        "APIC" => {
            if let Some(p) = picture(payload, Version::V24) {
                if !p.is_empty() {
                    t.cover = Some(p);
                }
            }
        }
        "PIC" => {
            if let Some(p) = picture(payload, Version::V22) {
                if !p.is_empty() {
                    t.cover = Some(p);
                }
            }
        }

        "TDTG" => put_text(&mut t.timestamp, text(payload)),

        _ => {}
    }
}

// text frame: one encoding byte, then the string
fn text(payload: &[u8]) -> String {
    if payload.is_empty() {
        return String::new();
    }
    decode_text(payload[0], &payload[1..])
}

/// COMM payload: encoding byte, 3-byte language code, a description closed
/// by the encoding's terminator, then the value.
fn comment(payload: &[u8]) -> Option<String> {
    let mut cur = Cursor::new(payload);
    let enc = cur.take_u8().ok()?;
    cur.skip(3).ok()?; // language
    let rest = cur.rest();
    let pos = find_terminator(enc, rest)?;
    Some(decode_text(enc, &rest[pos + terminator_len(enc)..]))
}

/// APIC / PIC payload; only the raw image bytes are kept. v2.2 stores a
/// fixed 3-byte format code where later versions put a NUL-terminated MIME
/// string.
fn picture(payload: &[u8], version: Version) -> Option<Vec<u8>> {
    let mut cur = Cursor::new(payload);
    let enc = cur.take_u8().ok()?;
    match version {
        Version::V22 => cur.skip(3).ok()?,
        _ => {
            cur.take_delimited(0x00).ok()?;
        }
    }
    cur.take_u8().ok()?; // picture type
    let rest = cur.rest();
    let pos = find_terminator(enc, rest)?;
    Some(rest[pos + terminator_len(enc)..].to_vec())
}
