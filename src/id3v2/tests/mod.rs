
use super::*;
use crate::tools::encode_int_be_u32;
use crate::Error;
use crate::Tags;

// v2.3/v2.4 frame: 4-byte id, 4-byte size, two zero flag bytes
fn frame(id: &[u8; 4], payload: &[u8]) -> Vec<u8> {
    let mut vec = Vec::new();
    vec.extend_from_slice(id);
    vec.extend_from_slice(&encode_int_be_u32(payload.len() as u32));
    vec.extend_from_slice(b"\x00\x00");
    vec.extend_from_slice(payload);
    vec
}

// v2.2 frame: 3-byte id, 3-byte size
fn frame22(id: &[u8; 3], payload: &[u8]) -> Vec<u8> {
    let mut vec = Vec::new();
    vec.extend_from_slice(id);
    vec.extend_from_slice(&encode_int_be_u32(payload.len() as u32)[1..]);
    vec.extend_from_slice(payload);
    vec
}

fn text_payload(text: &str) -> Vec<u8> {
    let mut vec = vec![0x03];
    vec.extend_from_slice(text.as_bytes());
    vec
}

fn tag(version: u8, flags: u8, body: &[u8]) -> Vec<u8> {
    let mut vec = Vec::new();
    vec.extend_from_slice(b"ID3");
    vec.push(version);
    vec.push(0x00);
    vec.push(flags);
    vec.extend_from_slice(&encode_synch_int(body.len() as u32));
    vec.extend_from_slice(body);
    vec
}

#[test]
fn v23_read_test() {
    let mut body = Vec::new();
    body.extend_from_slice(&frame(b"TIT2", &text_payload("Test Name")));
    body.extend_from_slice(&frame(b"TPE1", &text_payload("Test Artist")));
    body.extend_from_slice(&frame(b"TALB", &text_payload("Test Album")));
    body.extend_from_slice(&frame(b"TRCK", &text_payload("7/16")));
    body.extend_from_slice(&frame(b"TPOS", &text_payload("3")));
    body.extend_from_slice(&frame(b"TCON", &text_payload("Classical")));
    body.extend_from_slice(&frame(b"TYER", &text_payload("2008")));
    body.extend_from_slice(&frame(b"COMM", b"\x03eng\x00Test Comments"));
    body.extend_from_slice(&frame(b"TDTG", b"\x002008-12-29T10:00:00"));
    body.extend_from_slice(&[0u8; 32]); // padding

    let ideal = Tags {
        title: Some("Test Name".to_string()),
        artist: Some("Test Artist".to_string()),
        album: Some("Test Album".to_string()),
        track: Some(7),
        disc: Some(3),
        genre: Some("Classical".to_string()),
        year: Some(2008),
        comment: Some("Test Comments".to_string()),
        timestamp: Some("2008-12-29T10:00:00".to_string()),
        ..Default::default()
    };
    assert_eq!(read_header(&tag(3, 0, &body)).unwrap(), ideal);
}

#[test]
fn v22_read_test() {
    let mut body = Vec::new();
    body.extend_from_slice(&frame22(b"TT2", &text_payload("example song")));
    body.extend_from_slice(&frame22(b"TP1", &text_payload("example artist")));
    body.extend_from_slice(&frame22(b"TAL", &text_payload("example album")));
    body.extend_from_slice(&frame22(b"TRK", &text_payload("21")));
    body.extend_from_slice(&frame22(b"TYE", &text_payload("2017")));
    // unknown frame gets skipped by length
    body.extend_from_slice(&frame22(b"TBP", &text_payload("96")));
    body.extend_from_slice(&frame22(b"TCO", &text_payload("Anime")));

    let ideal = Tags {
        title: Some("example song".to_string()),
        artist: Some("example artist".to_string()),
        album: Some("example album".to_string()),
        track: Some(21),
        year: Some(2017),
        genre: Some("Anime".to_string()),
        ..Default::default()
    };
    assert_eq!(read_header(&tag(2, 0, &body)).unwrap(), ideal);
}

#[test]
fn utf16_read_test() {
    // UTF-16 with BOM, little endian
    let mut payload = vec![0x01, 0xFF, 0xFE];
    for b in "NEXT".encode_utf16() {
        payload.extend_from_slice(&b.to_le_bytes());
    }
    let body = frame(b"TIT2", &payload);
    let t = read_header(&tag(4, 0, &body)).unwrap();
    assert_eq!(t.title, Some("NEXT".to_string()));

    // UTF-16 big endian without BOM
    let mut payload = vec![0x02];
    for b in "FLIP".encode_utf16() {
        payload.extend_from_slice(&b.to_be_bytes());
    }
    let body = frame(b"TIT2", &payload);
    let t = read_header(&tag(4, 0, &body)).unwrap();
    assert_eq!(t.title, Some("FLIP".to_string()));
}

#[test]
fn comment_description_test() {
    // the description before the terminator is dropped
    let body = frame(b"COMM", b"\x00engliner notes\x00the actual comment");
    let t = read_header(&tag(3, 0, &body)).unwrap();
    assert_eq!(t.comment, Some("the actual comment".to_string()));

    // utf-16 comment with a BOM-only description
    let mut payload = vec![0x01, b'e', b'n', b'g', 0xFF, 0xFE, 0x00, 0x00, 0xFF, 0xFE];
    for b in "hi".encode_utf16() {
        payload.extend_from_slice(&b.to_le_bytes());
    }
    let body = frame(b"COMM", &payload);
    let t = read_header(&tag(4, 0, &body)).unwrap();
    assert_eq!(t.comment, Some("hi".to_string()));
}

#[test]
fn genre_crosscheck_test() {
    let body = frame(b"TCON", &text_payload("(17)Rock"));
    let t = read_header(&tag(4, 0, &body)).unwrap();
    assert_eq!(t.genre, Some("Rock".to_string()));

    // trailing text past a matching label is dropped with the index
    let body = frame(b"TCON", &text_payload("(17)Rock More"));
    let t = read_header(&tag(4, 0, &body)).unwrap();
    assert_eq!(t.genre, Some("Rock".to_string()));

    // mismatched label is kept verbatim
    let body = frame(b"TCON", &text_payload("(17)Pop"));
    let t = read_header(&tag(4, 0, &body)).unwrap();
    assert_eq!(t.genre, Some("(17)Pop".to_string()));
}

#[test]
fn apic_read_test() {
    let png = [0x89u8, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x01];

    let mut payload = vec![0x00];
    payload.extend_from_slice(b"image/png\x00");
    payload.push(0x03); // front cover
    payload.extend_from_slice(b"a description\x00");
    payload.extend_from_slice(&png);

    let body = frame(b"APIC", &payload);
    let t = read_header(&tag(3, 0, &body)).unwrap();
    assert_eq!(t.cover, Some(png.to_vec()));
}

#[test]
fn pic_v22_read_test() {
    let jpeg = [0xFFu8, 0xD8, 0xFF, 0xE0, 0x10];

    let mut payload = vec![0x00];
    payload.extend_from_slice(b"JPG"); // fixed 3-byte format code
    payload.push(0x03);
    payload.push(0x00); // empty description
    payload.extend_from_slice(&jpeg);

    let body = frame22(b"PIC", &payload);
    let t = read_header(&tag(2, 0, &body)).unwrap();
    assert_eq!(t.cover, Some(jpeg.to_vec()));
}

#[test]
fn extended_header_test() {
    // six-byte extended header counted in its own length field
    let mut body = Vec::new();
    body.extend_from_slice(&encode_synch_int(6));
    body.extend_from_slice(&[0x01, 0x00]);
    body.extend_from_slice(&frame(b"TIT2", &text_payload("after ext")));

    let t = read_header(&tag(4, 0x40, &body)).unwrap();
    assert_eq!(t.title, Some("after ext".to_string()));
}

#[test]
fn footer_read_test() {
    let body = frame(b"TIT2", &text_payload("appended"));
    let mut data = b"AUDIO BYTES GO HERE".to_vec();
    data.extend_from_slice(&tag(4, 0, &body));

    assert_eq!(read_header(&data).unwrap(), Tags::none());
    let t = read_footer(&data).unwrap();
    assert_eq!(t.title, Some("appended".to_string()));
}

#[test]
fn truncated_frame_partial_test() {
    // second frame claims far more bytes than the tag holds; the fields
    // decoded before it survive
    let mut body = Vec::new();
    body.extend_from_slice(&frame(b"TIT2", &text_payload("kept")));
    body.extend_from_slice(b"TALB");
    body.extend_from_slice(&encode_int_be_u32(0xFFFF));
    body.extend_from_slice(b"\x00\x00");
    body.extend_from_slice(&text_payload("lost"));

    let t = read_header(&tag(4, 0, &body)).unwrap();
    assert_eq!(t.title, Some("kept".to_string()));
    assert_eq!(t.album, None);
}

#[test]
fn sync_error_test() {
    // size field with a set high bit: abort, trust nothing
    let data = b"ID3\x04\x00\x00\x00\x00\x00\xFF";
    match read_header(data) {
        Err(Error::Sync(_)) => (),
        x => panic!("Expected Sync error, got {:?}", x),
    }
}

#[test]
fn unsupported_version_test() {
    let data = b"ID3\x05\x00\x00\x00\x00\x00\x10somebytes";
    match read_header(data) {
        Err(Error::Unsupported(_)) => (),
        x => panic!("Expected Unsupported error, got {:?}", x),
    }
}

#[test]
fn missing_tag_test() {
    assert_eq!(read_header(b"no tag at all").unwrap(), Tags::none());
    assert_eq!(read_footer(b"no tag at all").unwrap(), Tags::none());
}

#[test]
fn strip_header_test() {
    let body = frame(b"TIT2", &text_payload("x"));
    let mut data = tag(4, 0, &body);
    data.extend_from_slice(b"AUDIO");

    assert_eq!(strip_header(&data).unwrap(), b"AUDIO");
    // no-op without a signature
    assert_eq!(strip_header(b"AUDIO").unwrap(), b"AUDIO");
}

#[test]
fn footer_flag_sizing_test() {
    // flag 0x10 announces a ten-byte footer block after the body; it counts
    // toward the tag region but not the declared body size
    let body = frame(b"TIT2", &text_payload("flagged"));
    let mut data = tag(4, 0x10, &body);
    data.extend_from_slice(b"3DI\x04\x00\x10");
    data.extend_from_slice(&encode_synch_int(body.len() as u32));
    data.extend_from_slice(b"AUDIO");

    let t = read_header(&data).unwrap();
    assert_eq!(t.title, Some("flagged".to_string()));
    assert_eq!(strip_header(&data).unwrap(), b"AUDIO");
}

#[test]
fn strip_footer_test() {
    let body = frame(b"TIT2", &text_payload("x"));
    let mut data = b"AUDIO".to_vec();
    data.extend_from_slice(&tag(4, 0, &body));
    data.extend_from_slice(b"TRAILER");

    // excised from the middle, not just the very end
    assert_eq!(strip_footer(&data).unwrap(), b"AUDIOTRAILER");
    assert_eq!(strip_footer(b"AUDIO").unwrap(), b"AUDIO".to_vec());
}

#[test]
fn write_read_test() {
    let tags = Tags {
        title: Some("Title".to_string()),
        artist: Some("Artist".to_string()),
        album: Some("Album".to_string()),
        track: Some(5),
        disc: Some(1),
        genre: Some("Jazz".to_string()),
        year: Some(1999),
        comment: Some("a comment".to_string()),
        cover: Some(vec![0xFF, 0xD8, 0xFF, 0xE0, 0x42]),
        ..Default::default()
    };

    let data = write(b"AUDIO", &tags);
    let mut recovered = read_header(&data).unwrap();

    // the writer stamps the tagging time on every tag
    assert!(recovered.timestamp.is_some());
    recovered.timestamp = None;
    assert_eq!(recovered, tags);

    assert_eq!(strip_header(&data).unwrap(), b"AUDIO");
}
