use base64::Engine;

use crate::tools::cursor::Cursor;
use crate::tools::encode_int_be_u32;
use crate::tools::malformed;
use crate::Error;

/// Externally probed picture metadata. The codec copies image bytes around
/// but never inspects them; dimensions and depths come from the caller's
/// probe tooling.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PictureInfo {
    /// Probe-reported format name ("JPEG", "PNG", "GIF", ...).
    pub format: String,
    pub width: u32,
    pub height: u32,
    /// Bit depth of each sampled channel; summed into the block's depth
    /// field.
    pub channel_depths: Vec<u32>,
    /// Palette size for indexed images.
    pub colors: Option<u32>,
}

/// Extract the raw image bytes from a METADATA_BLOCK_PICTURE blob.
pub fn read_block(data: &[u8]) -> Result<Vec<u8>, Error> {
    let mut cur = Cursor::new(data);
    cur.skip(4)?; // picture type
    let mime_len = cur.take_u32_be()? as usize;
    cur.skip(mime_len)?;
    let desc_len = cur.take_u32_be()? as usize;
    cur.skip(desc_len)?;
    cur.skip(16)?; // width, height, depth, color count
    let len = cur.take_u32_be()? as usize;
    Ok(cur.take(len)?.to_vec())
}

/// Assemble a METADATA_BLOCK_PICTURE (type 3, front cover, no description)
/// around `picture`. All integers are 4-byte big-endian.
pub fn write_block(picture: &[u8], info: &PictureInfo) -> Vec<u8> {
    let mime = mime_for_format(&info.format);

    let mut vec = Vec::with_capacity(8 * 4 + mime.len() + picture.len());
    vec.extend_from_slice(&encode_int_be_u32(3)); // front cover
    vec.extend_from_slice(&encode_int_be_u32(mime.len() as u32));
    vec.extend_from_slice(mime.as_bytes());
    vec.extend_from_slice(&encode_int_be_u32(0)); // empty description
    vec.extend_from_slice(&encode_int_be_u32(info.width));
    vec.extend_from_slice(&encode_int_be_u32(info.height));
    vec.extend_from_slice(&encode_int_be_u32(info.channel_depths.iter().sum()));
    vec.extend_from_slice(&encode_int_be_u32(info.colors.unwrap_or(0)));
    vec.extend_from_slice(&encode_int_be_u32(picture.len() as u32));
    vec.extend_from_slice(picture);
    vec
}

// only a small fixed set of cover formats gets a proper MIME; anything
// else is written with the generic empty subtype
fn mime_for_format(format: &str) -> &'static str {
    match format.to_ascii_uppercase().as_str() {
        "JPEG" | "JPG" => "image/jpeg",
        "PNG" => "image/png",
        "GIF" => "image/gif",
        _ => "image/",
    }
}

/// Decode the base64 transport form a picture block travels in as a Vorbis
/// comment value.
pub fn read_block_b64(value: &str) -> Result<Vec<u8>, Error> {
    let raw = base64::engine::general_purpose::STANDARD
        .decode(value.trim())
        .map_err(|e| malformed(&format!("Bad base64 picture value: {}", e)))?;
    read_block(&raw)
}

/// Encode a picture block into its base64 Vorbis comment transport form.
pub fn write_block_b64(picture: &[u8], info: &PictureInfo) -> String {
    base64::engine::general_purpose::STANDARD.encode(write_block(picture, info))
}
