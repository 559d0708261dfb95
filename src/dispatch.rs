use crate::id3v1;
use crate::id3v2;
use crate::Error;
use crate::Tags;

/// Collect every tag found in the buffer into one record. ID3v2 entries
/// win over ID3v1 ones, and an appended (footer) tag wins over a leading
/// one.
pub fn read_tag(data: &[u8]) -> Result<Tags, Error> {
    let mut tags = id3v1::read(data);
    tags.merge(id3v2::read_header(data)?);
    tags.merge(id3v2::read_footer(data)?);
    Ok(tags)
}

/// Excise every recognized tag region, leaving bare audio bytes. Safe to
/// call on untagged buffers, and calling it twice changes nothing.
pub fn strip_tags(data: &[u8]) -> Result<Vec<u8>, Error> {
    let data = id3v1::strip(data);
    let data = id3v2::strip_header(data)?;
    id3v2::strip_footer(data)
}

/// Prepend a fresh ID3v2.4 tag built from the record. `audio` is expected
/// to have been through `strip_tags` first.
pub fn write_tag(audio: &[u8], tags: &Tags) -> Vec<u8> {
    id3v2::write(audio, tags)
}
