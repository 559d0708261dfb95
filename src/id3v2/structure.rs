use crate::tools::unsupported;
use crate::Error;

/// Tag versions with a defined codec. The version picks the frame layout:
/// v2.2 uses 3-byte IDs with 3-byte sizes, v2.3/v2.4 use 4-byte IDs with
/// 4-byte sizes and two flag bytes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Version {
    V22,
    V23,
    V24,
}

impl Version {
    pub fn from_byte(byte: u8) -> Result<Version, Error> {
        match byte {
            2 => Ok(Version::V22),
            3 => Ok(Version::V23),
            4 => Ok(Version::V24),
            v => Err(unsupported(&format!("No codec for ID3v2.{}", v))),
        }
    }

    /// Frame identifier width in bytes.
    pub fn id_len(self) -> usize {
        match self {
            Version::V22 => 3,
            _ => 4,
        }
    }

    /// Full frame header width: ID and size, plus flags on v2.3/v2.4.
    pub fn frame_header_len(self) -> usize {
        match self {
            Version::V22 => 6,
            _ => 10,
        }
    }
}

#[derive(Debug)]
pub struct Header {
    pub version: Version,
    pub has_extended_header: bool,
    pub has_footer: bool,
    /// Synchsafe body size; excludes the ten header bytes.
    pub size: u32,
}

impl Header {
    /// Total bytes the tag occupies in the stream.
    pub fn total_len(&self) -> usize {
        self.size as usize + if self.has_footer { 20 } else { 10 }
    }
}

#[derive(Debug)]
pub struct FrameHeader {
    pub id: String,
    pub size: u32,
}
