#[macro_use]
extern crate lazy_static;

mod types;
pub use crate::types::Tags;

pub mod id3v1;
pub mod id3v2;
pub mod picture;

mod dispatch;
mod tools;


pub use crate::dispatch::read_tag;
pub use crate::dispatch::strip_tags;
pub use crate::dispatch::write_tag;

pub use crate::picture::PictureInfo;

#[derive(Debug, PartialEq)]
pub enum Error {
    /// A synchsafe integer carried a set high bit; nothing downstream of
    /// that size field can be trusted.
    Sync(String),
    /// Structurally truncated frame or header.
    Malformed(String),
    /// The requested read or write targets a format without a codec. This
    /// is a capability problem, not a data problem.
    Unsupported(String),
}

use std::fmt;
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::Sync(ref e) => write!(f, "Bad sync in SynchSafe integer: {}", e),
            Error::Malformed(ref e) => write!(f, "Malformed tag: {}", e),
            Error::Unsupported(ref e) => write!(f, "Unsupported format: {}", e),
        }
    }
}

use std::error;
impl error::Error for Error {}
