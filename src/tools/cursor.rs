use crate::tools::decode_int_be_u32;
use crate::tools::malformed;
use crate::Error;

/// Bounded reader over a byte slice. Every read is checked against the
/// remaining length, so a frame with a lying size field surfaces as a
/// `Malformed` error instead of desynchronizing the scan.
pub struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(data: &'a [u8]) -> Cursor<'a> {
        Cursor { data, pos: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub fn peek(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    pub fn take(&mut self, n: usize) -> Result<&'a [u8], Error> {
        if n > self.remaining() {
            return Err(malformed(&format!(
                "Wanted {} bytes but only {} remain",
                n,
                self.remaining()
            )));
        }
        let slice = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    pub fn take_u8(&mut self) -> Result<u8, Error> {
        Ok(self.take(1)?[0])
    }

    pub fn take_u32_be(&mut self) -> Result<u32, Error> {
        Ok(decode_int_be_u32(self.take(4)?))
    }

    /// Consume up to and including the next occurrence of `byte`; the
    /// returned slice excludes it.
    pub fn take_delimited(&mut self, byte: u8) -> Result<&'a [u8], Error> {
        let rest = &self.data[self.pos..];
        match rest.iter().position(|&b| b == byte) {
            Some(i) => {
                self.pos += i + 1;
                Ok(&rest[..i])
            }
            None => Err(malformed(&format!(
                "Delimiter 0x{:02X} not found in remaining {} bytes",
                byte,
                rest.len()
            ))),
        }
    }

    pub fn skip(&mut self, n: usize) -> Result<(), Error> {
        self.take(n).map(|_| ())
    }

    /// Everything that has not been consumed yet.
    pub fn rest(&mut self) -> &'a [u8] {
        let rest = &self.data[self.pos..];
        self.pos = self.data.len();
        rest
    }
}
