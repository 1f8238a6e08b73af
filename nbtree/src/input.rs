use std::{io::Read, ops::Range};

use byteorder::{BigEndian, ReadBytesExt};

use crate::{
    error::{Error, Result},
    Tag,
};

mod private {
    // Only this crate can implement this trait. Other traits can inherit from
    // Sealed in order to prevent other crates from creating implementations.
    pub trait Sealed {}
}

/// A cursor over one NBT document. Reads are sequential and never seek
/// backwards.
pub trait Input: private::Sealed {
    fn consume_byte(&mut self) -> Result<u8>;

    /// Consume exactly `n` bytes, or fail with a truncation error.
    fn consume_bytes(&mut self, n: usize) -> Result<Vec<u8>>;

    fn consume_i16(&mut self) -> Result<i16>;
    fn consume_u16(&mut self) -> Result<u16>;
    fn consume_i32(&mut self) -> Result<i32>;
    fn consume_i64(&mut self) -> Result<i64>;
    fn consume_f32(&mut self) -> Result<f32>;
    fn consume_f64(&mut self) -> Result<f64>;

    /// Number of bytes left in the input, if the input knows it.
    fn remaining(&self) -> Option<usize>;

    fn consume_tag(&mut self) -> Result<Tag> {
        let tag = self.consume_byte()?;
        Tag::try_from(tag).map_err(|_| Error::unknown_tag(tag))
    }

    /// Consume a string prefixed by its unsigned 16 bit length.
    fn consume_str(&mut self) -> Result<String> {
        let len = self.consume_u16()? as usize;
        let bytes = self.consume_bytes(len)?;
        decode_str(bytes)
    }
}

/// Strings are meant to be UTF-8, but the game writes Java's modified UTF-8,
/// which differs for NUL and for characters outside the BMP.
fn decode_str(bytes: Vec<u8>) -> Result<String> {
    match String::from_utf8(bytes) {
        Ok(s) => Ok(s),
        Err(e) => {
            let bytes = e.into_bytes();
            cesu8::from_java_cesu8(&bytes)
                .map(|s| s.into_owned())
                .map_err(|_| Error::nonunicode(&bytes))
        }
    }
}

pub struct Slice<'de> {
    pub(crate) data: &'de [u8],
}

impl<'de> private::Sealed for Slice<'de> {}
impl<'de> Slice<'de> {
    fn consume(&mut self, r: Range<usize>) -> Result<&'de [u8]> {
        if r.end <= self.data.len() {
            let ret = &self.data[r.start..r.end];
            self.data = &self.data[r.end..];
            Ok(ret)
        } else {
            Err(Error::truncated())
        }
    }
}

impl<'de> Input for Slice<'de> {
    fn consume_byte(&mut self) -> Result<u8> {
        Ok(self.consume(0..1)?[0])
    }

    fn consume_bytes(&mut self, n: usize) -> Result<Vec<u8>> {
        Ok(self.consume(0..n)?.to_vec())
    }

    fn consume_i16(&mut self) -> Result<i16> {
        let mut bs = self.consume(0..std::mem::size_of::<i16>())?;
        Ok(bs.read_i16::<BigEndian>()?)
    }

    fn consume_u16(&mut self) -> Result<u16> {
        let mut bs = self.consume(0..std::mem::size_of::<u16>())?;
        Ok(bs.read_u16::<BigEndian>()?)
    }

    fn consume_i32(&mut self) -> Result<i32> {
        let mut bs = self.consume(0..std::mem::size_of::<i32>())?;
        Ok(bs.read_i32::<BigEndian>()?)
    }

    fn consume_i64(&mut self) -> Result<i64> {
        let mut bs = self.consume(0..std::mem::size_of::<i64>())?;
        Ok(bs.read_i64::<BigEndian>()?)
    }

    fn consume_f32(&mut self) -> Result<f32> {
        let mut bs = self.consume(0..std::mem::size_of::<f32>())?;
        Ok(bs.read_f32::<BigEndian>()?)
    }

    fn consume_f64(&mut self) -> Result<f64> {
        let mut bs = self.consume(0..std::mem::size_of::<f64>())?;
        Ok(bs.read_f64::<BigEndian>()?)
    }

    fn remaining(&self) -> Option<usize> {
        Some(self.data.len())
    }
}

pub struct Reader<R: Read> {
    pub(crate) reader: R,
}

impl<R: Read> private::Sealed for Reader<R> {}

impl<R: Read> Input for Reader<R> {
    fn consume_byte(&mut self) -> Result<u8> {
        Ok(self.reader.read_u8()?)
    }

    fn consume_bytes(&mut self, n: usize) -> Result<Vec<u8>> {
        // Grow the buffer as data arrives rather than trusting the declared
        // size, a short input then can't make us allocate a huge buffer.
        let mut buf = Vec::new();
        (&mut self.reader).take(n as u64).read_to_end(&mut buf)?;

        if buf.len() != n {
            return Err(Error::truncated());
        }
        Ok(buf)
    }

    fn consume_i16(&mut self) -> Result<i16> {
        Ok(self.reader.read_i16::<BigEndian>()?)
    }

    fn consume_u16(&mut self) -> Result<u16> {
        Ok(self.reader.read_u16::<BigEndian>()?)
    }

    fn consume_i32(&mut self) -> Result<i32> {
        Ok(self.reader.read_i32::<BigEndian>()?)
    }

    fn consume_i64(&mut self) -> Result<i64> {
        Ok(self.reader.read_i64::<BigEndian>()?)
    }

    fn consume_f32(&mut self) -> Result<f32> {
        Ok(self.reader.read_f32::<BigEndian>()?)
    }

    fn consume_f64(&mut self) -> Result<f64> {
        Ok(self.reader.read_f64::<BigEndian>()?)
    }

    fn remaining(&self) -> Option<usize> {
        None
    }
}
