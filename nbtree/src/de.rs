//! Decoding NBT into a tree of [`Node`]s.
//!
//! A document is a single named tag, almost always a compound. The decoder
//! reads exactly that tag and nothing after it, so a reader is left positioned
//! just past the end of the document.
//!
//! Decoding is all or nothing. Any error aborts the whole document and no
//! partial tree is returned.
//!
//! # Lengths
//!
//! Lists and arrays declare their length up front. Negative lengths, and
//! lengths greater than [`DeOpts::max_seq_len`], fail with
//! [`ErrorKind::InvalidLength`][`crate::error::ErrorKind::InvalidLength`].
//! When decoding from a slice the decoder also knows how much input is left,
//! and rejects lengths the rest of the input could not possibly hold the same
//! way. A reader can't tell, so there the same input fails with
//! [`ErrorKind::Truncated`][`crate::error::ErrorKind::Truncated`] once the
//! data runs out. Either way memory is only allocated for data that is
//! actually present.
use std::io::Read;

use crate::{
    error::{Error, Result},
    input::{Input, Reader, Slice},
    DeOpts, List, Node, Tag, Value,
};

// Upper bound on what we allocate up front for a declared length we have not
// been able to check against the input.
const MAX_PREALLOC: usize = 4096;

/// Decode an NBT document from a slice of bytes. The bytes must already be
/// decompressed.
///
/// ```
/// use nbtree::Tag;
///
/// // An unnamed compound containing a single byte named "a".
/// let data = [10, 0, 0, 1, 0, 1, b'a', 42, 0];
/// let root = nbtree::from_bytes(&data).unwrap();
///
/// assert_eq!(root.tag(), Tag::Compound);
/// assert_eq!(root.child("a").unwrap().as_i8().unwrap(), 42);
/// ```
pub fn from_bytes(input: &[u8]) -> Result<Node> {
    from_bytes_with_opts(input, DeOpts::new())
}

/// Decode an NBT document from a slice of bytes, with the given options.
pub fn from_bytes_with_opts(input: &[u8], opts: DeOpts) -> Result<Node> {
    Decoder::new(Slice { data: input }, opts).read_tag()
}

/// Decode an NBT document from a reader. Decompression is up to the caller,
/// for example by wrapping the reader in a `flate2::read::GzDecoder`.
pub fn from_reader<R: Read>(reader: R) -> Result<Node> {
    from_reader_with_opts(reader, DeOpts::new())
}

/// Decode an NBT document from a reader, with the given options.
pub fn from_reader_with_opts<R: Read>(reader: R, opts: DeOpts) -> Result<Node> {
    Decoder::new(Reader { reader }, opts).read_tag()
}

pub(crate) struct Decoder<I: Input> {
    input: I,
    opts: DeOpts,
    depth: usize,
}

impl<I: Input> Decoder<I> {
    pub(crate) fn new(input: I, opts: DeOpts) -> Self {
        Self {
            input,
            opts,
            depth: 0,
        }
    }

    /// Read a whole tag: tag byte, name and payload. A lone end tag is a valid
    /// (if empty) document with no name.
    pub(crate) fn read_tag(&mut self) -> Result<Node> {
        let tag = self.input.consume_tag()?;
        if tag == Tag::End {
            return Ok(Node::new("", Value::End));
        }

        self.read_named_tag(tag)
    }

    /// Read the name and payload of a tag whose tag byte has already been
    /// consumed.
    fn read_named_tag(&mut self, tag: Tag) -> Result<Node> {
        let name = self.input.consume_str()?;
        let value = self.read_value(tag)?;
        Ok(Node::new(name, value))
    }

    /// Read a whole value of the given tag. Nested compounds and lists are
    /// kept on an explicit stack of [`Frame`]s rather than the call stack, so
    /// only `max_depth` bounds nesting.
    fn read_value(&mut self, tag: Tag) -> Result<Value> {
        let mut stack = Vec::new();
        if let Some((_, value)) = self.open(tag, String::new(), &mut stack)? {
            return Ok(value);
        }

        while let Some(top) = stack.last_mut() {
            let child = match top {
                Frame::Compound { .. } => match self.input.consume_tag()? {
                    Tag::End => None,
                    tag => Some((tag, self.input.consume_str()?)),
                },
                Frame::List {
                    element, remaining, ..
                } => {
                    if *remaining == 0 {
                        None
                    } else {
                        *remaining -= 1;
                        Some((*element, String::new()))
                    }
                }
            };

            let done = match child {
                Some((tag, name)) => self.open(tag, name, &mut stack)?,
                None => {
                    self.leave();
                    stack.pop().map(Frame::finish)
                }
            };

            if let Some((name, value)) = done {
                match stack.last_mut() {
                    Some(parent) => parent.push(name, value),
                    None => return Ok(value),
                }
            }
        }

        // The outermost frame returns its value as it is popped.
        unreachable!()
    }

    /// Start reading a value. Compounds and lists push a frame to be filled
    /// in by [`Decoder::read_value`], anything else is read in full and
    /// returned along with `name`.
    fn open(
        &mut self,
        tag: Tag,
        name: String,
        stack: &mut Vec<Frame>,
    ) -> Result<Option<(String, Value)>> {
        let value = match tag {
            Tag::Compound => {
                self.enter()?;
                stack.push(Frame::Compound {
                    name,
                    children: Vec::new(),
                });
                return Ok(None);
            }
            Tag::List => {
                let element = self.input.consume_tag()?;
                let len = self.read_len(element)?;

                // End values have no payload, so a list of them would take
                // no input but could be any size. Some old chunks store empty
                // lists as a 'list of end', so if the size is zero we let it
                // slide.
                if element == Tag::End && len != 0 {
                    return Err(Error::invalid_length(
                        len as i64,
                        "list of end tags must be empty",
                    ));
                }

                self.enter()?;
                stack.push(Frame::List {
                    name,
                    element,
                    remaining: len,
                    values: Vec::with_capacity(len.min(MAX_PREALLOC)),
                });
                return Ok(None);
            }
            // Lists of end are only accepted when empty, and the end of a
            // compound is handled by the compound, so this has no payload to
            // read.
            Tag::End => Value::End,
            Tag::Byte => Value::Byte(self.input.consume_byte()? as i8),
            Tag::Short => Value::Short(self.input.consume_i16()?),
            Tag::Int => Value::Int(self.input.consume_i32()?),
            Tag::Long => Value::Long(self.input.consume_i64()?),
            Tag::Float => Value::Float(self.input.consume_f32()?),
            Tag::Double => Value::Double(self.input.consume_f64()?),
            Tag::String => Value::String(self.input.consume_str()?),
            Tag::ByteArray => {
                let len = self.read_len(Tag::Byte)?;
                let bytes = self.input.consume_bytes(len)?;
                Value::ByteArray(bytes.into_iter().map(|b| b as i8).collect())
            }
            Tag::IntArray => {
                let len = self.read_len(Tag::Int)?;
                let mut values = Vec::with_capacity(len.min(MAX_PREALLOC));
                for _ in 0..len {
                    values.push(self.input.consume_i32()?);
                }
                Value::IntArray(values)
            }
            Tag::LongArray => {
                let len = self.read_len(Tag::Long)?;
                let mut values = Vec::with_capacity(len.min(MAX_PREALLOC));
                for _ in 0..len {
                    values.push(self.input.consume_i64()?);
                }
                Value::LongArray(values)
            }
        };

        Ok(Some((name, value)))
    }

    /// Read the size of a list or array whose elements have the given tag.
    fn read_len(&mut self, element: Tag) -> Result<usize> {
        let len = self.input.consume_i32()?;
        let len: usize = len
            .try_into()
            .map_err(|_| Error::invalid_length(len as i64, "size was negative"))?;

        if len > self.opts.max_seq_len {
            return Err(Error::invalid_length(
                len as i64,
                &format!(
                    "size greater than max sequence length ({})",
                    self.opts.max_seq_len
                ),
            ));
        }

        if let Some(remaining) = self.input.remaining() {
            let needed = len.checked_mul(element.min_payload_len());
            if needed.map_or(true, |needed| needed > remaining) {
                return Err(Error::invalid_length(
                    len as i64,
                    &format!("only {} bytes of input remain", remaining),
                ));
            }
        }

        Ok(len)
    }

    fn enter(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth > self.opts.max_depth {
            return Err(Error::max_depth(self.opts.max_depth));
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }
}

/// A compound or list that is part way through being read.
enum Frame {
    Compound {
        name: String,
        children: Vec<Node>,
    },
    List {
        name: String,
        element: Tag,
        remaining: usize,
        values: Vec<Value>,
    },
}

impl Frame {
    /// Add a finished child. List elements have no names, so `name` is only
    /// kept for compounds.
    fn push(&mut self, name: String, value: Value) {
        match self {
            Frame::Compound { children, .. } => children.push(Node::new(name, value)),
            Frame::List { values, .. } => values.push(value),
        }
    }

    fn finish(self) -> (String, Value) {
        match self {
            Frame::Compound { name, children } => (name, Value::Compound(children)),
            Frame::List {
                name,
                element,
                values,
                ..
            } => (name, Value::List(List::from_parts(element, values))),
        }
    }
}
