//! nbtree decodes NBT data from *Minecraft: Java Edition* into a tree of
//! named nodes that can be searched by name. This format is used by the game
//! to store various things, such as chunk data and player inventories.
//!
//! * For decoding, see [`from_bytes`] and [`from_reader`].
//! * For the tree itself see [`Node`] and [`Value`].
//! * For finding fields by name see [`find_child`] and [`resolve_path`].
//!
//! Unlike a serde deserializer, nothing about the shape of the data needs to
//! be known up front. Compound children are kept in the order they appear in
//! the data, and lookups by name are case-insensitive, returning the first
//! match.
//!
//! # Quick example
//!
//! This example prints the pages of every written book held in a player's
//! inventory, from the [player dat
//! files](https://minecraft.wiki/w/Player.dat_format) found in worlds.
//!
//!```no_run
//! use nbtree::error::Result;
//! use flate2::read::GzDecoder;
//!
//! fn main() -> Result<()> {
//!     let args: Vec<_> = std::env::args().skip(1).collect();
//!     let file = std::fs::File::open(&args[0])?;
//!
//!     // Player dat files are compressed with GZip.
//!     let player = nbtree::from_reader(GzDecoder::new(file))?;
//!
//!     let inventory = match player.child("Inventory") {
//!         Some(inventory) => inventory.as_list()?,
//!         None => return Ok(()),
//!     };
//!
//!     // Lookups never search inside lists, so we walk the items ourselves.
//!     for item in inventory.compounds()? {
//!         if let Some(pages) = nbtree::resolve_path(item, &["tag", "pages"]) {
//!             for page in pages.as_list()?.strs()? {
//!                 println!("{}", page);
//!             }
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Limits
//!
//! The format places no limit on nesting or on the declared size of lists and
//! arrays. [`DeOpts`] bounds both, so hostile input fails with an error rather
//! than exhausting the stack or memory.

use serde::Serialize;

pub mod error;
pub mod path;

mod de;
mod input;
mod node;
mod value;

pub use de::*;
pub use node::*;
pub use path::*;
pub use value::*;

#[cfg(test)]
mod test;

use std::convert::TryFrom;

/// An NBT tag. This does not carry the value or the name of the data.
#[derive(Serialize, Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[repr(u8)]
pub enum Tag {
    /// Represents the end of a Compound object.
    End = 0,
    /// Equivalent to i8.
    Byte = 1,
    /// Equivalent to i16.
    Short = 2,
    /// Equivalent to i32.
    Int = 3,
    /// Equivalent to i64
    Long = 4,
    /// Equivalent to f32.
    Float = 5,
    /// Equivalent to f64.
    Double = 6,
    /// Represents as array of Byte (i8).
    ByteArray = 7,
    /// Represents a Unicode string.
    String = 8,
    /// Represents a list of unnamed values all of the same tag.
    List = 9,
    /// Represents a struct-like structure of named values.
    Compound = 10,
    /// Represents as array of Int (i32).
    IntArray = 11,
    /// Represents as array of Long (i64).
    LongArray = 12,
}

impl Tag {
    /// The smallest number of bytes a payload of this tag can occupy. Used to
    /// reject declared lengths that the remaining input could never satisfy.
    pub fn min_payload_len(self) -> usize {
        match self {
            Tag::End => 0,
            Tag::Byte => 1,
            Tag::Short => 2,
            Tag::Int => 4,
            Tag::Long => 8,
            Tag::Float => 4,
            Tag::Double => 8,
            Tag::ByteArray => 4,
            Tag::String => 2,
            // element tag and size.
            Tag::List => 5,
            // a lone end tag.
            Tag::Compound => 1,
            Tag::IntArray => 4,
            Tag::LongArray => 4,
        }
    }
}

// Written out by hand. New tags are rare enough that a derive crate isn't
// worth the compile time.
impl TryFrom<u8> for Tag {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, ()> {
        use Tag::*;
        Ok(match value {
            0 => End,
            1 => Byte,
            2 => Short,
            3 => Int,
            4 => Long,
            5 => Float,
            6 => Double,
            7 => ByteArray,
            8 => String,
            9 => List,
            10 => Compound,
            11 => IntArray,
            12 => LongArray,
            13..=u8::MAX => return Err(()),
        })
    }
}

impl From<Tag> for u8 {
    fn from(tag: Tag) -> Self {
        match tag {
            Tag::End => 0,
            Tag::Byte => 1,
            Tag::Short => 2,
            Tag::Int => 3,
            Tag::Long => 4,
            Tag::Float => 5,
            Tag::Double => 6,
            Tag::ByteArray => 7,
            Tag::String => 8,
            Tag::List => 9,
            Tag::Compound => 10,
            Tag::IntArray => 11,
            Tag::LongArray => 12,
        }
    }
}

/// Options for decoding NBT.
///
/// ```
/// use nbtree::DeOpts;
///
/// let opts = DeOpts::new().max_seq_len(10_000).max_depth(64);
/// let node = nbtree::from_bytes_with_opts(&[0], opts).unwrap();
/// assert_eq!(node.tag(), nbtree::Tag::End);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeOpts {
    pub(crate) max_seq_len: usize,
    pub(crate) max_depth: usize,
}

impl DeOpts {
    /// Default options: lists and arrays may declare up to `i32::MAX`
    /// elements and compounds/lists may nest 512 levels deep.
    pub fn new() -> Self {
        Self {
            max_seq_len: i32::MAX as usize,
            max_depth: 512,
        }
    }

    /// Maximum number of elements a list or array may declare. Anything
    /// larger fails with [`ErrorKind::InvalidLength`][`error::ErrorKind::InvalidLength`].
    pub fn max_seq_len(mut self, value: usize) -> Self {
        self.max_seq_len = value;
        self
    }

    /// Maximum nesting of compounds and lists. Anything deeper fails with
    /// [`ErrorKind::MaxDepthExceeded`][`error::ErrorKind::MaxDepthExceeded`].
    pub fn max_depth(mut self, value: usize) -> Self {
        self.max_depth = value;
        self
    }
}

impl Default for DeOpts {
    fn default() -> Self {
        Self::new()
    }
}
