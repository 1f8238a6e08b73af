//! Contains the Error and Result type used by the decoder and the typed
//! accessors of the tree.
use crate::Tag;

/// Various errors that can occur while decoding NBT or narrowing a decoded
/// value to a specific type.
///
/// Every error is terminal for the decode that produced it: no partial tree
/// is ever returned alongside one.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    msg: String,
    kind: ErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The input ran out part way through a tag. This includes a compound
    /// that never reached its end tag.
    Truncated,

    /// A tag byte outside of the known NBT tags.
    UnknownTag(u8),

    /// A list, array or string declared a length that is negative, larger
    /// than the configured maximum, or larger than the remaining input could
    /// possibly hold.
    InvalidLength(i64),

    /// Compounds and lists nested deeper than the configured maximum.
    MaxDepthExceeded(usize),

    /// A value was narrowed to a type it does not have.
    TypeMismatch { expected: Tag, found: Tag },

    /// Expected unicode data but was not valid. Contained bytes are the
    /// invalid data.
    Nonunicode(Vec<u8>),

    /// Any other IO error from the underlying reader.
    Io,
}

/// Convenience type for Result.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Get the kind of error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn is_truncated(&self) -> bool {
        matches!(self.kind, ErrorKind::Truncated)
    }

    pub(crate) fn truncated() -> Self {
        Self {
            msg: "eof: unexpectedly ran out of input".into(),
            kind: ErrorKind::Truncated,
        }
    }

    pub(crate) fn unknown_tag(t: u8) -> Self {
        Self {
            msg: format!("invalid nbt tag value: {}", t),
            kind: ErrorKind::UnknownTag(t),
        }
    }

    pub(crate) fn invalid_length(len: i64, why: &str) -> Self {
        Self {
            msg: format!("invalid length {}: {}", len, why),
            kind: ErrorKind::InvalidLength(len),
        }
    }

    pub(crate) fn max_depth(depth: usize) -> Self {
        Self {
            msg: format!("nbt nested deeper than maximum depth of {}", depth),
            kind: ErrorKind::MaxDepthExceeded(depth),
        }
    }

    pub(crate) fn type_mismatch(expected: Tag, found: Tag) -> Self {
        Self {
            msg: format!("expected {:?}, found {:?}", expected, found),
            kind: ErrorKind::TypeMismatch { expected, found },
        }
    }

    pub(crate) fn nonunicode(d: &[u8]) -> Self {
        Self {
            msg: format!(
                "invalid nbt string: nonunicode: {}",
                String::from_utf8_lossy(d)
            ),
            kind: ErrorKind::Nonunicode(d.to_vec()),
        }
    }
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.msg)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::UnexpectedEof => Self::truncated(),
            _ => Self {
                msg: format!("io error: {}", e),
                kind: ErrorKind::Io,
            },
        }
    }
}
