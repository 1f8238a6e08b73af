use serde::{ser::SerializeMap, Serialize, Serializer};

use crate::{
    error::{Error, Result},
    Node, Tag,
};

/// Value is the payload of a single NBT tag. It owns it's data.
///
/// Compound children keep their names and the order they appeared in, so are
/// stored as [`Node`]s. List elements have no names, so a [`List`] holds plain
/// values.
///
/// Rather than matching by hand, the `as_*` methods narrow a value to the
/// type you expect and fail with
/// [`ErrorKind::TypeMismatch`][`crate::error::ErrorKind::TypeMismatch`] if it
/// is something else.
///
/// ```
/// use nbtree::{Tag, Value};
/// use nbtree::error::ErrorKind;
///
/// let v = Value::String("hello".to_owned());
/// assert_eq!(v.as_str().unwrap(), "hello");
///
/// let err = v.as_i32().unwrap_err();
/// assert_eq!(
///     err.kind(),
///     &ErrorKind::TypeMismatch {
///         expected: Tag::Int,
///         found: Tag::String
///     }
/// );
/// ```
///
/// Equality between values is structural, including the names and values of
/// compound children. This differs from [`Node`]'s equality, which only looks
/// at the tag and name.
#[derive(Debug, Clone)]
pub enum Value {
    /// Only found as the root of a document that is a lone end tag.
    End,
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<i8>),
    String(String),
    List(List),
    Compound(Vec<Node>),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
}

macro_rules! narrow_copy {
    ($($name:ident => $variant:ident: $ty:ty),* $(,)?) => {
        $(
            pub fn $name(&self) -> Result<$ty> {
                match self {
                    Value::$variant(v) => Ok(*v),
                    other => Err(Error::type_mismatch(Tag::$variant, other.tag())),
                }
            }
        )*
    };
}

macro_rules! narrow_ref {
    ($($name:ident => $variant:ident: $ty:ty),* $(,)?) => {
        $(
            pub fn $name(&self) -> Result<&$ty> {
                match self {
                    Value::$variant(v) => {
                        let v: &$ty = v;
                        Ok(v)
                    }
                    other => Err(Error::type_mismatch(Tag::$variant, other.tag())),
                }
            }
        )*
    };
}

impl Value {
    /// The NBT tag this value would be encoded with.
    pub fn tag(&self) -> Tag {
        match self {
            Value::End => Tag::End,
            Value::Byte(_) => Tag::Byte,
            Value::Short(_) => Tag::Short,
            Value::Int(_) => Tag::Int,
            Value::Long(_) => Tag::Long,
            Value::Float(_) => Tag::Float,
            Value::Double(_) => Tag::Double,
            Value::ByteArray(_) => Tag::ByteArray,
            Value::String(_) => Tag::String,
            Value::List(_) => Tag::List,
            Value::Compound(_) => Tag::Compound,
            Value::IntArray(_) => Tag::IntArray,
            Value::LongArray(_) => Tag::LongArray,
        }
    }

    narrow_copy! {
        as_i8 => Byte: i8,
        as_i16 => Short: i16,
        as_i32 => Int: i32,
        as_i64 => Long: i64,
        as_f32 => Float: f32,
        as_f64 => Double: f64,
    }

    narrow_ref! {
        as_byte_array => ByteArray: [i8],
        as_str => String: str,
        as_list => List: List,
        as_compound => Compound: [Node],
        as_int_array => IntArray: [i32],
        as_long_array => LongArray: [i64],
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        use Value::*;
        match (self, other) {
            (End, End) => true,
            (Byte(a), Byte(b)) => a == b,
            (Short(a), Short(b)) => a == b,
            (Int(a), Int(b)) => a == b,
            (Long(a), Long(b)) => a == b,
            (Float(a), Float(b)) => a == b,
            (Double(a), Double(b)) => a == b,
            (ByteArray(a), ByteArray(b)) => a == b,
            (String(a), String(b)) => a == b,
            (List(a), List(b)) => a == b,
            (Compound(a), Compound(b)) => {
                a.len() == b.len()
                    && a
                        .iter()
                        .zip(b)
                        .all(|(a, b)| a.name() == b.name() && a.value() == b.value())
            }
            (IntArray(a), IntArray(b)) => a == b,
            (LongArray(a), LongArray(b)) => a == b,
            _ => false,
        }
    }
}

/// The payload of an NBT list: any number of unnamed values that all share
/// the same tag.
///
/// An empty list may declare any element tag. The game usually writes
/// [`Tag::End`] for them.
#[derive(Debug, Clone, PartialEq)]
pub struct List {
    element: Tag,
    values: Vec<Value>,
}

impl List {
    /// Create a list, checking each value has the element tag.
    pub fn new(element: Tag, values: Vec<Value>) -> Result<Self> {
        if let Some(v) = values.iter().find(|v| v.tag() != element) {
            return Err(Error::type_mismatch(element, v.tag()));
        }
        Ok(Self::from_parts(element, values))
    }

    /// The decoder only produces homogeneous values, so skips the check.
    pub(crate) fn from_parts(element: Tag, values: Vec<Value>) -> Self {
        Self { element, values }
    }

    /// The tag shared by every element.
    pub fn element_tag(&self) -> Tag {
        self.element
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn into_values(self) -> Vec<Value> {
        self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.values.iter()
    }

    /// The children of every element, for a list of compounds. Fails on the
    /// first element that is not a compound. An empty list gives an empty
    /// `Vec` whatever its element tag.
    pub fn compounds(&self) -> Result<Vec<&[Node]>> {
        self.values.iter().map(Value::as_compound).collect()
    }

    /// Every element as text, for a list of strings.
    pub fn strs(&self) -> Result<Vec<&str>> {
        self.values.iter().map(Value::as_str).collect()
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::End => serializer.serialize_unit(),
            Value::Byte(v) => serializer.serialize_i8(*v),
            Value::Short(v) => serializer.serialize_i16(*v),
            Value::Int(v) => serializer.serialize_i32(*v),
            Value::Long(v) => serializer.serialize_i64(*v),
            Value::Float(v) => serializer.serialize_f32(*v),
            Value::Double(v) => serializer.serialize_f64(*v),
            Value::ByteArray(v) => v.serialize(serializer),
            Value::String(v) => serializer.serialize_str(v),
            Value::List(v) => v.serialize(serializer),
            Value::Compound(children) => {
                // Duplicate names are legal in NBT, so a format with unique
                // keys will see each of them in turn.
                let mut map = serializer.serialize_map(Some(children.len()))?;
                for child in children {
                    map.serialize_entry(child.name(), child.value())?;
                }
                map.end()
            }
            Value::IntArray(v) => v.serialize(serializer),
            Value::LongArray(v) => v.serialize(serializer),
        }
    }
}

impl Serialize for List {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(&self.values)
    }
}
