use std::hash::{Hash, Hasher};

use serde::{ser::SerializeStruct, Serialize, Serializer};

use crate::{error::Result, find_child, resolve_path, List, Tag, Value};

/// A single decoded NBT tag: a name and a value.
///
/// The root of a document and the children of compounds are nodes. Elements
/// of lists are not, since they have no names; see [`List`].
///
/// Two nodes are equal if they have the same tag and name, *whatever their
/// values*. This matches how the game treats compound keys. Compare
/// [`Node::value`] to compare the data itself.
///
/// ```
/// use nbtree::{Node, Value};
///
/// let a = Node::new("id", Value::String("minecraft:written_book".to_owned()));
/// let b = Node::new("id", Value::String("minecraft:stone".to_owned()));
///
/// assert_eq!(a, b);
/// assert_ne!(a.value(), b.value());
/// ```
#[derive(Debug, Clone)]
pub struct Node {
    name: String,
    value: Value,
}

impl Node {
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// The tag of this node's value.
    pub fn tag(&self) -> Tag {
        self.value.tag()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }

    /// Whether this node's name matches `name`, ignoring case.
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
            || self
                .name
                .chars()
                .flat_map(char::to_lowercase)
                .eq(name.chars().flat_map(char::to_lowercase))
    }

    /// Find a direct child of this compound by name. See [`find_child`].
    /// Returns `None` if this node is not a compound.
    pub fn child(&self, name: &str) -> Option<&Node> {
        find_child(self.as_compound().ok()?, name)
    }

    /// Walk down from this node through nested compounds. See
    /// [`resolve_path`].
    pub fn resolve<I, S>(&self, names: I) -> Option<&Node>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        resolve_path(self.as_compound().ok()?, names)
    }

    pub fn as_i8(&self) -> Result<i8> {
        self.value.as_i8()
    }

    pub fn as_i16(&self) -> Result<i16> {
        self.value.as_i16()
    }

    pub fn as_i32(&self) -> Result<i32> {
        self.value.as_i32()
    }

    pub fn as_i64(&self) -> Result<i64> {
        self.value.as_i64()
    }

    pub fn as_f32(&self) -> Result<f32> {
        self.value.as_f32()
    }

    pub fn as_f64(&self) -> Result<f64> {
        self.value.as_f64()
    }

    pub fn as_byte_array(&self) -> Result<&[i8]> {
        self.value.as_byte_array()
    }

    pub fn as_str(&self) -> Result<&str> {
        self.value.as_str()
    }

    pub fn as_list(&self) -> Result<&List> {
        self.value.as_list()
    }

    pub fn as_compound(&self) -> Result<&[Node]> {
        self.value.as_compound()
    }

    pub fn as_int_array(&self) -> Result<&[i32]> {
        self.value.as_int_array()
    }

    pub fn as_long_array(&self) -> Result<&[i64]> {
        self.value.as_long_array()
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.tag() == other.tag() && self.name == other.name
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tag().hash(state);
        self.name.hash(state);
    }
}

impl Serialize for Node {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("Node", 3)?;
        s.serialize_field("tag", &self.tag())?;
        s.serialize_field("name", &self.name)?;
        s.serialize_field("value", &self.value)?;
        s.end()
    }
}
