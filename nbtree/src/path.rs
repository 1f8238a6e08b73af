//! Finding nodes by name.
//!
//! Compound children are an ordered sequence rather than a map: names may
//! repeat and the order they appeared in is kept. Lookups scan the children
//! in order, compare names ignoring case, and return the first match.
//!
//! Lookups only ever look at compound children. They never search inside the
//! elements of a list, since those elements have no names to match against.
//! When a path passes through a list, such as the `Items` of a chest, the
//! caller iterates the elements and continues the lookup from each one:
//!
//! ```
//! # use nbtree::{List, Node, Tag, Value};
//! # let item = Value::Compound(vec![
//! #     Node::new("id", Value::String("minecraft:written_book".to_owned())),
//! # ]);
//! # let chest = vec![Node::new(
//! #     "Items",
//! #     Value::List(List::new(Tag::Compound, vec![item]).unwrap()),
//! # )];
//! use nbtree::find_child;
//!
//! let items = find_child(&chest, "items").unwrap().as_list().unwrap();
//! for item in items.compounds().unwrap() {
//!     let id = find_child(item, "id").unwrap();
//!     assert_eq!(id.as_str().unwrap(), "minecraft:written_book");
//! }
//! ```

use crate::Node;

/// Find the first of `siblings` named `name`, ignoring case.
///
/// Absence is common in NBT, so a missing name is `None` rather than an
/// error.
///
/// ```
/// use nbtree::{find_child, Node, Value};
///
/// let siblings = vec![
///     Node::new("Author", Value::String("first".to_owned())),
///     Node::new("author", Value::String("second".to_owned())),
/// ];
///
/// let found = find_child(&siblings, "AUTHOR").unwrap();
/// assert_eq!(found.name(), "Author");
/// assert!(find_child(&siblings, "title").is_none());
/// ```
pub fn find_child<'a>(siblings: &'a [Node], name: &str) -> Option<&'a Node> {
    siblings.iter().find(|node| node.name_matches(name))
}

/// Walk down through nested compounds, starting with `siblings` and looking
/// up one name per level. Returns the node found for the last name.
///
/// Returns `None` as soon as a name is missing, or when a node part way down
/// the path is not a compound. Lists are never searched, see the [module
/// documentation][`crate::path`]. An empty path finds nothing.
///
/// ```
/// # use nbtree::Value;
/// # fn doc() -> nbtree::error::Result<()> {
/// # let data = [
/// #     10, 0, 0,
/// #     10, 0, 3, b't', b'a', b'g',
/// #     8, 0, 5, b't', b'i', b't', b'l', b'e', 0, 2, b'h', b'i',
/// #     0,
/// #     0,
/// # ];
/// let root = nbtree::from_bytes(&data)?;
///
/// let title = nbtree::resolve_path(root.as_compound()?, &["tag", "title"]);
/// assert_eq!(title.unwrap().as_str()?, "hi");
///
/// assert!(nbtree::resolve_path(root.as_compound()?, &["tag", "author"]).is_none());
/// # Ok(())
/// # }
/// # doc().unwrap();
/// ```
pub fn resolve_path<'a, I, S>(siblings: &'a [Node], names: I) -> Option<&'a Node>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut names = names.into_iter();
    let mut current = find_child(siblings, names.next()?.as_ref())?;

    for name in names {
        let children = current.as_compound().ok()?;
        current = find_child(children, name.as_ref())?;
    }

    Some(current)
}
