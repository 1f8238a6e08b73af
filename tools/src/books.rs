use nbtree::{find_child, resolve_path, List, Node};

/// Item IDs of the books we extract.
pub const SUPPORTED_BOOKS: [&str; 2] = ["minecraft:written_book", "minecraft:writable_book"];

/// Used when a book does not record its author or title.
pub const UNKNOWN: &str = "unknown";

#[derive(Debug, Clone, PartialEq)]
pub struct WrittenBook {
    pub author: String,
    pub title: String,
    pub pages: Vec<String>,
}

/// Get the book held by an item, if it is an original book that has been
/// written in.
///
/// Items are the compounds found in lists such as a chest's `Items`. Copies of
/// a book carry a `generation` and are skipped, as are book and quills that
/// have never been written in, which have no `tag` at all.
pub fn book_from_item(item: &[Node]) -> Option<WrittenBook> {
    let id = find_child(item, "id")?.as_str().ok()?;
    if !SUPPORTED_BOOKS.contains(&id) {
        return None;
    }

    let tag = find_child(item, "tag")?.as_compound().ok()?;
    if find_child(tag, "generation").is_some() {
        return None;
    }

    let text = |name: &str| {
        find_child(tag, name)
            .and_then(|node| node.as_str().ok())
            .unwrap_or(UNKNOWN)
            .to_owned()
    };

    let pages = match find_child(tag, "pages") {
        Some(pages) => pages
            .as_list()
            .and_then(List::strs)
            .ok()?
            .into_iter()
            .map(str::to_owned)
            .collect(),
        None => vec![],
    };

    Some(WrittenBook {
        author: text("author"),
        title: text("title"),
        pages,
    })
}

/// Books among a list of items. Elements that are not compounds are ignored.
pub fn books_in_items(items: &List) -> Vec<WrittenBook> {
    items
        .iter()
        .filter_map(|item| item.as_compound().ok())
        .filter_map(book_from_item)
        .collect()
}

/// Books in the containers of a chunk. Chunks from before 1.18 keep their
/// block entities under `Level.TileEntities`, later ones under a top level
/// `block_entities`.
pub fn books_in_chunk(root: &Node) -> Vec<WrittenBook> {
    let chunk = match root.as_compound() {
        Ok(chunk) => chunk,
        Err(_) => return vec![],
    };

    let entities = resolve_path(chunk, ["Level", "TileEntities"])
        .or_else(|| find_child(chunk, "block_entities"))
        .and_then(|node| node.as_list().ok());

    let entities = match entities {
        Some(entities) => entities,
        None => return vec![],
    };

    entities
        .iter()
        .filter_map(|entity| entity.as_compound().ok())
        .filter_map(|entity| find_child(entity, "Items"))
        .filter_map(|items| items.as_list().ok())
        .flat_map(books_in_items)
        .collect()
}

/// Books in a player's inventory and ender chest.
pub fn books_in_player(root: &Node) -> Vec<WrittenBook> {
    ["Inventory", "EnderItems"]
        .iter()
        .filter_map(|name| root.child(name))
        .filter_map(|items| items.as_list().ok())
        .flat_map(books_in_items)
        .collect()
}

/// The books found so far, in the order they were found. A book whose pages
/// match a book already in the library is not added again.
#[derive(Debug, Default)]
pub struct Library {
    books: Vec<WrittenBook>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a book, unless one with the same pages is already present. Returns
    /// whether it was added.
    pub fn add(&mut self, book: WrittenBook) -> bool {
        if self.contains_text(&book.pages) {
            return false;
        }

        self.books.push(book);
        true
    }

    pub fn contains_text(&self, pages: &[String]) -> bool {
        self.books.iter().any(|b| b.pages == pages)
    }

    pub fn books(&self) -> &[WrittenBook] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl Extend<WrittenBook> for Library {
    fn extend<T: IntoIterator<Item = WrittenBook>>(&mut self, iter: T) {
        for book in iter {
            self.add(book);
        }
    }
}
