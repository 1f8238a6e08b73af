use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::{error, info};

use crate::{books::WrittenBook, Result};

/// The text of a book as it is written to disk.
///
/// ```
/// use nbtree_tools::{books::WrittenBook, output::render};
///
/// let book = WrittenBook {
///     author: "Owen".to_owned(),
///     title: "Notes".to_owned(),
///     pages: vec!["one".to_owned(), "two".to_owned()],
/// };
///
/// assert_eq!(
///     render(&book),
///     "Title: Notes\nAuthor: Owen\n \nPage 1: one\nPage 2: two\n"
/// );
/// ```
pub fn render(book: &WrittenBook) -> String {
    let mut out = format!("Title: {}\nAuthor: {}\n \n", book.title, book.author);
    for (i, page) in book.pages.iter().enumerate() {
        out.push_str(&format!("Page {}: {}\n", i + 1, page));
    }
    out
}

/// Write a book into `dir` as `"{title} {author}.txt"`. If that file already
/// exists a number is added, `"{title} {author}(1).txt"` and so on, so
/// books sharing a title and author don't overwrite each other. Returns the
/// path written to.
pub fn write_book(dir: &Path, book: &WrittenBook) -> Result<PathBuf> {
    let stem = format!("{} {}", sanitize(&book.title), sanitize(&book.author));
    let contents = render(book);

    let mut count = 0;
    loop {
        let path = match count {
            0 => dir.join(format!("{}.txt", stem)),
            n => dir.join(format!("{}({}).txt", stem, n)),
        };

        // create_new fails if the file exists, we then try the next name.
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(mut file) => {
                file.write_all(contents.as_bytes())?;
                return Ok(path);
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => count += 1,
            Err(e) => return Err(e.into()),
        }
    }
}

/// Write every book into `dir` with [`write_book`], logging each path. A book
/// that can't be written is logged and skipped. Returns the paths written.
pub fn write_books<'a, I>(dir: &Path, books: I) -> Vec<PathBuf>
where
    I: IntoIterator<Item = &'a WrittenBook>,
{
    let mut written = vec![];
    for book in books {
        match write_book(dir, book) {
            Ok(path) => {
                info!("Parsed book {}: {}", written.len() + 1, path.display());
                written.push(path);
            }
            Err(e) => error!("could not write {:?} by {:?}: {}", book.title, book.author, e),
        }
    }
    written
}

/// Titles and authors are free text, so keep them from escaping the output
/// directory or using characters some file systems reject.
fn sanitize(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '/' | '\\' | '\0' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c => c,
        })
        .collect()
}
