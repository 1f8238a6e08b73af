use std::path::PathBuf;

use crate::books::WrittenBook;
use crate::output::{render, write_book, write_books};

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("nbtree-tools-{}-{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn book(title: &str, author: &str, pages: &[&str]) -> WrittenBook {
    WrittenBook {
        author: author.to_owned(),
        title: title.to_owned(),
        pages: pages.iter().map(|p| p.to_string()).collect(),
    }
}

#[test]
fn render_numbers_pages_from_one() {
    let text = render(&book("T", "A", &["x", "y", "z"]));
    let lines: Vec<_> = text.lines().collect();

    assert_eq!(
        lines,
        ["Title: T", "Author: A", " ", "Page 1: x", "Page 2: y", "Page 3: z"]
    );
}

#[test]
fn render_book_without_pages() {
    assert_eq!(render(&book("T", "A", &[])), "Title: T\nAuthor: A\n \n");
}

#[test]
fn colliding_names_get_numbered() {
    let dir = temp_dir("collide");

    let first = write_book(&dir, &book("Notes", "Owen", &["1"])).unwrap();
    let second = write_book(&dir, &book("Notes", "Owen", &["2"])).unwrap();
    let third = write_book(&dir, &book("Notes", "Owen", &["3"])).unwrap();

    assert_eq!(first, dir.join("Notes Owen.txt"));
    assert_eq!(second, dir.join("Notes Owen(1).txt"));
    assert_eq!(third, dir.join("Notes Owen(2).txt"));

    let contents = std::fs::read_to_string(&second).unwrap();
    assert!(contents.ends_with("Page 1: 2\n"));

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn separators_in_titles_stay_in_dir() {
    let dir = temp_dir("separators");

    let path = write_book(&dir, &book("../up", "a/b", &["x"])).unwrap();
    assert_eq!(path, dir.join(".._up a_b.txt"));
    assert!(path.is_file());

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn unwritable_book_does_not_stop_the_rest() {
    let dir = temp_dir("unwritable");

    let books = vec![
        book("first", "a", &["1"]),
        book(&"x".repeat(300), "a", &["too long a name"]),
        book("last", "a", &["2"]),
    ];

    let written = write_books(&dir, &books);
    assert_eq!(written, vec![dir.join("first a.txt"), dir.join("last a.txt")]);
    assert!(written.iter().all(|p| p.is_file()));

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn reserved_characters_are_replaced() {
    let dir = temp_dir("reserved");

    let path = write_book(&dir, &book("a:b*c?d", "\"e<f>g|h\"", &["x"])).unwrap();
    assert_eq!(path, dir.join("a_b_c_d _e_f_g_h_.txt"));

    std::fs::remove_dir_all(&dir).unwrap();
}
