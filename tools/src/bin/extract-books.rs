use clap::{App, Arg};
use env_logger::Env;
use log::{error, info};
use nbtree_tools::{books::Library, output, world};
use rayon::prelude::*;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let matches = App::new("extract-books")
        .about("Extract the written books in a Minecraft world into text files")
        .arg(
            Arg::with_name("world")
                .help("the world directory, containing level.dat")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::with_name("output")
                .long("output")
                .short("o")
                .help("directory to write the books to")
                .takes_value(true)
                .default_value("."),
        )
        .get_matches();

    let world: PathBuf = matches.value_of("world").ok_or("no world given")?.into();
    let out: PathBuf = matches.value_of("output").ok_or("no output given")?.into();

    let mut library = Library::new();

    for path in world::player_files(&world)? {
        match world::books_in_player_file(&path) {
            Ok(books) => library.extend(books),
            Err(e) => error!("{}: {}", path.display(), e),
        }
    }

    // Regions are searched in parallel, but collected in path order so the
    // same world always extracts the same books.
    let found: Vec<_> = world::region_files(&world)?
        .into_par_iter()
        .map(|path| match world::books_in_region_file(&path) {
            Ok(books) => {
                info!("processed {}", path.display());
                books
            }
            Err(e) => {
                error!("{}: {}", path.display(), e);
                vec![]
            }
        })
        .collect();

    library.extend(found.into_iter().flatten());

    std::fs::create_dir_all(&out)?;
    let written = output::write_books(&out, library.books());

    info!("{} of {} books extracted", written.len(), library.len());
    Ok(())
}
