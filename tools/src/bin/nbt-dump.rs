use clap::{App, Arg};
use std::io::Read;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

//
// Dump an NBT file, or NBT from stdin, as a tree. Input may be GZip
// compressed.
//

fn main() -> Result<()> {
    let matches = App::new("nbt-dump")
        .arg(Arg::with_name("file").takes_value(true).required(false))
        .arg(
            Arg::with_name("json")
                .long("json")
                .help("print as JSON rather than debug output"),
        )
        .get_matches();

    let data = match matches.value_of("file") {
        Some(path) => std::fs::read(path)?,
        None => {
            let mut data = vec![];
            std::io::stdin().read_to_end(&mut data)?;
            data
        }
    };

    let data = nbtree_tools::maybe_gunzip(data)?;
    let root = nbtree::from_bytes(&data)?;

    if matches.is_present("json") {
        println!("{}", serde_json::to_string_pretty(&root)?);
    } else {
        println!("{:#?}", root);
    }

    Ok(())
}
