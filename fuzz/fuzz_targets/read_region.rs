#![no_main]
use libfuzzer_sys::fuzz_target;

use nbtregion::Region;
use std::io::Cursor;

fuzz_target!(|data: &[u8]| {
    if let Ok(mut r) = Region::from_stream(Cursor::new(data)) {
        if let Ok(Some(chunk)) = r.read_chunk(0, 0) {
            let _ = nbtree::from_bytes(&chunk);
        }
    }
});
