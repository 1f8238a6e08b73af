#![no_main]
use libfuzzer_sys::fuzz_target;

use nbtree::{from_bytes_with_opts, from_reader_with_opts, DeOpts};

fuzz_target!(|data: &[u8]| {
    let opts = DeOpts::new().max_seq_len(100);
    let from_slice = from_bytes_with_opts(data, opts);
    let from_reader = from_reader_with_opts(data, opts);

    // Both inputs must agree on anything that decodes. Slices can reject
    // lengths earlier, so errors are allowed to differ. Debug output is
    // compared since NaN floats are never equal.
    if let (Ok(a), Ok(b)) = (&from_slice, &from_reader) {
        assert_eq!(format!("{:?}", a), format!("{:?}", b));
    }
    if from_reader.is_ok() {
        assert!(from_slice.is_ok());
    }
});
