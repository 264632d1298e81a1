#![no_main]

use libfuzzer_sys::fuzz_target;
use std::io::Cursor;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must produce a file or an error, never a panic
    if let Ok(file) = fcsparse::parse(Cursor::new(data)) {
        let _ = fcsparse::validator::validate(&file, "fuzz");
        let _ = file.to_json();
    }

    // Tokenizer on its own, with whatever delimiter the input starts with
    let text: String = data.iter().map(|&b| char::from(b)).collect();
    if let Some(delimiter) = text.chars().next() {
        let _ = fcsparse::parser::tokenize(&text, delimiter);
    }
});
