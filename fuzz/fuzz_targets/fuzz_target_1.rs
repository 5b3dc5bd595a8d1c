#![no_main]
#[macro_use] extern crate libfuzzer_sys;
extern crate sextant;

use std::io::Cursor;
use sextant::{ChecksumMode, SentenceReader};

fuzz_target!(|data: &[u8]| {
    let reader = SentenceReader::new(Cursor::new(data)).checksum_mode(ChecksumMode::Verify);

    for _ in reader {
        ();
    }

    if let Ok(line) = std::str::from_utf8(data) {
        let _ = sextant::parse_gga(line);
        let _ = sextant::parse_zda(line);
    }
});
