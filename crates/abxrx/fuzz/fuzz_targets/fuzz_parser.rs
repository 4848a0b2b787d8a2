//! Fuzz target for the delimited-text parser.
//!
//! Arbitrary bytes must never panic the parser, with either delimiter.

#![no_main]

use abxrx::input::{Parser, ParserConfig};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 100_000 {
        return;
    }

    let _ = Parser::new().parse_bytes(data, b',');
    let _ = Parser::with_config(ParserConfig::report()).parse_bytes(data, b'\t');
});
