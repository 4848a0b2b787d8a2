//! Fuzz target for settings parsing and colour triples.

#![no_main]

use abxrx::config::{ColourScheme, Settings};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 10_000 {
        return;
    }

    if let Ok(json) = std::str::from_utf8(data) {
        let _ = Settings::from_json(json);

        let triples: Vec<&str> = json.split('|').collect();
        let _ = ColourScheme::from_triples(&triples);
    }
});
