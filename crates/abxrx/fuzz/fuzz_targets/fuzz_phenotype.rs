//! Fuzz target for phenotype table loading.
//!
//! Fuzzed cells and headers must produce either a table or an error; every
//! loaded call must map onto a value in [0, 1].

#![no_main]

use abxrx::input::Parser;
use abxrx::PhenotypeTable;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 10_000 {
        return;
    }

    let Ok(table) = Parser::new().parse_bytes(data, b'\t') else {
        return;
    };
    let Ok(phenotypes) = PhenotypeTable::from_table(&table, &[] as &[&str]) else {
        return;
    };

    for antibiotic in phenotypes.antibiotics() {
        if let Some(values) = phenotypes.numeric_column(antibiotic) {
            assert_eq!(values.len(), phenotypes.isolates().len());
            assert!(values.iter().all(|v| (0.0..=1.0).contains(v)));
        }
    }
});
