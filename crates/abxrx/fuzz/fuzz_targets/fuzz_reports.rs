//! Fuzz target for the report adapters.
//!
//! Each tool's adapter is fed a report whose header is valid and whose cells
//! are fuzzed, then the associations are fused and correlated.

#![no_main]

use abxrx::config::{AnalysisScope, Settings};
use abxrx::correlation::CorrelationEngine;
use abxrx::fusion::{adapter_for, FusedGenotypes, ReportSource};
use abxrx::input::{Parser, ParserConfig};
use abxrx::{PhenotypeCall, PhenotypeTable};
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Report {
    tool: u8,
    rows: Vec<(String, String)>,
}

fuzz_target!(|report: Report| {
    if report.rows.len() > 200 {
        return;
    }
    let Ok(settings) = Settings::builtin() else {
        return;
    };

    let (source, header) = match report.tool % 3 {
        0 => (ReportSource::Rgi, "Best_Hit_ARO\tDrug Class"),
        1 => (ReportSource::Staramr, "Genotype\tPredicted Phenotype"),
        _ => (ReportSource::Amrfinder, "Gene symbol\tSubclass"),
    };

    let mut data = format!("{}\n", header);
    for (a, b) in &report.rows {
        data.push_str(&format!("{}\t{}\n", a.replace(['\t', '\n', '\r'], " "), b.replace(['\t', '\n', '\r'], " ")));
    }

    let Ok(table) = Parser::with_config(ParserConfig::report()).parse_bytes(data.as_bytes(), b'\t') else {
        return;
    };

    let scope = AnalysisScope::new(["Ampicillin", "Tetracycline"], settings.antibiotics.clone());
    let Ok(associations) = adapter_for(source).extract(&table, "ISO1", &scope) else {
        return;
    };

    let mut fused = FusedGenotypes::with_isolates(["ISO1", "ISO2"]);
    fused.extend(&associations);

    let Ok(phenotypes) = PhenotypeTable::from_calls(
        vec!["Ampicillin".to_string(), "Tetracycline".to_string()],
        vec![
            ("ISO1".to_string(), vec![PhenotypeCall::Resistant, PhenotypeCall::Susceptible]),
            ("ISO2".to_string(), vec![PhenotypeCall::Susceptible, PhenotypeCall::Intermediate]),
        ],
    ) else {
        return;
    };

    for record in CorrelationEngine::new(fused.genotypes(), &phenotypes, &settings.antibiotics).correlate() {
        assert!((-1.0..=1.0).contains(&record.coefficient));
    }
});
