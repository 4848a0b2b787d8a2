//! Example: analyse a phenotype file against RGI reports.
//!
//! Usage:
//!   cargo run --example analyze -- <phenotype_file> <rgi_dir>

use std::env;

use abxrx::fusion::GenotypeSources;
use abxrx::{AbxRxPro, AnalysisInputs, Settings};

fn main() -> abxrx::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!("Usage: cargo run --example analyze -- <phenotype_file> <rgi_dir>");
        std::process::exit(1);
    }

    let abx = AbxRxPro::new(Settings::builtin()?);
    let inputs = AnalysisInputs::new(&args[1])
        .with_sources(GenotypeSources::new().with_rgi(&args[2]));

    let result = abx.analyze(&inputs)?;

    let separator = "=".repeat(60);
    println!("{}", separator);
    println!(
        "{} isolates x {} antibiotics",
        result.phenotypes.isolates().len(),
        result.phenotypes.antibiotics().len()
    );
    println!("{}", separator);

    for cell in result.plot.cells.iter().filter(|c| c.has_genotype()) {
        println!(
            "  {:12} {:16} {} size={:<3} {}",
            cell.isolate,
            cell.antibiotic,
            cell.call,
            cell.marker_size,
            cell.annotation_text()
        );
    }

    if let Some(frequencies) = &result.gene_frequencies {
        println!();
        println!("## Gene frequencies");
        for entry in frequencies {
            println!("  {:20} {:5.1}%", entry.gene, entry.frequency);
        }
    }

    println!();
    println!("## Correlations");
    for record in abx.correlate(&result)? {
        println!("  {}", record);
    }

    Ok(())
}
