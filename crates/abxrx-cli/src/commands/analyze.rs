//! Analyze command - fuse phenotypes with genotype reports.

use std::path::PathBuf;

use abxrx::profile::export_html;
use abxrx::ColourScheme;
use chrono::Utc;
use colored::Colorize;
use tracing::{debug, info};

use crate::cli::InputArgs;

use super::{render, Context};

pub struct Options {
    pub colours: Option<Vec<String>>,
    pub save: Option<String>,
    pub export: Option<PathBuf>,
    pub open: bool,
    pub hide_frequencies: bool,
    pub dump_genotypes: bool,
    pub dump_frequencies: bool,
}

pub fn run(ctx: &Context, inputs: InputArgs, options: Options) -> Result<(), Box<dyn std::error::Error>> {
    let mut abx = ctx.engine(&inputs)?;
    if let Some(colours) = &options.colours {
        abx = abx.with_colours(ColourScheme::from_triples(colours)?);
    }

    let analysis_inputs = inputs.to_inputs();
    if let Some(pheno) = &analysis_inputs.phenotype {
        println!(
            "{} {}",
            "Analyzing".cyan().bold(),
            pheno.display().to_string().white()
        );
    }
    for (source, dir) in analysis_inputs.sources.requested() {
        println!("  {} reports from {}", source, dir.display());
    }

    let result = abx.analyze(&analysis_inputs)?;

    if options.dump_genotypes {
        if let Some(fused) = &result.genotypes {
            println!("{}", serde_json::to_string_pretty(fused.genotypes())?);
        }
    }
    if options.dump_frequencies {
        if let Some(fused) = &result.genotypes {
            println!("{}", serde_json::to_string_pretty(fused.frequencies())?);
        }
    }

    println!();
    println!(
        "{} isolates x {} antibiotics",
        result.phenotypes.isolates().len().to_string().white().bold(),
        result.phenotypes.antibiotics().len().to_string().white().bold()
    );
    println!();
    render::print_grid(&result.plot, ctx.verbose);

    if !options.hide_frequencies {
        if let Some(frequencies) = &result.gene_frequencies {
            println!();
            println!("{}", "Gene frequencies:".yellow().bold());
            render::print_frequencies(frequencies, ctx.verbose);
        }
    }

    if options.save.is_none() && options.export.is_none() {
        return Ok(());
    }

    let name = options
        .save
        .clone()
        .unwrap_or_else(|| format!("abxrx_{}", Utc::now().format("%Y%m%d_%H%M%S")));
    debug!(name = %name, "building profile");
    let mut profile = result.to_profile(name);
    if options.hide_frequencies {
        profile.gene_frequencies = None;
    }

    if options.save.is_some() {
        let path = ctx.store().create(&profile)?;
        println!();
        println!(
            "{} {}",
            "Saved profile to".green().bold(),
            path.display().to_string().white()
        );
    }

    if let Some(dir) = &options.export {
        let path = export_html(&profile, dir)?;
        println!(
            "{} {}",
            "Exported to".green().bold(),
            path.display().to_string().white()
        );
        if options.open {
            info!(path = %path.display(), "opening export in browser");
            open::that(&path)?;
        }
    }

    Ok(())
}
