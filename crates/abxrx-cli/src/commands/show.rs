//! Show command - display a saved profile.

use std::path::PathBuf;

use abxrx::profile::export_html;
use colored::Colorize;
use tracing::info;

use super::{render, Context};

pub fn run(
    ctx: &Context,
    name: &str,
    export: Option<PathBuf>,
    open: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let profile = ctx.store().load(name)?;

    render::print_summary(&profile.summary());
    println!();
    render::print_grid(&profile.plot, ctx.verbose);

    if let Some(frequencies) = &profile.gene_frequencies {
        println!();
        println!("{}", "Gene frequencies:".yellow().bold());
        render::print_frequencies(frequencies, ctx.verbose);
    }

    if let Some(dir) = export {
        let path = export_html(&profile, &dir)?;
        println!();
        println!(
            "{} {}",
            "Exported to".green().bold(),
            path.display().to_string().white()
        );
        if open {
            info!(path = %path.display(), "opening export in browser");
            open::that(&path)?;
        }
    }

    Ok(())
}
