//! Profiles command - list saved profiles.

use colored::Colorize;

use super::{render, Context};

pub fn run(ctx: &Context, json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let summaries = ctx.store().list()?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    if summaries.is_empty() {
        println!(
            "No saved profiles in {}. Run {} to create one.",
            ctx.store.display(),
            "abxrx analyze --save NAME".cyan()
        );
        return Ok(());
    }

    for (i, summary) in summaries.iter().enumerate() {
        if i > 0 {
            println!();
        }
        render::print_summary(summary);
    }

    Ok(())
}
