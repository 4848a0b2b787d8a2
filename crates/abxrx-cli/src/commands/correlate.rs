//! Correlate command - gene presence versus phenotypic resistance.

use abxrx::Relationship;
use colored::Colorize;

use crate::cli::InputArgs;

use super::Context;

pub fn run(ctx: &Context, inputs: InputArgs, json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let abx = ctx.engine(&inputs)?;
    let result = abx.analyze(&inputs.to_inputs())?;
    let records = abx.correlate(&result)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("{}", "No correlations found.".yellow());
        return Ok(());
    }

    println!(
        "{} {} correlations",
        "Found".cyan().bold(),
        records.len().to_string().white().bold()
    );
    println!();

    let gene_width = records.iter().map(|r| r.gene.len()).max().unwrap_or(4);
    let antibiotic_width = records.iter().map(|r| r.antibiotic.len()).max().unwrap_or(10);
    for record in &records {
        let relationship = record.relationship.to_string();
        let relationship = match record.relationship {
            Relationship::VeryStrongPositive | Relationship::StrongPositive => relationship.red().bold(),
            Relationship::ModeratePositive | Relationship::WeakPositive => relationship.red(),
            Relationship::VeryStrongNegative | Relationship::StrongNegative => relationship.green().bold(),
            Relationship::ModerateNegative | Relationship::WeakNegative => relationship.green(),
            Relationship::Negligible | Relationship::NoRelationship => relationship.dimmed(),
        };
        println!(
            "  {:gw$} {:aw$} {:>7.4}  {}",
            record.gene,
            record.antibiotic,
            record.coefficient,
            relationship,
            gw = gene_width,
            aw = antibiotic_width
        );
    }

    Ok(())
}
