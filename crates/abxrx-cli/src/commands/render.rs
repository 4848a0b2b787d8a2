//! Terminal rendering of plots, frequencies and profiles.

use abxrx::plot::{BubblePlot, GeneFrequencyEntry, MIN_MARKER_SIZE};
use abxrx::ProfileSummary;
use colored::{ColoredString, Colorize};

const ISOLATE_WIDTH: usize = 14;
const CELL_WIDTH: usize = 8;
const BAR_WIDTH: usize = 30;

/// Print the phenotype grid. Each cell shows the call, plus `+n` when `n`
/// gene reports back it.
pub fn print_grid(plot: &BubblePlot, verbose: bool) {
    print!("{:width$}", "", width = ISOLATE_WIDTH);
    for antibiotic in &plot.antibiotics {
        print!("{:>width$}", abbreviate(antibiotic), width = CELL_WIDTH);
    }
    println!();

    for isolate in &plot.isolates {
        print!("{:width$}", truncate(isolate, ISOLATE_WIDTH - 1), width = ISOLATE_WIDTH);
        for antibiotic in &plot.antibiotics {
            let Some(cell) = plot.cell(isolate, antibiotic) else {
                print!("{:>width$}", "", width = CELL_WIDTH);
                continue;
            };
            let extra = cell.marker_size.saturating_sub(MIN_MARKER_SIZE);
            let label = if extra > 0 {
                format!("{}+{}", cell.text, extra)
            } else {
                cell.text.clone()
            };
            print!("{}", paint(&format!("{:>width$}", label, width = CELL_WIDTH), &cell.colour));
        }
        println!();
    }

    if verbose {
        println!();
        println!("{}", "Genotype annotations:".yellow().bold());
        for cell in plot.cells.iter().filter(|c| c.has_genotype()) {
            println!(
                "  {} / {}: {}",
                cell.isolate.white(),
                cell.antibiotic,
                cell.annotation_text()
            );
        }
    }
}

pub fn print_frequencies(frequencies: &[GeneFrequencyEntry], verbose: bool) {
    if frequencies.is_empty() {
        println!("{}", "No genes identified.".yellow());
        return;
    }

    let width = frequencies.iter().map(|f| f.gene.len()).max().unwrap_or(0).max(4);
    for entry in frequencies {
        let filled = ((entry.frequency / 100.0) * BAR_WIDTH as f64).round() as usize;
        let bar = "█".repeat(filled) + &"░".repeat(BAR_WIDTH.saturating_sub(filled));
        print!(
            "  {:width$} {} {:5.1}%",
            entry.gene,
            bar.cyan(),
            entry.frequency,
            width = width
        );
        if verbose {
            print!("  {}", entry.isolates.join(", ").dimmed());
        }
        println!();
    }
}

pub fn print_summary(summary: &ProfileSummary) {
    println!("{}", summary.name.cyan().bold());
    println!("  Created:     {}", summary.date_created());
    println!(
        "  Antibiotics: {} ({})",
        summary.antibiotic_count.to_string().white().bold(),
        summary.antibiotics.join(", ")
    );
    println!(
        "  Isolates:    {} ({})",
        summary.isolate_count.to_string().white().bold(),
        summary.isolates.join(", ")
    );
}

/// Colour text with an `rgb(r, g, b)` string, leaving it plain when the
/// string does not parse.
fn paint(text: &str, rgb: &str) -> ColoredString {
    match parse_rgb(rgb) {
        Some((r, g, b)) => text.truecolor(r, g, b),
        None => text.normal(),
    }
}

fn parse_rgb(rgb: &str) -> Option<(u8, u8, u8)> {
    let inner = rgb.trim().strip_prefix("rgb(")?.strip_suffix(')')?;
    let mut channels = inner.split(',').map(|c| c.trim().parse::<u8>());
    let r = channels.next()?.ok()?;
    let g = channels.next()?.ok()?;
    let b = channels.next()?.ok()?;
    if channels.next().is_some() {
        return None;
    }
    Some((r, g, b))
}

fn abbreviate(antibiotic: &str) -> String {
    truncate(antibiotic, CELL_WIDTH - 1)
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        text.chars().take(max).collect()
    }
}
