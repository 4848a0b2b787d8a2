//! Gene frequency bars.

use serde::{Deserialize, Serialize};

use crate::fusion::GeneFrequencies;

/// One bar of the gene-frequency plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneFrequencyEntry {
    pub gene: String,
    /// Percentage of isolates carrying the gene.
    pub frequency: f64,
    /// Distinct isolates carrying the gene.
    pub isolates: Vec<String>,
}

impl GeneFrequencyEntry {
    /// One entry per gene, in first-seen order.
    pub fn from_frequencies(frequencies: &GeneFrequencies, total_isolates: usize) -> Vec<Self> {
        frequencies
            .genes()
            .map(|gene| GeneFrequencyEntry {
                gene: gene.to_string(),
                frequency: frequencies.frequency(gene, total_isolates),
                isolates: frequencies
                    .isolates(gene)
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            })
            .collect()
    }
}
