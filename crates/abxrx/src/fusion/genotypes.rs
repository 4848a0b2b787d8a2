//! Accumulators for fused genotype evidence.
//!
//! Writes append (duplicates kept, so marker sizes reflect how often a gene
//! was reported); reads deduplicate.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::adapter::GeneAssociation;

/// Isolate -> antibiotic-or-class -> genes, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GenotypeMap {
    isolates: IndexMap<String, IndexMap<String, Vec<String>>>,
}

impl GenotypeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure an (empty) entry exists for an isolate.
    pub fn seed(&mut self, isolate: impl Into<String>) {
        self.isolates.entry(isolate.into()).or_default();
    }

    /// Append a gene under an isolate and key.
    pub fn push(&mut self, isolate: &str, key: &str, gene: &str) {
        self.isolates
            .entry(isolate.to_string())
            .or_default()
            .entry(key.to_string())
            .or_default()
            .push(gene.to_string());
    }

    pub fn contains_isolate(&self, isolate: &str) -> bool {
        self.isolates.contains_key(isolate)
    }

    pub fn isolates(&self) -> impl Iterator<Item = &str> {
        self.isolates.keys().map(String::as_str)
    }

    /// Keys recorded for an isolate.
    pub fn keys(&self, isolate: &str) -> impl Iterator<Item = &str> {
        self.isolates
            .get(isolate)
            .into_iter()
            .flat_map(|keys| keys.keys().map(String::as_str))
    }

    /// Genes as collected, duplicates included.
    pub fn genes(&self, isolate: &str, key: &str) -> Option<&[String]> {
        self.isolates
            .get(isolate)
            .and_then(|keys| keys.get(key))
            .map(Vec::as_slice)
    }

    /// Distinct genes under an isolate and key, first-seen order.
    pub fn gene_set(&self, isolate: &str, key: &str) -> IndexSet<&str> {
        self.genes(isolate, key)
            .into_iter()
            .flatten()
            .map(String::as_str)
            .collect()
    }

    pub fn has_gene(&self, isolate: &str, key: &str, gene: &str) -> bool {
        self.genes(isolate, key)
            .is_some_and(|genes| genes.iter().any(|g| g == gene))
    }

    /// Whether an isolate has any evidence at all.
    pub fn has_evidence(&self, isolate: &str) -> bool {
        self.isolates
            .get(isolate)
            .is_some_and(|keys| keys.values().any(|genes| !genes.is_empty()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &IndexMap<String, Vec<String>>)> {
        self.isolates.iter().map(|(isolate, keys)| (isolate.as_str(), keys))
    }

    /// Number of isolates.
    pub fn len(&self) -> usize {
        self.isolates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.isolates.is_empty()
    }
}

/// Gene -> isolates it was observed in, independent of key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GeneFrequencies {
    genes: IndexMap<String, Vec<String>>,
}

impl GeneFrequencies {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, gene: &str, isolate: &str) {
        self.genes
            .entry(gene.to_string())
            .or_default()
            .push(isolate.to_string());
    }

    /// Genes in first-seen order.
    pub fn genes(&self) -> impl Iterator<Item = &str> {
        self.genes.keys().map(String::as_str)
    }

    /// Distinct isolates carrying a gene.
    pub fn isolates(&self, gene: &str) -> IndexSet<&str> {
        self.genes
            .get(gene)
            .into_iter()
            .flatten()
            .map(String::as_str)
            .collect()
    }

    /// Percentage of `total_isolates` carrying the gene.
    pub fn frequency(&self, gene: &str, total_isolates: usize) -> f64 {
        if total_isolates == 0 {
            return 0.0;
        }
        self.isolates(gene).len() as f64 / total_isolates as f64 * 100.0
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }
}

/// The fused genotype structure plus its gene-frequency table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FusedGenotypes {
    genotypes: GenotypeMap,
    frequencies: GeneFrequencies,
    /// Only isolates seeded up front are accepted.
    #[serde(skip)]
    closed: bool,
}

impl FusedGenotypes {
    /// Accept associations for any isolate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept associations only for these isolates; each starts with an
    /// empty entry so isolates without evidence still appear.
    pub fn with_isolates<I, S>(isolates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut genotypes = GenotypeMap::new();
        for isolate in isolates {
            genotypes.seed(isolate);
        }
        Self {
            genotypes,
            frequencies: GeneFrequencies::new(),
            closed: true,
        }
    }

    /// Record one association in both tables. Returns `false` when the
    /// isolate is not among the seeded isolates and the association was skipped.
    pub fn assign(&mut self, association: &GeneAssociation) -> bool {
        if self.closed && !self.genotypes.contains_isolate(&association.isolate) {
            warn!(
                isolate = %association.isolate,
                gene = %association.gene,
                "isolate not in phenotype table; association skipped"
            );
            return false;
        }

        self.genotypes
            .push(&association.isolate, &association.key, &association.gene);
        self.frequencies.push(&association.gene, &association.isolate);
        true
    }

    /// Record many associations; returns how many were kept.
    pub fn extend<'a>(&mut self, associations: impl IntoIterator<Item = &'a GeneAssociation>) -> usize {
        associations
            .into_iter()
            .filter(|association| self.assign(association))
            .count()
    }

    pub fn genotypes(&self) -> &GenotypeMap {
        &self.genotypes
    }

    pub fn frequencies(&self) -> &GeneFrequencies {
        &self.frequencies
    }

    /// Split into the two tables.
    pub fn into_parts(self) -> (GenotypeMap, GeneFrequencies) {
        (self.genotypes, self.frequencies)
    }
}
