//! Phenotype-genotype correlation over fused genotype data.

use std::fmt;

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::AntibioticClasses;
use crate::fusion::GenotypeMap;
use crate::phenotype::PhenotypeTable;

use super::pearson::pearson;
use super::strength::Relationship;

/// One reported gene/antibiotic correlation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationRecord {
    pub gene: String,
    pub antibiotic: String,
    pub coefficient: f64,
    pub relationship: Relationship,
}

impl fmt::Display for CorrelationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.gene, self.antibiotic, self.coefficient, self.relationship
        )
    }
}

/// Result for one (key, gene, antibiotic) triple, suppressed or not.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationOutcome {
    /// Antibiotic or drug class the gene was reported under.
    pub key: String,
    pub gene: String,
    /// Phenotype column the indicator was compared against.
    pub antibiotic: String,
    /// `None` when undefined (e.g. the gene is present in every isolate).
    pub coefficient: Option<f64>,
    pub relationship: Relationship,
}

impl CorrelationOutcome {
    fn into_record(self) -> Option<CorrelationRecord> {
        if self.relationship.is_suppressed() {
            return None;
        }
        Some(CorrelationRecord {
            gene: self.gene,
            antibiotic: self.antibiotic,
            coefficient: self.coefficient?,
            relationship: self.relationship,
        })
    }
}

/// Correlates gene presence with phenotype strength.
///
/// The phenotype table defines both the isolate ordering and the antibiotics
/// in scope: a class key expands to every antibiotic of that class that has a
/// phenotype column.
pub struct CorrelationEngine<'a> {
    genotypes: &'a GenotypeMap,
    phenotypes: &'a PhenotypeTable,
    classes: &'a AntibioticClasses,
}

impl<'a> CorrelationEngine<'a> {
    pub fn new(
        genotypes: &'a GenotypeMap,
        phenotypes: &'a PhenotypeTable,
        classes: &'a AntibioticClasses,
    ) -> Self {
        Self {
            genotypes,
            phenotypes,
            classes,
        }
    }

    /// Every antibiotic-or-class key with the distinct genes reported under it
    /// across all isolates, in discovery order.
    pub fn pairs(&self) -> IndexMap<&'a str, IndexSet<&'a str>> {
        let mut pairs: IndexMap<&'a str, IndexSet<&'a str>> = IndexMap::new();
        for (_, keys) in self.genotypes.iter() {
            for (key, genes) in keys {
                pairs
                    .entry(key.as_str())
                    .or_default()
                    .extend(genes.iter().map(String::as_str));
            }
        }
        pairs
    }

    /// Phenotype columns a key applies to.
    pub fn resolve(&self, key: &str) -> Vec<String> {
        if self.classes.is_class(key) {
            self.classes
                .antibiotics_in_class(key)
                .filter(|antibiotic| self.phenotypes.has_antibiotic(antibiotic))
                .map(str::to_string)
                .collect()
        } else if self.phenotypes.has_antibiotic(key) {
            vec![key.to_string()]
        } else {
            Vec::new()
        }
    }

    /// 0/1 presence of `gene` under `key`, in phenotype isolate order.
    /// Isolates without a genotype entry score 0.
    pub fn indicator(&self, key: &str, gene: &str) -> Vec<f64> {
        self.phenotypes
            .isolates()
            .iter()
            .map(|isolate| {
                if self.genotypes.has_gene(isolate, key, gene) {
                    1.0
                } else {
                    0.0
                }
            })
            .collect()
    }

    /// Evaluate every pair against every antibiotic it resolves to,
    /// including suppressed results.
    pub fn evaluate(&self) -> Vec<CorrelationOutcome> {
        let mut outcomes = Vec::new();

        for (key, genes) in self.pairs() {
            let antibiotics = self.resolve(key);
            if antibiotics.is_empty() {
                debug!(key, "no phenotype column for key");
                continue;
            }

            for gene in genes {
                let presence = self.indicator(key, gene);
                for antibiotic in &antibiotics {
                    let Some(phenotype) = self.phenotypes.numeric_column(antibiotic) else {
                        continue;
                    };
                    let coefficient = pearson(&presence, &phenotype);
                    outcomes.push(CorrelationOutcome {
                        key: key.to_string(),
                        gene: gene.to_string(),
                        antibiotic: antibiotic.clone(),
                        coefficient,
                        relationship: Relationship::classify(coefficient),
                    });
                }
            }
        }

        outcomes
    }

    /// Non-suppressed correlations, ordered by key discovery, then gene,
    /// then resolved antibiotic.
    pub fn correlate(&self) -> Vec<CorrelationRecord> {
        let outcomes = self.evaluate();
        let evaluated = outcomes.len();
        let records: Vec<CorrelationRecord> = outcomes
            .into_iter()
            .filter_map(CorrelationOutcome::into_record)
            .collect();

        info!(
            evaluated,
            reported = records.len(),
            "correlation pass complete"
        );
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phenotype::PhenotypeCall::{self, *};

    fn phenotypes(antibiotics: &[&str], rows: &[(&str, &[PhenotypeCall])]) -> PhenotypeTable {
        PhenotypeTable::from_calls(
            antibiotics.iter().map(|a| a.to_string()).collect(),
            rows.iter()
                .map(|(isolate, calls)| (isolate.to_string(), calls.to_vec()))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_single_antibiotic_round_trip() {
        let mut genotypes = GenotypeMap::new();
        genotypes.push("isolate1", "AntibioticX", "geneA");
        genotypes.push("isolate1", "AntibioticX", "geneA");
        genotypes.push("isolate1", "AntibioticX", "geneB");
        genotypes.push("isolate2", "AntibioticX", "geneB");

        let phenotypes = phenotypes(
            &["AntibioticX"],
            &[("isolate1", &[Resistant]), ("isolate2", &[Susceptible])],
        );
        let classes = AntibioticClasses::new();
        let engine = CorrelationEngine::new(&genotypes, &phenotypes, &classes);

        assert_eq!(engine.indicator("AntibioticX", "geneA"), vec![1.0, 0.0]);
        assert_eq!(engine.indicator("AntibioticX", "geneB"), vec![1.0, 1.0]);

        let records = engine.correlate();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].gene, "geneA");
        assert_eq!(records[0].antibiotic, "AntibioticX");
        assert_eq!(records[0].coefficient, 1.0);
        assert_eq!(records[0].relationship, Relationship::VeryStrongPositive);
        assert_eq!(
            records[0].to_string(),
            "geneA AntibioticX 1 very strong positive relationship"
        );
    }

    #[test]
    fn test_class_key_resolves_to_member_antibiotics() {
        let classes: AntibioticClasses = [
            ("Gentamicin", "Aminoglycosides"),
            ("Ampicillin", "Penams"),
            ("Amikacin", "Aminoglycosides"),
            ("Tobramycin", "Aminoglycosides"),
        ]
        .into_iter()
        .collect();

        let mut genotypes = GenotypeMap::new();
        genotypes.push("EC01", "Aminoglycosides", "aac(6')-Ib");

        let phenotypes = phenotypes(
            &["Amikacin", "Gentamicin"],
            &[
                ("EC01", &[Resistant, Resistant]),
                ("EC02", &[Susceptible, Susceptible]),
                ("EC03", &[Susceptible, Intermediate]),
            ],
        );
        let engine = CorrelationEngine::new(&genotypes, &phenotypes, &classes);

        assert_eq!(engine.resolve("Aminoglycosides"), vec!["Gentamicin", "Amikacin"]);
        assert_eq!(engine.resolve("Penams"), Vec::<String>::new());
        assert_eq!(engine.resolve("Amikacin"), vec!["Amikacin"]);
        assert!(engine.resolve("Colistin").is_empty());

        let records = engine.correlate();
        let antibiotics: Vec<&str> = records.iter().map(|r| r.antibiotic.as_str()).collect();
        assert_eq!(antibiotics, vec!["Gentamicin", "Amikacin"]);

        // Gentamicin column [1, 0, 0.5] against indicator [1, 0, 0].
        assert!((records[0].coefficient - 0.866_025_403_8).abs() < 1e-9);
        assert_eq!(records[0].relationship, Relationship::VeryStrongPositive);
        // Amikacin column [1, 0, 0] matches the indicator exactly.
        assert!((records[1].coefficient - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_pairs_union_in_discovery_order() {
        let mut genotypes = GenotypeMap::new();
        genotypes.push("EC01", "Tetracycline", "tet(A)");
        genotypes.push("EC01", "Fluoroquinolones", "gyrA");
        genotypes.push("EC02", "Tetracycline", "tet(B)");
        genotypes.push("EC02", "Tetracycline", "tet(A)");

        let phenotypes = phenotypes(&["Tetracycline"], &[("EC01", &[Resistant]), ("EC02", &[Resistant])]);
        let classes = AntibioticClasses::new();
        let engine = CorrelationEngine::new(&genotypes, &phenotypes, &classes);

        let pairs = engine.pairs();
        let keys: Vec<&str> = pairs.keys().copied().collect();
        assert_eq!(keys, vec!["Tetracycline", "Fluoroquinolones"]);
        let tet: Vec<&str> = pairs["Tetracycline"].iter().copied().collect();
        assert_eq!(tet, vec!["tet(A)", "tet(B)"]);
    }

    #[test]
    fn test_isolates_missing_from_genotypes_score_zero() {
        let mut genotypes = GenotypeMap::new();
        genotypes.push("EC01", "Ampicillin", "blaTEM-1");

        let phenotypes = phenotypes(
            &["Ampicillin"],
            &[("EC01", &[Resistant]), ("EC02", &[Resistant]), ("EC03", &[Susceptible])],
        );
        let classes = AntibioticClasses::new();
        let engine = CorrelationEngine::new(&genotypes, &phenotypes, &classes);

        assert_eq!(engine.indicator("Ampicillin", "blaTEM-1"), vec![1.0, 0.0, 0.0]);
        let outcomes = engine.evaluate();
        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].relationship, Relationship::StrongPositive);
    }

    #[test]
    fn test_constant_phenotype_suppressed() {
        let mut genotypes = GenotypeMap::new();
        genotypes.push("EC01", "Ampicillin", "blaTEM-1");

        let phenotypes = phenotypes(
            &["Ampicillin"],
            &[("EC01", &[Resistant]), ("EC02", &[Resistant])],
        );
        let classes = AntibioticClasses::new();
        let engine = CorrelationEngine::new(&genotypes, &phenotypes, &classes);

        let outcomes = engine.evaluate();
        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].coefficient, None);
        assert!(engine.correlate().is_empty());
    }
}
