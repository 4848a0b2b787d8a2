//! Phenotype-genotype correlation.
//!
//! For every (antibiotic-or-class, gene) pair seen during fusion, gene
//! presence across isolates is correlated (Pearson) with the numeric
//! phenotype of each antibiotic the key applies to, and the coefficient is
//! bucketed into a descriptive [`Relationship`].

mod engine;
mod pearson;
mod strength;

pub use engine::{CorrelationEngine, CorrelationOutcome, CorrelationRecord};
pub use pearson::pearson;
pub use strength::Relationship;
