//! AbxRxPro: phenotype and genotype fusion for antibiotic resistance.
//!
//! Phenotypic calls (R/I/S/U per isolate and antibiotic) are combined with
//! genotype reports from RGI, staramr and AMRFinderPlus. Gene evidence is
//! keyed by antibiotic or by drug class, sized into a bubble plot, and
//! correlated against the phenotypes.
//!
//! # Core Principles
//!
//! - **One contract for every tool**: each report adapter yields
//!   `(isolate, antibiotic-or-class, gene)` associations
//! - **Injected configuration**: the antibiotic to class mapping is passed in,
//!   never read from ambient state
//! - **Append on write, dedupe on read**: repeated gene reports grow bubbles
//!   but count once in correlations and frequencies
//!
//! # Example
//!
//! ```no_run
//! use abxrx::{AbxRxPro, AnalysisInputs, Settings};
//! use abxrx::fusion::GenotypeSources;
//!
//! let abx = AbxRxPro::new(Settings::builtin().unwrap());
//! let inputs = AnalysisInputs::new("phenotypes.tsv")
//!     .with_sources(GenotypeSources::new().with_rgi("reports/rgi"));
//!
//! let result = abx.analyze(&inputs).unwrap();
//! for record in abx.correlate(&result).unwrap() {
//!     println!("{}", record);
//! }
//! ```

pub mod config;
pub mod correlation;
pub mod error;
pub mod fusion;
pub mod input;
pub mod phenotype;
pub mod plot;
pub mod profile;

mod pipeline;
mod text;

pub use crate::pipeline::{AbxRxPro, AnalysisInputs, AnalysisResult};
pub use config::{AnalysisScope, AntibioticClasses, ColourScheme, Settings};
pub use correlation::{CorrelationRecord, Relationship};
pub use error::{AbxError, Result};
pub use input::{DataTable, SourceMetadata};
pub use phenotype::{PhenotypeCall, PhenotypeTable};
pub use profile::{Profile, ProfileStore, ProfileSummary};
