//! Report fusion: normalises RGI, staramr and AMRFinderPlus reports into one
//! isolate -> antibiotic-or-class -> genes structure.
//!
//! # Usage
//!
//! ```no_run
//! use abxrx::config::{AnalysisScope, Settings};
//! use abxrx::fusion::{GenotypeFusion, GenotypeSources};
//!
//! let settings = Settings::builtin().unwrap();
//! let scope = AnalysisScope::new(["Ampicillin", "Tetracycline"], settings.antibiotics);
//! let sources = GenotypeSources::new().with_rgi("reports/rgi");
//!
//! let isolates = vec!["EC01".to_string(), "EC02".to_string()];
//! let fused = GenotypeFusion::new(&scope).run(&isolates, &sources).unwrap();
//! println!("{} genes observed", fused.frequencies().len());
//! ```

mod adapter;
mod amrfinder;
mod engine;
mod genotypes;
mod rgi;
mod source;
mod staramr;

pub use adapter::{adapter_for, GeneAssociation, ReportAdapter};
pub use amrfinder::AmrfinderAdapter;
pub use engine::{GenotypeFusion, GenotypeSources};
pub use genotypes::{FusedGenotypes, GeneFrequencies, GenotypeMap};
pub use rgi::RgiAdapter;
pub use source::{discover_reports, ReportFile, ReportSource};
pub use staramr::StaramrAdapter;
