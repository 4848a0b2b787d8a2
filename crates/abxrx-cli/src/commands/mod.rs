//! CLI command implementations.

pub mod analyze;
pub mod correlate;
pub mod delete;
pub mod profiles;
pub mod show;

mod render;

use std::path::PathBuf;

use abxrx::fusion::GenotypeSources;
use abxrx::{AbxRxPro, AnalysisInputs, ProfileStore, Settings};
use tracing::debug;

use crate::cli::InputArgs;

/// Options shared by every command.
pub struct Context {
    pub settings: Option<PathBuf>,
    pub store: PathBuf,
    pub verbose: bool,
}

impl Context {
    pub fn load_settings(&self) -> abxrx::Result<Settings> {
        match &self.settings {
            Some(path) => {
                debug!(path = %path.display(), "loading settings");
                Settings::load(path)
            }
            None => {
                debug!("using built-in settings");
                Settings::builtin()
            }
        }
    }

    pub fn store(&self) -> ProfileStore {
        ProfileStore::open(&self.store)
    }

    /// Engine configured from settings and the antibiotic selection.
    pub fn engine(&self, inputs: &InputArgs) -> abxrx::Result<AbxRxPro> {
        Ok(AbxRxPro::new(self.load_settings()?).with_antibiotics(inputs.antibiotics.iter().cloned()))
    }
}

impl InputArgs {
    pub fn to_inputs(&self) -> AnalysisInputs {
        let mut sources = GenotypeSources::new();
        if let Some(dir) = &self.rgi {
            sources = sources.with_rgi(dir);
        }
        if let Some(dir) = &self.staramr {
            sources = sources.with_staramr(dir);
        }
        if let Some(dir) = &self.amrfinder {
            sources = sources.with_amrfinder(dir);
        }

        AnalysisInputs {
            phenotype: self.pheno.clone(),
            sources,
        }
    }
}
