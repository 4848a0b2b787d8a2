//! Main AbxRxPro struct and public API.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::config::{AnalysisScope, ColourScheme, Settings};
use crate::correlation::{CorrelationEngine, CorrelationRecord};
use crate::error::{AbxError, Result};
use crate::fusion::{FusedGenotypes, GenotypeFusion, GenotypeSources};
use crate::phenotype::PhenotypeTable;
use crate::plot::{BubblePlot, GeneFrequencyEntry};
use crate::profile::Profile;

/// Files supplied to one analysis.
#[derive(Debug, Clone, Default)]
pub struct AnalysisInputs {
    /// Phenotype spreadsheet export. Required.
    pub phenotype: Option<PathBuf>,
    /// Genotype report directories, any subset of the supported tools.
    pub sources: GenotypeSources,
}

impl AnalysisInputs {
    pub fn new(phenotype: impl Into<PathBuf>) -> Self {
        Self {
            phenotype: Some(phenotype.into()),
            sources: GenotypeSources::new(),
        }
    }

    pub fn with_sources(mut self, sources: GenotypeSources) -> Self {
        self.sources = sources;
        self
    }

    fn phenotype_path(&self) -> Result<&Path> {
        match &self.phenotype {
            Some(path) => Ok(path),
            None if !self.sources.is_empty() => Err(AbxError::MissingInput(
                "Genotypic data requires phenotypic data. Provide a phenotype file".to_string(),
            )),
            None => Err(AbxError::MissingInput(
                "No phenotype file provided".to_string(),
            )),
        }
    }
}

/// Everything computed by [`AbxRxPro::analyze`].
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub phenotypes: PhenotypeTable,
    pub scope: AnalysisScope,
    /// `None` when no genotype sources were requested.
    pub genotypes: Option<FusedGenotypes>,
    pub plot: BubblePlot,
    pub gene_frequencies: Option<Vec<GeneFrequencyEntry>>,
}

impl AnalysisResult {
    pub fn has_genotypes(&self) -> bool {
        self.genotypes.is_some()
    }

    /// Snapshot the result as a named profile.
    pub fn to_profile(&self, name: impl Into<String>) -> Profile {
        Profile::new(name, self.plot.clone(), self.gene_frequencies.clone())
    }
}

/// The main AbxRxPro analysis engine.
#[derive(Debug, Clone)]
pub struct AbxRxPro {
    settings: Settings,
    antibiotics: Vec<String>,
    colours: Option<ColourScheme>,
}

impl AbxRxPro {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            antibiotics: Vec::new(),
            colours: None,
        }
    }

    /// Restrict the analysis to these antibiotics. Empty keeps every
    /// antibiotic in the phenotype file.
    pub fn with_antibiotics<I, S>(mut self, antibiotics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.antibiotics = antibiotics.into_iter().map(Into::into).collect();
        self
    }

    /// Override the colour scheme from settings.
    pub fn with_colours(mut self, colours: ColourScheme) -> Self {
        self.colours = Some(colours);
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    fn colours(&self) -> ColourScheme {
        self.colours
            .clone()
            .unwrap_or_else(|| self.settings.colour_scheme())
    }

    /// Load phenotypes, fuse the requested genotype reports and build the
    /// plot data.
    pub fn analyze(&self, inputs: &AnalysisInputs) -> Result<AnalysisResult> {
        let phenotype_path = inputs.phenotype_path()?;
        let phenotypes = PhenotypeTable::load(phenotype_path, &self.antibiotics)?;
        let scope = AnalysisScope::new(
            phenotypes.antibiotics(),
            self.settings.antibiotics.clone(),
        );

        for antibiotic in scope.antibiotics() {
            if scope.class_of(antibiotic).is_none() {
                warn!(antibiotic = %antibiotic, "antibiotic has no drug class in settings");
            }
        }

        let genotypes = if inputs.sources.is_empty() {
            None
        } else {
            Some(GenotypeFusion::new(&scope).run(phenotypes.isolates(), &inputs.sources)?)
        };

        let plot = BubblePlot::build(
            &phenotypes,
            genotypes.as_ref().map(FusedGenotypes::genotypes),
            &scope,
            &self.colours(),
        );
        let gene_frequencies = genotypes.as_ref().map(|fused| {
            GeneFrequencyEntry::from_frequencies(fused.frequencies(), phenotypes.isolates().len())
        });

        info!(
            isolates = phenotypes.isolates().len(),
            antibiotics = phenotypes.antibiotics().len(),
            genes = gene_frequencies.as_ref().map_or(0, Vec::len),
            "analysis complete"
        );

        Ok(AnalysisResult {
            phenotypes,
            scope,
            genotypes,
            plot,
            gene_frequencies,
        })
    }

    /// Correlate gene presence with phenotype for an analysed result.
    pub fn correlate(&self, result: &AnalysisResult) -> Result<Vec<CorrelationRecord>> {
        let fused = result.genotypes.as_ref().ok_or_else(|| {
            AbxError::MissingInput(
                "Correlation requires genotypic data. Provide at least one report directory"
                    .to_string(),
            )
        })?;

        let engine = CorrelationEngine::new(
            fused.genotypes(),
            &result.phenotypes,
            &self.settings.antibiotics,
        );
        Ok(engine.correlate())
    }
}
