//! Runs the report adapters over their directories and merges the results.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::AnalysisScope;
use crate::error::Result;
use crate::input::{DataTable, Parser, ParserConfig};

use super::adapter::{adapter_for, ReportAdapter};
use super::genotypes::FusedGenotypes;
use super::source::{discover_reports, ReportSource};

/// Report directories requested for an analysis. A `None` source is simply
/// not fused.
#[derive(Debug, Clone, Default)]
pub struct GenotypeSources {
    pub rgi: Option<PathBuf>,
    pub staramr: Option<PathBuf>,
    pub amrfinder: Option<PathBuf>,
}

impl GenotypeSources {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rgi(mut self, dir: impl Into<PathBuf>) -> Self {
        self.rgi = Some(dir.into());
        self
    }

    pub fn with_staramr(mut self, dir: impl Into<PathBuf>) -> Self {
        self.staramr = Some(dir.into());
        self
    }

    pub fn with_amrfinder(mut self, dir: impl Into<PathBuf>) -> Self {
        self.amrfinder = Some(dir.into());
        self
    }

    pub fn dir(&self, source: ReportSource) -> Option<&Path> {
        match source {
            ReportSource::Rgi => self.rgi.as_deref(),
            ReportSource::Staramr => self.staramr.as_deref(),
            ReportSource::Amrfinder => self.amrfinder.as_deref(),
        }
    }

    /// Requested sources in fusion order.
    pub fn requested(&self) -> impl Iterator<Item = (ReportSource, &Path)> {
        ReportSource::ALL
            .into_iter()
            .filter_map(|source| self.dir(source).map(|dir| (source, dir)))
    }

    pub fn is_empty(&self) -> bool {
        self.requested().next().is_none()
    }
}

/// Merges genotype reports from every requested tool into one
/// [`FusedGenotypes`].
pub struct GenotypeFusion<'a> {
    scope: &'a AnalysisScope,
    parser: Parser,
}

impl<'a> GenotypeFusion<'a> {
    pub fn new(scope: &'a AnalysisScope) -> Self {
        Self {
            scope,
            parser: Parser::with_config(ParserConfig::report()),
        }
    }

    /// Fuse every requested source for the given isolates.
    pub fn run(&self, isolates: &[String], sources: &GenotypeSources) -> Result<FusedGenotypes> {
        let mut fused = FusedGenotypes::with_isolates(isolates.iter().cloned());

        for (source, dir) in sources.requested() {
            info!(source = %source, dir = %dir.display(), "reading genotype reports");
            let kept = self.ingest_dir(&mut fused, source, dir)?;
            info!(source = %source, associations = kept, "genotype reports loaded");
        }

        Ok(fused)
    }

    /// Fuse every report of one tool found in `dir`.
    pub fn ingest_dir(
        &self,
        fused: &mut FusedGenotypes,
        source: ReportSource,
        dir: &Path,
    ) -> Result<usize> {
        let adapter = adapter_for(source);
        let mut kept = 0;

        for report in discover_reports(dir, source)? {
            let (table, _) = self.parser.parse_file(&report.path)?;
            let count = self.ingest_table(fused, adapter.as_ref(), &table, &report.isolate)?;
            debug!(
                source = %source,
                isolate = %report.isolate,
                file = %report.path.display(),
                associations = count,
                "report fused"
            );
            kept += count;
        }

        Ok(kept)
    }

    /// Fuse one already parsed report.
    pub fn ingest_table(
        &self,
        fused: &mut FusedGenotypes,
        adapter: &dyn ReportAdapter,
        table: &DataTable,
        isolate: &str,
    ) -> Result<usize> {
        let associations = adapter.extract(table, isolate, self.scope)?;
        Ok(fused.extend(&associations))
    }
}
