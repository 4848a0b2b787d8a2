//! Report adapters: one per genotyping tool, one output contract.

use serde::{Deserialize, Serialize};

use crate::config::AnalysisScope;
use crate::error::{AbxError, Result};
use crate::input::DataTable;

use super::amrfinder::AmrfinderAdapter;
use super::rgi::RgiAdapter;
use super::source::ReportSource;
use super::staramr::StaramrAdapter;

/// A gene implicated for an isolate against an antibiotic or drug class.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GeneAssociation {
    pub isolate: String,
    /// Antibiotic name or drug class name.
    pub key: String,
    pub gene: String,
}

impl GeneAssociation {
    pub fn new(isolate: impl Into<String>, key: impl Into<String>, gene: impl Into<String>) -> Self {
        Self {
            isolate: isolate.into(),
            key: key.into(),
            gene: gene.into(),
        }
    }
}

/// Normalises one tool's report into gene associations.
///
/// Every implementation follows the same shape: locate its columns, drop rows
/// without annotation, split multi-valued cells, normalise names, and emit
/// `(isolate, key, gene)` triples.
pub trait ReportAdapter {
    /// The tool this adapter reads.
    fn source(&self) -> ReportSource;

    /// Column headers the report must carry.
    fn required_columns(&self) -> &'static [&'static str];

    /// Explanation appended to a schema mismatch error.
    fn schema_hint(&self) -> String {
        format!(
            "expected columns {}",
            self.required_columns().join(", ")
        )
    }

    /// Extract associations from one isolate's report.
    fn extract(
        &self,
        table: &DataTable,
        isolate: &str,
        scope: &AnalysisScope,
    ) -> Result<Vec<GeneAssociation>>;

    /// Resolve the required columns to positions, failing on a mismatch.
    fn locate_columns(&self, table: &DataTable) -> Result<Vec<usize>> {
        let mut positions = Vec::with_capacity(self.required_columns().len());
        let mut missing = Vec::new();

        for column in self.required_columns() {
            match table.column_index(column) {
                Some(idx) => positions.push(idx),
                None => missing.push(*column),
            }
        }

        if missing.is_empty() {
            Ok(positions)
        } else {
            Err(AbxError::SchemaMismatch {
                tool: self.source(),
                message: format!("missing column(s) {}; {}", missing.join(", "), self.schema_hint()),
            })
        }
    }
}

/// The adapter for a tool.
pub fn adapter_for(source: ReportSource) -> Box<dyn ReportAdapter> {
    match source {
        ReportSource::Rgi => Box::new(RgiAdapter),
        ReportSource::Staramr => Box::new(StaramrAdapter),
        ReportSource::Amrfinder => Box::new(AmrfinderAdapter),
    }
}

/// Trimmed cell value, or `None` for a missing value.
pub(crate) fn cell<'a>(row: &'a [String], idx: usize) -> Option<&'a str> {
    row.get(idx)
        .map(|s| s.trim())
        .filter(|s| !DataTable::is_null_value(s))
}
