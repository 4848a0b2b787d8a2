//! Phenotype table: isolates by antibiotics.

use std::path::Path;

use tracing::{info, warn};

use crate::error::{AbxError, Result};
use crate::input::{DataTable, Parser, SourceMetadata};
use crate::text::capitalize;

use super::call::PhenotypeCall;

/// Phenotypic resistance calls for every isolate against every antibiotic in
/// the analysis. Missing cells are stored as [`PhenotypeCall::Undetermined`].
#[derive(Debug, Clone)]
pub struct PhenotypeTable {
    isolates: Vec<String>,
    antibiotics: Vec<String>,
    /// One row per isolate, one column per antibiotic.
    calls: Vec<Vec<PhenotypeCall>>,
    /// Cell text as the user wrote it, for the plot overlay.
    overlay: Vec<Vec<String>>,
    source: Option<SourceMetadata>,
}

impl PhenotypeTable {
    /// Load a phenotype file (delimited spreadsheet export).
    ///
    /// The first column holds isolate IDs, every other header names an
    /// antibiotic. An empty `selection` keeps every antibiotic in the file.
    pub fn load<S: AsRef<str>>(path: impl AsRef<Path>, selection: &[S]) -> Result<Self> {
        let path = path.as_ref();
        info!(file = %path.display(), "reading phenotypic data");

        let (table, source) = Parser::new().parse_file(path)?;
        let mut phenotypes = Self::from_table(&table, selection)?;
        phenotypes.source = Some(source);

        info!(
            isolates = phenotypes.isolates.len(),
            antibiotics = phenotypes.antibiotics.len(),
            "phenotypic data loaded"
        );
        Ok(phenotypes)
    }

    /// Build from an already parsed table.
    pub fn from_table<S: AsRef<str>>(table: &DataTable, selection: &[S]) -> Result<Self> {
        // (capitalised name, column index), sorted by name
        let mut columns: Vec<(String, usize)> = table
            .headers
            .iter()
            .enumerate()
            .skip(1)
            .filter(|(_, h)| !h.trim().is_empty())
            .map(|(idx, h)| (capitalize(h.trim()), idx))
            .collect();
        columns.sort_by(|a, b| a.0.cmp(&b.0));

        if !selection.is_empty() {
            let mut wanted: Vec<String> = selection
                .iter()
                .map(|s| capitalize(s.as_ref().trim()))
                .collect();
            wanted.sort();
            wanted.dedup();

            let missing: Vec<&str> = wanted
                .iter()
                .filter(|w| !columns.iter().any(|(name, _)| name == *w))
                .map(String::as_str)
                .collect();
            if !missing.is_empty() {
                return Err(AbxError::MissingInput(format!(
                    "Antibiotic(s) {} not present in the phenotype file column headers",
                    missing.join(", ")
                )));
            }

            columns.retain(|(name, _)| wanted.contains(name));
        }

        if columns.is_empty() {
            return Err(AbxError::MissingInput(
                "No antibiotics provided in phenotype file or selection".to_string(),
            ));
        }

        let mut isolates = Vec::with_capacity(table.row_count());
        let mut calls = Vec::with_capacity(table.row_count());
        let mut overlay = Vec::with_capacity(table.row_count());

        for (row_idx, row) in table.rows.iter().enumerate() {
            let isolate = row.first().map(|s| s.trim()).unwrap_or("");
            if isolate.is_empty() {
                warn!(row = row_idx + 1, "skipping phenotype row without an isolate ID");
                continue;
            }

            let mut row_calls = Vec::with_capacity(columns.len());
            let mut row_text = Vec::with_capacity(columns.len());
            for (antibiotic, col) in &columns {
                let cell = row.get(*col).map(String::as_str).unwrap_or("");
                if DataTable::is_null_value(cell) {
                    row_calls.push(PhenotypeCall::Undetermined);
                    row_text.push(PhenotypeCall::Undetermined.code().to_string());
                    continue;
                }

                let call = cell
                    .parse::<PhenotypeCall>()
                    .map_err(|_| AbxError::UnrecognizedValue {
                        isolate: isolate.to_string(),
                        antibiotic: antibiotic.clone(),
                        value: cell.to_string(),
                    })?;
                row_calls.push(call);
                row_text.push(cell.trim().to_string());
            }

            isolates.push(isolate.to_string());
            calls.push(row_calls);
            overlay.push(row_text);
        }

        if isolates.is_empty() {
            return Err(AbxError::EmptyData(
                "Phenotype file lists no isolates".to_string(),
            ));
        }

        Ok(Self {
            isolates,
            antibiotics: columns.into_iter().map(|(name, _)| name).collect(),
            calls,
            overlay,
            source: None,
        })
    }

    /// Build directly from calls; `rows` pairs an isolate ID with one call
    /// per antibiotic, in `antibiotics` order.
    pub fn from_calls(
        antibiotics: Vec<String>,
        rows: Vec<(String, Vec<PhenotypeCall>)>,
    ) -> Result<Self> {
        if antibiotics.is_empty() {
            return Err(AbxError::MissingInput("No antibiotics given".to_string()));
        }

        let mut isolates = Vec::with_capacity(rows.len());
        let mut calls = Vec::with_capacity(rows.len());
        for (isolate, row) in rows {
            if row.len() != antibiotics.len() {
                return Err(AbxError::MissingInput(format!(
                    "Isolate '{}' has {} calls for {} antibiotics",
                    isolate,
                    row.len(),
                    antibiotics.len()
                )));
            }
            isolates.push(isolate);
            calls.push(row);
        }

        let overlay = calls
            .iter()
            .map(|row| row.iter().map(|c| c.code().to_string()).collect())
            .collect();

        Ok(Self {
            isolates,
            antibiotics,
            calls,
            overlay,
            source: None,
        })
    }

    /// Isolate IDs in file order.
    pub fn isolates(&self) -> &[String] {
        &self.isolates
    }

    /// Antibiotic columns, sorted.
    pub fn antibiotics(&self) -> &[String] {
        &self.antibiotics
    }

    pub fn has_antibiotic(&self, antibiotic: &str) -> bool {
        self.antibiotic_index(antibiotic).is_some()
    }

    fn antibiotic_index(&self, antibiotic: &str) -> Option<usize> {
        self.antibiotics.iter().position(|a| a == antibiotic)
    }

    /// Call for one isolate (by row position) and antibiotic.
    pub fn call(&self, isolate: usize, antibiotic: &str) -> Option<PhenotypeCall> {
        let col = self.antibiotic_index(antibiotic)?;
        self.calls.get(isolate).and_then(|row| row.get(col)).copied()
    }

    /// Original cell text for one isolate and antibiotic.
    pub fn overlay_text(&self, isolate: usize, antibiotic: &str) -> Option<&str> {
        let col = self.antibiotic_index(antibiotic)?;
        self.overlay
            .get(isolate)
            .and_then(|row| row.get(col))
            .map(String::as_str)
    }

    /// Calls for one antibiotic, in isolate order.
    pub fn column(&self, antibiotic: &str) -> Option<Vec<PhenotypeCall>> {
        let col = self.antibiotic_index(antibiotic)?;
        Some(self.calls.iter().map(|row| row[col]).collect())
    }

    /// Numeric phenotype vector for one antibiotic, in isolate order.
    pub fn numeric_column(&self, antibiotic: &str) -> Option<Vec<f64>> {
        self.column(antibiotic)
            .map(|calls| calls.into_iter().map(PhenotypeCall::value).collect())
    }

    /// Metadata of the file the table was read from.
    pub fn source(&self) -> Option<&SourceMetadata> {
        self.source.as_ref()
    }
}
