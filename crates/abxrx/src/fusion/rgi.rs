//! RGI (Resistance Gene Identifier) reports.

use tracing::debug;

use crate::config::AnalysisScope;
use crate::error::Result;
use crate::input::DataTable;
use crate::text::title_case;

use super::adapter::{cell, GeneAssociation, ReportAdapter};
use super::source::ReportSource;

const GENE: &str = "Best_Hit_ARO";
const DRUG_CLASS: &str = "Drug Class";

/// Reads RGI summary tables.
///
/// `Drug Class` holds a `; `-separated list such as
/// `fluoroquinolone antibiotic; tetracycline antibiotic`. Each entry is
/// stripped of its ` antibiotic` qualifier, title-cased and pluralised
/// (`Fluoroquinolones`); only classes belonging to a selected antibiotic
/// are kept, keyed by class name.
#[derive(Debug, Clone, Copy, Default)]
pub struct RgiAdapter;

impl RgiAdapter {
    /// Normalise one drug-class entry to the pluralised class name.
    pub fn normalise_class(entry: &str) -> Option<String> {
        let stripped = entry.replace(" antibiotic", "");
        let class = title_case(stripped.trim());
        if class.is_empty() {
            None
        } else {
            Some(format!("{}s", class))
        }
    }
}

impl ReportAdapter for RgiAdapter {
    fn source(&self) -> ReportSource {
        ReportSource::Rgi
    }

    fn required_columns(&self) -> &'static [&'static str] {
        &[GENE, DRUG_CLASS]
    }

    fn extract(
        &self,
        table: &DataTable,
        isolate: &str,
        scope: &AnalysisScope,
    ) -> Result<Vec<GeneAssociation>> {
        let columns = self.locate_columns(table)?;
        let (gene_col, class_col) = (columns[0], columns[1]);

        let mut associations = Vec::new();
        for row in &table.rows {
            let (Some(gene), Some(classes)) = (cell(row, gene_col), cell(row, class_col)) else {
                continue;
            };

            for class in classes.split(';').filter_map(Self::normalise_class) {
                if scope.is_selected_class(&class) {
                    associations.push(GeneAssociation::new(isolate, class, gene));
                } else {
                    debug!(isolate, gene, class = %class, "drug class outside analysis scope");
                }
            }
        }

        Ok(associations)
    }
}
