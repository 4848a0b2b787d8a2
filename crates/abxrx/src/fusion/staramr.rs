//! staramr summary reports.

use tracing::debug;

use crate::config::AnalysisScope;
use crate::error::Result;
use crate::input::DataTable;
use crate::text::capitalize;

use super::adapter::{cell, GeneAssociation, ReportAdapter};
use super::source::ReportSource;

const GENOTYPE: &str = "Genotype";
const PREDICTED_PHENOTYPE: &str = "Predicted Phenotype";

/// Reads staramr `summary.tsv` tables.
///
/// `Genotype` and `Predicted Phenotype` are parallel comma-separated lists:
/// the n-th gene is paired with the n-th antibiotic. Rows whose genotype is
/// `None` carry no evidence and are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaramrAdapter;

impl ReportAdapter for StaramrAdapter {
    fn source(&self) -> ReportSource {
        ReportSource::Staramr
    }

    fn required_columns(&self) -> &'static [&'static str] {
        &[GENOTYPE, PREDICTED_PHENOTYPE]
    }

    fn schema_hint(&self) -> String {
        "this looks like the detailed resfinder/pointfinder output of staramr; provide summary.tsv instead"
            .to_string()
    }

    fn extract(
        &self,
        table: &DataTable,
        isolate: &str,
        _scope: &AnalysisScope,
    ) -> Result<Vec<GeneAssociation>> {
        let columns = self.locate_columns(table)?;
        let (genotype_col, phenotype_col) = (columns[0], columns[1]);

        let mut associations = Vec::new();
        for row in &table.rows {
            let (Some(genotype), Some(phenotype)) = (cell(row, genotype_col), cell(row, phenotype_col))
            else {
                continue;
            };
            if genotype.contains("None") {
                continue;
            }

            let genes = split_list(genotype);
            let antibiotics = split_list(phenotype);
            if genes.len() != antibiotics.len() {
                debug!(
                    isolate,
                    genes = genes.len(),
                    antibiotics = antibiotics.len(),
                    "genotype and predicted phenotype lists differ in length"
                );
            }

            for (antibiotic, gene) in antibiotics.into_iter().zip(genes) {
                associations.push(GeneAssociation::new(isolate, capitalize(antibiotic), gene));
            }
        }

        Ok(associations)
    }
}

fn split_list(value: &str) -> Vec<&str> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}
