//! AMRFinderPlus reports.

use crate::config::AnalysisScope;
use crate::error::Result;
use crate::input::DataTable;
use crate::text::capitalize;

use super::adapter::{cell, GeneAssociation, ReportAdapter};
use super::source::ReportSource;

const GENE_SYMBOL: &str = "Gene symbol";
const SUBCLASS: &str = "Subclass";

/// Reads AMRFinderPlus tables. One antibiotic (or class) per row, taken from
/// `Subclass` and capitalised (`TETRACYCLINE` -> `Tetracycline`).
#[derive(Debug, Clone, Copy, Default)]
pub struct AmrfinderAdapter;

impl ReportAdapter for AmrfinderAdapter {
    fn source(&self) -> ReportSource {
        ReportSource::Amrfinder
    }

    fn required_columns(&self) -> &'static [&'static str] {
        &[GENE_SYMBOL, SUBCLASS]
    }

    fn extract(
        &self,
        table: &DataTable,
        isolate: &str,
        _scope: &AnalysisScope,
    ) -> Result<Vec<GeneAssociation>> {
        let columns = self.locate_columns(table)?;
        let (gene_col, subclass_col) = (columns[0], columns[1]);

        Ok(table
            .rows
            .iter()
            .filter_map(|row| {
                let gene = cell(row, gene_col)?;
                let subclass = cell(row, subclass_col)?;
                Some(GeneAssociation::new(isolate, capitalize(subclass), gene))
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AntibioticClasses;
    use crate::error::AbxError;
    use crate::input::{Parser, ParserConfig};

    #[test]
    fn test_extract_subclasses() {
        let t = Parser::with_config(ParserConfig::report())
            .parse_bytes(
                b"Protein identifier\tGene symbol\tClass\tSubclass\n\
                  p1\ttet(A)\tTETRACYCLINE\tTETRACYCLINE\n\
                  p2\tblaTEM-1\tBETA-LACTAM\tBETA-LACTAM\n\
                  p3\tacrF\tEFFLUX\t\n",
                b'\t',
            )
            .unwrap();
        let scope = AnalysisScope::new(["Tetracycline"], AntibioticClasses::new());

        let associations = AmrfinderAdapter.extract(&t, "EC01", &scope).unwrap();
        assert_eq!(
            associations,
            vec![
                GeneAssociation::new("EC01", "Tetracycline", "tet(A)"),
                GeneAssociation::new("EC01", "Beta-lactam", "blaTEM-1"),
            ]
        );
    }

    #[test]
    fn test_missing_subclass_column_rejected() {
        let t = Parser::with_config(ParserConfig::report())
            .parse_bytes(
                b"Protein identifier\tGene symbol\tClass\n\
                  p1\ttet(A)\tTETRACYCLINE\n",
                b'\t',
            )
            .unwrap();
        let scope = AnalysisScope::new(["Tetracycline"], AntibioticClasses::new());

        let err = AmrfinderAdapter.extract(&t, "EC01", &scope).unwrap_err();
        match err {
            AbxError::SchemaMismatch { tool, message } => {
                assert_eq!(tool, ReportSource::Amrfinder);
                assert!(message.contains(SUBCLASS));
            }
            other => panic!("expected SchemaMismatch, got {other:?}"),
        }
    }
}
