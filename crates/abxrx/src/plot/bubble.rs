//! Bubble grid of isolates by antibiotics.

use serde::{Deserialize, Serialize};

use crate::config::{AnalysisScope, ColourScheme};
use crate::fusion::GenotypeMap;
use crate::phenotype::{PhenotypeCall, PhenotypeTable};

/// Marker size of a bubble without genotype evidence.
pub const MIN_MARKER_SIZE: usize = 5;

/// Genes listed under one heading (an antibiotic or its class) in a bubble's
/// hover annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationGroup {
    pub label: String,
    /// Distinct genes, first-seen order.
    pub genes: Vec<String>,
}

/// One bubble: an isolate's call against an antibiotic plus the genotype
/// evidence behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BubbleCell {
    pub isolate: String,
    pub antibiotic: String,
    pub call: PhenotypeCall,
    /// Text overlay (the cell as written in the phenotype file).
    pub text: String,
    pub colour: String,
    /// Grows with every gene report under the antibiotic or its class,
    /// duplicates included.
    pub marker_size: usize,
    /// Empty when no genotype was identified.
    pub annotation: Vec<AnnotationGroup>,
}

impl BubbleCell {
    pub fn has_genotype(&self) -> bool {
        !self.annotation.is_empty()
    }

    /// Plain-text hover annotation.
    pub fn annotation_text(&self) -> String {
        if self.annotation.is_empty() {
            return "No genotype identified".to_string();
        }
        self.annotation
            .iter()
            .map(|group| format!("{}: {}", group.label, group.genes.join(", ")))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// The full bubble grid, isolate-major.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BubblePlot {
    pub isolates: Vec<String>,
    pub antibiotics: Vec<String>,
    pub colours: ColourScheme,
    pub cells: Vec<BubbleCell>,
}

impl BubblePlot {
    /// Build the grid. `genotypes` may be `None` when no genotype data was
    /// supplied; every bubble then has the minimum size.
    pub fn build(
        phenotypes: &PhenotypeTable,
        genotypes: Option<&GenotypeMap>,
        scope: &AnalysisScope,
        colours: &ColourScheme,
    ) -> Self {
        let mut cells = Vec::with_capacity(phenotypes.isolates().len() * phenotypes.antibiotics().len());

        for (row, isolate) in phenotypes.isolates().iter().enumerate() {
            for antibiotic in phenotypes.antibiotics() {
                let call = phenotypes
                    .call(row, antibiotic)
                    .unwrap_or(PhenotypeCall::Undetermined);
                let text = phenotypes
                    .overlay_text(row, antibiotic)
                    .unwrap_or(call.code())
                    .to_string();

                let mut marker_size = MIN_MARKER_SIZE;
                let mut annotation = Vec::new();

                if let Some(genotypes) = genotypes {
                    let keys = std::iter::once(antibiotic.as_str()).chain(scope.class_of(antibiotic));
                    for key in keys {
                        if let Some(genes) = genotypes.genes(isolate, key) {
                            marker_size += genes.len();
                            annotation.push(AnnotationGroup {
                                label: key.to_string(),
                                genes: genotypes
                                    .gene_set(isolate, key)
                                    .into_iter()
                                    .map(str::to_string)
                                    .collect(),
                            });
                        }
                    }
                }

                cells.push(BubbleCell {
                    isolate: isolate.clone(),
                    antibiotic: antibiotic.clone(),
                    call,
                    text,
                    colour: colours.colour_for(call).to_string(),
                    marker_size,
                    annotation,
                });
            }
        }

        Self {
            isolates: phenotypes.isolates().to_vec(),
            antibiotics: phenotypes.antibiotics().to_vec(),
            colours: colours.clone(),
            cells,
        }
    }

    /// Bubble for one isolate and antibiotic.
    pub fn cell(&self, isolate: &str, antibiotic: &str) -> Option<&BubbleCell> {
        let row = self.isolates.iter().position(|i| i == isolate)?;
        let col = self.antibiotics.iter().position(|a| a == antibiotic)?;
        self.cells.get(row * self.antibiotics.len() + col)
    }

    /// Largest marker size, used to scale bubble areas.
    pub fn max_marker_size(&self) -> usize {
        self.cells
            .iter()
            .map(|c| c.marker_size)
            .max()
            .unwrap_or(MIN_MARKER_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AntibioticClasses;
    use crate::phenotype::PhenotypeCall::*;

    fn fixture() -> (PhenotypeTable, GenotypeMap, AnalysisScope) {
        let phenotypes = PhenotypeTable::from_calls(
            vec!["Ampicillin".to_string(), "Tetracycline".to_string()],
            vec![
                ("EC01".to_string(), vec![Resistant, Susceptible]),
                ("EC02".to_string(), vec![Intermediate, Undetermined]),
            ],
        )
        .unwrap();

        let mut genotypes = GenotypeMap::new();
        genotypes.push("EC01", "Ampicillin", "blaTEM-1");
        genotypes.push("EC01", "Penams", "blaTEM-1");
        genotypes.push("EC01", "Penams", "blaTEM-1");
        genotypes.push("EC01", "Penams", "blaOXA-1");

        let classes: AntibioticClasses = [("Ampicillin", "Penams"), ("Tetracycline", "Tetracyclines")]
            .into_iter()
            .collect();
        let scope = AnalysisScope::new(["Ampicillin", "Tetracycline"], classes);
        (phenotypes, genotypes, scope)
    }

    #[test]
    fn test_marker_size_counts_antibiotic_and_class_reports() {
        let (phenotypes, genotypes, scope) = fixture();
        let plot = BubblePlot::build(&phenotypes, Some(&genotypes), &scope, &ColourScheme::default());

        let cell = plot.cell("EC01", "Ampicillin").unwrap();
        assert_eq!(cell.marker_size, MIN_MARKER_SIZE + 1 + 3);
        assert_eq!(cell.annotation.len(), 2);
        assert_eq!(cell.annotation[1].label, "Penams");
        assert_eq!(cell.annotation[1].genes, vec!["blaTEM-1", "blaOXA-1"]);
        assert_eq!(cell.colour, "rgb(238, 102, 119)");
        assert_eq!(plot.max_marker_size(), 9);
    }

    #[test]
    fn test_cells_without_evidence() {
        let (phenotypes, genotypes, scope) = fixture();
        let plot = BubblePlot::build(&phenotypes, Some(&genotypes), &scope, &ColourScheme::default());

        let cell = plot.cell("EC02", "Tetracycline").unwrap();
        assert_eq!(cell.marker_size, MIN_MARKER_SIZE);
        assert!(!cell.has_genotype());
        assert_eq!(cell.annotation_text(), "No genotype identified");
        assert_eq!(cell.text, "U");
    }

    #[test]
    fn test_grid_is_isolate_major() {
        let (phenotypes, _, scope) = fixture();
        let plot = BubblePlot::build(&phenotypes, None, &scope, &ColourScheme::default());

        let order: Vec<(&str, &str)> = plot
            .cells
            .iter()
            .map(|c| (c.isolate.as_str(), c.antibiotic.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![
                ("EC01", "Ampicillin"),
                ("EC01", "Tetracycline"),
                ("EC02", "Ampicillin"),
                ("EC02", "Tetracycline"),
            ]
        );
        assert!(plot.cells.iter().all(|c| c.marker_size == MIN_MARKER_SIZE));
    }
}
