//! Report fusion tests over on-disk report directories.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use abxrx::config::{AnalysisScope, Settings};
use abxrx::fusion::{GenotypeFusion, GenotypeSources, ReportSource};
use abxrx::AbxError;

fn write(dir: &Path, name: &str, content: &str) {
    fs::create_dir_all(dir).expect("Failed to create report directory");
    fs::write(dir.join(name), content).expect("Failed to write report");
}

fn isolates() -> Vec<String> {
    ["EC01", "EC02", "EC03", "EC04"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn scope() -> AnalysisScope {
    let settings = Settings::builtin().expect("builtin settings");
    AnalysisScope::new(["Ampicillin", "Ciprofloxacin", "Tetracycline"], settings.antibiotics)
}

/// RGI, staramr and AMRFinderPlus reports for four isolates.
fn report_dirs(root: &Path) -> GenotypeSources {
    let rgi = root.join("rgi");
    write(
        &rgi,
        "EC01_RGI.txt",
        "ORF_ID\tBest_Hit_ARO\tDrug Class\n\
         orf1\tTEM-1\tpenam; cephalosporin\n\
         orf2\tgyrA\tfluoroquinolone antibiotic\n",
    );
    write(
        &rgi,
        "EC03_RGI.txt",
        "ORF_ID\tBest_Hit_ARO\tDrug Class\n\
         orf1\tTEM-1\tpenam\n",
    );
    write(&rgi, "notes.md", "not a report");

    let staramr = root.join("staramr");
    write(
        &staramr,
        "EC02_staramr.tsv",
        "Isolate ID\tGenotype\tPredicted Phenotype\n\
         EC02\ttet(A)\ttetracycline\n",
    );
    write(
        &staramr,
        "EC04_staramr.tsv",
        "Isolate ID\tGenotype\tPredicted Phenotype\n\
         EC04\tNone\tSensitive\n",
    );

    let amrfinder = root.join("amrfinder");
    write(
        &amrfinder,
        "EC02_amrfinder.tsv",
        "Protein identifier\tGene symbol\tClass\tSubclass\n\
         p1\ttet(A)\tTETRACYCLINE\tTETRACYCLINE\n",
    );

    GenotypeSources::new()
        .with_rgi(rgi)
        .with_staramr(staramr)
        .with_amrfinder(amrfinder)
}

// =============================================================================
// Fusion
// =============================================================================

#[test]
fn test_fuse_all_three_tools() {
    let dir = TempDir::new().unwrap();
    let sources = report_dirs(dir.path());
    let scope = scope();

    let fused = GenotypeFusion::new(&scope)
        .run(&isolates(), &sources)
        .expect("Fusion failed");
    let genotypes = fused.genotypes();

    let ec01: Vec<&str> = genotypes.keys("EC01").collect();
    assert_eq!(ec01, vec!["Penams", "Fluoroquinolones"]);
    assert_eq!(genotypes.genes("EC03", "Penams"), Some(&["TEM-1".to_string()][..]));

    // staramr and AMRFinderPlus both report tet(A): appended twice, read once.
    assert_eq!(genotypes.genes("EC02", "Tetracycline").map(<[String]>::len), Some(2));
    assert_eq!(genotypes.gene_set("EC02", "Tetracycline").len(), 1);

    // Seeded but without evidence.
    assert!(genotypes.contains_isolate("EC04"));
    assert!(!genotypes.has_evidence("EC04"));
}

#[test]
fn test_rgi_classes_outside_scope_dropped() {
    let dir = TempDir::new().unwrap();
    let sources = report_dirs(dir.path());
    let scope = scope();

    let fused = GenotypeFusion::new(&scope).run(&isolates(), &sources).unwrap();
    assert!(fused.genotypes().genes("EC01", "Cephalosporins").is_none());
}

#[test]
fn test_gene_frequencies_count_distinct_isolates() {
    let dir = TempDir::new().unwrap();
    let sources = report_dirs(dir.path());
    let scope = scope();

    let fused = GenotypeFusion::new(&scope).run(&isolates(), &sources).unwrap();
    let frequencies = fused.frequencies();

    let genes: Vec<&str> = frequencies.genes().collect();
    assert_eq!(genes, vec!["TEM-1", "gyrA", "tet(A)"]);
    assert_eq!(frequencies.frequency("TEM-1", 4), 50.0);
    assert_eq!(frequencies.frequency("tet(A)", 4), 25.0);

    for gene in frequencies.genes() {
        let carriers = frequencies.isolates(gene);
        assert!(carriers.len() <= isolates().len());
        for isolate in carriers {
            assert!(fused.genotypes().has_evidence(isolate));
        }
    }
}

#[test]
fn test_reports_for_unknown_isolates_skipped() {
    let dir = TempDir::new().unwrap();
    let sources = report_dirs(dir.path());
    let scope = scope();

    let only_two = vec!["EC01".to_string(), "EC02".to_string()];
    let fused = GenotypeFusion::new(&scope).run(&only_two, &sources).unwrap();

    assert_eq!(fused.genotypes().len(), 2);
    assert!(!fused.genotypes().contains_isolate("EC03"));
}

// =============================================================================
// Error Handling
// =============================================================================

#[test]
fn test_empty_directory_is_no_files_found() {
    let dir = TempDir::new().unwrap();
    let empty = dir.path().join("rgi");
    fs::create_dir_all(&empty).unwrap();
    write(&empty, "EC01_staramr.tsv", "Genotype\tPredicted Phenotype\n");

    let scope = scope();
    let err = GenotypeFusion::new(&scope)
        .run(&isolates(), &GenotypeSources::new().with_rgi(&empty))
        .unwrap_err();

    match err {
        AbxError::NoFilesFound { tool, dir } => {
            assert_eq!(tool, ReportSource::Rgi);
            assert_eq!(dir, empty);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_missing_directory_is_io_error() {
    let dir = TempDir::new().unwrap();
    let scope = scope();
    let err = GenotypeFusion::new(&scope)
        .run(&isolates(), &GenotypeSources::new().with_amrfinder(dir.path().join("absent")))
        .unwrap_err();

    assert!(matches!(err, AbxError::Io { .. }));
}

#[test]
fn test_detailed_staramr_output_is_schema_mismatch() {
    let dir = TempDir::new().unwrap();
    let staramr = dir.path().join("staramr");
    write(
        &staramr,
        "EC01_staramr.tsv",
        "Isolate ID\tGene\t%Identity\t%Overlap\n\
         EC01\tblaTEM-1B\t100.00\t100.00\n",
    );

    let scope = scope();
    let err = GenotypeFusion::new(&scope)
        .run(&isolates(), &GenotypeSources::new().with_staramr(&staramr))
        .unwrap_err();

    match err {
        AbxError::SchemaMismatch { tool, message } => {
            assert_eq!(tool, ReportSource::Staramr);
            assert!(message.contains("summary.tsv"));
        }
        other => panic!("unexpected error: {other}"),
    }
}
