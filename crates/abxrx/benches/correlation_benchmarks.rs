//! Correlation performance benchmarks.
//!
//! Measures the Pearson kernel and a full correlation pass as isolate and
//! gene counts grow.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use abxrx::config::AntibioticClasses;
use abxrx::correlation::{pearson, CorrelationEngine};
use abxrx::fusion::GenotypeMap;
use abxrx::{PhenotypeCall, PhenotypeTable};

const ANTIBIOTICS: [(&str, &str); 6] = [
    ("Ampicillin", "Penams"),
    ("Amoxicillin", "Penams"),
    ("Ciprofloxacin", "Fluoroquinolones"),
    ("Gentamicin", "Aminoglycosides"),
    ("Tetracycline", "Tetracyclines"),
    ("Trimethoprim", "Diaminopyrimidines"),
];

/// Deterministic phenotypes and genotypes for `isolates` isolates and
/// `genes` genes per key.
fn generate_dataset(isolates: usize, genes: usize) -> (PhenotypeTable, GenotypeMap) {
    let calls = [
        PhenotypeCall::Resistant,
        PhenotypeCall::Intermediate,
        PhenotypeCall::Susceptible,
        PhenotypeCall::Undetermined,
    ];

    let antibiotics: Vec<String> = ANTIBIOTICS.iter().map(|(a, _)| a.to_string()).collect();
    let rows = (0..isolates)
        .map(|i| {
            let row = (0..antibiotics.len())
                .map(|j| calls[(i * 7 + j * 3) % calls.len()])
                .collect();
            (format!("ISO{:05}", i), row)
        })
        .collect();
    let phenotypes = PhenotypeTable::from_calls(antibiotics, rows).unwrap();

    let mut genotypes = GenotypeMap::new();
    for i in 0..isolates {
        let isolate = format!("ISO{:05}", i);
        for (k, (antibiotic, class)) in ANTIBIOTICS.iter().enumerate() {
            for g in 0..genes {
                if (i + g + k) % 3 == 0 {
                    genotypes.push(&isolate, antibiotic, &format!("gene{}_{}", k, g));
                }
                if (i * g + k) % 5 == 0 {
                    genotypes.push(&isolate, class, &format!("classgene{}_{}", k, g));
                }
            }
        }
    }

    (phenotypes, genotypes)
}

fn bench_pearson(c: &mut Criterion) {
    let mut group = c.benchmark_group("pearson");

    for n in [10, 100, 1_000, 10_000].iter() {
        let x: Vec<f64> = (0..*n).map(|i| (i % 2) as f64).collect();
        let y: Vec<f64> = (0..*n).map(|i| ((i % 3) as f64) / 2.0).collect();

        group.throughput(Throughput::Elements(*n as u64));
        group.bench_with_input(BenchmarkId::new("points", n), &(x, y), |b, (x, y)| {
            b.iter(|| black_box(pearson(x, y)))
        });
    }

    group.finish();
}

fn bench_correlate(c: &mut Criterion) {
    let mut group = c.benchmark_group("correlate");
    let classes: AntibioticClasses = ANTIBIOTICS.iter().copied().collect();

    for isolates in [10, 100, 500].iter() {
        let (phenotypes, genotypes) = generate_dataset(*isolates, 10);

        group.bench_with_input(BenchmarkId::new("isolates", isolates), isolates, |b, _| {
            b.iter(|| {
                let engine = CorrelationEngine::new(&genotypes, &phenotypes, &classes);
                black_box(engine.correlate())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pearson, bench_correlate);
criterion_main!(benches);
