//! Property-based tests for correlation and fusion invariants.
//!
//! ```bash
//! cargo test -p abxrx --test property_tests
//! PROPTEST_CASES=10000 cargo test -p abxrx --test property_tests
//! ```

use proptest::prelude::*;

use abxrx::correlation::{pearson, Relationship};
use abxrx::fusion::{FusedGenotypes, GeneAssociation};
use abxrx::PhenotypeCall;

// =============================================================================
// Test Strategies
// =============================================================================

fn phenotype_call() -> impl Strategy<Value = PhenotypeCall> {
    prop_oneof![
        Just(PhenotypeCall::Resistant),
        Just(PhenotypeCall::Intermediate),
        Just(PhenotypeCall::Susceptible),
        Just(PhenotypeCall::Undetermined),
    ]
}

/// Presence indicator and phenotype column of equal length.
fn paired_vectors() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    (2usize..40).prop_flat_map(|n| {
        (
            prop::collection::vec(prop::bool::ANY.prop_map(|b| if b { 1.0 } else { 0.0 }), n),
            prop::collection::vec(phenotype_call().prop_map(PhenotypeCall::value), n),
        )
    })
}

fn association() -> impl Strategy<Value = GeneAssociation> {
    ("EC0[1-6]", "(Ampicillin|Penams|Tetracycline)", "gene[A-E]")
        .prop_map(|(isolate, key, gene)| GeneAssociation::new(isolate, key, gene))
}

/// Rank of a bucket on the negative-to-positive axis.
fn rank(relationship: Relationship) -> i32 {
    match relationship {
        Relationship::VeryStrongNegative => -4,
        Relationship::StrongNegative => -3,
        Relationship::ModerateNegative => -2,
        Relationship::WeakNegative => -1,
        Relationship::Negligible | Relationship::NoRelationship => 0,
        Relationship::WeakPositive => 1,
        Relationship::ModeratePositive => 2,
        Relationship::StrongPositive => 3,
        Relationship::VeryStrongPositive => 4,
    }
}

// =============================================================================
// Correlation
// =============================================================================

proptest! {
    #[test]
    fn pearson_is_bounded((x, y) in paired_vectors()) {
        if let Some(r) = pearson(&x, &y) {
            prop_assert!((-1.0..=1.0).contains(&r));
        }
    }

    #[test]
    fn pearson_is_symmetric((x, y) in paired_vectors()) {
        let (a, b) = (pearson(&x, &y), pearson(&y, &x));
        match (a, b) {
            (Some(a), Some(b)) => prop_assert!((a - b).abs() < 1e-12),
            (a, b) => prop_assert_eq!(a, b),
        }
    }

    #[test]
    fn constant_vector_is_undefined(value in 0.0f64..=1.0, y in prop::collection::vec(0.0f64..=1.0, 2..20)) {
        let x = vec![value; y.len()];
        prop_assert_eq!(pearson(&x, &y), None);
    }

    #[test]
    fn classify_is_total(r in -1.0f64..=1.0) {
        let relationship = Relationship::classify(Some(r));
        prop_assert!(!relationship.description().is_empty());
        prop_assert_eq!(relationship.is_suppressed(), (r * 100.0).round() == 0.0);
    }

    #[test]
    fn classify_is_monotonic(a in -1.0f64..=1.0, b in -1.0f64..=1.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let lo_rank = rank(Relationship::classify(Some(lo)));
        let hi_rank = rank(Relationship::classify(Some(hi)));
        prop_assert!(lo_rank <= hi_rank);
    }
}

// =============================================================================
// Fusion
// =============================================================================

proptest! {
    #[test]
    fn frequencies_match_genotypes(associations in prop::collection::vec(association(), 0..60)) {
        let mut fused = FusedGenotypes::new();
        let kept = fused.extend(&associations);
        prop_assert_eq!(kept, associations.len());

        let total = fused.genotypes().len();
        for gene in fused.frequencies().genes() {
            let carriers = fused.frequencies().isolates(gene);
            prop_assert!(carriers.len() <= total);

            let frequency = fused.frequencies().frequency(gene, total);
            prop_assert!(frequency > 0.0 && frequency <= 100.0);

            for isolate in carriers {
                let carried = fused
                    .genotypes()
                    .keys(isolate)
                    .any(|key| fused.genotypes().has_gene(isolate, key, gene));
                prop_assert!(carried);
            }
        }
    }

    #[test]
    fn reads_are_deduplicated(associations in prop::collection::vec(association(), 0..60)) {
        let mut fused = FusedGenotypes::new();
        fused.extend(&associations);

        for (isolate, keys) in fused.genotypes().iter() {
            for (key, genes) in keys {
                let distinct = fused.genotypes().gene_set(isolate, key);
                prop_assert!(distinct.len() <= genes.len());
                prop_assert!(!distinct.is_empty());
            }
        }
    }
}
