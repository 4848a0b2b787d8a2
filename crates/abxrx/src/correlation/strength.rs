//! Qualitative buckets for correlation coefficients.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Descriptive strength and sign of a correlation coefficient.
///
/// Buckets are bounded at two decimals (e.g. 0.40 to 0.69 is strong), and a
/// coefficient is rounded to two decimals before it is bucketed. A value
/// between two bounds therefore lands where its rounded value does: 0.697 and
/// 0.69999999 are very strong, 0.004 is `NoRelationship`. Closed two-decimal
/// ranges alone would leave such values unclassified and drop them as "No
/// relationship"; with rounding every finite coefficient gets a bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relationship {
    VeryStrongPositive,
    StrongPositive,
    ModeratePositive,
    WeakPositive,
    /// |r| between 0.01 and 0.19 after rounding, either sign.
    Negligible,
    WeakNegative,
    ModerateNegative,
    StrongNegative,
    VeryStrongNegative,
    /// Undefined coefficient or one rounding to 0.00; never reported.
    NoRelationship,
}

impl Relationship {
    /// Bucket a coefficient; `None` and NaN are `NoRelationship`.
    pub fn classify(coefficient: Option<f64>) -> Self {
        let x = match coefficient {
            Some(x) if x.is_finite() => x,
            _ => return Relationship::NoRelationship,
        };

        match hundredths(x) {
            70.. => Relationship::VeryStrongPositive,
            40..=69 => Relationship::StrongPositive,
            30..=39 => Relationship::ModeratePositive,
            20..=29 => Relationship::WeakPositive,
            1..=19 => Relationship::Negligible,
            0 => Relationship::NoRelationship,
            -19..=-1 => Relationship::Negligible,
            -29..=-20 => Relationship::WeakNegative,
            -39..=-30 => Relationship::ModerateNegative,
            -69..=-40 => Relationship::StrongNegative,
            _ => Relationship::VeryStrongNegative,
        }
    }

    /// Suppressed results are left out of correlation output.
    pub fn is_suppressed(self) -> bool {
        self == Relationship::NoRelationship
    }

    pub fn description(self) -> &'static str {
        match self {
            Relationship::VeryStrongPositive => "very strong positive relationship",
            Relationship::StrongPositive => "strong positive relationship",
            Relationship::ModeratePositive => "moderate positive relationship",
            Relationship::WeakPositive => "weak positive relationship",
            Relationship::Negligible => "negligible relationship",
            Relationship::WeakNegative => "weak negative relationship",
            Relationship::ModerateNegative => "moderate negative relationship",
            Relationship::StrongNegative => "strong negative relationship",
            Relationship::VeryStrongNegative => "very strong negative relationship",
            Relationship::NoRelationship => "No relationship",
        }
    }
}

/// `x` rounded to the nearest hundredth, as an integer count of hundredths.
fn hundredths(x: f64) -> i64 {
    (x * 100.0).round() as i64
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
