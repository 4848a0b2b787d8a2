//! Phenotypic resistance calls.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Observed resistance classification for one isolate against one antibiotic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhenotypeCall {
    #[serde(rename = "R")]
    Resistant,
    #[serde(rename = "I")]
    Intermediate,
    #[serde(rename = "S")]
    Susceptible,
    #[serde(rename = "U")]
    Undetermined,
}

impl PhenotypeCall {
    /// All calls in legend order.
    pub const ALL: [PhenotypeCall; 4] = [
        PhenotypeCall::Resistant,
        PhenotypeCall::Intermediate,
        PhenotypeCall::Susceptible,
        PhenotypeCall::Undetermined,
    ];

    /// Numeric phenotype strength used for correlation.
    pub fn value(self) -> f64 {
        match self {
            PhenotypeCall::Resistant => 1.0,
            PhenotypeCall::Intermediate => 0.5,
            PhenotypeCall::Susceptible => 0.0,
            PhenotypeCall::Undetermined => 0.0,
        }
    }

    /// Single-letter code.
    pub fn code(self) -> &'static str {
        match self {
            PhenotypeCall::Resistant => "R",
            PhenotypeCall::Intermediate => "I",
            PhenotypeCall::Susceptible => "S",
            PhenotypeCall::Undetermined => "U",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PhenotypeCall::Resistant => "Resistant",
            PhenotypeCall::Intermediate => "Intermediate",
            PhenotypeCall::Susceptible => "Susceptible",
            PhenotypeCall::Undetermined => "Undetermined",
        }
    }
}

impl fmt::Display for PhenotypeCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for PhenotypeCall {
    type Err = String;

    /// Accepts the letter codes or the full words, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "r" | "resistant" => Ok(PhenotypeCall::Resistant),
            "i" | "intermediate" => Ok(PhenotypeCall::Intermediate),
            "s" | "susceptible" => Ok(PhenotypeCall::Susceptible),
            "u" | "undetermined" => Ok(PhenotypeCall::Undetermined),
            _ => Err(format!("Unknown phenotype call: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_encoding() {
        assert_eq!(PhenotypeCall::Resistant.value(), 1.0);
        assert_eq!(PhenotypeCall::Intermediate.value(), 0.5);
        assert_eq!(PhenotypeCall::Susceptible.value(), 0.0);
        assert_eq!(PhenotypeCall::Undetermined.value(), 0.0);
    }

    #[test]
    fn test_parse_codes_and_words() {
        assert_eq!("R".parse::<PhenotypeCall>(), Ok(PhenotypeCall::Resistant));
        assert_eq!(" i ".parse::<PhenotypeCall>(), Ok(PhenotypeCall::Intermediate));
        assert_eq!("Susceptible".parse::<PhenotypeCall>(), Ok(PhenotypeCall::Susceptible));
        assert_eq!("u".parse::<PhenotypeCall>(), Ok(PhenotypeCall::Undetermined));
        assert!("X".parse::<PhenotypeCall>().is_err());
        assert!("RS".parse::<PhenotypeCall>().is_err());
    }

    #[test]
    fn test_serde_uses_codes() {
        let json = serde_json::to_string(&PhenotypeCall::Intermediate).unwrap();
        assert_eq!(json, "\"I\"");
    }
}
