//! Colour scheme for phenotype calls.

use serde::{Deserialize, Serialize};

use crate::error::{AbxError, Result};
use crate::phenotype::PhenotypeCall;

/// `rgb(r, g, b)` colour per phenotype call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColourScheme {
    pub resistant: String,
    pub intermediate: String,
    pub susceptible: String,
    pub undetermined: String,
}

impl Default for ColourScheme {
    fn default() -> Self {
        Self {
            resistant: "rgb(238, 102, 119)".to_string(),
            intermediate: "rgb(204, 187, 68)".to_string(),
            susceptible: "rgb(102, 204, 238)".to_string(),
            undetermined: "rgb(68, 119, 170)".to_string(),
        }
    }
}

impl ColourScheme {
    /// Build a scheme from four `r,g,b` triples given in R, I, S, U order.
    /// Surrounding parentheses are optional: `"(238,102,119)"` and
    /// `"238, 102, 119"` are both accepted.
    pub fn from_triples<S: AsRef<str>>(triples: &[S]) -> Result<Self> {
        if triples.len() != 4 {
            return Err(AbxError::Config(format!(
                "Expected 4 colours (resistant, intermediate, susceptible, undetermined), got {}",
                triples.len()
            )));
        }

        let colours = triples
            .iter()
            .map(|t| parse_rgb(t.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            resistant: colours[0].clone(),
            intermediate: colours[1].clone(),
            susceptible: colours[2].clone(),
            undetermined: colours[3].clone(),
        })
    }

    /// Colour assigned to a call.
    pub fn colour_for(&self, call: PhenotypeCall) -> &str {
        match call {
            PhenotypeCall::Resistant => &self.resistant,
            PhenotypeCall::Intermediate => &self.intermediate,
            PhenotypeCall::Susceptible => &self.susceptible,
            PhenotypeCall::Undetermined => &self.undetermined,
        }
    }
}

fn parse_rgb(value: &str) -> Result<String> {
    let inner = value
        .trim()
        .trim_start_matches("rgb")
        .trim_start_matches('(')
        .trim_end_matches(')');

    let channels: Vec<u8> = inner
        .split(',')
        .map(|c| c.trim().parse::<u8>())
        .collect::<std::result::Result<_, _>>()
        .map_err(|_| AbxError::Config(format!("Invalid RGB colour: '{}'", value)))?;

    match channels.as_slice() {
        [r, g, b] => Ok(format!("rgb({}, {}, {})", r, g, b)),
        _ => Err(AbxError::Config(format!(
            "Invalid RGB colour: '{}' (expected three channels)",
            value
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette() {
        let scheme = ColourScheme::default();
        assert_eq!(scheme.colour_for(PhenotypeCall::Resistant), "rgb(238, 102, 119)");
        assert_eq!(scheme.colour_for(PhenotypeCall::Undetermined), "rgb(68, 119, 170)");
    }

    #[test]
    fn test_from_triples() {
        let scheme =
            ColourScheme::from_triples(&["(1,2,3)", "4, 5, 6", "rgb(7,8,9)", "10,11,12"]).unwrap();
        assert_eq!(scheme.resistant, "rgb(1, 2, 3)");
        assert_eq!(scheme.intermediate, "rgb(4, 5, 6)");
        assert_eq!(scheme.susceptible, "rgb(7, 8, 9)");
        assert_eq!(scheme.undetermined, "rgb(10, 11, 12)");
    }

    #[test]
    fn test_from_triples_rejects_bad_input() {
        assert!(ColourScheme::from_triples(&["1,2,3"]).is_err());
        assert!(ColourScheme::from_triples(&["1,2", "4,5,6", "7,8,9", "10,11,12"]).is_err());
        assert!(ColourScheme::from_triples(&["1,2,300", "4,5,6", "7,8,9", "10,11,12"]).is_err());
    }
}
