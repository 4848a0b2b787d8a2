//! Antibiotic-to-class settings.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{AbxError, Result};
use crate::text::capitalize;

use super::colours::ColourScheme;

/// Settings bundled with the crate.
const BUILTIN_SETTINGS: &str = include_str!("../../config/settings.json");

/// Ordered lookup from antibiotic name to drug class.
///
/// Antibiotic names are capitalised on construction so they line up with
/// phenotype table headers. Class names are kept verbatim and must match the
/// pluralised, title-cased form produced by the gene-identifier adapter
/// (e.g. `"Fluoroquinolones"`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "IndexMap<String, String>", into = "IndexMap<String, String>")]
pub struct AntibioticClasses {
    classes: IndexMap<String, String>,
}

impl AntibioticClasses {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the class for an antibiotic.
    pub fn insert(&mut self, antibiotic: impl AsRef<str>, class: impl Into<String>) {
        self.classes.insert(capitalize(antibiotic.as_ref()), class.into());
    }

    /// Drug class of an antibiotic, if known.
    pub fn class_of(&self, antibiotic: &str) -> Option<&str> {
        self.classes.get(antibiotic).map(String::as_str)
    }

    /// Whether `name` is one of the configured drug classes.
    pub fn is_class(&self, name: &str) -> bool {
        self.classes.values().any(|class| class == name)
    }

    /// Antibiotics mapped to `class`, in configuration order.
    pub fn antibiotics_in_class<'a>(&'a self, class: &'a str) -> impl Iterator<Item = &'a str> {
        self.classes
            .iter()
            .filter(move |(_, c)| c.as_str() == class)
            .map(|(antibiotic, _)| antibiotic.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.classes.iter().map(|(a, c)| (a.as_str(), c.as_str()))
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl From<IndexMap<String, String>> for AntibioticClasses {
    fn from(map: IndexMap<String, String>) -> Self {
        map.into_iter().collect()
    }
}

impl From<AntibioticClasses> for IndexMap<String, String> {
    fn from(classes: AntibioticClasses) -> Self {
        classes.classes
    }
}

impl<A: AsRef<str>, C: Into<String>> FromIterator<(A, C)> for AntibioticClasses {
    fn from_iter<I: IntoIterator<Item = (A, C)>>(iter: I) -> Self {
        let mut classes = Self::new();
        for (antibiotic, class) in iter {
            classes.insert(antibiotic, class);
        }
        classes
    }
}

/// Application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Antibiotic to drug class mapping.
    pub antibiotics: AntibioticClasses,
    /// Optional colour scheme override for phenotype calls.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colours: Option<ColourScheme>,
}

impl Settings {
    /// Settings shipped with the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_SETTINGS)
    }

    /// Parse settings from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| AbxError::io(path, e))?;
        let settings: Settings = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            AbxError::Config(format!(
                "Failed to parse settings '{}': {}",
                path.display(),
                e
            ))
        })?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        if let Some((antibiotic, _)) = self.antibiotics.iter().find(|(_, c)| c.trim().is_empty()) {
            return Err(AbxError::Config(format!(
                "Antibiotic '{}' has an empty drug class",
                antibiotic
            )));
        }
        Ok(())
    }

    /// Colour scheme from settings, falling back to the default palette.
    pub fn colour_scheme(&self) -> ColourScheme {
        self.colours.clone().unwrap_or_default()
    }
}

impl From<AntibioticClasses> for Settings {
    fn from(antibiotics: AntibioticClasses) -> Self {
        Self {
            antibiotics,
            colours: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_settings_load() {
        let settings = Settings::builtin().unwrap();
        assert_eq!(settings.antibiotics.class_of("Ciprofloxacin"), Some("Fluoroquinolones"));
        assert!(settings.antibiotics.is_class("Tetracyclines"));
        assert!(settings.colours.is_none());
    }

    #[test]
    fn test_antibiotic_names_capitalised() {
        let settings = Settings::from_json(r#"{"antibiotics": {"AMPICILLIN": "Penams"}}"#).unwrap();
        assert_eq!(settings.antibiotics.class_of("Ampicillin"), Some("Penams"));
        assert_eq!(settings.antibiotics.class_of("AMPICILLIN"), None);
    }

    #[test]
    fn test_antibiotics_in_class_keeps_order() {
        let classes: AntibioticClasses = [
            ("Gentamicin", "Aminoglycosides"),
            ("Ampicillin", "Penams"),
            ("Amikacin", "Aminoglycosides"),
        ]
        .into_iter()
        .collect();

        let members: Vec<&str> = classes.antibiotics_in_class("Aminoglycosides").collect();
        assert_eq!(members, vec!["Gentamicin", "Amikacin"]);
        assert!(!classes.is_class("Gentamicin"));
    }

    #[test]
    fn test_empty_class_rejected() {
        let result = Settings::from_json(r#"{"antibiotics": {"Ampicillin": " "}}"#);
        assert!(matches!(result, Err(AbxError::Config(_))));
    }

    #[test]
    fn test_settings_round_trip_preserves_order() {
        let settings = Settings::builtin().unwrap();
        let json = serde_json::to_string(&settings).unwrap();
        let reloaded = Settings::from_json(&json).unwrap();
        assert_eq!(reloaded.antibiotics, settings.antibiotics);
    }
}
