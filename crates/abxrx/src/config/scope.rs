//! The set of antibiotics selected for one analysis.

use indexmap::IndexMap;

use crate::text::capitalize;

use super::settings::AntibioticClasses;

/// Antibiotics under analysis together with the class mapping used to fold
/// class-level gene evidence onto them.
#[derive(Debug, Clone)]
pub struct AnalysisScope {
    antibiotics: Vec<String>,
    classes: AntibioticClasses,
    class_selection: IndexMap<String, String>,
}

impl AnalysisScope {
    /// Antibiotic names are capitalised, deduplicated and sorted.
    pub fn new<I, S>(antibiotics: I, classes: AntibioticClasses) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut antibiotics: Vec<String> = antibiotics
            .into_iter()
            .map(|a| capitalize(a.as_ref().trim()))
            .collect();
        antibiotics.sort();
        antibiotics.dedup();

        let class_selection = antibiotics
            .iter()
            .filter_map(|a| classes.class_of(a).map(|c| (a.clone(), c.to_string())))
            .collect();

        Self {
            antibiotics,
            classes,
            class_selection,
        }
    }

    pub fn antibiotics(&self) -> &[String] {
        &self.antibiotics
    }

    pub fn contains(&self, antibiotic: &str) -> bool {
        self.antibiotics.binary_search_by(|a| a.as_str().cmp(antibiotic)).is_ok()
    }

    /// The full antibiotic-to-class mapping.
    pub fn classes(&self) -> &AntibioticClasses {
        &self.classes
    }

    /// Antibiotic to class, restricted to the selected antibiotics that have one.
    pub fn class_selection(&self) -> &IndexMap<String, String> {
        &self.class_selection
    }

    /// Class of a selected antibiotic.
    pub fn class_of(&self, antibiotic: &str) -> Option<&str> {
        self.class_selection.get(antibiotic).map(String::as_str)
    }

    /// Whether `class` is the class of at least one selected antibiotic.
    pub fn is_selected_class(&self, class: &str) -> bool {
        self.class_selection.values().any(|c| c == class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classes() -> AntibioticClasses {
        [
            ("Ampicillin", "Penams"),
            ("Tetracycline", "Tetracyclines"),
            ("Gentamicin", "Aminoglycosides"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_scope_normalises_selection() {
        let scope = AnalysisScope::new(["tetracycline", "AMPICILLIN", "Ampicillin"], classes());
        assert_eq!(scope.antibiotics(), ["Ampicillin", "Tetracycline"]);
        assert!(scope.contains("Tetracycline"));
        assert!(!scope.contains("Gentamicin"));
    }

    #[test]
    fn test_class_selection_only_covers_scope() {
        let scope = AnalysisScope::new(["Ampicillin", "Colistin"], classes());
        assert_eq!(scope.class_of("Ampicillin"), Some("Penams"));
        assert_eq!(scope.class_of("Colistin"), None);
        assert!(scope.is_selected_class("Penams"));
        assert!(!scope.is_selected_class("Aminoglycosides"));
        assert!(scope.classes().is_class("Aminoglycosides"));
    }
}
