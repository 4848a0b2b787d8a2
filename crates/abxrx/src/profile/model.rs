use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::plot::{BubblePlot, GeneFrequencyEntry};

/// Number of names shown in a summary before eliding the rest.
const PREVIEW_LEN: usize = 5;

/// A saved analysis: the plot data plus what it was computed over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub antibiotics: Vec<String>,
    pub isolates: Vec<String>,
    pub plot: BubblePlot,
    /// Absent when the analysis had no genotype data or frequencies were hidden.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gene_frequencies: Option<Vec<GeneFrequencyEntry>>,
}

impl Profile {
    pub fn new(
        name: impl Into<String>,
        plot: BubblePlot,
        gene_frequencies: Option<Vec<GeneFrequencyEntry>>,
    ) -> Self {
        Self {
            name: name.into(),
            created_at: Utc::now(),
            antibiotics: plot.antibiotics.clone(),
            isolates: plot.isolates.clone(),
            plot,
            gene_frequencies,
        }
    }

    pub fn summary(&self) -> ProfileSummary {
        ProfileSummary {
            name: self.name.clone(),
            created_at: self.created_at,
            antibiotic_count: self.antibiotics.len(),
            isolate_count: self.isolates.len(),
            antibiotics: preview(&self.antibiotics),
            isolates: preview(&self.isolates),
        }
    }
}

/// Index entry for a saved profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub antibiotic_count: usize,
    pub isolate_count: usize,
    /// First few antibiotics, `...` appended when more exist.
    pub antibiotics: Vec<String>,
    pub isolates: Vec<String>,
}

impl ProfileSummary {
    /// `created_at` as shown in listings.
    pub fn date_created(&self) -> String {
        self.created_at.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

fn preview(names: &[String]) -> Vec<String> {
    let mut shown: Vec<String> = names.iter().take(PREVIEW_LEN).cloned().collect();
    if names.len() > PREVIEW_LEN {
        shown.push("...".to_string());
    }
    shown
}
