//! Genotyping tools whose reports can be fused, and report file discovery.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AbxError, Result};

// Report files are named `<isolate>_<tag>.t*` (tsv, txt, tabular).
static RGI_FILE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?P<isolate>.+)_RGI\.t[^/\\]*$").unwrap());
static STARAMR_FILE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<isolate>.+)_staramr\.t[^/\\]*$").unwrap());
static AMRFINDER_FILE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<isolate>.+)_amrfinder\.t[^/\\]*$").unwrap());

/// An upstream genotyping tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportSource {
    /// Resistance Gene Identifier: gene identifiers with drug-class annotations.
    Rgi,
    /// staramr summary: per-row genotype with predicted antibiotic phenotypes.
    Staramr,
    /// AMRFinderPlus: gene symbols with subclass annotations.
    Amrfinder,
}

impl ReportSource {
    /// Fusion order.
    pub const ALL: [ReportSource; 3] = [
        ReportSource::Rgi,
        ReportSource::Staramr,
        ReportSource::Amrfinder,
    ];

    /// File name tag following the isolate ID.
    pub fn tag(self) -> &'static str {
        match self {
            ReportSource::Rgi => "RGI",
            ReportSource::Staramr => "staramr",
            ReportSource::Amrfinder => "amrfinder",
        }
    }

    fn file_pattern(self) -> &'static Regex {
        match self {
            ReportSource::Rgi => &RGI_FILE,
            ReportSource::Staramr => &STARAMR_FILE,
            ReportSource::Amrfinder => &AMRFINDER_FILE,
        }
    }

    /// Isolate ID encoded in a report file name, if the name belongs to this tool.
    pub fn isolate_from_file_name(self, file_name: &str) -> Option<String> {
        self.file_pattern()
            .captures(file_name)
            .map(|caps| caps["isolate"].to_string())
    }
}

impl fmt::Display for ReportSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One report file and the isolate it describes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFile {
    pub isolate: String,
    pub path: PathBuf,
}

/// Find every report for `source` in `dir`, sorted by path.
///
/// A directory without a single matching file is an error: the caller asked
/// for this source, so an empty result would silently drop its evidence.
pub fn discover_reports(dir: impl AsRef<Path>, source: ReportSource) -> Result<Vec<ReportFile>> {
    let dir = dir.as_ref();
    let entries = fs::read_dir(dir).map_err(|e| AbxError::io(dir, e))?;

    let mut reports: Vec<ReportFile> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter_map(|path| {
            let name = path.file_name()?.to_str()?;
            let isolate = source.isolate_from_file_name(name)?;
            Some(ReportFile { isolate, path })
        })
        .collect();

    if reports.is_empty() {
        return Err(AbxError::NoFilesFound {
            tool: source,
            dir: dir.to_path_buf(),
        });
    }

    reports.sort_by(|a, b| a.path.cmp(&b.path));
    debug!(source = %source, dir = %dir.display(), files = reports.len(), "discovered reports");
    Ok(reports)
}
