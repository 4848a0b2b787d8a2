//! On-disk profile store: a `profiles.json` index plus one JSON file per
//! profile, all inside a single directory.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::error::{AbxError, Result};

use super::model::{Profile, ProfileSummary};

const INDEX_FILE: &str = "profiles.json";

type ProfileIndex = IndexMap<String, ProfileSummary>;

pub struct ProfileStore {
    dir: PathBuf,
}

impl ProfileStore {
    /// Open a store rooted at `dir`. Nothing is created until the first save.
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn index_path(&self) -> PathBuf {
        self.dir.join(INDEX_FILE)
    }

    fn profile_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.json", name))
    }

    /// Save a new profile. Names are unique within a store.
    pub fn create(&self, profile: &Profile) -> Result<PathBuf> {
        validate_name(&profile.name)?;

        let mut index = self.read_index()?;
        if index.contains_key(&profile.name) {
            return Err(AbxError::NameConflict(profile.name.clone()));
        }

        let path = self.profile_path(&profile.name);
        write_json(&path, profile)?;
        index.insert(profile.name.clone(), profile.summary());
        if let Err(e) = self.write_index(&index) {
            if let Err(cleanup) = fs::remove_file(&path) {
                warn!(path = %path.display(), error = %cleanup, "failed to remove unindexed profile");
            }
            return Err(e);
        }

        info!(name = %profile.name, path = %path.display(), "saved profile");
        Ok(path)
    }

    pub fn load(&self, name: &str) -> Result<Profile> {
        let index = self.read_index()?;
        if !index.contains_key(name) {
            return Err(AbxError::ProfileNotFound(name.to_string()));
        }
        read_json(&self.profile_path(name))
    }

    /// Summaries of every saved profile, in creation order.
    pub fn list(&self) -> Result<Vec<ProfileSummary>> {
        Ok(self.read_index()?.into_values().collect())
    }

    pub fn contains(&self, name: &str) -> Result<bool> {
        Ok(self.read_index()?.contains_key(name))
    }

    pub fn delete(&self, name: &str) -> Result<()> {
        let mut index = self.read_index()?;
        if index.shift_remove(name).is_none() {
            return Err(AbxError::ProfileNotFound(name.to_string()));
        }

        let path = self.profile_path(name);
        if path.exists() {
            fs::remove_file(&path).map_err(|e| AbxError::io(&path, e))?;
        }
        self.write_index(&index)?;

        info!(name, "deleted profile");
        Ok(())
    }

    fn read_index(&self) -> Result<ProfileIndex> {
        let path = self.index_path();
        if !path.exists() {
            debug!(path = %path.display(), "no profile index yet");
            return Ok(ProfileIndex::new());
        }
        read_json(&path)
    }

    fn write_index(&self, index: &ProfileIndex) -> Result<()> {
        write_json(&self.index_path(), index)
    }
}

fn validate_name(name: &str) -> Result<()> {
    let invalid = name.trim().is_empty()
        || name == INDEX_FILE.trim_end_matches(".json")
        || name.contains(['/', '\\'])
        || name.starts_with('.');
    if invalid {
        return Err(AbxError::Persistence(format!(
            "Invalid profile name '{}'",
            name
        )));
    }
    Ok(())
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| {
                AbxError::Persistence(format!(
                    "Failed to create directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(path).map_err(|e| {
        AbxError::Persistence(format!("Failed to create file '{}': {}", path.display(), e))
    })?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value).map_err(|e| {
        AbxError::Persistence(format!("Failed to write '{}': {}", path.display(), e))
    })?;
    writer.flush().map_err(|e| {
        AbxError::Persistence(format!("Failed to write '{}': {}", path.display(), e))
    })
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).map_err(|e| {
        AbxError::Persistence(format!("Failed to open file '{}': {}", path.display(), e))
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        AbxError::Persistence(format!("Failed to parse '{}': {}", path.display(), e))
    })
}
