//! User preferences and their on-disk store.
//!
//! This is the local-storage collaborator of the directory: favorites,
//! recently-used history, layout and translation settings live in a single
//! TOML file under the user's home directory. The catalog core never touches
//! this module; commands load preferences, mutate the plain `Preferences`
//! value and save it back explicitly.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// How long the recently-used list may grow.
const RECENT_LIMIT: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Preferences {
    /// Ids of tools pinned by the user.
    pub favorites: Vec<String>,

    /// Most-recent-first usage history, capped at [`RECENT_LIMIT`] entries.
    pub recent: Vec<RecentEntry>,

    pub layout: LayoutSettings,

    pub translation: TranslationSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecentEntry {
    pub id: String,
    pub last_used: DateTime<Utc>,
    pub count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LayoutSettings {
    pub density: Density,
    pub grid_columns: GridColumns,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            density: Density::Comfortable,
            grid_columns: GridColumns::Auto,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TranslationSettings {
    pub auto_translate: bool,
    pub target_language: String,
}

impl Default for TranslationSettings {
    fn default() -> Self {
        Self {
            auto_translate: false,
            target_language: "zh-CN".to_string(),
        }
    }
}

impl Preferences {
    /// Flip a tool's favorite state; returns true when it is now a favorite.
    pub fn toggle_favorite(&mut self, id: &str) -> bool {
        if let Some(pos) = self.favorites.iter().position(|f| f == id) {
            self.favorites.remove(pos);
            false
        } else {
            self.favorites.push(id.to_string());
            true
        }
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.iter().any(|f| f == id)
    }

    /// Move (or insert) a tool at the front of the recents list, bumping its
    /// launch count and dropping the oldest entry past the cap.
    pub fn record_usage(&mut self, id: &str) {
        let count = match self.recent.iter().position(|e| e.id == id) {
            Some(pos) => self.recent.remove(pos).count + 1,
            None => 1,
        };
        self.recent.insert(
            0,
            RecentEntry {
                id: id.to_string(),
                last_used: Utc::now(),
                count,
            },
        );
        self.recent.truncate(RECENT_LIMIT);
    }

    pub fn total_launches(&self) -> u64 {
        self.recent.iter().map(|e| u64::from(e.count)).sum()
    }
}

/// Card density of the directory grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Density {
    Compact,
    Comfortable,
    Spacious,
}

impl fmt::Display for Density {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Density::Compact => write!(f, "compact"),
            Density::Comfortable => write!(f, "comfortable"),
            Density::Spacious => write!(f, "spacious"),
        }
    }
}

#[derive(Debug, Error)]
#[error("unknown density '{0}' (expected compact, comfortable or spacious)")]
pub struct ParseDensityError(String);

impl FromStr for Density {
    type Err = ParseDensityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "compact" => Ok(Density::Compact),
            "comfortable" => Ok(Density::Comfortable),
            "spacious" => Ok(Density::Spacious),
            other => Err(ParseDensityError(other.to_string())),
        }
    }
}

/// Number of card columns; `Auto` lets the renderer pick per breakpoint.
///
/// Stored as a string (`"auto"` or `"1"`..`"6"`), matching how the original
/// UI persisted the setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum GridColumns {
    Auto,
    Fixed(u8),
}

impl fmt::Display for GridColumns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridColumns::Auto => write!(f, "auto"),
            GridColumns::Fixed(n) => write!(f, "{}", n),
        }
    }
}

impl From<GridColumns> for String {
    fn from(value: GridColumns) -> Self {
        value.to_string()
    }
}

#[derive(Debug, Error)]
#[error("invalid column count '{0}' (expected auto or 1-6)")]
pub struct ParseGridColumnsError(String);

impl FromStr for GridColumns {
    type Err = ParseGridColumnsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("auto") {
            return Ok(GridColumns::Auto);
        }
        match s.parse::<u8>() {
            Ok(n) if (1..=6).contains(&n) => Ok(GridColumns::Fixed(n)),
            _ => Err(ParseGridColumnsError(s.to_string())),
        }
    }
}

impl TryFrom<String> for GridColumns {
    type Error = ParseGridColumnsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Owns the preference file on disk.
pub struct PrefsStore {
    path: PathBuf,
}

impl PrefsStore {
    /// Store rooted at `~/.toolbox/prefs.toml`, creating the directory.
    pub fn new() -> Result<Self> {
        let home = dirs::home_dir().context("Could not find home directory")?;
        Self::at(home.join(".toolbox").join("prefs.toml"))
    }

    /// Store backed by an explicit file path (used by tests).
    pub fn at(path: PathBuf) -> Result<Self> {
        if let Some(dir) = path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir).context("Failed to create preferences directory")?;
            }
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load preferences. Returns defaults if the file doesn't exist yet.
    pub fn load(&self) -> Result<Preferences> {
        if !self.path.exists() {
            return Ok(Preferences::default());
        }

        let content =
            fs::read_to_string(&self.path).context("Failed to read preferences file")?;
        toml::from_str(&content).context("Failed to parse preferences file")
    }

    /// Save preferences to disk.
    pub fn save(&self, prefs: &Preferences) -> Result<()> {
        let content =
            toml::to_string_pretty(prefs).context("Failed to serialize preferences")?;
        fs::write(&self.path, content).context("Failed to write preferences file")?;

        tracing::debug!(path = %self.path.display(), "preferences saved");
        Ok(())
    }

    /// Delete the preference file, resetting everything to defaults.
    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path).context("Failed to remove preferences file")?;
        }
        Ok(())
    }

    /// Size of the preference file in bytes, if it exists.
    pub fn file_size(&self) -> Option<u64> {
        fs::metadata(&self.path).ok().map(|m| m.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn store_in_tempdir() -> (tempfile::TempDir, PrefsStore) {
        let dir = tempdir().unwrap();
        let store = PrefsStore::at(dir.path().join("prefs.toml")).unwrap();
        (dir, store)
    }

    #[test]
    fn test_missing_file_loads_defaults() {
        let (_dir, store) = store_in_tempdir();
        assert_eq!(store.load().unwrap(), Preferences::default());
        assert_eq!(store.file_size(), None);
    }

    #[test]
    fn test_preferences_roundtrip_through_toml() {
        let (_dir, store) = store_in_tempdir();

        let mut prefs = Preferences::default();
        prefs.toggle_favorite("docker-center");
        prefs.record_usage("docker-center");
        prefs.layout.density = Density::Compact;
        prefs.layout.grid_columns = GridColumns::Fixed(4);

        store.save(&prefs).unwrap();
        assert_eq!(store.load().unwrap(), prefs);
    }

    #[test]
    fn test_toggle_favorite_flips_state() {
        let mut prefs = Preferences::default();
        assert!(prefs.toggle_favorite("json-formatter"));
        assert!(prefs.is_favorite("json-formatter"));
        assert!(!prefs.toggle_favorite("json-formatter"));
        assert!(!prefs.is_favorite("json-formatter"));
    }

    #[test]
    fn test_record_usage_reorders_and_counts() {
        let mut prefs = Preferences::default();
        prefs.record_usage("a");
        prefs.record_usage("b");
        prefs.record_usage("a");

        let ids: Vec<&str> = prefs.recent.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(prefs.recent[0].count, 2);
        assert_eq!(prefs.total_launches(), 3);
    }

    #[test]
    fn test_recents_are_capped() {
        let mut prefs = Preferences::default();
        for i in 0..25 {
            prefs.record_usage(&format!("tool-{}", i));
        }
        assert_eq!(prefs.recent.len(), 10);
        assert_eq!(prefs.recent[0].id, "tool-24");
    }

    #[test]
    fn test_clear_resets_to_defaults() {
        let (_dir, store) = store_in_tempdir();

        let mut prefs = Preferences::default();
        prefs.toggle_favorite("color-picker");
        store.save(&prefs).unwrap();
        assert!(store.file_size().is_some());

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), Preferences::default());
    }

    #[test]
    fn test_grid_columns_parse_and_display() {
        assert_eq!("auto".parse::<GridColumns>().unwrap(), GridColumns::Auto);
        assert_eq!("4".parse::<GridColumns>().unwrap(), GridColumns::Fixed(4));
        assert!("0".parse::<GridColumns>().is_err());
        assert!("7".parse::<GridColumns>().is_err());
        assert_eq!(GridColumns::Fixed(3).to_string(), "3");
    }
}
