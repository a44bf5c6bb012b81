//! Menu registry - collects named navigation menus from configuration.
//!
//! A dashboard usually ships more than one layout (e.g., "vertical" and
//! "horizontal"), each backed by its own tree of entries.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info, warn};

use super::entry::NavEntry;
use crate::config_storage::{self, MenuFile};
use crate::error::{LoadError, LoadResult};

/// Registry of named menus.
#[derive(Debug, Default)]
pub struct MenuRegistry {
    menus: BTreeMap<String, Vec<NavEntry>>,
}

impl MenuRegistry {
    /// Create an empty menu registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry from `(menu_name, json)` pairs.
    ///
    /// Each JSON document is either a bare array of entries or a menu file
    /// object with an `items` key. Unparseable sources are logged and skipped.
    pub fn from_sources(sources: Vec<(String, String)>) -> Self {
        let mut registry = Self::new();

        for (name, json) in sources {
            match serde_json::from_str::<MenuSource>(&json) {
                Ok(source) => registry.register(name, source.into_entries()),
                Err(e) => {
                    warn!(
                        menu = %name,
                        error = %e,
                        "failed to parse menu source"
                    );
                }
            }
        }

        debug!(menus = registry.len(), "built menu registry");
        registry
    }

    /// Load every supported file in `dir`, naming each menu after its file stem.
    ///
    /// Files that fail to load are logged and skipped; only an unreadable
    /// directory is an error.
    pub fn load_dir(dir: &Path) -> LoadResult<Self> {
        let mut registry = Self::new();

        let mut paths: Vec<_> = std::fs::read_dir(dir)
            .map_err(|source| LoadError::Io {
                path: dir.to_path_buf(),
                source,
            })?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.is_file() && config_storage::is_supported(path))
            .collect();
        paths.sort();

        for path in paths {
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            match config_storage::load_menu(&path) {
                Ok(entries) => registry.register(name, entries),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "skipping menu file");
                }
            }
        }

        info!(dir = %dir.display(), menus = registry.len(), "loaded menus");
        Ok(registry)
    }

    /// Register (or replace) a menu.
    pub fn register(&mut self, name: impl Into<String>, entries: Vec<NavEntry>) {
        let name = name.into();
        debug!(menu = %name, entries = entries.len(), "registered menu");
        if self.menus.insert(name.clone(), entries).is_some() {
            warn!(menu = %name, "menu replaced by a later definition");
        }
    }

    /// Get a menu by name.
    pub fn get(&self, name: &str) -> Option<&[NavEntry]> {
        self.menus.get(name).map(Vec::as_slice)
    }

    /// Menu names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.menus.keys().map(String::as_str)
    }

    /// Iterate `(name, entries)` in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[NavEntry])> {
        self.menus
            .iter()
            .map(|(name, entries)| (name.as_str(), entries.as_slice()))
    }

    /// Get menu count.
    pub fn len(&self) -> usize {
        self.menus.len()
    }

    /// Check if registry is empty.
    pub fn is_empty(&self) -> bool {
        self.menus.is_empty()
    }
}

/// Either a bare entry list or a full menu file.
#[derive(Deserialize)]
#[serde(untagged)]
enum MenuSource {
    Bare(Vec<NavEntry>),
    File(MenuFile),
}

impl MenuSource {
    fn into_entries(self) -> Vec<NavEntry> {
        match self {
            MenuSource::Bare(entries) => entries,
            MenuSource::File(file) => file.items,
        }
    }
}
