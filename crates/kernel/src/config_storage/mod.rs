//! Menu and rule files on disk.
//!
//! Both kinds of file may be written as YAML, JSON or TOML; the extension
//! picks the parser.
//!
//! # File shapes
//!
//! ```yaml
//! # menus/vertical.yml
//! items:
//!   - title: Dashboard
//!     auth: false
//!   - title: Reports
//!     action: read
//!     subject: reports
//!     children:
//!       - title: Monthly
//!         action: read
//!         subject: reports
//!         nav_link: /reports/monthly
//! ```
//!
//! ```yaml
//! # rules.yml
//! rules:
//!   - action: read
//!     subject: reports
//!   - action: delete
//!     subject: users
//!     inverted: true
//! ```

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ability::RuleSet;
use crate::error::{LoadError, LoadResult};
use crate::menu::NavEntry;

/// Maximum config file size (10 MB). Larger files are rejected before reading.
pub const MAX_CONFIG_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// A menu file: one navigation tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuFile {
    #[serde(default)]
    pub items: Vec<NavEntry>,
}

/// A rule file: the capability snapshot for one principal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesFile {
    #[serde(default)]
    pub rules: RuleSet,
}

/// Supported serialization formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
    Toml,
}

impl Format {
    /// Pick a format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "yml" | "yaml" => Some(Format::Yaml),
            "json" => Some(Format::Json),
            "toml" => Some(Format::Toml),
            _ => None,
        }
    }

    /// Parse `content` in this format.
    pub fn parse<T: DeserializeOwned>(self, content: &str) -> Result<T, String> {
        match self {
            Format::Yaml => serde_yml::from_str(content).map_err(|e| e.to_string()),
            Format::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            Format::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        }
    }
}

/// Whether `path` has an extension this module can parse.
pub fn is_supported(path: &Path) -> bool {
    Format::from_path(path).is_some()
}

/// Load a navigation tree from a menu file.
pub fn load_menu(path: &Path) -> LoadResult<Vec<NavEntry>> {
    let file: MenuFile = load(path)?;
    debug!(path = %path.display(), entries = file.items.len(), "loaded menu file");
    Ok(file.items)
}

/// Load a rule set from a rule file.
pub fn load_rules(path: &Path) -> LoadResult<RuleSet> {
    let file: RulesFile = load(path)?;
    debug!(path = %path.display(), rules = file.rules.len(), "loaded rule file");
    Ok(file.rules)
}

fn load<T: DeserializeOwned>(path: &Path) -> LoadResult<T> {
    let format =
        Format::from_path(path).ok_or_else(|| LoadError::UnsupportedFormat(path.to_path_buf()))?;

    let io_error = |source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    };

    let size = std::fs::metadata(path).map_err(io_error)?.len();
    if size > MAX_CONFIG_FILE_SIZE {
        return Err(LoadError::TooLarge {
            path: path.to_path_buf(),
            size,
            limit: MAX_CONFIG_FILE_SIZE,
        });
    }

    let content = std::fs::read_to_string(path).map_err(io_error)?;
    format.parse(&content).map_err(|message| LoadError::Parse {
        path: path.to_path_buf(),
        message,
    })
}
