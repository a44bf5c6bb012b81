//! Configuration loaded from environment variables.

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Result, bail};

/// How the CLI prints results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => bail!("unknown output format '{other}' (expected 'text' or 'json')"),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding menu files (default: ./menus).
    pub menu_dir: PathBuf,

    /// Rule file for the current principal. When None, no principal is resolved.
    pub rules_path: Option<PathBuf>,

    /// Output format (default: text).
    pub format: OutputFormat,
}

/// Values given on the command line. Each one set here wins over the
/// environment, and the matching variable is not read at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub menu_dir: Option<PathBuf>,
    pub rules_path: Option<PathBuf>,
    pub format: Option<OutputFormat>,
}

impl Config {
    /// Load configuration from environment variables, with `overrides` taking precedence.
    pub fn from_env(overrides: Overrides) -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok(), overrides)
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
        overrides: Overrides,
    ) -> Result<Self> {
        let menu_dir = match overrides.menu_dir {
            Some(dir) => dir,
            None => lookup("NAVGATE_MENU_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("./menus")),
        };

        let rules_path = match overrides.rules_path {
            Some(path) => Some(path),
            None => lookup("NAVGATE_RULES")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        };

        let format = match overrides.format {
            Some(format) => format,
            None => match lookup("NAVGATE_FORMAT") {
                Some(v) => v.parse()?,
                None => OutputFormat::default(),
            },
        };

        Ok(Self {
            menu_dir,
            rules_path,
            format,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[]), Overrides::default()).unwrap();
        assert_eq!(config.menu_dir, PathBuf::from("./menus"));
        assert_eq!(config.rules_path, None);
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn reads_all_variables() {
        let config = Config::from_lookup(
            lookup(&[
                ("NAVGATE_MENU_DIR", "/etc/navgate/menus"),
                ("NAVGATE_RULES", "/etc/navgate/rules.yml"),
                ("NAVGATE_FORMAT", "JSON"),
            ]),
            Overrides::default(),
        )
        .unwrap();

        assert_eq!(config.menu_dir, PathBuf::from("/etc/navgate/menus"));
        assert_eq!(
            config.rules_path,
            Some(PathBuf::from("/etc/navgate/rules.yml"))
        );
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn blank_rules_path_means_no_principal() {
        let config =
            Config::from_lookup(lookup(&[("NAVGATE_RULES", "  ")]), Overrides::default()).unwrap();
        assert_eq!(config.rules_path, None);
    }

    #[test]
    fn rejects_unknown_format() {
        let err = Config::from_lookup(lookup(&[("NAVGATE_FORMAT", "xml")]), Overrides::default())
            .unwrap_err();
        assert!(err.to_string().contains("xml"));
    }

    #[test]
    fn flags_override_environment() {
        let env = lookup(&[
            ("NAVGATE_MENU_DIR", "/env/menus"),
            ("NAVGATE_RULES", "/env/rules.yml"),
            ("NAVGATE_FORMAT", "text"),
        ]);
        let overrides = Overrides {
            menu_dir: Some(PathBuf::from("/flag/menus")),
            rules_path: Some(PathBuf::from("/flag/rules.json")),
            format: Some(OutputFormat::Json),
        };

        let config = Config::from_lookup(env, overrides).unwrap();
        assert_eq!(config.menu_dir, PathBuf::from("/flag/menus"));
        assert_eq!(config.rules_path, Some(PathBuf::from("/flag/rules.json")));
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn unset_flags_fall_back_to_environment() {
        let env = lookup(&[("NAVGATE_MENU_DIR", "/env/menus"), ("NAVGATE_FORMAT", "json")]);
        let overrides = Overrides {
            rules_path: Some(PathBuf::from("/flag/rules.json")),
            ..Overrides::default()
        };

        let config = Config::from_lookup(env, overrides).unwrap();
        assert_eq!(config.menu_dir, PathBuf::from("/env/menus"));
        assert_eq!(config.rules_path, Some(PathBuf::from("/flag/rules.json")));
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn format_flag_skips_invalid_environment_format() {
        let overrides = Overrides {
            format: Some(OutputFormat::Json),
            ..Overrides::default()
        };
        let config = Config::from_lookup(lookup(&[("NAVGATE_FORMAT", "xml")]), overrides).unwrap();
        assert_eq!(config.format, OutputFormat::Json);
    }
}
