//! navgate Kernel Library
//!
//! Navigation access control for dashboard menus: decides which links and
//! groups of a navigation tree the current principal may see.
//! The `navgate` binary wraps this library in a small CLI.

pub mod ability;
pub mod cli;
pub mod config;
pub mod config_storage;
pub mod error;
pub mod menu;

pub use ability::{Ability, AbilityRule, RuleSet};
pub use config::{Config, OutputFormat, Overrides};
pub use error::{LoadError, LoadResult};
pub use menu::{MenuRegistry, NavEntry, NavGroup, NavLink};
