//! Navigation menus and their visibility.
//!
//! Menus are loaded from configuration and provide:
//! - The navigation tree data model (links and groups)
//! - Per-entry visibility against an [`Ability`](crate::ability::Ability)
//! - A rendering projection and static checks for dead entries

mod entry;
mod lint;
mod projection;
mod registry;
mod visibility;

pub use entry::{NavEntry, NavGroup, NavLink};
pub use lint::{LintFinding, LintKind, lint};
pub use projection::{VisibleEntry, project};
pub use registry::MenuRegistry;
pub use visibility::{
    Decision, can_view_entry, can_view_group, can_view_link, explain_entry, explain_group,
    explain_link, has_visible_descendant,
};
