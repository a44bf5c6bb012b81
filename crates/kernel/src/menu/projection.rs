//! Project a navigation tree onto what the current principal may see.

use serde::Serialize;
use tracing::debug;

use super::entry::NavEntry;
use super::visibility::can_view_entry;
use crate::ability::Ability;

/// A rendered navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisibleEntry {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nav_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// `None` for links, `Some` for groups (possibly empty when exempt).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<VisibleEntry>>,
}

impl VisibleEntry {
    pub fn is_group(&self) -> bool {
        self.children.is_some()
    }

    /// Count this entry and everything beneath it.
    pub fn count(&self) -> usize {
        1 + self
            .children
            .as_deref()
            .map_or(0, |children| children.iter().map(VisibleEntry::count).sum())
    }
}

/// Keep the entries that render, in configuration order.
///
/// Each kept group's children are evaluated on their own, so an exempt group
/// may come back with none of its children.
pub fn project(entries: &[NavEntry], ability: Option<&dyn Ability>) -> Vec<VisibleEntry> {
    let visible = project_level(entries, ability);
    debug!(
        configured = entries.len(),
        visible = visible.len(),
        principal = ability.is_some(),
        "projected menu"
    );
    visible
}

fn project_level(entries: &[NavEntry], ability: Option<&dyn Ability>) -> Vec<VisibleEntry> {
    entries
        .iter()
        .filter(|entry| can_view_entry(entry, ability))
        .map(|entry| match entry {
            NavEntry::Link(link) => VisibleEntry {
                title: link.title.clone(),
                nav_link: link.nav_link.clone(),
                icon: link.icon.clone(),
                children: None,
            },
            NavEntry::Group(group) => VisibleEntry {
                title: group.title.clone(),
                nav_link: None,
                icon: group.icon.clone(),
                children: Some(project_level(&group.children, ability)),
            },
        })
        .collect()
}
