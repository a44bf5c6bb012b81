//! Visibility resolution for navigation entries.
//!
//! Every function here is a pure function of `(entry, ability)`. Missing or
//! incomplete input always resolves to hidden; nothing here can fail.
//!
//! A group is shown only when its own gate passes *and* at least one link
//! somewhere beneath it is granted, so authorized-but-empty headers never
//! render. `auth: false` short-circuits both rules for the entry carrying it
//! and nothing else.

use serde::Serialize;

use super::entry::{NavEntry, NavGroup, NavLink};
use crate::ability::Ability;

/// Why an entry resolved the way it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    /// No entry was supplied.
    Absent,
    /// `auth: false`; shown without consulting the ability.
    Exempt,
    /// No principal resolved yet.
    NoPrincipal,
    /// Link lacks `action` or `subject`.
    MissingTarget,
    /// Target granted (for groups: and a descendant is visible).
    Granted,
    /// Target denied.
    Denied,
    /// Group without a target, shown because a descendant is visible.
    PassThrough,
    /// Group with nothing visible beneath it.
    NoVisibleDescendant,
}

impl Decision {
    pub fn is_visible(self) -> bool {
        matches!(
            self,
            Decision::Exempt | Decision::Granted | Decision::PassThrough
        )
    }
}

/// Explain the visibility of a single link.
pub fn explain_link(link: Option<&NavLink>, ability: Option<&dyn Ability>) -> Decision {
    let Some(link) = link else {
        return Decision::Absent;
    };
    if link.is_exempt() {
        return Decision::Exempt;
    }
    let Some(ability) = ability else {
        return Decision::NoPrincipal;
    };
    match link.target() {
        None => Decision::MissingTarget,
        Some((action, subject)) if ability.can(action, subject) => Decision::Granted,
        Some(_) => Decision::Denied,
    }
}

/// Explain the visibility of a group.
pub fn explain_group(group: Option<&NavGroup>, ability: Option<&dyn Ability>) -> Decision {
    let Some(group) = group else {
        return Decision::Absent;
    };
    if group.is_exempt() {
        return Decision::Exempt;
    }
    let Some(ability) = ability else {
        return Decision::NoPrincipal;
    };

    match group.target() {
        None if has_visible_descendant(group, ability) => Decision::PassThrough,
        None => Decision::NoVisibleDescendant,
        Some((action, subject)) if !ability.can(action, subject) => Decision::Denied,
        Some(_) if has_visible_descendant(group, ability) => Decision::Granted,
        Some(_) => Decision::NoVisibleDescendant,
    }
}

/// Explain the visibility of any entry.
pub fn explain_entry(entry: &NavEntry, ability: Option<&dyn Ability>) -> Decision {
    match entry {
        NavEntry::Link(link) => explain_link(Some(link), ability),
        NavEntry::Group(group) => explain_group(Some(group), ability),
    }
}

/// Should this link render?
pub fn can_view_link(link: Option<&NavLink>, ability: Option<&dyn Ability>) -> bool {
    explain_link(link, ability).is_visible()
}

/// Should this group wrapper render?
pub fn can_view_group(group: Option<&NavGroup>, ability: Option<&dyn Ability>) -> bool {
    explain_group(group, ability).is_visible()
}

/// Should this entry render?
pub fn can_view_entry(entry: &NavEntry, ability: Option<&dyn Ability>) -> bool {
    explain_entry(entry, ability).is_visible()
}

/// Does any link beneath `group` (at any depth) have a granted target?
///
/// Groups contribute only through their children and links only through
/// their own target; `auth` is not consulted. Stops at the first hit.
pub fn has_visible_descendant(group: &NavGroup, ability: &dyn Ability) -> bool {
    let mut stack: Vec<&NavEntry> = group.children.iter().rev().collect();

    while let Some(entry) = stack.pop() {
        match entry {
            NavEntry::Link(link) => {
                if let Some((action, subject)) = link.target()
                    && ability.can(action, subject)
                {
                    return true;
                }
            }
            NavEntry::Group(inner) => stack.extend(inner.children.iter().rev()),
        }
    }

    false
}
