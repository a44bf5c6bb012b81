//! Navigation entries: leaf links and groups of links/sub-groups.
//!
//! In configuration a group is any object carrying a `children` key; every
//! other object is a link.

use serde::{Deserialize, Deserializer, Serialize};

/// A leaf navigation entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    /// Display title
    #[serde(default)]
    pub title: String,
    /// Permission action (e.g., "read")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    /// Permission subject (e.g., "reports")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// `Some(false)` exempts the link from permission checks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<bool>,
    /// Route or URL the link points at
    #[serde(default, alias = "navLink", skip_serializing_if = "Option::is_none")]
    pub nav_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    /// Link leaves the application
    #[serde(default, alias = "externalLink", skip_serializing_if = "is_false")]
    pub external: bool,
    /// Open in a new browser tab
    #[serde(default, alias = "newTab", skip_serializing_if = "is_false")]
    pub new_tab: bool,
}

/// A navigation group with ordered children.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NavGroup {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// `Some(false)` forces the group wrapper to always render
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    pub children: Vec<NavEntry>,
}

/// Any node of a navigation tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NavEntry {
    Link(NavLink),
    Group(NavGroup),
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Wire shape shared by both variants; `children` decides the variant.
#[derive(Deserialize)]
struct RawEntry {
    #[serde(default)]
    title: String,
    #[serde(default)]
    action: Option<String>,
    #[serde(default)]
    subject: Option<String>,
    #[serde(default)]
    auth: Option<bool>,
    #[serde(default, alias = "navLink")]
    nav_link: Option<String>,
    #[serde(default)]
    icon: Option<String>,
    #[serde(default)]
    badge: Option<String>,
    #[serde(default, alias = "externalLink")]
    external: bool,
    #[serde(default, alias = "newTab")]
    new_tab: bool,
    /// Present key means group, even when the value is null.
    #[serde(default, deserialize_with = "present_children")]
    children: Option<Vec<NavEntry>>,
}

/// Only called when the `children` key exists; `null` reads as no children.
fn present_children<'de, D>(deserializer: D) -> Result<Option<Vec<NavEntry>>, D::Error>
where
    D: Deserializer<'de>,
{
    let children = Option::<Vec<NavEntry>>::deserialize(deserializer)?;
    Ok(Some(children.unwrap_or_default()))
}

impl From<RawEntry> for NavEntry {
    fn from(raw: RawEntry) -> Self {
        match raw.children {
            Some(children) => NavEntry::Group(NavGroup {
                title: raw.title,
                action: raw.action,
                subject: raw.subject,
                auth: raw.auth,
                icon: raw.icon,
                badge: raw.badge,
                children,
            }),
            None => NavEntry::Link(NavLink {
                title: raw.title,
                action: raw.action,
                subject: raw.subject,
                auth: raw.auth,
                nav_link: raw.nav_link,
                icon: raw.icon,
                badge: raw.badge,
                external: raw.external,
                new_tab: raw.new_tab,
            }),
        }
    }
}

impl<'de> Deserialize<'de> for NavEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        RawEntry::deserialize(deserializer).map(NavEntry::from)
    }
}

/// Pair `action` and `subject` only when both are present.
fn pair<'a>(
    action: &'a Option<String>,
    subject: &'a Option<String>,
) -> Option<(&'a str, &'a str)> {
    match (action, subject) {
        (Some(action), Some(subject)) => Some((action.as_str(), subject.as_str())),
        _ => None,
    }
}

impl NavLink {
    /// Create a link with a title and nothing else.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Set the permission target.
    pub fn with_target(mut self, action: impl Into<String>, subject: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self.subject = Some(subject.into());
        self
    }

    /// Set the route.
    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.nav_link = Some(route.into());
        self
    }

    /// Mark as always visible (`auth: false`).
    pub fn exempt(mut self) -> Self {
        self.auth = Some(false);
        self
    }

    /// True when `auth` is explicitly `false`.
    pub fn is_exempt(&self) -> bool {
        self.auth == Some(false)
    }

    /// The `(action, subject)` pair, if both are set.
    pub fn target(&self) -> Option<(&str, &str)> {
        pair(&self.action, &self.subject)
    }
}

impl NavGroup {
    /// Create an empty group with a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Set the permission target.
    pub fn with_target(mut self, action: impl Into<String>, subject: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self.subject = Some(subject.into());
        self
    }

    /// Append a child entry.
    pub fn child(mut self, entry: impl Into<NavEntry>) -> Self {
        self.children.push(entry.into());
        self
    }

    /// Mark as always visible (`auth: false`).
    pub fn exempt(mut self) -> Self {
        self.auth = Some(false);
        self
    }

    pub fn is_exempt(&self) -> bool {
        self.auth == Some(false)
    }

    pub fn target(&self) -> Option<(&str, &str)> {
        pair(&self.action, &self.subject)
    }
}

impl NavEntry {
    pub fn title(&self) -> &str {
        match self {
            NavEntry::Link(link) => &link.title,
            NavEntry::Group(group) => &group.title,
        }
    }

    pub fn is_exempt(&self) -> bool {
        match self {
            NavEntry::Link(link) => link.is_exempt(),
            NavEntry::Group(group) => group.is_exempt(),
        }
    }

    pub fn target(&self) -> Option<(&str, &str)> {
        match self {
            NavEntry::Link(link) => link.target(),
            NavEntry::Group(group) => group.target(),
        }
    }

    /// Children of a group; empty for links.
    pub fn children(&self) -> &[NavEntry] {
        match self {
            NavEntry::Link(_) => &[],
            NavEntry::Group(group) => &group.children,
        }
    }
}

impl From<NavLink> for NavEntry {
    fn from(link: NavLink) -> Self {
        NavEntry::Link(link)
    }
}

impl From<NavGroup> for NavEntry {
    fn from(group: NavGroup) -> Self {
        NavEntry::Group(group)
    }
}
