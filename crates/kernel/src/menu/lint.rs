//! Static checks for navigation entries that can never render.
//!
//! Misconfigured entries fail closed and vanish without a trace at runtime;
//! these checks surface them ahead of time.

use std::fmt;

use serde::Serialize;

use super::entry::{NavEntry, NavGroup};

/// What is wrong with an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LintKind {
    /// Link is neither exempt nor carries both `action` and `subject`.
    MissingTarget,
    /// Non-exempt group without children.
    EmptyGroup,
    /// Non-exempt group with no targeted link anywhere beneath it.
    NoTargetedDescendant,
}

impl fmt::Display for LintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            LintKind::MissingTarget => "link has no action/subject and is not exempt",
            LintKind::EmptyGroup => "group has no children and is not exempt",
            LintKind::NoTargetedDescendant => "group has no link with an action/subject beneath it",
        };
        f.write_str(message)
    }
}

/// A single finding, located by the titles leading to the entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LintFinding {
    /// Titles from the root, joined with " > ".
    pub path: String,
    pub kind: LintKind,
}

impl fmt::Display for LintFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.kind)
    }
}

/// Check a menu and return every finding in configuration order.
pub fn lint(entries: &[NavEntry]) -> Vec<LintFinding> {
    let mut findings = Vec::new();
    for entry in entries {
        lint_entry(entry, "", &mut findings);
    }
    findings
}

fn lint_entry(entry: &NavEntry, parent: &str, findings: &mut Vec<LintFinding>) {
    let path = if parent.is_empty() {
        entry.title().to_string()
    } else {
        format!("{parent} > {}", entry.title())
    };

    match entry {
        NavEntry::Link(link) => {
            if !link.is_exempt() && link.target().is_none() {
                findings.push(LintFinding {
                    path,
                    kind: LintKind::MissingTarget,
                });
            }
        }
        NavEntry::Group(group) => {
            if !group.is_exempt() {
                if group.children.is_empty() {
                    findings.push(LintFinding {
                        path: path.clone(),
                        kind: LintKind::EmptyGroup,
                    });
                } else if !has_targeted_link(group) {
                    findings.push(LintFinding {
                        path: path.clone(),
                        kind: LintKind::NoTargetedDescendant,
                    });
                }
            }
            for child in &group.children {
                lint_entry(child, &path, findings);
            }
        }
    }
}

fn has_targeted_link(group: &NavGroup) -> bool {
    group.children.iter().any(|child| match child {
        NavEntry::Link(link) => link.target().is_some(),
        NavEntry::Group(inner) => has_targeted_link(inner),
    })
}
