//! Ability oracle: answers "can the current principal perform `action` on `subject`?".
//!
//! The resolver only ever sees the [`Ability`] trait. [`RuleSet`] is the
//! rule-backed implementation used by the CLI and loaded from configuration.

use serde::{Deserialize, Serialize};

/// Rule action matching every action.
pub const MANAGE: &str = "manage";

/// Rule subject matching every subject.
pub const ALL: &str = "all";

/// Read-only capability snapshot for the current principal.
pub trait Ability {
    /// Check whether `action` may be performed on `subject`.
    fn can(&self, action: &str, subject: &str) -> bool;
}

impl<F> Ability for F
where
    F: Fn(&str, &str) -> bool,
{
    fn can(&self, action: &str, subject: &str) -> bool {
        self(action, subject)
    }
}

/// A single grant or denial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityRule {
    /// Action name, or `manage` for any action.
    pub action: String,
    /// Subject name, or `all` for any subject.
    pub subject: String,
    /// Inverted rules deny instead of grant.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub inverted: bool,
}

impl AbilityRule {
    fn matches(&self, action: &str, subject: &str) -> bool {
        (self.action == MANAGE || self.action == action)
            && (self.subject == ALL || self.subject == subject)
    }
}

/// Ordered rule list. Later rules take precedence over earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSet {
    rules: Vec<AbilityRule>,
}

impl RuleSet {
    /// Create a rule set from rules in precedence order (last wins).
    pub fn new(rules: Vec<AbilityRule>) -> Self {
        Self { rules }
    }

    /// Append a granting rule.
    pub fn allow(mut self, action: impl Into<String>, subject: impl Into<String>) -> Self {
        self.rules.push(AbilityRule {
            action: action.into(),
            subject: subject.into(),
            inverted: false,
        });
        self
    }

    /// Append a denying rule.
    pub fn deny(mut self, action: impl Into<String>, subject: impl Into<String>) -> Self {
        self.rules.push(AbilityRule {
            action: action.into(),
            subject: subject.into(),
            inverted: true,
        });
        self
    }

    pub fn rules(&self) -> &[AbilityRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Ability for RuleSet {
    fn can(&self, action: &str, subject: &str) -> bool {
        self.rules
            .iter()
            .rev()
            .find(|rule| rule.matches(action, subject))
            .is_some_and(|rule| !rule.inverted)
    }
}
