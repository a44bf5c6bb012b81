//! navgate test utilities.
//!
//! Helpers for integration testing: navigation entry builders, rule set
//! builders, and sample menus. Everything produces configuration JSON so
//! tests go through the same deserialization path as real menu files.

use serde_json::{Map, Value as JsonValue, json};

/// Create a test link with only a title.
pub fn test_link(title: &str) -> TestLink {
    TestLink {
        fields: object(title),
    }
}

/// Create a test group with only a title and no children.
pub fn test_group(title: &str) -> TestGroup {
    TestGroup {
        fields: object(title),
        children: Vec::new(),
    }
}

/// Create a rule set granting every `(action, subject)` pair.
pub fn test_rules(grants: &[(&str, &str)]) -> TestRules {
    grants
        .iter()
        .fold(TestRules::default(), |rules, (action, subject)| {
            rules.allow(action, subject)
        })
}

fn object(title: &str) -> Map<String, JsonValue> {
    let mut fields = Map::new();
    fields.insert("title".to_string(), json!(title));
    fields
}

/// A navigation link builder.
#[derive(Debug, Clone)]
pub struct TestLink {
    fields: Map<String, JsonValue>,
}

impl TestLink {
    /// Set both permission fields.
    pub fn target(self, action: &str, subject: &str) -> Self {
        self.action(action).subject(subject)
    }

    /// Set only the action.
    pub fn action(mut self, action: &str) -> Self {
        self.fields.insert("action".to_string(), json!(action));
        self
    }

    /// Set only the subject.
    pub fn subject(mut self, subject: &str) -> Self {
        self.fields.insert("subject".to_string(), json!(subject));
        self
    }

    /// Set `auth: false`.
    pub fn exempt(mut self) -> Self {
        self.fields.insert("auth".to_string(), json!(false));
        self
    }

    /// Set `auth: true`.
    pub fn authenticated(mut self) -> Self {
        self.fields.insert("auth".to_string(), json!(true));
        self
    }

    /// Set the route.
    pub fn route(mut self, route: &str) -> Self {
        self.fields.insert("navLink".to_string(), json!(route));
        self
    }

    pub fn to_json(&self) -> JsonValue {
        JsonValue::Object(self.fields.clone())
    }
}

/// A navigation group builder.
#[derive(Debug, Clone)]
pub struct TestGroup {
    fields: Map<String, JsonValue>,
    children: Vec<JsonValue>,
}

impl TestGroup {
    /// Set both permission fields.
    pub fn target(mut self, action: &str, subject: &str) -> Self {
        self.fields.insert("action".to_string(), json!(action));
        self.fields.insert("subject".to_string(), json!(subject));
        self
    }

    /// Set `auth: false`.
    pub fn exempt(mut self) -> Self {
        self.fields.insert("auth".to_string(), json!(false));
        self
    }

    /// Append a link child.
    pub fn link(mut self, link: TestLink) -> Self {
        self.children.push(link.to_json());
        self
    }

    /// Append a group child.
    pub fn group(mut self, group: TestGroup) -> Self {
        self.children.push(group.to_json());
        self
    }

    pub fn to_json(&self) -> JsonValue {
        let mut fields = self.fields.clone();
        fields.insert(
            "children".to_string(),
            JsonValue::Array(self.children.clone()),
        );
        JsonValue::Object(fields)
    }
}

/// A rule set builder. Later rules take precedence.
#[derive(Debug, Clone, Default)]
pub struct TestRules {
    rules: Vec<JsonValue>,
}

impl TestRules {
    /// Append a granting rule.
    pub fn allow(mut self, action: &str, subject: &str) -> Self {
        self.rules
            .push(json!({"action": action, "subject": subject}));
        self
    }

    /// Append a denying rule.
    pub fn deny(mut self, action: &str, subject: &str) -> Self {
        self.rules
            .push(json!({"action": action, "subject": subject, "inverted": true}));
        self
    }

    /// The bare rule list.
    pub fn to_json(&self) -> JsonValue {
        JsonValue::Array(self.rules.clone())
    }

    /// A rule file document (`{"rules": [...]}`).
    pub fn to_file_json(&self) -> JsonValue {
        json!({ "rules": self.to_json() })
    }
}

/// Sample menus shaped like a real dashboard sidebar.
pub mod menus {
    use serde_json::{Value, json};

    use super::{test_group, test_link};

    /// A vertical dashboard menu document (`{"items": [...]}`).
    ///
    /// - "Home": exempt link
    /// - "Reports": group gated on read:reports with Monthly (read:reports)
    ///   and Audit (read:audit)
    /// - "Administration": pass-through group with Users (manage:users) and a
    ///   nested "Settings" pass-through group holding General (manage:settings)
    /// - "Help": exempt group holding Docs (read:docs)
    pub fn dashboard() -> Value {
        json!({
            "items": [
                test_link("Home").exempt().route("/").to_json(),
                test_group("Reports")
                    .target("read", "reports")
                    .link(
                        test_link("Monthly")
                            .target("read", "reports")
                            .route("/reports/monthly"),
                    )
                    .link(
                        test_link("Audit")
                            .target("read", "audit")
                            .route("/reports/audit"),
                    )
                    .to_json(),
                test_group("Administration")
                    .link(
                        test_link("Users")
                            .target("manage", "users")
                            .route("/admin/users"),
                    )
                    .group(
                        test_group("Settings").link(
                            test_link("General")
                                .target("manage", "settings")
                                .route("/admin/settings"),
                        ),
                    )
                    .to_json(),
                test_group("Help")
                    .exempt()
                    .link(test_link("Docs").target("read", "docs").route("/help/docs"))
                    .to_json(),
            ]
        })
    }
}

/// Assertion helpers.
pub mod assert {
    use serde_json::Value;

    /// Titles of a JSON entry list, in order.
    pub fn titles(entries: &Value) -> Vec<String> {
        entries
            .as_array()
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| item["title"].as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Assert that a string contains a substring.
    pub fn contains(haystack: &str, needle: &str) {
        assert!(
            haystack.contains(needle),
            "Expected string to contain '{needle}'\nActual: {haystack}"
        );
    }

    /// Assert that a string does not contain a substring.
    pub fn not_contains(haystack: &str, needle: &str) {
        assert!(
            !haystack.contains(needle),
            "Expected string to NOT contain '{needle}'\nActual: {haystack}"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_builder() {
        let link = test_link("Reports").target("read", "reports").route("/r").to_json();
        assert_eq!(link["title"], "Reports");
        assert_eq!(link["action"], "read");
        assert_eq!(link["subject"], "reports");
        assert_eq!(link["navLink"], "/r");
        assert!(link.get("children").is_none());
    }

    #[test]
    fn test_group_builder() {
        let group = test_group("Admin")
            .exempt()
            .link(test_link("Users"))
            .group(test_group("Nested"))
            .to_json();

        assert_eq!(group["auth"], false);
        assert_eq!(group["children"].as_array().map(Vec::len), Some(2));
        assert_eq!(group["children"][1]["children"], json!([]));
    }

    #[test]
    fn test_rules_builder() {
        let rules = test_rules(&[("read", "reports")]).deny("read", "audit");
        let json = rules.to_file_json();
        assert_eq!(json["rules"][0]["action"], "read");
        assert_eq!(json["rules"][1]["inverted"], true);
    }

    #[test]
    fn test_dashboard_menu() {
        let menu = menus::dashboard();
        assert_eq!(
            assert::titles(&menu["items"]),
            ["Home", "Reports", "Administration", "Help"]
        );
    }

    #[test]
    fn test_assertions() {
        assert::contains("hello world", "world");
        assert::not_contains("hello world", "foo");
    }
}
