#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Loading menus and rules from disk and running the CLI commands on them.

use std::path::Path;

use navgate_kernel::{Ability, MenuRegistry, OutputFormat, cli, config_storage};
use navgate_test_utils::{assert, menus, test_group, test_link, test_rules};

fn write_json(dir: &Path, name: &str, value: &serde_json::Value) {
    std::fs::write(dir.join(name), serde_json::to_string_pretty(value).unwrap()).unwrap();
}

#[test]
fn load_dir_names_menus_after_files() {
    let dir = tempfile::tempdir().unwrap();
    write_json(dir.path(), "vertical.json", &menus::dashboard());
    std::fs::write(
        dir.path().join("horizontal.yml"),
        "items:\n  - title: Home\n    auth: false\n",
    )
    .unwrap();
    std::fs::write(dir.path().join("README.md"), "not a menu").unwrap();

    let registry = MenuRegistry::load_dir(dir.path()).unwrap();

    let names: Vec<_> = registry.names().collect();
    assert_eq!(names, ["horizontal", "vertical"]);
    assert_eq!(registry.get("vertical").unwrap().len(), 4);
}

#[test]
fn load_dir_skips_broken_files() {
    let dir = tempfile::tempdir().unwrap();
    write_json(dir.path(), "vertical.json", &menus::dashboard());
    std::fs::write(dir.path().join("broken.json"), "{\"items\": 42}").unwrap();

    let registry = MenuRegistry::load_dir(dir.path()).unwrap();
    assert_eq!(registry.len(), 1);
    assert!(registry.get("broken").is_none());
}

#[test]
fn load_dir_fails_for_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    assert!(MenuRegistry::load_dir(&dir.path().join("missing")).is_err());
}

#[test]
fn resolve_with_rules_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    write_json(dir.path(), "vertical.json", &menus::dashboard());
    let rules_path = dir.path().join("rules.json");
    write_json(
        dir.path(),
        "rules.json",
        &test_rules(&[("manage", "all")])
            .deny("read", "audit")
            .to_file_json(),
    );

    let registry = MenuRegistry::load_dir(dir.path()).unwrap();
    let rules = config_storage::load_rules(&rules_path).unwrap();
    let out = cli::cmd_resolve(
        &registry,
        "vertical",
        Some(&rules as &dyn Ability),
        OutputFormat::Text,
    )
    .unwrap();

    assert::contains(&out, "  Monthly -> /reports/monthly\n");
    assert::contains(&out, "    General -> /admin/settings\n");
    assert::not_contains(&out, "Audit");
}

#[test]
fn explain_distinguishes_missing_principal_from_denial() {
    let dir = tempfile::tempdir().unwrap();
    write_json(dir.path(), "vertical.json", &menus::dashboard());
    let registry = MenuRegistry::load_dir(dir.path()).unwrap();

    let anonymous = cli::cmd_explain(&registry, "vertical", None, OutputFormat::Text).unwrap();
    assert::contains(&anonymous, "NoPrincipal");
    assert::not_contains(&anonymous, "Denied");

    let nobody = test_rules(&[]);
    let rules: navgate_kernel::RuleSet = serde_json::from_value(nobody.to_json()).unwrap();
    let denied =
        cli::cmd_explain(&registry, "vertical", Some(&rules), OutputFormat::Text).unwrap();
    assert::contains(&denied, "Denied");
    assert::not_contains(&denied, "NoPrincipal");
}

#[test]
fn check_flags_dead_entries() {
    let dir = tempfile::tempdir().unwrap();
    write_json(
        dir.path(),
        "vertical.json",
        &serde_json::json!({
            "items": [
                test_link("Home").exempt().to_json(),
                test_group("Tools").link(test_link("Scratch")).to_json(),
            ]
        }),
    );
    write_json(dir.path(), "clean.json", &menus::dashboard());

    let registry = MenuRegistry::load_dir(dir.path()).unwrap();
    let (report, found) = cli::cmd_check(&registry, OutputFormat::Json).unwrap();
    assert!(found);

    let value: serde_json::Value = serde_json::from_str(&report).unwrap();
    let menus = value.as_array().unwrap();
    assert_eq!(menus.len(), 1);
    assert_eq!(menus[0]["menu"], "vertical");
    let kinds: Vec<_> = menus[0]["findings"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| (f["path"].as_str().unwrap(), f["kind"].as_str().unwrap()))
        .collect();
    assert_eq!(
        kinds,
        [
            ("Tools", "no_targeted_descendant"),
            ("Tools > Scratch", "missing_target"),
        ]
    );
}
