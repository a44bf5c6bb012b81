//! CLI command implementations.
//!
//! Each command renders to a `String` so the output can be tested; the
//! binary only prints it.

use anyhow::{Context, Result, bail};
use serde::Serialize;

use crate::ability::Ability;
use crate::config::OutputFormat;
use crate::menu::{
    Decision, LintFinding, MenuRegistry, NavEntry, VisibleEntry, explain_entry, lint, project,
};

/// List the menus in the registry.
pub fn cmd_menus(registry: &MenuRegistry, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let names: Vec<&str> = registry.names().collect();
            serde_json::to_string_pretty(&names).context("failed to encode menu list")
        }
        OutputFormat::Text => {
            if registry.is_empty() {
                return Ok("No menus found.\n".to_string());
            }
            let mut out = String::new();
            for (name, entries) in registry.iter() {
                out.push_str(&format!("{name:<20} {} entries\n", entries.len()));
            }
            Ok(out)
        }
    }
}

/// Render what the principal may see of `menu`.
pub fn cmd_resolve(
    registry: &MenuRegistry,
    menu: &str,
    ability: Option<&dyn Ability>,
    format: OutputFormat,
) -> Result<String> {
    let entries = find_menu(registry, menu)?;
    let visible = project(entries, ability);

    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(&visible).context("failed to encode projection")
        }
        OutputFormat::Text => {
            let mut out = String::new();
            write_visible(&mut out, &visible, 0);
            if out.is_empty() {
                out.push_str("(nothing visible)\n");
            }
            Ok(out)
        }
    }
}

/// Render every entry of `menu` with the reason it is shown or hidden.
pub fn cmd_explain(
    registry: &MenuRegistry,
    menu: &str,
    ability: Option<&dyn Ability>,
    format: OutputFormat,
) -> Result<String> {
    let entries = find_menu(registry, menu)?;
    let mut rows = Vec::new();
    collect_decisions(entries, ability, 0, &mut rows);

    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(&rows).context("failed to encode decisions")
        }
        OutputFormat::Text => {
            let mut out = String::new();
            for row in &rows {
                let mark = if row.visible { '+' } else { '-' };
                let label = format!("{}{}", "  ".repeat(row.depth), row.title);
                out.push_str(&format!("{mark} {label:<40} {:?}\n", row.decision));
            }
            Ok(out)
        }
    }
}

/// Lint every menu. Returns the report and whether anything was found.
pub fn cmd_check(registry: &MenuRegistry, format: OutputFormat) -> Result<(String, bool)> {
    let findings: Vec<MenuFindings<'_>> = registry
        .iter()
        .map(|(menu, entries)| MenuFindings {
            menu,
            findings: lint(entries),
        })
        .filter(|m| !m.findings.is_empty())
        .collect();
    let found = !findings.is_empty();

    let out = match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(&findings).context("failed to encode findings")?
        }
        OutputFormat::Text => {
            let mut out = String::new();
            for menu in &findings {
                for finding in &menu.findings {
                    out.push_str(&format!("{}: {finding}\n", menu.menu));
                }
            }
            if !found {
                out.push_str(&format!("{} menus checked, no problems found.\n", registry.len()));
            }
            out
        }
    };

    Ok((out, found))
}

fn find_menu<'a>(registry: &'a MenuRegistry, menu: &str) -> Result<&'a [NavEntry]> {
    match registry.get(menu) {
        Some(entries) => Ok(entries),
        None => {
            let known: Vec<&str> = registry.names().collect();
            bail!("menu '{menu}' not found (known: {})", known.join(", "))
        }
    }
}

fn write_visible(out: &mut String, entries: &[VisibleEntry], depth: usize) {
    for entry in entries {
        let indent = "  ".repeat(depth);
        match &entry.nav_link {
            Some(route) => {
                out.push_str(&format!("{indent}{} -> {route}\n", entry.title));
            }
            None => {
                out.push_str(&format!("{indent}{}\n", entry.title));
            }
        }
        if let Some(children) = &entry.children {
            write_visible(out, children, depth + 1);
        }
    }
}

#[derive(Serialize)]
struct DecisionRow {
    title: String,
    depth: usize,
    decision: Decision,
    visible: bool,
}

#[derive(Serialize)]
struct MenuFindings<'a> {
    menu: &'a str,
    findings: Vec<LintFinding>,
}

fn collect_decisions(
    entries: &[NavEntry],
    ability: Option<&dyn Ability>,
    depth: usize,
    rows: &mut Vec<DecisionRow>,
) {
    for entry in entries {
        let decision = explain_entry(entry, ability);
        rows.push(DecisionRow {
            title: entry.title().to_string(),
            depth,
            decision,
            visible: decision.is_visible(),
        });
        collect_decisions(entry.children(), ability, depth + 1, rows);
    }
}
