//! navgate
//!
//! Resolve which navigation entries a principal may see.
//!
//! Usage:
//!   navgate --rules rules.yml resolve vertical
//!   navgate explain vertical --anonymous
//!   navgate check

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use navgate_kernel::cli;
use navgate_kernel::config_storage;
use navgate_kernel::{Ability, Config, MenuRegistry, OutputFormat, Overrides, RuleSet};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding menu files (overrides NAVGATE_MENU_DIR).
    #[arg(long)]
    menu_dir: Option<PathBuf>,

    /// Rule file for the current principal (overrides NAVGATE_RULES).
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Output format (overrides NAVGATE_FORMAT).
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List available menus.
    Menus,
    /// Print the entries of a menu the principal may see.
    Resolve {
        menu: String,
        /// Resolve as if no principal were signed in.
        #[arg(long)]
        anonymous: bool,
    },
    /// Print every entry of a menu with the reason it is shown or hidden.
    Explain {
        menu: String,
        /// Resolve as if no principal were signed in.
        #[arg(long)]
        anonymous: bool,
    },
    /// Report entries that can never render.
    Check,
}

fn main() -> Result<ExitCode> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_tracing();

    let args = Args::parse();
    let overrides = Overrides {
        menu_dir: args.menu_dir,
        rules_path: args.rules,
        format: args.format,
    };
    let config = Config::from_env(overrides).context("failed to load configuration")?;
    debug!(?config, "configuration loaded");

    let registry = MenuRegistry::load_dir(&config.menu_dir)
        .with_context(|| format!("failed to load menus from {}", config.menu_dir.display()))?;

    match args.command {
        Command::Menus => {
            print!("{}", cli::cmd_menus(&registry, config.format)?);
        }
        Command::Resolve { menu, anonymous } => {
            let rules = load_principal(&config, anonymous)?;
            let ability = rules.as_ref().map(|r| r as &dyn Ability);
            print!(
                "{}",
                cli::cmd_resolve(&registry, &menu, ability, config.format)?
            );
        }
        Command::Explain { menu, anonymous } => {
            let rules = load_principal(&config, anonymous)?;
            let ability = rules.as_ref().map(|r| r as &dyn Ability);
            print!(
                "{}",
                cli::cmd_explain(&registry, &menu, ability, config.format)?
            );
        }
        Command::Check => {
            let (report, found) = cli::cmd_check(&registry, config.format)?;
            print!("{report}");
            if found {
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Load the principal's rules, or none when anonymous or unconfigured.
fn load_principal(config: &Config, anonymous: bool) -> Result<Option<RuleSet>> {
    if anonymous {
        info!("resolving without a principal");
        return Ok(None);
    }
    let Some(path) = &config.rules_path else {
        info!("no rule file configured, resolving without a principal");
        return Ok(None);
    };

    let rules = config_storage::load_rules(path)
        .with_context(|| format!("failed to load rules from {}", path.display()))?;
    info!(rules = rules.len(), "principal rules loaded");
    Ok(Some(rules))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,navgate_kernel=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
