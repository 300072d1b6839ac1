//! SkillChain console — entry point for an interactive ledger session.

mod config;
mod repl;

use clap::Parser;
use config::ConsoleConfig;
use repl::Repl;
use skillchain_registry::{RosterAccounts, SkillRegistry};
use skillchain_store_memory::MemoryStore;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "skillchain-console", about = "SkillChain reputation ledger console")]
struct Cli {
    /// Path to a TOML configuration file with the account roster.
    /// Without one, the built-in demo roster is used.
    #[arg(long, env = "SKILLCHAIN_CONFIG")]
    config: Option<PathBuf>,

    /// Account to act as at startup; overrides the config's default.
    #[arg(long, env = "SKILLCHAIN_ACCOUNT")]
    account: Option<String>,

    /// Emit listings as JSON instead of formatted lines.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    skillchain_utils::init_tracing();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match ConsoleConfig::load(path) {
            Ok(cfg) => {
                tracing::info!("Loaded config from {}", path.display());
                cfg
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to load config file {}: {e}, using demo roster",
                    path.display()
                );
                ConsoleConfig::default()
            }
        },
        None => ConsoleConfig::default(),
    };

    let mut accounts = RosterAccounts::new(config.accounts);
    if let Some(name) = cli.account.as_ref().or(config.default_account.as_ref()) {
        anyhow::ensure!(
            accounts.switch_to(name),
            "account {name:?} is not in the roster"
        );
    }

    let registry = SkillRegistry::new(MemoryStore::new(), accounts);
    Repl::new(registry, cli.json).run()
}
