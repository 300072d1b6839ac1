//! Console configuration — the account roster.

use serde::{Deserialize, Serialize};
use skillchain_registry::RosterEntry;
use skillchain_types::Identity;
use std::path::Path;

/// TOML-backed console settings. The roster is fixed for the session;
/// nothing mutates membership or trust flags at runtime.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Account roster; entries flagged `trusted` may verify skills.
    #[serde(default = "demo_roster")]
    pub accounts: Vec<RosterEntry>,

    /// Account to act as at startup. Defaults to the first roster entry.
    #[serde(default)]
    pub default_account: Option<String>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            accounts: demo_roster(),
            default_account: None,
        }
    }
}

/// The built-in demo roster: two regular accounts plus a university and
/// an employer as trusted authorities.
fn demo_roster() -> Vec<RosterEntry> {
    let entry = |name: &str, trusted: bool| RosterEntry {
        identity: Identity::new(name),
        trusted,
    };
    vec![
        entry("Alice", false),
        entry("Bob", false),
        entry("Carol", true),
        entry("Dave", true),
    ]
}

impl ConsoleConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        anyhow::ensure!(
            !config.accounts.is_empty(),
            "config must declare at least one account"
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn parses_roster_and_default_account() {
        let file = write_config(
            r#"
            default_account = "Uni"

            [[accounts]]
            identity = "Zoe"

            [[accounts]]
            identity = "Uni"
            trusted = true
            "#,
        );
        let config = ConsoleConfig::load(file.path()).unwrap();
        assert_eq!(config.accounts.len(), 2);
        assert_eq!(config.accounts[0].identity, Identity::new("Zoe"));
        assert!(!config.accounts[0].trusted);
        assert!(config.accounts[1].trusted);
        assert_eq!(config.default_account.as_deref(), Some("Uni"));
    }

    #[test]
    fn missing_roster_falls_back_to_demo_accounts() {
        let file = write_config("default_account = \"Carol\"\n");
        let config = ConsoleConfig::load(file.path()).unwrap();
        assert_eq!(config.accounts.len(), 4);
    }

    #[test]
    fn empty_roster_is_rejected() {
        let file = write_config("accounts = []\n");
        assert!(ConsoleConfig::load(file.path()).is_err());
    }

    #[test]
    fn malformed_toml_is_rejected() {
        let file = write_config("accounts = [ {");
        assert!(ConsoleConfig::load(file.path()).is_err());
    }
}
