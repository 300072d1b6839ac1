//! The identity-provider seam.
//!
//! The core never connects wallets or sessions; it asks this trait who is
//! acting and whether they hold the trusted role.

use serde::{Deserialize, Serialize};
use skillchain_types::Identity;

/// Supplies the current actor and trusted-roster membership.
pub trait AccountContext {
    /// The identity performing the next operation.
    fn current(&self) -> Identity;

    /// Whether an identity belongs to the fixed trusted roster.
    fn is_trusted(&self, identity: &Identity) -> bool;

    /// The finite, enumerable identity set.
    fn identities(&self) -> Vec<Identity>;
}

/// One configured account.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RosterEntry {
    pub identity: Identity,
    /// Trusted entities (universities, employers) may verify skills.
    #[serde(default)]
    pub trusted: bool,
}

/// Fixed account roster with a switchable current identity.
///
/// The roster itself is configuration: nothing mutates membership or
/// trust flags at runtime.
#[derive(Clone, Debug)]
pub struct RosterAccounts {
    entries: Vec<RosterEntry>,
    current: usize,
}

impl RosterAccounts {
    /// # Panics
    /// Panics if `entries` is empty — there must always be a current
    /// identity.
    pub fn new(entries: Vec<RosterEntry>) -> Self {
        assert!(!entries.is_empty(), "account roster must not be empty");
        Self {
            entries,
            current: 0,
        }
    }

    /// Switch the current identity by name. Returns false (and leaves the
    /// current identity unchanged) if no such account exists.
    pub fn switch_to(&mut self, name: &str) -> bool {
        match self
            .entries
            .iter()
            .position(|e| e.identity.as_str() == name)
        {
            Some(index) => {
                self.current = index;
                true
            }
            None => false,
        }
    }

    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }
}

impl AccountContext for RosterAccounts {
    fn current(&self) -> Identity {
        self.entries[self.current].identity.clone()
    }

    fn is_trusted(&self, identity: &Identity) -> bool {
        self.entries
            .iter()
            .any(|e| e.trusted && &e.identity == identity)
    }

    fn identities(&self) -> Vec<Identity> {
        self.entries.iter().map(|e| e.identity.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> RosterAccounts {
        RosterAccounts::new(vec![
            RosterEntry {
                identity: Identity::new("Alice"),
                trusted: false,
            },
            RosterEntry {
                identity: Identity::new("Carol"),
                trusted: true,
            },
        ])
    }

    #[test]
    fn first_entry_is_current() {
        assert_eq!(roster().current(), Identity::new("Alice"));
    }

    #[test]
    fn switch_to_known_account() {
        let mut accounts = roster();
        assert!(accounts.switch_to("Carol"));
        assert_eq!(accounts.current(), Identity::new("Carol"));
    }

    #[test]
    fn switch_to_unknown_account_is_rejected() {
        let mut accounts = roster();
        assert!(!accounts.switch_to("Mallory"));
        assert_eq!(accounts.current(), Identity::new("Alice"));
    }

    #[test]
    fn trusted_flag_respected() {
        let accounts = roster();
        assert!(!accounts.is_trusted(&Identity::new("Alice")));
        assert!(accounts.is_trusted(&Identity::new("Carol")));
        assert!(!accounts.is_trusted(&Identity::new("Mallory")));
    }
}
