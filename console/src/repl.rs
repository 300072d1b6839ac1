//! Interactive command loop over the skill registry.
//!
//! Each command maps 1:1 onto the registry surface; errors and commit
//! outcomes come back through the notice channel, and the loop plays the
//! external scheduler's role of clearing expired notices.

use skillchain_notify::{Notice, NoticeKind};
use skillchain_registry::{
    AccountContext, PendingAction, PendingKind, RosterAccounts, SkillRegistry,
};
use skillchain_store_memory::MemoryStore;
use skillchain_types::{Skill, SkillId, Timestamp};
use std::io::{self, BufRead, Write};

pub type Registry = SkillRegistry<MemoryStore, RosterAccounts>;

pub struct Repl {
    registry: Registry,
    json: bool,
    last_notice: Option<Notice>,
}

impl Repl {
    pub fn new(registry: Registry, json: bool) -> Self {
        Self {
            registry,
            json,
            last_notice: None,
        }
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        println!("SkillChain console. Type \"help\" for commands.");
        self.prompt()?;

        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = line?;
            self.registry.notifier_mut().clear_expired(Timestamp::now());
            if !self.handle(line.trim()) {
                break;
            }
            self.render_notice();
            self.prompt()?;
        }
        Ok(())
    }

    fn prompt(&self) -> anyhow::Result<()> {
        let me = self.registry.current_identity();
        let badge = if self.registry.accounts().is_trusted(&me) {
            " (trusted)"
        } else {
            ""
        };
        print!("{me}{badge}> ");
        io::stdout().flush()?;
        Ok(())
    }

    /// Returns false when the session should end.
    fn handle(&mut self, line: &str) -> bool {
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((c, r)) => (c, r.trim()),
            None => (line, ""),
        };
        match command {
            "" => {}
            "mint" => self.mint(rest),
            "endorse" => self.endorse(rest),
            "verify" => self.verify(rest),
            "confirm" => self.confirm(),
            "cancel" => self.cancel(),
            "list" => self.list(rest, false),
            "mine" => self.list(rest, true),
            "show" => self.show(rest),
            "account" => self.switch_account(rest),
            "accounts" => self.print_accounts(),
            "help" => print_help(),
            "quit" | "exit" => return false,
            other => println!("unknown command {other:?}, try \"help\""),
        }
        true
    }

    fn mint(&mut self, metadata: &str) {
        if self.registry.request_mint(metadata).is_ok() {
            if let Some(PendingAction::PreviewMint { metadata }) = self.registry.pending() {
                println!("previewing skill {metadata:?}");
                println!("once minted it cannot be edited. \"confirm\" to mint, \"cancel\" to discard.");
            }
        }
    }

    fn endorse(&mut self, rest: &str) {
        let mut parts = rest.split_whitespace();
        let id = parts.next().unwrap_or("");
        let stake = parts.next().unwrap_or("");
        if self.registry.request_endorse(id, stake).is_ok() {
            if let Some(&PendingAction::ConfirmEndorse { skill, stake }) = self.registry.pending()
            {
                match self.registry.skill(skill) {
                    Ok(target) => println!(
                        "about to stake {stake} tokens on skill #{skill} {:?} owned by {}",
                        target.metadata, target.owner
                    ),
                    Err(_) => println!("about to stake {stake} tokens on skill #{skill}"),
                }
                println!("\"confirm\" to apply, \"cancel\" to discard.");
            }
        }
    }

    fn verify(&mut self, rest: &str) {
        if self.registry.request_verify(rest).is_ok() {
            if let Some(&PendingAction::ConfirmVerify { skill }) = self.registry.pending() {
                println!("about to verify skill #{skill} as {}", self.registry.current_identity());
                println!("verification is permanent. \"confirm\" to apply, \"cancel\" to discard.");
            }
        }
    }

    fn confirm(&mut self) {
        match self.registry.pending().map(PendingAction::kind) {
            Some(PendingKind::Mint) => {
                let _ = self.registry.commit_mint();
            }
            Some(PendingKind::Endorse) => {
                let _ = self.registry.commit_endorse();
            }
            Some(PendingKind::Verify) => {
                let _ = self.registry.commit_verify();
            }
            None => println!("nothing is awaiting confirmation"),
        }
    }

    fn cancel(&mut self) {
        match self.registry.pending().map(PendingAction::kind) {
            Some(PendingKind::Mint) => {
                let _ = self.registry.cancel_mint();
            }
            Some(PendingKind::Endorse) => {
                let _ = self.registry.cancel_endorse();
            }
            Some(PendingKind::Verify) => {
                let _ = self.registry.cancel_verify();
            }
            None => println!("nothing is awaiting confirmation"),
        }
    }

    fn list(&mut self, rest: &str, mine: bool) {
        let filter = (!rest.is_empty()).then_some(rest);
        let listed = if mine {
            self.registry.my_skills(filter)
        } else {
            self.registry.skills(filter)
        };
        match listed {
            Ok(skills) if skills.is_empty() => println!("no skills on the ledger"),
            Ok(skills) => {
                if self.json {
                    match serde_json::to_string_pretty(&skills) {
                        Ok(json) => println!("{json}"),
                        Err(e) => println!("failed to encode listing: {e}"),
                    }
                } else {
                    for skill in &skills {
                        println!("{}", format_skill(skill));
                    }
                }
            }
            Err(e) => println!("{e}"),
        }
    }

    fn show(&mut self, rest: &str) {
        let Some(id) = SkillId::parse(rest.trim()) else {
            println!("usage: show <skill id>");
            return;
        };
        match self.registry.skill(id) {
            Ok(skill) => {
                println!("{}", format_skill(&skill));
                println!("minted at {}", skill.minted_at);
                match self.registry.endorsement_history(id) {
                    Ok(history) if history.is_empty() => println!("no endorsements yet"),
                    Ok(history) => {
                        for record in &history {
                            println!(
                                "  endorsed by {} with {} tokens at {}",
                                record.endorser, record.stake, record.timestamp
                            );
                        }
                    }
                    Err(e) => println!("{e}"),
                }
            }
            Err(e) => println!("{e}"),
        }
    }

    fn switch_account(&mut self, name: &str) {
        if name.is_empty() {
            println!("usage: account <name>");
            return;
        }
        if self.registry.accounts_mut().switch_to(name) {
            let me = self.registry.current_identity();
            if self.registry.accounts().is_trusted(&me) {
                println!("acting as {me} (trusted entity, may verify skills)");
            } else {
                println!("acting as {me}");
            }
        } else {
            println!("no account named {name:?} in the roster");
        }
    }

    fn print_accounts(&self) {
        let me = self.registry.current_identity();
        for entry in self.registry.accounts().entries() {
            let marker = if entry.identity == me { "*" } else { " " };
            let badge = if entry.trusted { " (trusted)" } else { "" };
            println!("{marker} {}{badge}", entry.identity);
        }
    }

    fn render_notice(&mut self) {
        let current = self.registry.notifier().current().cloned();
        if let Some(notice) = &current {
            if current != self.last_notice {
                match notice.kind {
                    NoticeKind::Success => println!("ok: {}", notice.text),
                    NoticeKind::Error => println!("error: {}", notice.text),
                }
            }
        }
        self.last_notice = current;
    }
}

fn format_skill(skill: &Skill) -> String {
    let status = match &skill.verified_by {
        Some(authority) => format!("verified by {authority}"),
        None => "pending verification".to_string(),
    };
    format!(
        "#{} {:?} by {} | score {} | {} endorsements | {}",
        skill.id, skill.metadata, skill.owner, skill.score, skill.endorsements, status
    )
}

fn print_help() {
    println!("commands:");
    println!("  mint <description>      stage a new skill preview");
    println!("  endorse <id> <stake>    stage a staked endorsement");
    println!("  verify <id>             stage a verification (trusted accounts only)");
    println!("  confirm                 apply the staged action");
    println!("  cancel                  discard the staged action");
    println!("  list [filter]           list the full ledger");
    println!("  mine [filter]           list skills owned by the current account");
    println!("  show <id>               show one skill and its endorsement history");
    println!("  account <name>          switch the acting account");
    println!("  accounts                list the roster");
    println!("  quit                    exit");
}
