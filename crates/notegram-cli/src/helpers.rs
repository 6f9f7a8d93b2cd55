//! Shared CLI helpers — path expansion, terminal notifications, channel prompt.

use std::path::PathBuf;

use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use notegram_core::{ChannelPicker, Notifier};

/// Expand `~` at the start of a path to the user's home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs_next::home_dir() {
            return home.join(rest);
        }
    }
    if path == "~" {
        if let Some(home) = dirs_next::home_dir() {
            return home;
        }
    }
    PathBuf::from(path)
}

// ─────────────────────────────────────────────
// Notifications
// ─────────────────────────────────────────────

/// Prints notices to the terminal.
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn info(&self, message: &str) {
        println!("  {} {}", "✓".green(), message);
    }

    fn error(&self, message: &str) {
        eprintln!("  {} {}", "✗".red(), message);
    }
}

// ─────────────────────────────────────────────
// Channel selection
// ─────────────────────────────────────────────

/// Always answers with the channel given on the command line.
pub struct FixedPicker {
    name: String,
}

impl FixedPicker {
    pub fn new(name: String) -> Self {
        Self { name }
    }
}

impl ChannelPicker for FixedPicker {
    fn choose(&self, _options: &[String]) -> anyhow::Result<Option<String>> {
        Ok(Some(self.name.clone()))
    }
}

/// Numbered menu read with rustyline. Empty input, Ctrl-C or Ctrl-D cancels.
pub struct TerminalPicker;

impl ChannelPicker for TerminalPicker {
    fn choose(&self, options: &[String]) -> anyhow::Result<Option<String>> {
        println!();
        println!("{}", "  Choose a channel".cyan().bold());
        for (i, name) in options.iter().enumerate() {
            println!("  {:>3}  {}", (i + 1).to_string().bold(), name);
        }
        println!();

        let mut rl = DefaultEditor::new()?;
        let prompt = format!("  channel [1-{}]: ", options.len());

        loop {
            let line = match rl.readline(&prompt) {
                Ok(line) => line,
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(None),
                Err(e) => return Err(e.into()),
            };

            let input = line.trim();
            if input.is_empty() {
                return Ok(None);
            }
            match parse_choice(input, options) {
                Some(name) => return Ok(Some(name)),
                None => println!("  {}", format!("no channel '{input}'").dimmed()),
            }
        }
    }
}

/// Accept a 1-based index or an exact channel name.
fn parse_choice(input: &str, options: &[String]) -> Option<String> {
    if let Ok(n) = input.parse::<usize>() {
        return n
            .checked_sub(1)
            .and_then(|i| options.get(i))
            .cloned();
    }
    options.iter().find(|o| o.as_str() == input).cloned()
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
