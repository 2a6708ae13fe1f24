//! Interactive input capabilities
//!
//! The shell and the update workflow talk to the operator only through the
//! [`Prompter`] trait, so the same flow runs against the dialoguer picker on
//! a real terminal, a plain line-oriented fallback on a pipe, or a scripted
//! double in tests.

use std::io::{self, BufRead, IsTerminal, Write};

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use log::debug;

use crate::error::Result;

/// Input capabilities the interactive flows consume
pub trait Prompter {
    /// Pick one item from a list; `None` means the operator backed out
    fn select_one(&self, prompt: &str, items: &[String]) -> Result<Option<usize>>;

    /// Prompt for free text with an editable default
    fn prompt_text(&self, label: &str, default: &str) -> Result<String>;

    /// Yes/no gate; only an explicit affirmative returns `true`
    fn confirm(&self, prompt: &str) -> Result<bool>;
}

/// Pick a prompter implementation by terminal capability.
///
/// A real TTY gets the dialoguer picker; piped stdin gets the line-oriented
/// fallback so the tool stays scriptable.
pub fn auto_prompter() -> Box<dyn Prompter> {
    if io::stdin().is_terminal() {
        debug!("stdin is a TTY, using dialoguer prompter");
        Box::new(DialoguerPrompter)
    } else {
        debug!("stdin is not a TTY, using line prompter");
        Box::new(LinePrompter)
    }
}

/// Keyboard-driven prompter backed by dialoguer
pub struct DialoguerPrompter;

impl Prompter for DialoguerPrompter {
    fn select_one(&self, prompt: &str, items: &[String]) -> Result<Option<usize>> {
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact_opt()?;
        Ok(selection)
    }

    fn prompt_text(&self, label: &str, default: &str) -> Result<String> {
        let value: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(label)
            .with_initial_text(default)
            .allow_empty(true)
            .interact_text()?;
        Ok(value)
    }

    fn confirm(&self, prompt: &str) -> Result<bool> {
        let answer = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .default(false)
            .interact()?;
        Ok(answer)
    }
}

/// Plain numbered-list prompter reading stdin lines
pub struct LinePrompter;

impl LinePrompter {
    fn read_line(&self) -> Result<String> {
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line.trim().to_string())
    }
}

impl Prompter for LinePrompter {
    fn select_one(&self, prompt: &str, items: &[String]) -> Result<Option<usize>> {
        // Only an empty line cancels; malformed input re-prompts so a typo
        // does not read as a deliberate back-out. EOF reads as empty.
        loop {
            println!("{}:", prompt);
            for (i, item) in items.iter().enumerate() {
                println!("  {}) {}", i + 1, item);
            }
            print!("Choice [1-{}, empty to cancel]: ", items.len());
            io::stdout().flush()?;

            let line = self.read_line()?;
            if line.is_empty() {
                return Ok(None);
            }
            match line.parse::<usize>() {
                Ok(n) if (1..=items.len()).contains(&n) => return Ok(Some(n - 1)),
                _ => println!("Invalid choice: {}", line),
            }
        }
    }

    fn prompt_text(&self, label: &str, default: &str) -> Result<String> {
        if default.is_empty() {
            print!("{}: ", label);
        } else {
            print!("{} [{}]: ", label, default);
        }
        io::stdout().flush()?;

        let line = self.read_line()?;
        if line.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(line)
        }
    }

    fn confirm(&self, prompt: &str) -> Result<bool> {
        print!("{} [y/N]: ", prompt);
        io::stdout().flush()?;

        let answer = self.read_line()?.to_lowercase();
        Ok(matches!(answer.as_str(), "y" | "yes"))
    }
}
