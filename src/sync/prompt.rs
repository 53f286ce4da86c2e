// repo-sync: Multi-repository sync helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Operator confirmation.
//!
//! ```text
//! "Pull updates for 2 repositories? [y/N] "
//!   TTY      single key, no Enter
//!   piped    one line from stdin
//!   y / Y    yes; anything else, EOF included, is no
//! ```
//!
//! Blocks until answered; there is no timeout.

use std::io::BufRead;

use console::Term;

use crate::error::SyncResult;

/// Yes/no question to the operator.
pub trait Confirm {
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be written or read.
    fn confirm(&mut self, question: &str) -> SyncResult<bool>;
}

/// Only a lone `y` or `Y` counts as yes.
#[must_use]
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim(), "y" | "Y")
}

/// Confirmation on the controlling terminal.
#[derive(Debug)]
pub struct TermConfirm {
    term: Term,
}

impl TermConfirm {
    #[must_use]
    pub fn stdout() -> Self {
        Self {
            term: Term::stdout(),
        }
    }
}

impl Confirm for TermConfirm {
    fn confirm(&mut self, question: &str) -> SyncResult<bool> {
        self.term.write_str(&format!("{question} [y/N] "))?;
        self.term.flush()?;

        let answer = if self.term.is_term() {
            let key = self.term.read_char()?;
            self.term.write_line(&key.to_string())?;
            key.to_string()
        } else {
            let mut line = String::new();
            std::io::stdin().lock().read_line(&mut line)?;
            line
        };
        Ok(is_affirmative(&answer))
    }
}
