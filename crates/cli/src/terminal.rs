//! Terminal implementations of the gallery's interaction traits.

use std::io::Write;

use homewatch_gallery::{ConfirmDialog, DeletionTarget, Notifier};
use tokio::io::{AsyncBufReadExt, BufReader};

/// Prints toasts to stdout and alerts to stderr.
#[derive(Debug, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn toast(&self, message: &str) {
        println!("{message}");
    }

    fn alert(&self, message: &str) {
        eprintln!("{message}");
    }
}

/// Asks for confirmation on stdin, unless `assume_yes` is set.
#[derive(Debug)]
pub struct StdinConfirm {
    pub assume_yes: bool,
}

impl ConfirmDialog for StdinConfirm {
    async fn confirm(&self, target: &DeletionTarget) -> bool {
        if self.assume_yes {
            return true;
        }

        print!(
            "Delete {} video '{}'? [y/N] ",
            target.source.label(),
            target.identifier
        );
        let _ = std::io::stdout().flush();

        let mut line = String::new();
        let mut stdin = BufReader::new(tokio::io::stdin());
        match stdin.read_line(&mut line).await {
            Ok(_) => is_yes(&line),
            Err(e) => {
                tracing::warn!(error = %e, "Could not read confirmation");
                false
            }
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
