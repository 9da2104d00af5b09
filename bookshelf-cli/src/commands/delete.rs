//! Delete command implementation

use super::{report, spinner};
use anyhow::{Context, Result};
use bookshelf_core::{BookManager, ClientConfig, HttpBookApi};
use std::io::{self, BufRead, Write};

/// Ask on the terminal; anything but `y`/`yes` declines
fn ask_stdin(prompt: &str) -> bool {
    print!("{} [y/N] ", prompt);
    if io::stdout().flush().is_err() {
        return false;
    }
    let mut answer = String::new();
    match io::stdin().lock().read_line(&mut answer) {
        Ok(_) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
        Err(_) => false,
    }
}

/// Delete a book after confirmation
pub async fn delete(config: &ClientConfig, id: &str, yes: bool) -> Result<()> {
    let id: i64 = id
        .trim()
        .parse()
        .with_context(|| format!("'{}' is not a valid book ID", id))?;
    let mut manager = BookManager::with_config(HttpBookApi::new(config), config);

    // The spinner only starts once the user has agreed
    let mut pb = None;
    let mut confirm = |prompt: &str| {
        let confirmed = yes || ask_stdin(prompt);
        if confirmed {
            pb = Some(spinner("Deleting book..."));
        }
        confirmed
    };
    manager.delete_book(id, &mut confirm).await;

    match pb {
        Some(pb) => pb.finish_and_clear(),
        None => {
            println!("Delete cancelled.");
            return Ok(());
        }
    }
    report(&manager, "delete")
}
