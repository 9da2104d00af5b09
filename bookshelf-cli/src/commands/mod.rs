//! CLI command implementations

mod delete;
mod get;
mod interactive;
mod list;
mod save;

pub use delete::delete;
pub use get::get;
pub use interactive::interactive;
pub use list::list;
pub use save::{add, update, BookArgs};

use anyhow::{bail, Result};
use bookshelf_core::{BookApi, BookManager};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Animated spinner shown while a request is in flight
fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(message);
    pb
}

/// Print the outcome of a one-shot command, failing on an error-flavored status
fn report<A: BookApi>(manager: &BookManager<A>, action: &str) -> Result<()> {
    match manager.status() {
        Some(status) if status.is_error() => {
            eprintln!("{}", status.text());
            bail!("{} failed", action);
        }
        Some(status) => {
            println!("{}", status.text());
            Ok(())
        }
        None => Ok(()),
    }
}
