//! List command implementation

use super::{report, spinner};
use crate::render;
use anyhow::Result;
use bookshelf_core::{BookManager, ClientConfig, HttpBookApi};

/// Print every book in the inventory
pub async fn list(config: &ClientConfig, json: bool) -> Result<()> {
    let mut manager = BookManager::with_config(HttpBookApi::new(config), config);

    let pb = spinner("Fetching books...");
    manager.mount().await;
    pb.finish_and_clear();

    report(&manager, "list")?;

    if json {
        println!("{}", serde_json::to_string_pretty(manager.books())?);
    } else {
        render::table(&mut std::io::stdout().lock(), manager.books())?;
    }
    Ok(())
}
