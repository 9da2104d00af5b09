//! Fetch-by-id command implementation

use super::{report, spinner};
use anyhow::Result;
use bookshelf_core::{BookManager, ClientConfig, HttpBookApi};

/// Look up a single book
pub async fn get(config: &ClientConfig, id: &str, json: bool) -> Result<()> {
    let mut manager = BookManager::with_config(HttpBookApi::new(config), config);
    manager.set_id_to_fetch(id);

    let pb = spinner("Fetching book...");
    manager.fetch_by_id().await;
    pb.finish_and_clear();

    if json {
        // Keep stdout parseable: only the record goes there
        if let Some(book) = manager.fetched() {
            println!("{}", serde_json::to_string_pretty(book)?);
            return Ok(());
        }
    }

    report(&manager, "get")?;
    crate::render::fetched(&mut std::io::stdout().lock(), manager.fetched())?;
    Ok(())
}
