//! Add and update command implementations

use super::{report, spinner};
use anyhow::{bail, Context, Result};
use bookshelf_core::{BookApi, BookManager, ClientConfig, FormField, HttpBookApi};
use clap::Args;

/// Form fields accepted on the command line
#[derive(Debug, Default, Args)]
pub struct BookArgs {
    /// Title
    #[arg(long)]
    pub title: Option<String>,

    /// Author
    #[arg(long)]
    pub author: Option<String>,

    /// Publication year
    #[arg(long)]
    pub year: Option<String>,

    /// ISBN
    #[arg(long)]
    pub isbn: Option<String>,
}

impl BookArgs {
    /// Copy every given value into the form
    fn apply<A: BookApi>(self, manager: &mut BookManager<A>) {
        let values = [
            (FormField::Title, self.title),
            (FormField::Author, self.author),
            (FormField::PublicationYear, self.year),
            (FormField::Isbn, self.isbn),
        ];
        for (field, value) in values {
            if let Some(value) = value {
                manager.set_field(field, value);
            }
        }
    }
}

/// Add a new book. Missing fields are left blank and rejected by validation.
pub async fn add(config: &ClientConfig, id: Option<String>, fields: BookArgs) -> Result<()> {
    let mut manager = BookManager::with_config(HttpBookApi::new(config), config);
    if let Some(id) = id {
        manager.set_field(FormField::Id, id);
    }
    fields.apply(&mut manager);

    let pb = spinner("Adding book...");
    manager.submit().await;
    pb.finish_and_clear();

    report(&manager, "add")
}

/// Update an existing book, changing only the given fields
pub async fn update(config: &ClientConfig, id: &str, fields: BookArgs) -> Result<()> {
    let id: i64 = id
        .trim()
        .parse()
        .with_context(|| format!("'{}' is not a valid book ID", id))?;
    let mut manager = BookManager::with_config(HttpBookApi::new(config), config);

    let pb = spinner("Loading book...");
    manager.mount().await;
    pb.finish_and_clear();
    if manager.status().is_some_and(|s| s.is_error()) {
        return report(&manager, "update");
    }

    manager.begin_edit_by_id(id);
    if !manager.mode().is_edit() {
        report(&manager, "update")?;
        bail!("update failed");
    }
    fields.apply(&mut manager);

    let pb = spinner("Updating book...");
    manager.submit().await;
    pb.finish_and_clear();

    report(&manager, "update")
}
