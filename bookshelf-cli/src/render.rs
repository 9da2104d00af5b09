//! Plain-text rendering of the inventory view

use bookshelf_core::{Book, BookApi, BookForm, BookManager, FormField, FormMode, StatusMessage};
use std::io::{self, Write};

/// `[error] ...` or `[ok] ...`, nothing when there is no message
pub fn status_banner(out: &mut impl Write, status: Option<&StatusMessage>) -> io::Result<()> {
    if let Some(status) = status {
        let tag = if status.is_error() { "error" } else { "ok" };
        writeln!(out, "[{}] {}", tag, status.text())?;
    }
    Ok(())
}

pub fn form(out: &mut impl Write, form: &BookForm, mode: FormMode) -> io::Result<()> {
    let heading = match mode {
        FormMode::Create => "Add a New Book",
        FormMode::Edit { .. } => "Edit Book Details",
    };
    writeln!(out, "== {} ==", heading)?;
    for field in FormField::ALL {
        let locked = field == FormField::Id && mode.is_edit();
        writeln!(
            out,
            "  {:<17} {}{}",
            format!("{}:", field.label()),
            form.get(field),
            if locked { " (locked)" } else { "" }
        )?;
    }
    let action = if mode.is_edit() {
        "submit = Update Book, cancel = Cancel"
    } else {
        "submit = Add Book"
    };
    writeln!(out, "  [{}]", action)
}

/// The record found by fetch-by-id, as pretty JSON
pub fn fetched(out: &mut impl Write, book: Option<&Book>) -> io::Result<()> {
    if let Some(book) = book {
        writeln!(out, "Book Found:")?;
        let json = serde_json::to_string_pretty(book).map_err(io::Error::other)?;
        writeln!(out, "{}", json)?;
    }
    Ok(())
}

pub fn table(out: &mut impl Write, books: &[Book]) -> io::Result<()> {
    if books.is_empty() {
        return writeln!(out, "No books found in the inventory.");
    }

    let rows: Vec<[String; 5]> = books
        .iter()
        .map(|b| {
            [
                b.id.to_string(),
                b.title.clone(),
                b.author.clone(),
                b.publication_year.to_string(),
                b.isbn.clone(),
            ]
        })
        .collect();

    let header = ["ID", "Title", "Author", "Year", "ISBN"].map(String::from);
    let mut widths = [0usize; 5];
    for row in std::iter::once(&header).chain(&rows) {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    for row in std::iter::once(&header).chain(&rows) {
        let line: Vec<String> = row
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect();
        writeln!(out, "{}", line.join("  ").trim_end())?;
    }
    Ok(())
}

/// The whole page. When an edit just started, only the form is shown.
pub fn view<A: BookApi>(out: &mut impl Write, manager: &mut BookManager<A>) -> io::Result<()> {
    status_banner(out, manager.status())?;
    if manager.take_scroll_to_form() {
        return form(out, manager.form(), manager.mode());
    }

    writeln!(out, "Book Inventory Management")?;
    form(out, manager.form(), manager.mode())?;
    writeln!(out, "== Find a Book by ID ==")?;
    fetched(out, manager.fetched())?;
    writeln!(out, "== Available Books ==")?;
    table(out, manager.books())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_empty_table() {
        let text = render(|out| table(out, &[]));
        assert_eq!(text, "No books found in the inventory.\n");
    }

    #[test]
    fn test_table_columns_align() {
        let books = [
            Book::new(1, "Dune", "Frank Herbert", 1965, "978-0441172719"),
            Book::new(12, "It", "Stephen King", 1986, "978-0450411434"),
        ];
        let text = render(|out| table(out, &books));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "ID  Title  Author         Year  ISBN");
        assert_eq!(lines[1], "1   Dune   Frank Herbert  1965  978-0441172719");
        assert_eq!(lines[2], "12  It     Stephen King   1986  978-0450411434");
    }

    #[test]
    fn test_banner_styles() {
        let now = Instant::now();
        let ttl = Duration::from_secs(5);
        let ok = StatusMessage::new("Book found successfully.", now, ttl);
        let err = StatusMessage::new("Error: Book not found.", now, ttl);
        assert_eq!(
            render(|out| status_banner(out, Some(&ok))),
            "[ok] Book found successfully.\n"
        );
        assert_eq!(
            render(|out| status_banner(out, Some(&err))),
            "[error] Error: Book not found.\n"
        );
        assert_eq!(render(|out| status_banner(out, None)), "");
    }

    #[test]
    fn test_edit_form_marks_id_locked() {
        let book = Book::new(4, "Emma", "Jane Austen", 1815, "978-0141439587");
        let text = render(|out| form(out, &BookForm::from(&book), FormMode::Edit { id: 4 }));
        assert!(text.starts_with("== Edit Book Details =="));
        assert!(text.contains("4 (locked)"));
        assert!(text.contains("Cancel"));
    }
}
