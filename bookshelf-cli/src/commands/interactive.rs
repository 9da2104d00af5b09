//! Interactive session: a line-oriented version of the inventory page

use crate::render;
use anyhow::{bail, Result};
use bookshelf_core::{BookApi, BookManager, ClientConfig, Confirm, FormField, HttpBookApi};
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use std::time::Instant;

const HELP: &str = "\
Commands:
  list                  reload the list of books
  set <field> <value>   fill a form field (id, title, author, year, isbn)
  submit                add or update the book in the form
  cancel                clear the form and leave edit mode
  edit <id>             load a listed book into the form
  delete <id>           delete a book (asks first)
  fetch <id>            look up a single book
  show                  redraw the page
  help                  show this text
  quit                  leave";

/// One line of user input
#[derive(Debug, PartialEq, Eq)]
enum Action {
    List,
    Set(FormField, String),
    Submit,
    Cancel,
    Edit(i64),
    Delete(i64),
    Fetch(String),
    Show,
    Help,
    Quit,
}

fn parse_id(arg: &str) -> Result<i64> {
    match arg.trim().parse() {
        Ok(id) => Ok(id),
        Err(_) => bail!("'{}' is not a valid book ID", arg.trim()),
    }
}

impl FromStr for Action {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (command, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        Ok(match command.to_ascii_lowercase().as_str() {
            "list" | "refresh" => Action::List,
            "set" => {
                let (field, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                let field = FormField::from_str(field).map_err(anyhow::Error::msg)?;
                Action::Set(field, value.trim().to_string())
            }
            "submit" => Action::Submit,
            "cancel" => Action::Cancel,
            "edit" => Action::Edit(parse_id(rest)?),
            "delete" => Action::Delete(parse_id(rest)?),
            "fetch" => Action::Fetch(rest.to_string()),
            "show" | "" => Action::Show,
            "help" | "?" => Action::Help,
            "quit" | "exit" => Action::Quit,
            other => bail!("unknown command '{}', try 'help'", other),
        })
    }
}

/// Reads answers and writes prompts on the session's streams
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    /// Next input line, `None` at end of input
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

impl<R: BufRead, W: Write> Confirm for Prompt<R, W> {
    fn confirm(&mut self, prompt: &str) -> bool {
        if write!(self.output, "{} [y/N] ", prompt)
            .and_then(|_| self.output.flush())
            .is_err()
        {
            return false;
        }
        match self.read_line() {
            Ok(Some(answer)) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
            _ => false,
        }
    }
}

/// The inventory page driven by text commands
pub struct Session<A, R, W> {
    manager: BookManager<A>,
    prompt: Prompt<R, W>,
}

impl<A: BookApi, R: BufRead, W: Write> Session<A, R, W> {
    pub fn new(manager: BookManager<A>, input: R, output: W) -> Self {
        Self {
            manager,
            prompt: Prompt { input, output },
        }
    }

    /// Load the list, then handle commands until `quit` or end of input
    pub async fn run(&mut self) -> Result<()> {
        self.manager.mount().await;
        self.redraw()?;

        loop {
            write!(self.prompt.output, "> ")?;
            self.prompt.output.flush()?;

            let Some(line) = self.prompt.read_line()? else {
                break;
            };
            self.manager.expire_status(Instant::now());

            let action = match line.parse::<Action>() {
                Ok(action) => action,
                Err(e) => {
                    writeln!(self.prompt.output, "{}", e)?;
                    continue;
                }
            };
            tracing::debug!(?action, "Handling command");

            if !self.handle(action).await? {
                break;
            }
        }
        Ok(())
    }

    /// Returns `false` when the session should end
    async fn handle(&mut self, action: Action) -> Result<bool> {
        match action {
            Action::List => self.manager.load_books().await,
            Action::Set(field, value) => self.manager.set_field(field, value),
            Action::Submit => self.manager.submit().await,
            Action::Cancel => self.manager.reset_form(),
            Action::Edit(id) => self.manager.begin_edit_by_id(id),
            Action::Delete(id) => self.manager.delete_book(id, &mut self.prompt).await,
            Action::Fetch(id) => {
                self.manager.set_id_to_fetch(id);
                self.manager.fetch_by_id().await;
            }
            Action::Show => {}
            Action::Help => {
                writeln!(self.prompt.output, "{}", HELP)?;
                return Ok(true);
            }
            Action::Quit => return Ok(false),
        }
        self.redraw()?;
        Ok(true)
    }

    fn redraw(&mut self) -> io::Result<()> {
        render::view(&mut self.prompt.output, &mut self.manager)
    }
}

/// Run an interactive session on the terminal
pub async fn interactive(config: &ClientConfig) -> Result<()> {
    let manager = BookManager::with_config(HttpBookApi::new(config), config);
    let stdin = io::stdin();
    let mut session = Session::new(manager, stdin.lock(), io::stdout());
    session.run().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookshelf_core::{Book, MemoryBookApi};
    use std::io::Cursor;

    fn run(books: Vec<Book>, input: &str) -> (String, BookManager<MemoryBookApi>) {
        let manager = BookManager::new(MemoryBookApi::with_books(books));
        let mut session = Session::new(manager, Cursor::new(input.to_string()), Vec::new());
        tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap()
            .block_on(session.run())
            .unwrap();
        let Session { manager, prompt } = session;
        (String::from_utf8(prompt.output).unwrap(), manager)
    }

    fn dune() -> Book {
        Book::new(1, "Dune", "Frank Herbert", 1965, "978-0441172719")
    }

    #[test]
    fn test_parse_actions() {
        assert_eq!("list".parse::<Action>().unwrap(), Action::List);
        assert_eq!(
            "set title  The Left Hand of Darkness ".parse::<Action>().unwrap(),
            Action::Set(FormField::Title, "The Left Hand of Darkness".into())
        );
        assert_eq!(
            "set year 1969".parse::<Action>().unwrap(),
            Action::Set(FormField::PublicationYear, "1969".into())
        );
        assert_eq!("EDIT 4".parse::<Action>().unwrap(), Action::Edit(4));
        assert_eq!("fetch".parse::<Action>().unwrap(), Action::Fetch(String::new()));
        assert!("delete x".parse::<Action>().is_err());
        assert!("set publisher Ace".parse::<Action>().is_err());
        assert!("dance".parse::<Action>().is_err());
    }

    #[test]
    fn test_add_through_session() {
        let input = "set id 2\nset title Solaris\nset author Stanislaw Lem\nset year 1961\nset isbn 978-0156027601\nsubmit\nquit\n";
        let (output, manager) = run(vec![dune()], input);

        assert!(output.contains("[ok] Book added successfully."));
        assert_eq!(manager.books().len(), 2);
        assert!(manager.form().is_empty());
    }

    #[test]
    fn test_submit_with_blank_field_names_it() {
        let (output, manager) = run(vec![], "set id 2\nsubmit\nquit\n");
        assert!(output.contains("[error] Error: Please fill out the 'title' field."));
        assert_eq!(manager.api().request_count(), 1);
    }

    #[test]
    fn test_delete_asks_for_confirmation() {
        let (output, manager) = run(vec![dune()], "delete 1\nn\ndelete 1\ny\nquit\n");
        assert_eq!(
            output
                .matches("Are you sure you want to delete this book? [y/N]")
                .count(),
            2
        );
        assert!(output.contains("[ok] Book deleted successfully"));
        assert!(manager.books().is_empty());
    }

    #[test]
    fn test_edit_shows_form_then_cancel_clears() {
        let (output, manager) = run(vec![dune()], "edit 1\ncancel\n");
        assert!(output.contains("[ok] Editing book: \"Dune\""));
        assert!(output.contains("== Edit Book Details =="));
        assert!(manager.form().is_empty());
        assert!(!manager.mode().is_edit());
    }

    #[test]
    fn test_fetch_missing_book() {
        let (output, manager) = run(vec![dune()], "fetch 1\nfetch 9\n");
        assert!(output.contains("Book Found:"));
        assert!(output.contains("[error] Error: Book not found."));
        assert!(manager.fetched().is_none());
    }

    #[test]
    fn test_bad_command_keeps_session_alive() {
        let (output, _) = run(vec![], "frobnicate\nhelp\nquit\n");
        assert!(output.contains("unknown command 'frobnicate'"));
        assert!(output.contains("Commands:"));
    }
}
