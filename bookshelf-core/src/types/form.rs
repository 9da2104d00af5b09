//! Editable form state for a single book record

use super::Book;
use crate::error::ValidationError;
use std::fmt;
use std::str::FromStr;

/// The five fields of the book form, in validation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Id,
    Title,
    Author,
    PublicationYear,
    Isbn,
}

impl FormField {
    /// All fields in the order they are validated and displayed
    pub const ALL: [FormField; 5] = [
        FormField::Id,
        FormField::Title,
        FormField::Author,
        FormField::PublicationYear,
        FormField::Isbn,
    ];

    /// Wire key of the field, as used in JSON and in validation messages
    pub fn key(self) -> &'static str {
        match self {
            FormField::Id => "id",
            FormField::Title => "title",
            FormField::Author => "author",
            FormField::PublicationYear => "publicationYear",
            FormField::Isbn => "isbn",
        }
    }

    /// Placeholder label shown next to the input
    pub fn label(self) -> &'static str {
        match self {
            FormField::Id => "Book ID",
            FormField::Title => "Title",
            FormField::Author => "Author",
            FormField::PublicationYear => "Publication Year",
            FormField::Isbn => "ISBN",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FormField {
    type Err = String;

    /// Accepts the wire key (case-insensitive) plus `year` as a shorthand
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "id" => Ok(FormField::Id),
            "title" => Ok(FormField::Title),
            "author" => Ok(FormField::Author),
            "publicationyear" | "year" => Ok(FormField::PublicationYear),
            "isbn" => Ok(FormField::Isbn),
            other => Err(format!("unknown field '{}'", other)),
        }
    }
}

/// Which endpoint a submission targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    /// Submitting adds a new record
    Create,

    /// Submitting updates the record with this id; the id field is locked
    Edit { id: i64 },
}

impl FormMode {
    pub fn is_edit(&self) -> bool {
        matches!(self, FormMode::Edit { .. })
    }
}

/// Raw text of every input, exactly as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookForm {
    pub id: String,
    pub title: String,
    pub author: String,
    pub publication_year: String,
    pub isbn: String,
}

impl BookForm {
    /// An empty form
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text of a field
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Id => &self.id,
            FormField::Title => &self.title,
            FormField::Author => &self.author,
            FormField::PublicationYear => &self.publication_year,
            FormField::Isbn => &self.isbn,
        }
    }

    /// Replace the text of a field
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Id => self.id = value,
            FormField::Title => self.title = value,
            FormField::Author => self.author = value,
            FormField::PublicationYear => self.publication_year = value,
            FormField::Isbn => self.isbn = value,
        }
    }

    /// Whether every field is blank
    pub fn is_empty(&self) -> bool {
        FormField::ALL
            .iter()
            .all(|field| self.get(*field).trim().is_empty())
    }

    /// Validate the form and build the record it describes.
    ///
    /// Stops at the first failing check: blank fields in [`FormField::ALL`] order,
    /// then the publication year, then the id.
    pub fn validate(&self) -> Result<Book, ValidationError> {
        if let Some(field) = FormField::ALL
            .into_iter()
            .find(|field| self.get(*field).trim().is_empty())
        {
            return Err(ValidationError::EmptyField(field));
        }

        let publication_year = self
            .publication_year
            .trim()
            .parse::<i32>()
            .map_err(|_| ValidationError::InvalidYear)?;
        let id = self
            .id
            .trim()
            .parse::<i64>()
            .map_err(|_| ValidationError::InvalidId)?;

        Ok(Book {
            id,
            title: self.title.trim().to_string(),
            author: self.author.trim().to_string(),
            publication_year,
            isbn: self.isbn.trim().to_string(),
        })
    }
}

impl From<&Book> for BookForm {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.to_string(),
            title: book.title.clone(),
            author: book.author.clone(),
            publication_year: book.publication_year.to_string(),
            isbn: book.isbn.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> BookForm {
        BookForm {
            id: "12".into(),
            title: "Middlemarch".into(),
            author: "George Eliot".into(),
            publication_year: "1871".into(),
            isbn: "978-0141439549".into(),
        }
    }

    #[test]
    fn test_valid_form_builds_book() {
        let book = filled().validate().unwrap();
        assert_eq!(book, Book::new(12, "Middlemarch", "George Eliot", 1871, "978-0141439549"));
    }

    #[test]
    fn test_values_are_trimmed() {
        let mut form = filled();
        form.set(FormField::Title, "  Middlemarch ");
        form.set(FormField::PublicationYear, " 1871 ");
        let book = form.validate().unwrap();
        assert_eq!(book.title, "Middlemarch");
        assert_eq!(book.publication_year, 1871);
    }

    #[test]
    fn test_first_blank_field_wins() {
        let mut form = filled();
        form.set(FormField::Author, "   ");
        form.set(FormField::Isbn, "");
        assert_eq!(
            form.validate(),
            Err(ValidationError::EmptyField(FormField::Author))
        );

        assert_eq!(
            BookForm::new().validate(),
            Err(ValidationError::EmptyField(FormField::Id))
        );
    }

    #[test]
    fn test_non_numeric_year_rejected() {
        let mut form = filled();
        form.set(FormField::PublicationYear, "eighteen-seventy");
        assert_eq!(form.validate(), Err(ValidationError::InvalidYear));
    }

    #[test]
    fn test_non_numeric_id_rejected_after_year() {
        let mut form = filled();
        form.set(FormField::Id, "abc");
        assert_eq!(form.validate(), Err(ValidationError::InvalidId));

        form.set(FormField::PublicationYear, "x");
        assert_eq!(form.validate(), Err(ValidationError::InvalidYear));
    }

    #[test]
    fn test_field_parsing() {
        assert_eq!("title".parse::<FormField>(), Ok(FormField::Title));
        assert_eq!("publicationYear".parse::<FormField>(), Ok(FormField::PublicationYear));
        assert_eq!("year".parse::<FormField>(), Ok(FormField::PublicationYear));
        assert!("publisher".parse::<FormField>().is_err());
    }

    #[test]
    fn test_form_from_book_round_trips_through_validate() {
        let book = Book::new(3, "Beloved", "Toni Morrison", 1987, "978-1400033416");
        let form = BookForm::from(&book);
        assert_eq!(form.publication_year, "1987");
        assert_eq!(form.validate().unwrap(), book);
    }
}
