use super::{References, Resource, MAX_YEAR};
use crate::model::{Author, Book, BookChange, BookFilter, BookId, Publisher};
use async_trait::async_trait;
use catalog_framework::{CatalogEntity, Checks, InputError, Outcome, ResourceClient, Validator};

/// Year of the Gutenberg Bible.
const FIRST_YEAR: i32 = 1450;

/// The author and publisher catalogues a book refers to.
pub type BookContext = (ResourceClient<Author>, ResourceClient<Publisher>);

#[derive(Debug, Default, Clone, Copy)]
pub struct BookValidator;

/// ISBN-10 or ISBN-13, hyphens allowed. An ISBN-10 may end in `X`.
fn is_isbn(value: &str) -> bool {
    let digits: Vec<char> = value.chars().filter(|c| *c != '-').collect();
    match digits.as_slice() {
        [body @ .., last] if digits.len() == 10 => {
            body.iter().all(char::is_ascii_digit) && (last.is_ascii_digit() || *last == 'X')
        }
        all if all.len() == 13 => all.iter().all(char::is_ascii_digit),
        _ => false,
    }
}

impl Validator<BookChange> for BookValidator {
    fn check(&self, request: &BookChange) -> Outcome {
        let mut checks = Checks::new(Book::KIND);
        checks
            .text("TITLE", "title", request.title.as_deref())
            .range("YEAR", "year", request.year, FIRST_YEAR..=MAX_YEAR);

        if let Some(isbn) = request.isbn.as_deref() {
            checks.rule(is_isbn(isbn), "ISBN", "isbn", "must be an ISBN-10 or ISBN-13");
        }

        if let Some(authors) = checks.list("AUTHORS", "authors", request.authors.as_deref()) {
            for (position, author) in authors.iter().enumerate() {
                checks.rule(
                    author.0 > 0,
                    "AUTHOR",
                    &format!("author {}", position + 1),
                    "must reference a valid id",
                );
            }
        }

        checks.finish()
    }
}

#[async_trait]
impl CatalogEntity for Book {
    const KIND: &'static str = "BOOK";
    type Id = BookId;
    type Create = BookChange;
    type Update = BookChange;
    type Context = BookContext;

    fn id(&self) -> &BookId {
        &self.id
    }

    fn from_create_params(id: BookId, params: BookChange) -> Result<Self, InputError> {
        BookValidator.validate(&params)?;
        Ok(Book::new(id, params))
    }

    fn duplicate(&self, id: BookId) -> Self {
        Self { id, ..self.clone() }
    }

    /// Every author and the publisher must exist.
    async fn on_create(&mut self, ctx: &BookContext) -> Result<(), InputError> {
        let (authors, publishers) = ctx;
        let mut references = References::new();
        references.require(authors, self.authors.iter().copied()).await?;
        references.require(publishers, self.publisher).await?;
        references.finish()
    }

    async fn on_update(
        &mut self,
        update: BookChange,
        ctx: &BookContext,
    ) -> Result<(), InputError> {
        let (authors, publishers) = ctx;
        BookValidator.validate(&update)?;
        let changed = Book::new(self.id, update);

        let mut references = References::new();
        references.require(authors, changed.authors.iter().copied()).await?;
        references.require(publishers, changed.publisher).await?;
        references.finish()?;

        *self = changed;
        Ok(())
    }
}

impl Resource for Book {
    type Filter = BookFilter;
    type Validator = BookValidator;
}
