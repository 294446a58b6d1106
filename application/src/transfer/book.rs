use time::OffsetDateTime;

use kernel::interface::query::BookFilter;
use kernel::prelude::entity::{Book, DestructBook};

#[derive(Debug, Clone)]
pub struct BookDto {
    pub id: String,
    pub name: String,
    pub year: i32,
    pub author: String,
    pub summary: String,
    pub publisher: String,
    pub page_count: u32,
    pub read_page: u32,
    pub finished: bool,
    pub reading: bool,
    pub inserted_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl From<Book> for BookDto {
    fn from(value: Book) -> Self {
        let DestructBook {
            id,
            name,
            year,
            author,
            summary,
            publisher,
            page_count,
            read_page,
            finished,
            reading,
            inserted_at,
            updated_at,
        } = value.into_destruct();
        Self {
            id: id.into(),
            name: name.into(),
            year: year.into(),
            author: author.into(),
            summary: summary.into(),
            publisher: publisher.into(),
            page_count: page_count.into(),
            read_page: read_page.into(),
            finished: finished.into(),
            reading: reading.into(),
            inserted_at: inserted_at.into(),
            updated_at: updated_at.into(),
        }
    }
}

pub struct GetBookDto {
    pub id: String,
}

pub struct GetAllBookDto {
    pub filter: BookFilter,
}

/// `name` stays optional so that its absence is reported by the service, not the parser.
pub struct CreateBookDto {
    pub name: Option<String>,
    pub year: i32,
    pub author: String,
    pub summary: String,
    pub publisher: String,
    pub page_count: u32,
    pub read_page: u32,
    pub reading: bool,
}

pub struct UpdateBookDto {
    pub id: String,
    pub name: Option<String>,
    pub year: i32,
    pub author: String,
    pub summary: String,
    pub publisher: String,
    pub page_count: u32,
    pub read_page: u32,
    pub reading: bool,
}

pub struct DeleteBookDto {
    pub id: String,
}
