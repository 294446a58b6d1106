mod author;
mod flag;
mod id;
mod name;
mod page;
mod publisher;
mod summary;
mod year;

pub use self::{author::*, flag::*, id::*, name::*, page::*, publisher::*, summary::*, year::*};
use crate::entity::common::{InsertedAt, UpdatedAt};
use destructure::{Destructure, Mutation};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure, Mutation)]
pub struct Book {
    id: BookId,
    name: BookName,
    year: BookYear,
    author: BookAuthor,
    summary: BookSummary,
    publisher: BookPublisher,
    page_count: PageCount,
    read_page: ReadPage,
    finished: IsFinished,
    reading: IsReading,
    inserted_at: InsertedAt,
    updated_at: UpdatedAt,
}

impl Book {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: BookId,
        name: BookName,
        year: BookYear,
        author: BookAuthor,
        summary: BookSummary,
        publisher: BookPublisher,
        page_count: PageCount,
        read_page: ReadPage,
        finished: IsFinished,
        reading: IsReading,
        inserted_at: InsertedAt,
        updated_at: UpdatedAt,
    ) -> Self {
        Self {
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
        }
    }
}
