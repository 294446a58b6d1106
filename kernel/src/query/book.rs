use crate::database::Transaction;
use crate::entity::{Book, BookId, BookName, IsFinished, IsReading};
use crate::KernelError;

/// Selection applied when listing books. Only one criterion is ever active.
#[derive(Debug, Clone, Eq, PartialEq, Default)]
pub enum BookFilter {
    #[default]
    All,
    Name(BookName),
    Reading(IsReading),
    Finished(IsFinished),
}

impl BookFilter {
    pub fn matches(&self, book: &Book) -> bool {
        match self {
            BookFilter::All => true,
            BookFilter::Name(name) => book.name() == name,
            BookFilter::Reading(reading) => book.reading() == reading,
            BookFilter::Finished(finished) => book.finished() == finished,
        }
    }
}

#[async_trait::async_trait]
pub trait BookQuery<Connection: Transaction>: Sync + Send + 'static {
    async fn find_by_id(
        &self,
        con: &mut Connection,
        id: &BookId,
    ) -> error_stack::Result<Option<Book>, KernelError>;
    async fn find_all(
        &self,
        con: &mut Connection,
        filter: &BookFilter,
    ) -> error_stack::Result<Vec<Book>, KernelError>;
}

pub trait DependOnBookQuery<Connection: Transaction>: Sync + Send + 'static {
    type BookQuery: BookQuery<Connection>;
    fn book_query(&self) -> &Self::BookQuery;
}
