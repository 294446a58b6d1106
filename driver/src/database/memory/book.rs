use error_stack::Report;

use kernel::interface::query::{BookFilter, BookQuery};
use kernel::interface::update::BookModifier;
use kernel::prelude::entity::{Book, BookId};
use kernel::KernelError;

use crate::database::InMemoryTransaction;

#[derive(Clone, Copy, Default)]
pub struct InMemoryBookRepository;

#[async_trait::async_trait]
impl BookQuery<InMemoryTransaction> for InMemoryBookRepository {
    async fn find_by_id(
        &self,
        con: &mut InMemoryTransaction,
        id: &BookId,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        Ok(MemBookInternal::find_by_id(con, id))
    }

    async fn find_all(
        &self,
        con: &mut InMemoryTransaction,
        filter: &BookFilter,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        Ok(MemBookInternal::find_all(con, filter))
    }
}

#[async_trait::async_trait]
impl BookModifier<InMemoryTransaction> for InMemoryBookRepository {
    async fn create(
        &self,
        con: &mut InMemoryTransaction,
        book: &Book,
    ) -> error_stack::Result<(), KernelError> {
        MemBookInternal::create(con, book);
        Ok(())
    }

    async fn update(
        &self,
        con: &mut InMemoryTransaction,
        book: &Book,
    ) -> error_stack::Result<(), KernelError> {
        MemBookInternal::update(con, book)
    }

    async fn delete(
        &self,
        con: &mut InMemoryTransaction,
        book_id: &BookId,
    ) -> error_stack::Result<(), KernelError> {
        MemBookInternal::delete(con, book_id)
    }
}

pub(in crate::database) struct MemBookInternal;

impl MemBookInternal {
    fn position(con: &InMemoryTransaction, id: &BookId) -> Option<usize> {
        con.books().iter().position(|book| book.id() == id)
    }

    fn find_by_id(con: &InMemoryTransaction, id: &BookId) -> Option<Book> {
        con.books().iter().find(|book| book.id() == id).cloned()
    }

    fn find_all(con: &InMemoryTransaction, filter: &BookFilter) -> Vec<Book> {
        con.books()
            .iter()
            .filter(|book| filter.matches(book))
            .cloned()
            .collect()
    }

    fn create(con: &mut InMemoryTransaction, book: &Book) {
        con.books_mut().push(book.clone());
    }

    fn update(con: &mut InMemoryTransaction, book: &Book) -> error_stack::Result<(), KernelError> {
        let index = Self::position(con, book.id()).ok_or_else(|| {
            Report::new(KernelError::NotFound)
                .attach_printable(format!("No book to update with id {:?}", book.id()))
        })?;
        let books = con.books_mut();
        if let Some(slot) = books.get_mut(index) {
            *slot = book.clone();
        }
        Ok(())
    }

    fn delete(con: &mut InMemoryTransaction, id: &BookId) -> error_stack::Result<(), KernelError> {
        let index = Self::position(con, id).ok_or_else(|| {
            Report::new(KernelError::NotFound)
                .attach_printable(format!("No book to delete with id {:?}", id))
        })?;
        con.books_mut().remove(index);
        Ok(())
    }
}
