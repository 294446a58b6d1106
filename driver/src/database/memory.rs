mod book;

use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::DependOnBookQuery;
use kernel::interface::update::DependOnBookModifier;
use kernel::prelude::entity::Book;
use kernel::KernelError;

pub use self::book::*;

/// Process-wide book store. Clones share the same list.
#[derive(Clone, Default)]
pub struct InMemoryDatabase {
    books: Arc<Mutex<Vec<Book>>>,
    repository: InMemoryBookRepository,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl DatabaseConnection<InMemoryTransaction> for InMemoryDatabase {
    async fn transact(&self) -> error_stack::Result<InMemoryTransaction, KernelError> {
        let guard = Arc::clone(&self.books).lock_owned().await;
        Ok(InMemoryTransaction {
            guard,
            staged: None,
        })
    }
}

impl DependOnBookQuery<InMemoryTransaction> for InMemoryDatabase {
    type BookQuery = InMemoryBookRepository;
    fn book_query(&self) -> &Self::BookQuery {
        &self.repository
    }
}

impl DependOnBookModifier<InMemoryTransaction> for InMemoryDatabase {
    type BookModifier = InMemoryBookRepository;
    fn book_modifier(&self) -> &Self::BookModifier {
        &self.repository
    }
}

/// Holds the store lock until committed or dropped.
///
/// Writes go to a copy of the list taken on the first write. The shared list is
/// only replaced on [`Transaction::commit`].
pub struct InMemoryTransaction {
    guard: OwnedMutexGuard<Vec<Book>>,
    staged: Option<Vec<Book>>,
}

impl InMemoryTransaction {
    pub(in crate::database) fn books(&self) -> &[Book] {
        match &self.staged {
            Some(staged) => staged.as_slice(),
            None => self.guard.as_slice(),
        }
    }

    pub(in crate::database) fn books_mut(&mut self) -> &mut Vec<Book> {
        let guard = &self.guard;
        self.staged.get_or_insert_with(|| guard.to_vec())
    }
}

#[async_trait::async_trait]
impl Transaction for InMemoryTransaction {
    async fn commit(mut self) -> error_stack::Result<(), KernelError> {
        if let Some(staged) = self.staged.take() {
            tracing::trace!("Committing {} books", staged.len());
            *self.guard = staged;
        }
        Ok(())
    }

    async fn roll_back(mut self) -> error_stack::Result<(), KernelError> {
        if self.staged.take().is_some() {
            tracing::trace!("Discarding staged books");
        }
        Ok(())
    }
}
