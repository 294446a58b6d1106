use error_stack::Report;
use time::OffsetDateTime;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{BookQuery, DependOnBookQuery};
use kernel::interface::update::{BookModifier, DependOnBookModifier};
use kernel::prelude::entity::{
    Book, BookAuthor, BookId, BookName, BookPublisher, BookSummary, BookYear, InsertedAt,
    IsFinished, IsReading, PageCount, ReadPage, UpdatedAt,
};
use kernel::KernelError;

use crate::transfer::{
    BookDto, CreateBookDto, DeleteBookDto, GetAllBookDto, GetBookDto, UpdateBookDto,
};

const ID_ATTEMPTS: usize = 8;

fn validate(
    name: Option<String>,
    page_count: u32,
    read_page: u32,
) -> error_stack::Result<(BookName, PageCount, ReadPage), KernelError> {
    let name = name.map(BookName::new).ok_or_else(|| {
        Report::new(KernelError::MissingName).attach_printable("Payload has no `name`")
    })?;
    let page_count = PageCount::new(page_count);
    let read_page = ReadPage::new(read_page);
    if read_page.exceeds(&page_count) {
        return Err(Report::new(KernelError::ReadPageExceeded)
            .attach_printable(format!("readPage {read_page:?} > pageCount {page_count:?}")));
    }
    Ok((name, page_count, read_page))
}

/// Draws ids from `next_id` until one is not stored yet.
async fn issue_book_id<Connection, Query, Draw>(
    query: &Query,
    con: &mut Connection,
    mut next_id: Draw,
) -> error_stack::Result<BookId, KernelError>
where
    Connection: Transaction,
    Query: BookQuery<Connection>,
    Draw: FnMut() -> BookId + Send,
{
    for _ in 0..ID_ATTEMPTS {
        let id = next_id();
        if query.find_by_id(con, &id).await?.is_none() {
            return Ok(id);
        }
        tracing::warn!("Generated book id {:?} is already taken", id);
    }
    Err(Report::new(KernelError::Internal)
        .attach_printable(format!("No unique book id after {ID_ATTEMPTS} attempts")))
}

#[async_trait::async_trait]
pub trait GetBookService<Connection: Transaction + Send>:
    'static + Sync + Send + DependOnDatabaseConnection<Connection> + DependOnBookQuery<Connection>
{
    async fn get_book(&self, dto: GetBookDto) -> error_stack::Result<Option<BookDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = BookId::new(dto.id);
        let book = self.book_query().find_by_id(&mut connection, &id).await?;

        Ok(book.map(BookDto::from))
    }
}

impl<Connection: Transaction + Send, T> GetBookService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnBookQuery<Connection>
{
}

#[async_trait::async_trait]
pub trait GetAllBookService<Connection: Transaction + Send>:
    'static + Sync + Send + DependOnDatabaseConnection<Connection> + DependOnBookQuery<Connection>
{
    async fn get_all_books(
        &self,
        dto: GetAllBookDto,
    ) -> error_stack::Result<Vec<BookDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let books = self
            .book_query()
            .find_all(&mut connection, &dto.filter)
            .await?;

        Ok(books.into_iter().map(BookDto::from).collect())
    }
}

impl<Connection: Transaction + Send, T> GetAllBookService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnBookQuery<Connection>
{
}

#[async_trait::async_trait]
pub trait CreateBookService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnBookQuery<Connection>
    + DependOnBookModifier<Connection>
{
    async fn create_book(&self, dto: CreateBookDto) -> error_stack::Result<String, KernelError> {
        let (name, page_count, read_page) = validate(dto.name, dto.page_count, dto.read_page)?;

        let mut connection = self.database_connection().transact().await?;

        let id = issue_book_id(self.book_query(), &mut connection, BookId::generate).await?;
        let now = InsertedAt::new(OffsetDateTime::now_utc());
        let book = Book::new(
            id.clone(),
            name,
            BookYear::new(dto.year),
            BookAuthor::new(dto.author),
            BookSummary::new(dto.summary),
            BookPublisher::new(dto.publisher),
            page_count,
            read_page,
            IsFinished::from_progress(&page_count, &read_page),
            IsReading::new(dto.reading),
            now,
            UpdatedAt::from(now),
        );

        self.book_modifier().create(&mut connection, &book).await?;

        if self
            .book_query()
            .find_by_id(&mut connection, &id)
            .await?
            .is_none()
        {
            return Err(Report::new(KernelError::Internal)
                .attach_printable(format!("Book {:?} missing right after insertion", id)));
        }

        connection.commit().await?;
        tracing::debug!("Created book {:?}", id);

        Ok(id.into())
    }
}

impl<Connection: Transaction + Send, T> CreateBookService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnBookQuery<Connection>
        + DependOnBookModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait UpdateBookService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnBookQuery<Connection>
    + DependOnBookModifier<Connection>
{
    /// Overwrites every client-editable field. `finished` keeps the value derived at creation.
    async fn update_book(&self, dto: UpdateBookDto) -> error_stack::Result<(), KernelError> {
        let (name, page_count, read_page) = validate(dto.name, dto.page_count, dto.read_page)?;

        let mut connection = self.database_connection().transact().await?;

        let id = BookId::new(dto.id);
        let mut book = self
            .book_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("Cannot update unknown book {:?}", id))
            })?;

        book.substitute(|book| {
            *book.name = name;
            *book.year = BookYear::new(dto.year);
            *book.author = BookAuthor::new(dto.author);
            *book.summary = BookSummary::new(dto.summary);
            *book.publisher = BookPublisher::new(dto.publisher);
            *book.page_count = page_count;
            *book.read_page = read_page;
            *book.reading = IsReading::new(dto.reading);
            *book.updated_at = UpdatedAt::new(OffsetDateTime::now_utc());
        });

        self.book_modifier().update(&mut connection, &book).await?;
        connection.commit().await?;
        tracing::debug!("Updated book {:?}", id);

        Ok(())
    }
}

impl<Connection: Transaction + Send, T> UpdateBookService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnBookQuery<Connection>
        + DependOnBookModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait DeleteBookService<Connection: Transaction + Send>:
    'static + Sync + Send + DependOnDatabaseConnection<Connection> + DependOnBookModifier<Connection>
{
    async fn delete_book(&self, dto: DeleteBookDto) -> error_stack::Result<(), KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = BookId::new(dto.id);
        self.book_modifier().delete(&mut connection, &id).await?;

        connection.commit().await?;
        tracing::debug!("Deleted book {:?}", id);

        Ok(())
    }
}

impl<Connection: Transaction + Send, T> DeleteBookService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnBookModifier<Connection>
{
}
