use crate::controller::Exhaust;
use crate::response::Envelope;
use application::transfer::BookDto;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use time::OffsetDateTime;

pub const BOOK_ADDED: &str = "book added";
pub const BOOK_UPDATED: &str = "book updated";
pub const BOOK_DELETED: &str = "book deleted";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedBookResponse {
    book_id: String,
}

impl IntoResponse for CreatedBookResponse {
    fn into_response(self) -> Response {
        (
            StatusCode::CREATED,
            Json(Envelope::success(self).with_message(BOOK_ADDED)),
        )
            .into_response()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookResponse {
    id: String,
    name: String,
    year: i32,
    author: String,
    summary: String,
    publisher: String,
    page_count: u32,
    read_page: u32,
    finished: bool,
    reading: bool,
    #[serde(with = "time::serde::rfc3339")]
    inserted_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    updated_at: OffsetDateTime,
}

#[derive(Debug, Serialize)]
struct BookData {
    book: BookResponse,
}

impl IntoResponse for BookResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(Envelope::success(BookData { book: self }))).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct BookSummaryResponse {
    id: String,
    name: String,
    publisher: String,
}

#[derive(Debug, Serialize)]
pub struct BooksResponse {
    books: Vec<BookSummaryResponse>,
}

impl IntoResponse for BooksResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(Envelope::success(self))).into_response()
    }
}

#[derive(Debug)]
pub struct MessageResponse(&'static str);

impl IntoResponse for MessageResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(Envelope::acknowledge(self.0))).into_response()
    }
}

pub struct BookPresenter;

impl Exhaust<String> for BookPresenter {
    type To = CreatedBookResponse;
    fn emit(&self, input: String) -> Self::To {
        CreatedBookResponse { book_id: input }
    }
}

impl Exhaust<Option<BookDto>> for BookPresenter {
    type To = Option<BookResponse>;
    fn emit(&self, input: Option<BookDto>) -> Self::To {
        input.map(|book| BookResponse {
            id: book.id,
            name: book.name,
            year: book.year,
            author: book.author,
            summary: book.summary,
            publisher: book.publisher,
            page_count: book.page_count,
            read_page: book.read_page,
            finished: book.finished,
            reading: book.reading,
            inserted_at: book.inserted_at,
            updated_at: book.updated_at,
        })
    }
}

impl Exhaust<Vec<BookDto>> for BookPresenter {
    type To = BooksResponse;
    fn emit(&self, input: Vec<BookDto>) -> Self::To {
        let books = input
            .into_iter()
            .map(|book| BookSummaryResponse {
                id: book.id,
                name: book.name,
                publisher: book.publisher,
            })
            .collect::<Vec<_>>();

        BooksResponse { books }
    }
}

/// Presents a unit result as a bare success message.
pub struct MessagePresenter(pub &'static str);

impl Exhaust<()> for MessagePresenter {
    type To = MessageResponse;
    fn emit(&self, _: ()) -> Self::To {
        MessageResponse(self.0)
    }
}
