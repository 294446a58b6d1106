use crate::controller::Intake;
use application::transfer::{
    CreateBookDto, DeleteBookDto, GetAllBookDto, GetBookDto, UpdateBookDto,
};
use kernel::interface::query::BookFilter;
use kernel::prelude::entity::{BookName, IsFinished, IsReading};
use serde::Deserialize;

/// Body of both create and update. Fields other than `name` fall back to their zero value.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BookRequest {
    name: Option<String>,
    year: i32,
    author: String,
    summary: String,
    publisher: String,
    page_count: u32,
    read_page: u32,
    reading: bool,
}

#[derive(Debug)]
pub struct DeleteBookRequest {
    id: String,
}

impl DeleteBookRequest {
    pub fn new(id: String) -> Self {
        Self { id }
    }
}

#[derive(Debug, Default)]
pub struct GetAllBookRequest {
    name: Option<String>,
    reading: Option<String>,
    finished: Option<String>,
}

// The first occurrence of a repeated key wins. Unknown keys are ignored.
impl FromIterator<(String, String)> for GetAllBookRequest {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut request = Self::default();
        for (key, value) in iter {
            let slot = match key.as_str() {
                "name" => &mut request.name,
                "reading" => &mut request.reading,
                "finished" => &mut request.finished,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        request
    }
}

#[derive(Debug)]
pub struct GetBookRequest {
    id: String,
}

impl GetBookRequest {
    pub fn new(id: String) -> Self {
        Self { id }
    }
}

fn flag(value: Option<&str>) -> Option<bool> {
    match value {
        Some("0") => Some(false),
        Some("1") => Some(true),
        _ => None,
    }
}

pub struct BookTransformer;

impl Intake<BookRequest> for BookTransformer {
    type To = CreateBookDto;
    fn emit(&self, input: BookRequest) -> Self::To {
        CreateBookDto {
            name: input.name,
            year: input.year,
            author: input.author,
            summary: input.summary,
            publisher: input.publisher,
            page_count: input.page_count,
            read_page: input.read_page,
            reading: input.reading,
        }
    }
}

impl Intake<(String, BookRequest)> for BookTransformer {
    type To = UpdateBookDto;
    fn emit(&self, input: (String, BookRequest)) -> Self::To {
        let (id, input) = input;
        UpdateBookDto {
            id,
            name: input.name,
            year: input.year,
            author: input.author,
            summary: input.summary,
            publisher: input.publisher,
            page_count: input.page_count,
            read_page: input.read_page,
            reading: input.reading,
        }
    }
}

impl Intake<DeleteBookRequest> for BookTransformer {
    type To = DeleteBookDto;
    fn emit(&self, input: DeleteBookRequest) -> Self::To {
        DeleteBookDto { id: input.id }
    }
}

impl Intake<GetBookRequest> for BookTransformer {
    type To = GetBookDto;
    fn emit(&self, input: GetBookRequest) -> Self::To {
        GetBookDto { id: input.id }
    }
}

// name wins over reading, reading over finished. Unrecognised flag values are ignored.
impl Intake<GetAllBookRequest> for BookTransformer {
    type To = GetAllBookDto;
    fn emit(&self, input: GetAllBookRequest) -> Self::To {
        let filter = if let Some(name) = input.name {
            BookFilter::Name(BookName::new(name))
        } else if let Some(reading) = flag(input.reading.as_deref()) {
            BookFilter::Reading(IsReading::new(reading))
        } else if let Some(finished) = flag(input.finished.as_deref()) {
            BookFilter::Finished(IsFinished::new(finished))
        } else {
            BookFilter::All
        };
        GetAllBookDto { filter }
    }
}
