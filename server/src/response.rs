mod book;

pub use self::book::*;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Fail,
}

/// Body shared by every endpoint. Absent members are left out of the JSON.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: Status::Success,
            message: None,
            data: Some(data),
        }
    }

    pub fn with_message(mut self, message: &'static str) -> Self {
        self.message = Some(message);
        self
    }
}

impl Envelope<()> {
    pub fn acknowledge(message: &'static str) -> Self {
        Self {
            status: Status::Success,
            message: Some(message),
            data: None,
        }
    }

    pub fn fail(message: &'static str) -> Self {
        Self {
            status: Status::Fail,
            message: Some(message),
            data: None,
        }
    }
}
