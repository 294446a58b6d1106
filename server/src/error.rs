use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use error_stack::Report;
use kernel::KernelError;
use std::process::{ExitCode, Termination};

use crate::response::Envelope;

#[derive(Debug)]
pub struct StackTrace(Report<KernelError>);

impl From<Report<KernelError>> for StackTrace {
    fn from(e: Report<KernelError>) -> Self {
        StackTrace(e)
    }
}

impl Termination for StackTrace {
    fn report(self) -> ExitCode {
        self.0.report()
    }
}

/// Operation that produced an error. Picks the wording of the response message.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum BookAction {
    Create,
    List,
    Get,
    Update,
    Delete,
}

#[derive(Debug)]
pub struct ErrorStatus {
    report: Report<KernelError>,
    action: Option<BookAction>,
}

impl ErrorStatus {
    pub fn new(action: BookAction, report: Report<KernelError>) -> Self {
        Self {
            report,
            action: Some(action),
        }
    }

    pub fn on(action: BookAction) -> impl FnOnce(Report<KernelError>) -> Self {
        move |report| Self::new(action, report)
    }

    fn status(&self) -> StatusCode {
        match self.report.current_context() {
            KernelError::InvalidPayload
            | KernelError::MissingName
            | KernelError::ReadPageExceeded => StatusCode::BAD_REQUEST,
            KernelError::NotFound => StatusCode::NOT_FOUND,
            KernelError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &'static str {
        match (self.report.current_context(), self.action) {
            (KernelError::InvalidPayload, _) => "invalid request payload",
            (KernelError::MissingName, Some(BookAction::Update)) => "name required to update",
            (KernelError::MissingName, _) => "name required",
            (KernelError::ReadPageExceeded, _) => "readPage must not exceed pageCount",
            (KernelError::NotFound, Some(BookAction::Update)) => "update failed: id not found",
            (KernelError::NotFound, Some(BookAction::Delete)) => "delete failed: id not found",
            (KernelError::NotFound, _) => "book not found",
            (KernelError::Internal, Some(BookAction::Create)) => "book could not be added",
            (KernelError::Internal, _) => "internal server error",
        }
    }
}

impl From<Report<KernelError>> for ErrorStatus {
    fn from(e: Report<KernelError>) -> Self {
        ErrorStatus {
            report: e,
            action: None,
        }
    }
}

impl IntoResponse for ErrorStatus {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{:?}", self.report);
        } else {
            tracing::debug!("{:?}", self.report);
        }
        (status, Json(Envelope::fail(self.message()))).into_response()
    }
}
