use actix_web::http::{header::ContentType, StatusCode};
use actix_web::{error, HttpRequest, HttpResponse};
use askama::Template;
use thiserror::Error;

use crate::services::CatalogError;
use crate::views::ErrorTemplate;

/// Failure while serving a page, rendered as the error template
#[derive(Debug, Error)]
pub enum PageError {
    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Artsy request failed: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Template rendering failed: {0}")]
    Render(#[from] askama::Error),
}

impl error::ResponseError for PageError {
    fn status_code(&self) -> StatusCode {
        match self {
            PageError::BadRequest(_) => StatusCode::BAD_REQUEST,
            PageError::Catalog(_) => StatusCode::BAD_GATEWAY,
            PageError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let body = ErrorTemplate::new(status.as_u16(), self.to_string())
            .render()
            .unwrap_or_else(|_| self.to_string());

        HttpResponse::build(status)
            .content_type(ContentType::html())
            .body(body)
    }
}

/// Handle query string errors (missing or malformed parameters)
pub fn handle_query_payload_error(err: error::QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("Query error on {}: {}", req.path(), err);
    PageError::BadRequest(err.to_string()).into()
}
