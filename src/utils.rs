use actix_web::error::{InternalError, JsonPayloadError, QueryPayloadError};
use actix_web::{HttpRequest, HttpResponse, http::StatusCode};
use serde::Serialize;

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Envelope shared by every successful response.
#[derive(Serialize)]
pub struct ApiResponse<'a, T> {
    pub success: bool,
    pub message: &'a str,
    pub data: T,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

pub fn build_response<T: Serialize>(
    status_code: StatusCode,
    message: &str,
    data: T,
) -> HttpResponse {
    let body = ApiResponse {
        success: true,
        message,
        data,
    };
    HttpResponse::build(status_code).json(body)
}

pub fn build_error_response(status_code: StatusCode, message: String) -> HttpResponse {
    let error_response = ErrorResponse {
        success: false,
        message,
    };
    HttpResponse::build(status_code).json(error_response)
}

pub fn error_chain_fmt(
    e: &dyn std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{e}")?;

    let mut current = e.source();
    while let Some(cause) = current {
        // `{:#?}` prints causes with Debug, `{:?}` with Display
        if f.alternate() {
            writeln!(f, "Caused by:\n\t{cause:?}")?;
        } else {
            writeln!(f, "Caused by:\n\t{cause}")?;
        }
        current = cause.source();
    }
    Ok(())
}

// Wired into `web::JsonConfig` so malformed bodies get the envelope instead of actix's plain text.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = build_error_response(StatusCode::BAD_REQUEST, "Invalid request body".into());
    InternalError::from_response(err, response).into()
}

pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response =
        build_error_response(StatusCode::BAD_REQUEST, "Invalid query parameters".into());
    InternalError::from_response(err, response).into()
}
