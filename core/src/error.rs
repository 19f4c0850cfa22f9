//! Error types for the news API client.
//!
//! # Design
//! `NotFound` gets its own variant because a missing article is an expected
//! answer from `GET /news/{id}`. Every other non-2xx status lands in
//! `HttpError` with the raw status and body. `Transport` is produced by the
//! host when the round trip never yielded a response.

use thiserror::Error;

/// Errors returned by `NewsClient` build and parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request could not be delivered or the response could not be read.
    #[error("transport failed: {0}")]
    Transport(String),

    /// Page numbers and page sizes start at 1.
    #[error("invalid pagination: page={page}, size={size}")]
    InvalidPagination { page: u32, size: u32 },
}
