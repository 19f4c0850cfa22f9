//! Stateless HTTP request builder and response parser for the news API.
//!
//! # Design
//! `NewsClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! The caller executes the actual HTTP round-trip.

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{ApiStatus, NewsCard, NewsItem, NewsPage, ServiceInfo};

/// Base URL of the news service when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Image shown for articles that have no image of their own.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/300x200?text=No+Image";

/// Synchronous, stateless client for the news API.
#[derive(Debug, Clone)]
pub struct NewsClient {
    base_url: String,
}

impl Default for NewsClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl NewsClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET {base}/news?skip=..&limit=..` for the 1-based `page`.
    pub fn build_list_news(&self, page: u32, size: u32) -> Result<HttpRequest, ApiError> {
        let offset = page_offset(page, size)?;
        debug!(page, size, offset, "building news list request");
        Ok(self.get(format!(
            "{}/news?skip={offset}&limit={size}",
            self.base_url
        )))
    }

    pub fn build_get_news(&self, id: u64) -> HttpRequest {
        self.get(format!("{}/news/{id}", self.base_url))
    }

    pub fn build_health_check(&self) -> HttpRequest {
        self.get(format!("{}/", self.base_url))
    }

    pub fn parse_list_news(&self, response: HttpResponse) -> Result<NewsPage, ApiError> {
        check_status(&response, 200)?;
        decode(&response.body)
    }

    pub fn parse_get_news(&self, response: HttpResponse) -> Result<NewsItem, ApiError> {
        check_status(&response, 200)?;
        decode(&response.body)
    }

    /// Fold the outcome of a health-check round trip into an `ApiStatus`.
    ///
    /// Never fails: transport errors, bad statuses and undecodable bodies all
    /// come back as `ApiStatus::Offline`.
    pub fn parse_health_check(&self, outcome: Result<HttpResponse, ApiError>) -> ApiStatus {
        let info = outcome.and_then(|response| {
            check_status(&response, 200)?;
            decode::<ServiceInfo>(&response.body)
        });
        match info {
            Ok(info) => ApiStatus::Online { info },
            Err(e) => ApiStatus::Offline {
                error: e.to_string(),
            },
        }
    }

    /// Turn a raw image reference into something a renderer can load.
    ///
    /// Missing or empty references get the placeholder, absolute http(s)
    /// URLs pass through, anything else is a path on the API host.
    pub fn resolve_image_url(&self, raw: Option<&str>) -> String {
        match raw {
            None | Some("") => PLACEHOLDER_IMAGE_URL.to_string(),
            Some(url) if has_http_scheme(url) => url.to_string(),
            Some(path) if path.starts_with('/') => format!("{}{path}", self.base_url),
            Some(path) => format!("{}/{path}", self.base_url),
        }
    }

    /// Map an API item to its display form.
    pub fn to_card(&self, item: NewsItem) -> NewsCard {
        let image_url = self.resolve_image_url(item.image_url.as_deref());
        NewsCard {
            id: item.id,
            title: item.title,
            category: item.category,
            summary: item.summary,
            time: item.time,
            image_url,
        }
    }

    fn get(&self, url: String) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url,
            headers: vec![("accept".to_string(), "application/json".to_string())],
        }
    }
}

/// Zero-based row offset of a 1-based page.
pub fn page_offset(page: u32, size: u32) -> Result<u64, ApiError> {
    if page == 0 || size == 0 {
        return Err(ApiError::InvalidPagination { page, size });
    }
    Ok(u64::from(page - 1) * u64::from(size))
}

/// Schemes compare case-insensitively.
fn has_http_scheme(url: &str) -> bool {
    ["http://", "https://"].iter().any(|scheme| {
        url.get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}
