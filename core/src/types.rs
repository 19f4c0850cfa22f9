//! Domain DTOs for the news API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently;
//! the integration tests catch any drift between the two crates. `NewsCard`
//! is the only type the API never sends: it is what the list view displays.

use serde::{Deserialize, Serialize};

/// A single news article as returned by the API.
///
/// `content` is only filled in by `GET /news/{id}`. `time` is a display
/// string and is never parsed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewsItem {
    pub id: u64,
    pub title: String,
    pub category: String,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// One page of news plus the pagination envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewsPage {
    pub items: Vec<NewsItem>,
    pub total: u64,
    pub page: u32,
    pub size: u32,
    pub pages: u32,
}

/// A news item ready for display, with its image reference resolved to an
/// absolute URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsCard {
    pub id: u64,
    pub title: String,
    pub category: String,
    pub summary: String,
    pub time: String,
    pub image_url: String,
}

/// Body of `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceInfo {
    pub message: String,
}

/// Outcome of a health check against the API root.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ApiStatus {
    Online { info: ServiceInfo },
    Offline { error: String },
}

impl ApiStatus {
    pub fn is_online(&self) -> bool {
        matches!(self, ApiStatus::Online { .. })
    }
}
