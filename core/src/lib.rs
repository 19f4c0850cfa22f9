//! Synchronous client core for the news service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). On top of the client sits a
//! reducer-driven list controller that pages through the news feed.
//!
//! # Design
//! - `NewsClient` is stateless; it holds only `base_url`.
//! - Each operation is split into `build_*` and `parse_*`, so the I/O
//!   boundary is explicit.
//! - `NewsListController` owns a `ListState` and tags each load with a
//!   generation so out-of-order responses are dropped.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod controller;
pub mod error;
pub mod http;
pub mod state;
pub mod types;

pub use client::{NewsClient, DEFAULT_BASE_URL, PLACEHOLDER_IMAGE_URL};
pub use controller::{NewsListController, PendingLoad};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use state::{ListEvent, ListState, ListStatus, Transition, DEFAULT_PAGE_SIZE};
pub use types::{ApiStatus, NewsCard, NewsItem, NewsPage, ServiceInfo};
