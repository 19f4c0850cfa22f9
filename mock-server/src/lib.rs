use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{debug, info};

const MAX_LIMIT: u32 = 100;
const DEFAULT_LIMIT: u32 = 10;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: u64,
    pub title: String,
    pub category: String,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub time: String,
    pub image_url: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct CreateNews {
    pub title: String,
    pub category: String,
    pub summary: String,
    #[serde(default)]
    pub content: Option<String>,
    pub time: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NewsListResponse {
    pub items: Vec<NewsItem>,
    pub total: u64,
    pub page: u32,
    pub size: u32,
    pub pages: u32,
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub skip: u64,
    pub limit: Option<u32>,
}

#[derive(Debug, Default)]
pub struct Store {
    next_id: u64,
    items: BTreeMap<u64, NewsItem>,
}

impl Store {
    pub fn insert(&mut self, input: CreateNews) -> NewsItem {
        self.next_id += 1;
        let item = NewsItem {
            id: self.next_id,
            title: input.title,
            category: input.category,
            summary: input.summary,
            content: input.content,
            time: input.time,
            image_url: input.image_url,
        };
        self.items.insert(item.id, item.clone());
        item
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Newest first, without the full article text.
    fn page(&self, skip: u64, limit: u32) -> Vec<NewsItem> {
        self.items
            .values()
            .rev()
            .skip(usize::try_from(skip).unwrap_or(usize::MAX))
            .take(limit as usize)
            .map(|item| NewsItem {
                content: None,
                ..item.clone()
            })
            .collect()
    }
}

pub type Db = Arc<RwLock<Store>>;

/// A store pre-filled with `items`, ids assigned in order.
pub fn seeded_db(items: impl IntoIterator<Item = CreateNews>) -> Db {
    let mut store = Store::default();
    for item in items {
        store.insert(item);
    }
    Arc::new(RwLock::new(store))
}

pub fn app() -> Router {
    router(Db::default())
}

pub fn router(db: Db) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/news", get(list_news).post(create_news))
        .route("/news/{id}", get(get_news))
        .with_state(db)
}

pub async fn run(listener: TcpListener, db: Db) -> Result<(), std::io::Error> {
    axum::serve(listener, router(db)).await
}

async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "news API is running" }))
}

async fn list_news(
    State(db): State<Db>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<NewsListResponse>, StatusCode> {
    // Bad pagination input is a validation error, same as an out-of-range limit.
    let Query(params) = params.map_err(|rejection| {
        debug!(%rejection, "rejecting list query");
        StatusCode::UNPROCESSABLE_ENTITY
    })?;
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT);
    if !(1..=MAX_LIMIT).contains(&limit) {
        return Err(StatusCode::UNPROCESSABLE_ENTITY);
    }
    let store = db.read().await;
    let total = store.len() as u64;
    let items = store.page(params.skip, limit);
    debug!(skip = params.skip, limit, returned = items.len(), "list news");
    Ok(Json(NewsListResponse {
        items,
        total,
        page: page_number(params.skip, limit),
        size: limit,
        pages: page_count(total, limit),
    }))
}

async fn get_news(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<NewsItem>, StatusCode> {
    let store = db.read().await;
    store.items.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn create_news(
    State(db): State<Db>,
    Json(input): Json<CreateNews>,
) -> (StatusCode, Json<NewsItem>) {
    let item = db.write().await.insert(input);
    info!(id = item.id, title = %item.title, "news created");
    (StatusCode::CREATED, Json(item))
}

fn page_number(skip: u64, limit: u32) -> u32 {
    u32::try_from(skip / u64::from(limit) + 1).unwrap_or(u32::MAX)
}

fn page_count(total: u64, limit: u32) -> u32 {
    u32::try_from(total.div_ceil(u64::from(limit))).unwrap_or(u32::MAX)
}
