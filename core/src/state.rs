//! Reducer-style state of the news list view.
//!
//! # Design
//! All mutation goes through `ListState::apply`. Every load carries the
//! generation it was issued under; only the latest generation may complete
//! it, so a slow response for an older page can never overwrite a newer one.
//! A failed load leaves the displayed cards and envelope as they were.

use tracing::{debug, warn};

use crate::types::{NewsCard, NewsPage};

/// Number of articles shown per page.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStatus {
    Idle,
    Loading,
    Ready,
    Failed,
}

/// Inputs to the reducer.
#[derive(Debug, Clone)]
pub enum ListEvent {
    LoadRequested { page: u32, generation: u64 },
    LoadSucceeded { generation: u64, page: NewsPage, cards: Vec<NewsCard> },
    LoadFailed { generation: u64 },
}

/// What `apply` did with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Applied(ListStatus),
    /// The event belonged to a superseded load and was ignored.
    Stale,
}

#[derive(Debug, Clone)]
pub struct ListState {
    status: ListStatus,
    cards: Vec<NewsCard>,
    page_info: Option<NewsPage>,
    current_page: u32,
    page_size: u32,
    generation: u64,
}

impl Default for ListState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl ListState {
    pub fn new(page_size: u32) -> Self {
        Self {
            status: ListStatus::Idle,
            cards: Vec::new(),
            page_info: None,
            current_page: 1,
            page_size,
            generation: 0,
        }
    }

    pub fn apply(&mut self, event: ListEvent) -> Transition {
        match event {
            ListEvent::LoadRequested { page, generation } => {
                if generation <= self.generation {
                    return Transition::Stale;
                }
                self.generation = generation;
                self.current_page = page;
                self.status = ListStatus::Loading;
            }
            ListEvent::LoadSucceeded {
                generation,
                page,
                cards,
            } => {
                if !self.is_current(generation) {
                    return Transition::Stale;
                }
                if page.page != self.current_page {
                    warn!(
                        requested = self.current_page,
                        reported = page.page,
                        "server reported a different page than requested"
                    );
                }
                self.cards = cards;
                self.page_info = Some(page);
                self.status = ListStatus::Ready;
            }
            ListEvent::LoadFailed { generation } => {
                if !self.is_current(generation) {
                    return Transition::Stale;
                }
                self.status = ListStatus::Failed;
            }
        }
        debug!(status = ?self.status, generation = self.generation, "list state transition");
        Transition::Applied(self.status)
    }

    /// A completion only counts while its load is the one in flight.
    fn is_current(&self, generation: u64) -> bool {
        generation == self.generation && self.status == ListStatus::Loading
    }

    pub fn status(&self) -> ListStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == ListStatus::Loading
    }

    pub fn cards(&self) -> &[NewsCard] {
        &self.cards
    }

    pub fn page_info(&self) -> Option<&NewsPage> {
        self.page_info.as_ref()
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
