//! Drives `NewsClient` for the paginated news list.
//!
//! `load_page` hands the host a `PendingLoad`; the host performs the request
//! and passes the outcome back to `complete_load` together with the load's
//! generation. Failures are logged and absorbed: the caller sees the status
//! change to `Failed`, never an error.

use tracing::{debug, error, warn};

use crate::client::NewsClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::state::{ListEvent, ListState, ListStatus, Transition};
use crate::types::{NewsCard, NewsPage};

/// A list request waiting to be executed by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingLoad {
    pub generation: u64,
    pub page: u32,
    pub request: HttpRequest,
}

#[derive(Debug, Clone)]
pub struct NewsListController {
    client: NewsClient,
    state: ListState,
}

impl NewsListController {
    pub fn new(client: NewsClient) -> Self {
        Self {
            client,
            state: ListState::default(),
        }
    }

    pub fn with_page_size(client: NewsClient, page_size: u32) -> Self {
        Self {
            client,
            state: ListState::new(page_size),
        }
    }

    pub fn client(&self) -> &NewsClient {
        &self.client
    }

    /// Start loading the first page.
    pub fn initialize(&mut self) -> Result<PendingLoad, ApiError> {
        self.load_page(1)
    }

    /// Switch to `page` and return the request that fetches it.
    ///
    /// Any load still in flight is superseded.
    pub fn load_page(&mut self, page: u32) -> Result<PendingLoad, ApiError> {
        let request = self.client.build_list_news(page, self.state.page_size())?;
        let generation = self.state.generation() + 1;
        self.state.apply(ListEvent::LoadRequested { page, generation });
        debug!(page, generation, url = %request.url, "loading news page");
        Ok(PendingLoad {
            generation,
            page,
            request,
        })
    }

    /// Feed the outcome of a `PendingLoad` back into the list.
    pub fn complete_load(
        &mut self,
        generation: u64,
        outcome: Result<HttpResponse, ApiError>,
    ) -> Transition {
        let parsed = outcome.and_then(|response| self.client.parse_list_news(response));
        let (event, failure) = match parsed {
            Ok(page) => {
                let cards = page
                    .items
                    .iter()
                    .cloned()
                    .map(|item| self.client.to_card(item))
                    .collect();
                let event = ListEvent::LoadSucceeded {
                    generation,
                    page,
                    cards,
                };
                (event, None)
            }
            Err(e) => (ListEvent::LoadFailed { generation }, Some(e)),
        };
        let transition = self.state.apply(event);
        match transition {
            Transition::Stale => {
                warn!(generation, "discarding response for superseded news load")
            }
            Transition::Applied(ListStatus::Ready) => {
                debug!(
                    page = self.state.current_page(),
                    cards = self.state.cards().len(),
                    "news page ready"
                )
            }
            Transition::Applied(_) => {
                if let Some(e) = failure {
                    error!(error = %e, generation, "error fetching news");
                }
            }
        }
        transition
    }

    pub fn status(&self) -> ListStatus {
        self.state.status()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn cards(&self) -> &[NewsCard] {
        self.state.cards()
    }

    /// Envelope of the last successfully loaded page.
    pub fn page_info(&self) -> Option<&NewsPage> {
        self.state.page_info()
    }

    pub fn current_page(&self) -> u32 {
        self.state.current_page()
    }

    pub fn page_size(&self) -> u32 {
        self.state.page_size()
    }

    pub fn has_next_page(&self) -> bool {
        self.page_info()
            .is_some_and(|info| self.current_page() < info.pages)
    }

    pub fn has_previous_page(&self) -> bool {
        self.current_page() > 1
    }
}
