//! Paging lifecycle against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port with a seeded store, then drives
//! `NewsClient` and `NewsListController` over real HTTP using ureq. Validates
//! that request building and response parsing agree with the actual server.

use mock_server::CreateNews;
use news_core::{
    ApiError, HttpMethod, HttpRequest, HttpResponse, ListStatus, NewsClient, NewsListController,
    PLACEHOLDER_IMAGE_URL,
};

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses are returned as data rather than `Err`, letting the core
/// client handle status interpretation.
fn execute(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut response = match req.method {
        HttpMethod::Get => {
            let mut builder = agent.get(&req.url);
            for (key, value) in &req.headers {
                builder = builder.header(key, value);
            }
            builder.call()
        }
    }
    .map_err(|e| ApiError::Transport(e.to_string()))?;

    let status = response.status().as_u16();
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    Ok(HttpResponse::new(status, body))
}

fn start_server(articles: Vec<CreateNews>) -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener, mock_server::seeded_db(articles)).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

fn articles(count: usize) -> Vec<CreateNews> {
    (1..=count)
        .map(|n| CreateNews {
            title: format!("article {n}"),
            category: "NBA".to_string(),
            summary: format!("summary {n}"),
            content: Some(format!("content {n}")),
            time: format!("{n} minutes ago"),
            image_url: match n % 3 {
                0 => None,
                1 => Some(format!("/static/{n}.png")),
                _ => Some(format!("https://cdn.example.com/{n}.png")),
            },
        })
        .collect()
}

#[test]
fn paging_lifecycle() {
    let base = start_server(articles(25));
    let mut controller = NewsListController::new(NewsClient::new(&base));

    // Step 1: first page.
    let pending = controller.initialize().unwrap();
    controller.complete_load(pending.generation, execute(pending.request));
    assert_eq!(controller.status(), ListStatus::Ready);
    assert_eq!(controller.current_page(), 1);
    assert_eq!(controller.cards().len(), 10);
    let info = controller.page_info().unwrap();
    assert_eq!(info.total, 25);
    assert_eq!(info.pages, 3);
    assert_eq!(controller.cards()[0].id, 25);

    // Step 2: image references are resolved against the server.
    for card in controller.cards() {
        match card.id % 3 {
            0 => assert_eq!(card.image_url, PLACEHOLDER_IMAGE_URL),
            1 => assert_eq!(card.image_url, format!("{base}/static/{}.png", card.id)),
            _ => assert_eq!(card.image_url, format!("https://cdn.example.com/{}.png", card.id)),
        }
    }

    // Step 3: second page.
    let pending = controller.load_page(2).unwrap();
    controller.complete_load(pending.generation, execute(pending.request));
    assert_eq!(controller.current_page(), 2);
    assert_eq!(controller.cards().len(), 10);
    assert_eq!(controller.cards()[0].id, 15);
    assert_eq!(controller.page_info().unwrap().page, 2);

    // Step 4: last page is short.
    let pending = controller.load_page(3).unwrap();
    controller.complete_load(pending.generation, execute(pending.request));
    assert_eq!(controller.cards().len(), 5);
    assert!(!controller.has_next_page());

    // Step 5: a page past the end is empty but still a success.
    let pending = controller.load_page(4).unwrap();
    controller.complete_load(pending.generation, execute(pending.request));
    assert_eq!(controller.status(), ListStatus::Ready);
    assert!(controller.cards().is_empty());
}

#[test]
fn get_by_id_and_health_check() {
    let base = start_server(articles(3));
    let client = NewsClient::new(&base);

    let item = client
        .parse_get_news(execute(client.build_get_news(2)).unwrap())
        .unwrap();
    assert_eq!(item.id, 2);
    assert_eq!(item.content.as_deref(), Some("content 2"));

    let err = client
        .parse_get_news(execute(client.build_get_news(99)).unwrap())
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound));

    let status = client.parse_health_check(execute(client.build_health_check()));
    assert!(status.is_online(), "expected online, got {status:?}");
}

#[test]
fn unreachable_server_fails_soft() {
    // Bind then drop to get a port nobody listens on.
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let client = NewsClient::new(&format!("http://{addr}"));
    let mut controller = NewsListController::new(client.clone());

    let pending = controller.initialize().unwrap();
    controller.complete_load(pending.generation, execute(pending.request));
    assert_eq!(controller.status(), ListStatus::Failed);
    assert!(!controller.is_loading());
    assert!(controller.cards().is_empty());

    let status = client.parse_health_check(execute(client.build_health_check()));
    assert!(!status.is_online());
}
