//! Plain-text rendering of news cards.

use std::fmt::Write;

use news_core::{ApiStatus, ListStatus, NewsClient, NewsItem, NewsListController};

/// The list view: one block per card, then a pager line.
pub fn render_list(controller: &NewsListController) -> String {
    let mut out = String::new();
    match controller.status() {
        ListStatus::Idle | ListStatus::Loading => {
            out.push_str("Loading...\n");
            return out;
        }
        ListStatus::Ready | ListStatus::Failed => {}
    }

    if controller.cards().is_empty() {
        out.push_str("No news to display.\n");
    }
    for card in controller.cards() {
        let _ = writeln!(out, "[{}] #{} {}", card.category, card.id, card.title);
        let _ = writeln!(out, "    {}", card.time);
        if !card.summary.is_empty() {
            let _ = writeln!(out, "    {}", card.summary);
        }
        let _ = writeln!(out, "    image: {}", card.image_url);
        out.push('\n');
    }
    out.push_str(&pager_line(controller));
    out
}

fn pager_line(controller: &NewsListController) -> String {
    let pages = controller
        .page_info()
        .map_or_else(|| "?".to_string(), |info| info.pages.to_string());
    let mut line = format!("page {} of {pages}", controller.current_page());
    if controller.has_previous_page() {
        line.push_str("  [p]rev");
    }
    if controller.has_next_page() {
        line.push_str("  [n]ext");
    }
    line.push('\n');
    line
}

/// A single article with its full text.
pub fn render_article(client: &NewsClient, item: &NewsItem) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", item.title);
    let _ = writeln!(out, "{} | {}", item.category, item.time);
    let _ = writeln!(
        out,
        "image: {}",
        client.resolve_image_url(item.image_url.as_deref())
    );
    out.push('\n');
    let _ = writeln!(out, "{}", item.content.as_deref().unwrap_or(&item.summary));
    out
}

pub fn render_status(base_url: &str, status: &ApiStatus) -> String {
    match status {
        ApiStatus::Online { info } => format!("{base_url}: online ({})\n", info.message),
        ApiStatus::Offline { error } => format!("{base_url}: offline ({error})\n"),
    }
}
