use mock_server::{seeded_db, CreateNews};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "8000".to_string());
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    let db = seeded_db(sample_news());
    info!(%addr, articles = db.read().await.len(), "listening");
    mock_server::run(listener, db).await?;
    Ok(())
}

/// Enough articles to fill a few pages.
fn sample_news() -> Vec<CreateNews> {
    let teams = [
        "Suns", "Timberwolves", "Clippers", "Nets", "Lakers", "Celtics", "Nuggets", "Heat",
    ];
    (0..24)
        .map(|n| {
            let home = teams[n % teams.len()];
            let away = teams[(n + 3) % teams.len()];
            CreateNews {
                title: format!("{home} take on {away} in game {}", n + 1),
                category: "NBA".to_string(),
                summary: format!("Preview of the {home} and {away} matchup."),
                content: Some(format!(
                    "The {home} host the {away} tonight. Both sides are chasing a playoff spot."
                )),
                time: format!("{} hours ago", 24 - n),
                image_url: match n % 3 {
                    0 => None,
                    1 => Some(format!("/static/images/game-{}.jpg", n + 1)),
                    _ => Some(format!("https://cdn.example.com/nba/{}.jpg", n + 1)),
                },
            }
        })
        .collect()
}
