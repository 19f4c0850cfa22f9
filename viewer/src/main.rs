//! Terminal host for `news-core`.
//!
//! Performs the HTTP round trips the core describes and prints the results.
//! With no subcommand it shows the first page of the news list.

use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;
use news_core::{NewsClient, NewsListController};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod cli;
mod render;
mod transport;

use cli::{Cli, Command};
use transport::Transport;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout carries only the rendered view.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let args = Cli::parse();
    debug!(?args, "parsed arguments");

    let client = NewsClient::new(&args.base_url);
    let transport = Transport::new();

    match args.command() {
        Command::List { page } => list(client, &transport, page),
        Command::Show { id } => show(&client, &transport, id),
        Command::Browse => browse(client, &transport),
        Command::Status => {
            let status = client.parse_health_check(transport.execute(client.build_health_check()));
            print!("{}", render::render_status(client.base_url(), &status));
            Ok(())
        }
    }
}

fn list(client: NewsClient, transport: &Transport, page: u32) -> anyhow::Result<()> {
    let mut controller = NewsListController::new(client);
    load(&mut controller, transport, page)?;
    print!("{}", render::render_list(&controller));
    Ok(())
}

fn show(client: &NewsClient, transport: &Transport, id: u64) -> anyhow::Result<()> {
    let response = transport.execute(client.build_get_news(id))?;
    let item = client
        .parse_get_news(response)
        .with_context(|| format!("fetching article {id}"))?;
    print!("{}", render::render_article(client, &item));
    Ok(())
}

fn browse(client: NewsClient, transport: &Transport) -> anyhow::Result<()> {
    let mut controller = NewsListController::new(client);
    let pending = controller.initialize()?;
    controller.complete_load(pending.generation, transport.execute(pending.request));
    print!("{}", render::render_list(&controller));

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let target = match line.trim() {
            "q" | "quit" => break,
            "n" if controller.has_next_page() => controller.current_page() + 1,
            "p" if controller.has_previous_page() => controller.current_page() - 1,
            "r" | "" => controller.current_page(),
            other => match other.parse::<u32>() {
                Ok(page) if page >= 1 => page,
                _ => {
                    println!("commands: n, p, r, <page number>, q");
                    continue;
                }
            },
        };
        load(&mut controller, transport, target)?;
        print!("{}", render::render_list(&controller));
    }
    debug!("browse finished");
    Ok(())
}

/// Issue a page load and feed the outcome straight back.
fn load(
    controller: &mut NewsListController,
    transport: &Transport,
    page: u32,
) -> anyhow::Result<()> {
    let pending = controller.load_page(page)?;
    controller.complete_load(pending.generation, transport.execute(pending.request));
    Ok(())
}
