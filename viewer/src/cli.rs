use clap::{Parser, Subcommand};
use news_core::DEFAULT_BASE_URL;

/// Browse the news feed from a terminal.
#[derive(Parser, Debug)]
#[command(name = "news-viewer", version, about)]
pub struct Cli {
    /// Base URL of the news API.
    #[arg(long, env = "NEWS_API_URL", default_value = DEFAULT_BASE_URL, global = true)]
    pub base_url: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print one page of news cards.
    List {
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,
    },
    /// Print a single article with its full text.
    Show { id: u64 },
    /// Page through the feed interactively.
    Browse,
    /// Check whether the API is reachable.
    Status,
}

impl Cli {
    /// The news list is the default view.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::List { page: 1 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_lists_first_page() {
        let cli = Cli::try_parse_from(["news-viewer"]).unwrap();
        assert_eq!(cli.command(), Command::List { page: 1 });
    }

    #[test]
    fn list_accepts_page() {
        let cli = Cli::try_parse_from(["news-viewer", "list", "--page", "3"]).unwrap();
        assert_eq!(cli.command(), Command::List { page: 3 });
    }

    #[test]
    fn list_rejects_page_zero() {
        assert!(Cli::try_parse_from(["news-viewer", "list", "--page", "0"]).is_err());
    }

    #[test]
    fn base_url_flag_after_subcommand() {
        let cli =
            Cli::try_parse_from(["news-viewer", "show", "5", "--base-url", "http://news:9000"])
                .unwrap();
        assert_eq!(cli.base_url, "http://news:9000");
        assert_eq!(cli.command(), Command::Show { id: 5 });
    }
}
