mod app;
mod card;
mod category;
mod config;
mod detail;
mod filter;
mod logger;
mod models;
mod news;
mod presentation;
mod search_input;
mod theme;
mod utils;

use anyhow::Result;
use clap::Parser;
use url::Url;

#[derive(Parser)]
#[command(name = "fplnews")]
#[command(about = "Fantasy football news from the terminal")]
struct Cli {
    /// Only show articles whose title, summary, team or category contains TERM
    #[arg(long, value_name = "TERM")]
    search: Option<String>,

    /// Only show articles whose category contains CATEGORY ("all" for every category).
    /// Ignored when --search is given
    #[arg(long)]
    category: Option<String>,

    /// Show a single article and related news
    #[arg(long, conflicts_with_all = ["search", "category", "interactive"])]
    id: Option<String>,

    /// Keep reading searches and commands from stdin
    #[arg(short, long)]
    interactive: bool,

    /// Switch to the dark theme and remember it
    #[arg(long, conflicts_with = "light")]
    dark: bool,

    /// Switch to the light theme and remember it
    #[arg(long)]
    light: bool,

    /// Override the news API endpoint from the config file
    #[arg(long)]
    endpoint: Option<Url>,

    /// Print debug logs to the console
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    app::run(app::Options {
        search: cli.search.unwrap_or_default(),
        category: cli.category.unwrap_or_default(),
        id: cli.id,
        interactive: cli.interactive,
        dark: cli.dark,
        light: cli.light,
        endpoint: cli.endpoint,
        verbose: cli.verbose,
    })
    .await
}
