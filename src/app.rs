use anyhow::{Context, Result};
use log::{debug, info};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use url::Url;

use crate::card::{render_detail, render_not_found};
use crate::category::{category_label, format_categories, select_category};
use crate::config::{Config, EnsureOutcome};
use crate::detail::fetch_detail;
use crate::logger::init_logger;
use crate::models::NewsItem;
use crate::news::{FetchError, NewsClient};
use crate::presentation::{FetchRequest, ListState, NewsList, RequestToken};
use crate::search_input::SearchInput;
use crate::theme::{Theme, ThemeStore};

const HELP: &str = "Type a search and press Enter. Commands:
  ~<text>             update the search as you type (sent after a short pause)
  :category <value>   filter by category (:c for short, \"all\" for every category)
  :categories         list the category options
  :clear              clear the search
  :open <id>          show one article
  :theme              toggle dark/light
  :help               show this message
  :quit               exit";

pub struct Options {
    pub search: String,
    pub category: String,
    pub id: Option<String>,
    pub interactive: bool,
    pub dark: bool,
    pub light: bool,
    pub endpoint: Option<Url>,
    pub verbose: bool,
}

type FetchOutcome = (RequestToken, Result<Vec<NewsItem>, FetchError>);

pub async fn run(opts: Options) -> Result<()> {
    // 0) Initialize logger
    init_logger(opts.verbose)?;
    debug!("Logger initialized");

    // 1) Ensure config exists (the template is usable as written)
    let config_outcome: EnsureOutcome = Config::ensure_user_config()?;
    if config_outcome.created {
        info!(
            "Config file created at {}. Using its defaults.",
            config_outcome.path.display()
        );
    }

    let cfg = Config::get_user_config()?;
    debug!("User config loaded");

    // 2) Create HTTP client, --endpoint wins over the config file
    let endpoint = opts.endpoint.clone().unwrap_or_else(|| cfg.endpoint.clone());
    let client = NewsClient::new(endpoint, cfg.user_agent.as_deref(), cfg.request_timeout())?;
    debug!("HTTP client created for {}", client.endpoint());

    // 3) Pick the theme: flag > saved choice > config default
    let store = ThemeStore::open_default()?;
    let theme = resolve_theme(&opts, &cfg, &store)?;
    debug!("Using {} theme", theme.as_str());

    // 4) Detail view, interactive session, or a single list
    if let Some(id) = &opts.id {
        show_detail(&client, id, theme).await;
        return Ok(());
    }

    if opts.interactive {
        return run_interactive(client, theme, &store, &opts).await;
    }

    // One-shot list: only the settled state is printed
    let (mut list, request) = initial_list(&opts);
    let outcome = client
        .fetch_news_checked(&request.category, &request.search)
        .await;
    list.resolve(request.token, outcome);
    print!("{}", list.render(theme));

    Ok(())
}

fn resolve_theme(opts: &Options, cfg: &Config, store: &ThemeStore) -> Result<Theme> {
    let theme = if opts.dark {
        Theme::Dark
    } else if opts.light {
        Theme::Light
    } else {
        return Ok(store.load_or(Theme::from_dark_mode(cfg.dark_mode)));
    };

    store.save(theme)?;
    Ok(theme)
}

fn initial_list(opts: &Options) -> (NewsList, FetchRequest) {
    let (mut list, mut request) = NewsList::start();
    let category = select_category(&opts.category);
    if !category.is_empty() {
        request = list.set_category(category);
    }
    if !opts.search.is_empty() {
        request = list.set_search(opts.search.clone());
    }
    (list, request)
}

async fn show_detail(client: &NewsClient, id: &str, theme: Theme) {
    match fetch_detail(client, id).await {
        Some(detail) => print!("{}", render_detail(&detail, theme)),
        None => print!("{}", render_not_found(theme)),
    }
}

fn spawn_fetch(client: &NewsClient, request: FetchRequest, tx: &mpsc::Sender<FetchOutcome>) {
    let client = client.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let outcome = client
            .fetch_news_checked(&request.category, &request.search)
            .await;
        if tx.send((request.token, outcome)).await.is_err() {
            debug!("Dropping response for {:?}, session closed", request.token);
        }
    });
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Search(String),
    Type(String),
    Category(String),
    Categories,
    Clear,
    Open(String),
    ToggleTheme,
    Help,
    Quit,
    Unknown(String),
}

fn parse_command(line: &str) -> Command {
    let line = line.trim_end_matches(['\r', '\n']);
    if let Some(text) = line.strip_prefix('~') {
        return Command::Type(text.to_string());
    }
    let Some(rest) = line.trim().strip_prefix(':') else {
        return Command::Search(line.to_string());
    };

    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (rest, ""),
    };

    match name {
        "category" | "c" => Command::Category(arg.to_string()),
        "categories" => Command::Categories,
        "clear" => Command::Clear,
        "open" | "o" => Command::Open(arg.to_string()),
        "theme" => Command::ToggleTheme,
        "help" | "h" => Command::Help,
        "quit" | "q" => Command::Quit,
        other => Command::Unknown(other.to_string()),
    }
}

fn status_line(list: &NewsList) -> String {
    let category = category_label(list.category())
        .map(|label| label.to_string())
        .unwrap_or_else(|| list.category().to_string());
    let mut line = format!("[{}]", category);
    if !list.search().trim().is_empty() {
        line.push_str(&format!(" search: {}", list.search()));
    }
    match list.state() {
        ListState::Loading => line.push_str(" loading…"),
        ListState::Populated(items) => line.push_str(&format!(" {} articles", items.len())),
        ListState::Error(_) | ListState::Empty => {}
    }
    line
}

async fn run_interactive(
    client: NewsClient,
    mut theme: Theme,
    store: &ThemeStore,
    opts: &Options,
) -> Result<()> {
    let (result_tx, mut result_rx) = mpsc::channel::<FetchOutcome>(16);
    let (search_tx, mut search_rx) = mpsc::channel::<String>(16);
    let mut input = SearchInput::new(search_tx);

    let (mut list, request) = initial_list(opts);
    spawn_fetch(&client, request, &result_tx);

    println!("{}\n", HELP);
    println!("{}", status_line(&list));
    print!("{}", list.render(theme));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            Some((token, outcome)) = result_rx.recv() => {
                if list.resolve(token, outcome) {
                    println!("{}", status_line(&list));
                    print!("{}", list.render(theme));
                }
            }
            Some(term) = search_rx.recv() => {
                let request = list.set_search(term);
                spawn_fetch(&client, request, &result_tx);
                println!("{}", status_line(&list));
                print!("{}", list.render(theme));
            }
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read from stdin")? else {
                    debug!("stdin closed, leaving interactive mode");
                    break;
                };

                match parse_command(&line) {
                    Command::Search(term) => input.submit(term).await,
                    Command::Type(text) => input.on_change(text),
                    Command::Clear => input.on_clear().await,
                    Command::Category(value) => {
                        let request = list.set_category(select_category(&value));
                        spawn_fetch(&client, request, &result_tx);
                        println!("{}", status_line(&list));
                        print!("{}", list.render(theme));
                    }
                    Command::Categories => println!("{}", format_categories()),
                    Command::Open(id) => show_detail(&client, &id, theme).await,
                    Command::ToggleTheme => {
                        theme = theme.toggled();
                        store.save(theme)?;
                        println!("Theme: {}", theme.as_str());
                    }
                    Command::Help => println!("{}", HELP),
                    Command::Quit => break,
                    Command::Unknown(name) => println!("Unknown command :{} (try :help)", name),
                }
            }
        }
    }

    Ok(())
}
