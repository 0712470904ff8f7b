use log::{debug, error};

use crate::card::render_card;
use crate::models::NewsItem;
use crate::news::FetchError;
use crate::theme::Theme;

pub const ERROR_MESSAGE: &str = "Failed to fetch news. Please try again later.";
const SKELETON_CARDS: usize = 6;

/// Identifies one issued fetch. Only the newest token may change the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListState {
    Loading,
    Error(String),
    Empty,
    Populated(Vec<NewsItem>),
}

/// What the caller must fetch after a state change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub token: RequestToken,
    pub category: String,
    pub search: String,
}

/// State behind the news list: the current search and category, the fetch in
/// flight, and what to show.
#[derive(Debug)]
pub struct NewsList {
    search: String,
    category: String,
    state: ListState,
    next_token: u64,
    current: RequestToken,
}

impl NewsList {
    /// Starts out loading; the returned request is the initial fetch.
    pub fn start() -> (Self, FetchRequest) {
        let mut list = NewsList {
            search: String::new(),
            category: String::new(),
            state: ListState::Loading,
            next_token: 0,
            current: RequestToken(0),
        };
        let request = list.begin_fetch();
        (list, request)
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn set_search(&mut self, search: impl Into<String>) -> FetchRequest {
        self.search = search.into();
        self.begin_fetch()
    }

    pub fn set_category(&mut self, category: impl Into<String>) -> FetchRequest {
        self.category = category.into();
        self.begin_fetch()
    }

    fn begin_fetch(&mut self) -> FetchRequest {
        self.next_token += 1;
        self.current = RequestToken(self.next_token);
        self.state = ListState::Loading;

        FetchRequest {
            token: self.current,
            category: self.category.clone(),
            search: self.search.clone(),
        }
    }

    /// Apply a finished fetch. Returns false, leaving the state alone, when a
    /// newer request has been issued since.
    pub fn resolve(
        &mut self,
        token: RequestToken,
        outcome: Result<Vec<NewsItem>, FetchError>,
    ) -> bool {
        if token != self.current {
            debug!("Discarding stale response {:?} (current {:?})", token, self.current);
            return false;
        }

        self.state = match outcome {
            Ok(items) if items.is_empty() => ListState::Empty,
            Ok(items) => ListState::Populated(items),
            Err(e) => {
                error!("NewsList: Error fetching news: {}", e);
                ListState::Error(ERROR_MESSAGE.to_string())
            }
        };
        true
    }

    pub fn empty_message(&self) -> String {
        if self.search.trim().is_empty() {
            "No news articles available at the moment.".to_string()
        } else {
            format!(
                "No results found for \"{}\". Try different keywords.",
                self.search
            )
        }
    }

    pub fn render(&self, theme: Theme) -> String {
        match &self.state {
            ListState::Loading => render_skeleton(theme),
            ListState::Error(message) => {
                format!("{}\n{}\n", theme.heading("Error"), message)
            }
            ListState::Empty => {
                format!("{}\n{}\n", theme.heading("No news found"), self.empty_message())
            }
            ListState::Populated(items) => items
                .iter()
                .map(|item| render_card(item, theme))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

fn render_skeleton(theme: Theme) -> String {
    let placeholder = theme.muted("░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░\n░░░░░░░░░░░░░░░░░░░░\n");
    let mut out = String::new();
    for _ in 0..SKELETON_CARDS {
        out.push_str(&placeholder);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64) -> NewsItem {
        NewsItem {
            id: Some(id),
            title: format!("Story {id}"),
            ..Default::default()
        }
    }

    #[test]
    fn test_starts_loading_with_blank_filters() {
        let (list, request) = NewsList::start();
        assert_eq!(list.state(), &ListState::Loading);
        assert_eq!(request.search, "");
        assert_eq!(request.category, "");
        assert_eq!(list.render(Theme::Light).lines().filter(|l| l.is_empty()).count(), 6);
    }

    #[test]
    fn test_resolve_transitions() {
        let (mut list, request) = NewsList::start();
        assert!(list.resolve(request.token, Ok(vec![item(1), item(2)])));
        assert_eq!(list.state(), &ListState::Populated(vec![item(1), item(2)]));

        let request = list.set_search("arsenal");
        assert_eq!(list.state(), &ListState::Loading);
        assert!(list.resolve(request.token, Ok(vec![])));
        assert_eq!(list.state(), &ListState::Empty);

        let request = list.set_category("Transfer");
        assert_eq!(request.search, "arsenal");
        assert_eq!(request.category, "Transfer");
        assert!(list.resolve(request.token, Err(FetchError::EmptyBody)));
        assert_eq!(list.state(), &ListState::Error(ERROR_MESSAGE.to_string()));
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let (mut list, _initial) = NewsList::start();
        let first = list.set_search("sal");
        let second = list.set_search("salah");

        // The newer request finishes first, then the older one straggles in.
        assert!(list.resolve(second.token, Ok(vec![item(2)])));
        assert!(!list.resolve(first.token, Ok(vec![item(1), item(3)])));

        assert_eq!(list.state(), &ListState::Populated(vec![item(2)]));
    }

    #[test]
    fn test_empty_message_depends_on_search() {
        let (mut list, request) = NewsList::start();
        list.resolve(request.token, Ok(vec![]));
        assert!(list.render(Theme::Light).contains("No news articles available at the moment."));

        let request = list.set_search("kane");
        list.resolve(request.token, Ok(vec![]));
        let out = list.render(Theme::Light);
        assert!(out.starts_with("No news found\n"));
        assert!(out.contains("No results found for \"kane\". Try different keywords."));
    }

    #[test]
    fn test_render_populated_one_card_per_item() {
        let (mut list, request) = NewsList::start();
        list.resolve(request.token, Ok(vec![item(1), item(2)]));
        let out = list.render(Theme::Light);
        assert!(out.contains("Story 1"));
        assert!(out.contains("Story 2"));
        assert_eq!(out.matches("Read more:").count(), 2);
    }
}
