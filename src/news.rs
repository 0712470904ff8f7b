use std::time::Duration;

use log::{debug, error, warn};
use reqwest::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde_json::Value;
use thiserror::Error;
use url::Url;

use crate::filter::filter_news;
use crate::models::NewsItem;

pub const DEFAULT_ENDPOINT: &str = "https://fpl-news-api.vercel.app/api/latest-news";

/// Everything that can go wrong between sending the request and holding a
/// list of items. A filter that matches nothing is not an error.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP error! status: {0}")]
    Status(reqwest::StatusCode),

    #[error("empty response from API")]
    EmptyBody,

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unexpected data format: {0}")]
    UnexpectedShape(String),
}

/// Talks to the news API. Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct NewsClient {
    http: Client,
    endpoint: Url,
}

impl NewsClient {
    pub fn new(
        endpoint: Url,
        user_agent: Option<&str>,
        timeout: Option<Duration>,
    ) -> anyhow::Result<Self> {
        let mut builder = Client::builder().redirect(reqwest::redirect::Policy::limited(10));
        if let Some(ua) = user_agent {
            builder = builder.user_agent(ua);
        }
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(NewsClient {
            http: builder.build()?,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetch and locally filter the news list. Failures are logged and come
    /// back as an empty list, so callers cannot tell "nothing matched" from
    /// "the fetch failed". Use [`NewsClient::fetch_news_checked`] when that
    /// difference matters.
    pub async fn fetch_news(&self, category: &str, search: &str) -> Vec<NewsItem> {
        match self.fetch_news_checked(category, search).await {
            Ok(items) => items,
            Err(FetchError::EmptyBody) => {
                warn!("Empty response from API");
                Vec::new()
            }
            Err(FetchError::UnexpectedShape(kind)) => {
                warn!("Unexpected data format: {}", kind);
                Vec::new()
            }
            Err(e) => {
                error!("Error fetching news: {}", e);
                Vec::new()
            }
        }
    }

    pub async fn fetch_news_checked(
        &self,
        category: &str,
        search: &str,
    ) -> Result<Vec<NewsItem>, FetchError> {
        let url = build_url(&self.endpoint, category, search);
        debug!("GET {}", url);

        let response = self
            .http
            .get(url)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.text().await?;
        let items = parse_body(&body)?;
        debug!("API returned {} items", items.len());

        let filtered = filter_news(items, category, search);
        debug!(
            "{} items left after filtering (category: {:?}, search: {:?})",
            filtered.len(),
            category,
            search
        );

        Ok(filtered)
    }
}

/// Attach `category` and `search` as query parameters when they are not
/// blank. The values go out as typed; only the blank check trims.
pub fn build_url(endpoint: &Url, category: &str, search: &str) -> Url {
    let mut url = endpoint.clone();
    let params: Vec<(&str, &str)> = [("category", category), ("search", search)]
        .into_iter()
        .filter(|(_, value)| !value.trim().is_empty())
        .collect();

    if !params.is_empty() {
        url.query_pairs_mut().extend_pairs(params);
    }

    url
}

/// Turn a raw response body into items, before any local filtering.
pub fn parse_body(body: &str) -> Result<Vec<NewsItem>, FetchError> {
    if body.trim().is_empty() {
        return Err(FetchError::EmptyBody);
    }

    let value: Value = serde_json::from_str(body).map_err(|e| {
        debug!("Response text: {}", body);
        FetchError::Json(e)
    })?;

    let raw = normalize(value)?;
    Ok(raw.iter().map(NewsItem::from_value).collect())
}

/// Accept either a bare array or an object wrapping the array under `data`.
/// An object whose `data` is missing or not an array counts as no items.
pub fn normalize(value: Value) -> Result<Vec<Value>, FetchError> {
    match value {
        Value::Array(items) => Ok(items),
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(items)) => Ok(items),
            _ => Ok(Vec::new()),
        },
        Value::Null => Err(FetchError::UnexpectedShape("null".to_string())),
        Value::Bool(_) => Err(FetchError::UnexpectedShape("boolean".to_string())),
        Value::Number(_) => Err(FetchError::UnexpectedShape("number".to_string())),
        Value::String(_) => Err(FetchError::UnexpectedShape("string".to_string())),
    }
}
