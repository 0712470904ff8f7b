use log::debug;

use crate::models::NewsItem;
use crate::news::NewsClient;

const RELATED_LIMIT: usize = 3;

#[derive(Debug, Clone)]
pub struct NewsDetail {
    pub item: NewsItem,
    pub related: Vec<NewsItem>,
}

/// There is no single-item endpoint, so the full list is fetched and scanned.
/// A failed fetch reads as "not found".
pub async fn fetch_detail(client: &NewsClient, id: &str) -> Option<NewsDetail> {
    let items = client.fetch_news("", "").await;
    debug!("Looking up id {} among {} items", id, items.len());

    let item = find_by_id(&items, id)?.clone();
    let related = related_items(&items, &item, RELATED_LIMIT);

    Some(NewsDetail { item, related })
}

pub fn find_by_id<'a>(items: &'a [NewsItem], id: &str) -> Option<&'a NewsItem> {
    let wanted = id.trim();
    items
        .iter()
        .find(|item| item.id_string().as_deref() == Some(wanted))
}

/// Other items from the same team or the same category, in list order.
pub fn related_items(items: &[NewsItem], item: &NewsItem, limit: usize) -> Vec<NewsItem> {
    items
        .iter()
        .filter(|other| other.id != item.id)
        .filter(|other| other.team == item.team || other.category == item.category)
        .take(limit)
        .cloned()
        .collect()
}
