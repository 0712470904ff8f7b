use crate::models::NewsItem;

/// Case-insensitive substring match of `term` against title, summary, team
/// and category. `term` must already be trimmed and lower-cased.
pub fn matches_search(item: &NewsItem, term: &str) -> bool {
    [&item.title, &item.summary, &item.team, &item.category]
        .iter()
        .any(|field| field.to_lowercase().contains(term))
}

/// Case-insensitive substring match of `term` against the category only.
/// `term` must already be trimmed and lower-cased.
pub fn matches_category(item: &NewsItem, term: &str) -> bool {
    item.category.to_lowercase().contains(term)
}

/// Apply the local filters to a freshly fetched list.
///
/// A non-blank search wins over the category: when both are supplied only the
/// search filter runs. Blank on both returns the list untouched.
pub fn filter_news(items: Vec<NewsItem>, category: &str, search: &str) -> Vec<NewsItem> {
    let search_term = search.trim().to_lowercase();
    if !search_term.is_empty() {
        return items
            .into_iter()
            .filter(|item| matches_search(item, &search_term))
            .collect();
    }

    let category_term = category.trim().to_lowercase();
    if !category_term.is_empty() {
        return items
            .into_iter()
            .filter(|item| matches_category(item, &category_term))
            .collect();
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, title: &str, summary: &str, team: &str, category: &str) -> NewsItem {
        NewsItem {
            id: Some(id),
            title: title.to_string(),
            summary: summary.to_string(),
            team: team.to_string(),
            category: category.to_string(),
            ..Default::default()
        }
    }

    fn sample() -> Vec<NewsItem> {
        vec![
            item(1, "Haaland Fit", "Starts at Burnley", "Manchester City", "Injury Update"),
            item(2, "Arsenal Signs Striker", "Deal done", "Arsenal", "Transfer"),
        ]
    }

    fn ids(items: &[NewsItem]) -> Vec<Option<i64>> {
        items.iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_search_matches_team_case_insensitively() {
        let only = vec![item(5, "x", "y", "Arsenal", "")];
        let out = filter_news(only, "", "arsenal");
        assert_eq!(ids(&out), vec![Some(5)]);
    }

    #[test]
    fn test_search_excludes_items_without_the_term() {
        let only = vec![item(5, "Salah scores", "Reds win", "Liverpool", "Match Report")];
        assert!(filter_news(only, "", "arsenal").is_empty());
    }

    #[test]
    fn test_search_checks_every_field() {
        let items = vec![
            item(1, "ARSENAL in title", "", "", ""),
            item(2, "", "about arsenal", "", ""),
            item(3, "", "", "", "Arsenal transfers"),
            item(4, "", "", "", ""),
        ];
        let out = filter_news(items, "", "  Arsenal ");
        assert_eq!(ids(&out), vec![Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn test_search_takes_precedence_over_category() {
        let out = filter_news(sample(), "Injury", "arsenal");
        assert_eq!(ids(&out), vec![Some(2)]);
    }

    #[test]
    fn test_category_is_substring_match() {
        let out = filter_news(sample(), "Injury", "");
        assert_eq!(ids(&out), vec![Some(1)]);

        let out = filter_news(sample(), "transfer", "   ");
        assert_eq!(ids(&out), vec![Some(2)]);
    }

    #[test]
    fn test_category_ignores_other_fields() {
        let items = vec![item(9, "Transfer rumours", "", "", "Gossip")];
        assert!(filter_news(items, "Transfer", "").is_empty());
    }

    #[test]
    fn test_blank_filters_keep_everything_in_order() {
        let out = filter_news(sample(), "", "");
        assert_eq!(ids(&out), vec![Some(1), Some(2)]);

        let out = filter_news(sample(), " \t", " ");
        assert_eq!(ids(&out), vec![Some(1), Some(2)]);
    }

    #[test]
    fn test_defaulted_items_never_match_a_term() {
        let items = vec![NewsItem::default()];
        assert!(filter_news(items.clone(), "", "a").is_empty());
        assert!(filter_news(items.clone(), "a", "").is_empty());
        assert_eq!(filter_news(items, "", "").len(), 1);
    }
}
