/// `(value, label)` pairs offered by the category selector.
pub const CATEGORIES: [(&str, &str); 3] = [
    ("all", "All Categories"),
    ("Injury", "Injury Updates"),
    ("Transfer", "Transfer News"),
];

const ALL: &str = "all";

/// Map a selector value to the category filter. `all` means no filter.
pub fn select_category(value: &str) -> String {
    if value.trim().eq_ignore_ascii_case(ALL) {
        String::new()
    } else {
        value.to_string()
    }
}

pub fn category_label(value: &str) -> Option<&'static str> {
    let wanted = if value.trim().is_empty() { ALL } else { value.trim() };
    CATEGORIES
        .iter()
        .find(|(v, _)| v.eq_ignore_ascii_case(wanted))
        .map(|(_, label)| *label)
}

pub fn format_categories() -> String {
    CATEGORIES
        .iter()
        .map(|(value, label)| format!("{:<10} {}", value, label))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_category() {
        assert_eq!(select_category("all"), "");
        assert_eq!(select_category(" ALL "), "");
        assert_eq!(select_category("Injury"), "Injury");
        assert_eq!(select_category("Match Report"), "Match Report");
    }

    #[test]
    fn test_category_label() {
        assert_eq!(category_label(""), Some("All Categories"));
        assert_eq!(category_label("transfer"), Some("Transfer News"));
        assert_eq!(category_label("Gossip"), None);
    }
}
