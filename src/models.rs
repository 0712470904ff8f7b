use serde_json::Value;

/// One article as returned by the news API.
///
/// The API is untrusted, so every field is optional on the wire. Text fields
/// collapse to an empty string when missing, which is what the filters compare
/// against anyway.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsItem {
    pub id: Option<i64>,
    pub title: String,
    pub date: String,
    pub summary: String,
    pub team: String,
    pub category: String,
    pub image: Option<String>,
}

impl NewsItem {
    /// Build an item from one raw element of the API array. Never fails: a
    /// non-object element yields an item with every field defaulted.
    pub fn from_value(value: &Value) -> Self {
        let text = |key: &str| {
            value
                .get(key)
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string()
        };

        let id = value.get("id").and_then(|v| match v {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        });

        let image = value
            .get("image")
            .and_then(|v| v.as_str())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string());

        NewsItem {
            id,
            title: text("title"),
            date: text("date"),
            summary: text("summary"),
            team: text("team"),
            category: text("category"),
            image,
        }
    }

    /// The id as the detail route sees it.
    pub fn id_string(&self) -> Option<String> {
        self.id.map(|id| id.to_string())
    }
}
