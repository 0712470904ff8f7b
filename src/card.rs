use crate::detail::NewsDetail;
use crate::models::NewsItem;
use crate::theme::Theme;
use crate::utils::{format_display_date, wrap_text};

const CARD_WIDTH: usize = 72;

pub fn render_card(item: &NewsItem, theme: Theme) -> String {
    let mut out = String::new();

    out.push_str(&theme.heading(&item.title));
    out.push('\n');

    for line in wrap_text(&item.summary, CARD_WIDTH) {
        out.push_str(&line);
        out.push('\n');
    }

    out.push_str(&theme.muted(&format!("Category: {}", item.category)));
    out.push('\n');
    out.push_str(&theme.muted(&format!("Team: {}", item.team)));
    out.push('\n');
    out.push_str(&theme.muted(&format!("Date: {}", format_display_date(&item.date))));
    out.push('\n');

    if let Some(image) = &item.image {
        out.push_str(&theme.muted(&format!("Image: {}", image)));
        out.push('\n');
    }

    if let Some(id) = item.id {
        out.push_str(&format!("Read more: fplnews --id {}\n", id));
    }

    out
}

pub fn render_detail(detail: &NewsDetail, theme: Theme) -> String {
    let item = &detail.item;
    let mut out = String::new();

    out.push_str(&theme.heading(&item.title));
    out.push('\n');
    out.push_str(&theme.muted(&format!(
        "{} | {} | {}",
        item.team,
        item.category,
        format_display_date(&item.date)
    )));
    out.push_str("\n\n");

    for line in wrap_text(&item.summary, CARD_WIDTH) {
        out.push_str(&line);
        out.push('\n');
    }

    if let Some(image) = &item.image {
        out.push('\n');
        out.push_str(&theme.muted(&format!("Image: {}", image)));
        out.push('\n');
    }

    if !detail.related.is_empty() {
        out.push('\n');
        out.push_str(&theme.heading("Related News"));
        out.push('\n');
        for related in &detail.related {
            match related.id {
                Some(id) => out.push_str(&format!("- [{}] {}\n", id, related.title)),
                None => out.push_str(&format!("- {}\n", related.title)),
            }
        }
    }

    out
}

pub fn render_not_found(theme: Theme) -> String {
    format!(
        "{}\nThe news article you're looking for could not be found or may have been removed.\nBack to News: fplnews\n",
        theme.heading("News Article Not Found")
    )
}
