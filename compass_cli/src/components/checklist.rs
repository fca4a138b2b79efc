/// Checkbox-list rendering shared by the interest picker and the
/// milestone roadmap
use crate::components::theme::accent;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

#[derive(Debug, Clone)]
pub struct CheckItem {
    pub label: String,
    pub checked: bool,
    /// Optional trailing annotation, rendered dimmed
    pub meta: Option<String>,
}

impl CheckItem {
    pub fn new(label: impl Into<String>, checked: bool) -> Self {
        Self {
            label: label.into(),
            checked,
            meta: None,
        }
    }

    pub fn with_meta(mut self, meta: impl Into<String>) -> Self {
        self.meta = Some(meta.into());
        self
    }
}

/// Builds one rendered line for a check item. The cursor row gets the
/// accent highlight; checked rows keep the accent checkmark.
pub fn check_item_line(item: &CheckItem, under_cursor: bool, high_contrast: bool) -> Line<'static> {
    let accent_color = accent(high_contrast);
    let checkbox = if item.checked { "[✓]" } else { "[ ]" };

    let row_style = if under_cursor {
        Style::default()
            .fg(accent_color)
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    } else if item.checked {
        Style::default().fg(accent_color)
    } else {
        Style::default().fg(Color::White)
    };

    let mut spans = vec![
        Span::styled(format!("  {} ", checkbox), row_style),
        Span::styled(item.label.clone(), row_style),
    ];
    if let Some(meta) = &item.meta {
        spans.push(Span::styled(
            format!("  {}", meta),
            Style::default().add_modifier(Modifier::DIM),
        ));
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unchecked_item_renders_empty_box() {
        let line = check_item_line(&CheckItem::new("Coding", false), false, false);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.contains("[ ]"));
        assert!(text.contains("Coding"));
    }

    #[test]
    fn test_checked_item_renders_checkmark() {
        let line = check_item_line(&CheckItem::new("Design", true), false, false);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.contains("[✓]"));
    }

    #[test]
    fn test_meta_is_appended() {
        let item = CheckItem::new("Foundations", false).with_meta("Suggested: 1 month");
        let line = check_item_line(&item, false, false);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.contains("Suggested: 1 month"));
    }

    #[test]
    fn test_cursor_row_is_bold() {
        let line = check_item_line(&CheckItem::new("Arts", false), true, false);
        assert!(line.spans[0].style.add_modifier.contains(Modifier::BOLD));
    }
}
