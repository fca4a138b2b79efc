/// Shared color and style helpers for all screens
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

/// Accent color, white in high-contrast mode
pub fn accent(high_contrast: bool) -> Color {
    if high_contrast {
        Color::White
    } else {
        Color::Rgb(45, 212, 191) // Teal #2DD4BF
    }
}

/// Border style for screen blocks
pub fn border_style(high_contrast: bool) -> Style {
    if high_contrast {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Dimmed label style
pub fn dim() -> Style {
    Style::default().add_modifier(Modifier::DIM)
}

/// Bold accent span for block titles
pub fn title_span(text: impl Into<String>, high_contrast: bool) -> Span<'static> {
    Span::styled(
        text.into(),
        Style::default()
            .fg(accent(high_contrast))
            .add_modifier(Modifier::BOLD),
    )
}
