/// Home screen - hero copy and entry point into onboarding
use crate::components::theme::{accent, border_style, dim, title_span};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

const HOW_IT_WORKS: &[&str] = &[
    "Create profile",
    "AI recommends",
    "Explore roadmap",
    "Mock interviews & more",
];

pub struct HomeScreen {
    high_contrast: bool,
}

impl HomeScreen {
    pub fn new(high_contrast: bool) -> Self {
        Self { high_contrast }
    }
}

impl Widget for HomeScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(self.high_contrast))
            .title(title_span(" CareerCompass ", self.high_contrast));

        let inner = block.inner(area);
        Widget::render(block, area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(4),
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(2),
            ])
            .split(inner);

        let title = Paragraph::new(Line::from(Span::styled(
            "Your Personalized Career & Skills Roadmap",
            Style::default()
                .fg(accent(self.high_contrast))
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        Widget::render(title, chunks[1], buf);

        let tagline = Paragraph::new(
            "AI-powered career guidance tailored to your strengths, interests, and future opportunities.",
        )
        .style(dim())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
        Widget::render(tagline, chunks[2], buf);

        let mut lines = vec![
            Line::from(Span::styled(
                "How it works",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        for (index, step) in HOW_IT_WORKS.iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {}. ", index + 1),
                    Style::default()
                        .fg(accent(self.high_contrast))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(*step),
            ]));
        }
        let steps = Paragraph::new(lines).alignment(Alignment::Center);
        Widget::render(steps, chunks[3], buf);

        let hints = Paragraph::new(Line::from(vec![
            Span::styled("[Enter] ", Style::default().fg(accent(self.high_contrast))),
            Span::raw("Get Your Career Roadmap  "),
            Span::styled("[?] ", Style::default().fg(accent(self.high_contrast))),
            Span::raw("Help  "),
            Span::styled("[q] ", Style::default().fg(accent(self.high_contrast))),
            Span::raw("Quit"),
        ]))
        .alignment(Alignment::Center);
        Widget::render(hints, chunks[4], buf);
    }
}
