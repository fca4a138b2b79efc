/// Dashboard screen - recommendation list with a detail panel
use crate::components::theme::{accent, border_style, dim, title_span};
use compass_core::{CareerRecommendation, Profile, RecommendationSet};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

#[derive(Debug, Clone, Default)]
pub struct DashboardScreenState {
    pub selected: usize,
}

impl DashboardScreenState {
    pub fn move_down(&mut self, len: usize) {
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn move_up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn selected_career<'a>(
        &self,
        careers: &'a [CareerRecommendation],
    ) -> Option<&'a CareerRecommendation> {
        careers.get(self.selected)
    }
}

pub struct DashboardScreen<'a> {
    profile: &'a Profile,
    recommendations: Option<&'a RecommendationSet>,
    state: &'a DashboardScreenState,
    high_contrast: bool,
}

impl<'a> DashboardScreen<'a> {
    pub fn new(
        profile: &'a Profile,
        recommendations: Option<&'a RecommendationSet>,
        state: &'a DashboardScreenState,
        high_contrast: bool,
    ) -> Self {
        Self {
            profile,
            recommendations,
            state,
            high_contrast,
        }
    }

    fn careers(&self) -> &'a [CareerRecommendation] {
        self.recommendations
            .map(|set| set.careers.as_slice())
            .unwrap_or(&[])
    }

    fn render_list(&self, area: Rect, buf: &mut Buffer) {
        let accent_color = accent(self.high_contrast);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(self.high_contrast))
            .title(title_span(" Career Recommendations ", self.high_contrast));

        let inner = block.inner(area);
        Widget::render(block, area, buf);

        let who = if self.profile.name.is_empty() {
            "you"
        } else {
            self.profile.name.as_str()
        };
        let mut lines = vec![
            Line::from(Span::styled(
                format!("Top career options tailored for {}", who),
                dim(),
            )),
            Line::from(""),
        ];

        if let Some(set) = self.recommendations {
            for (index, career) in set.careers.iter().enumerate() {
                let style = if index == self.state.selected {
                    Style::default()
                        .bg(accent_color)
                        .fg(Color::Black)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                lines.push(Line::from(Span::styled(
                    format!("  {:<28} {:>3}% match  ", career.title, career.confidence),
                    style,
                )));
            }
            lines.push(Line::from(""));
            let analyzed_at = set.generated_at.with_timezone(&chrono::Local);
            lines.push(Line::from(Span::styled(
                format!("Analyzed at {}", analyzed_at.format("%H:%M:%S")),
                dim(),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "Complete your profile to get personalized career recommendations",
                dim(),
            )));
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled("[e] ", Style::default().fg(accent_color)),
                Span::raw("Complete Profile"),
            ]));
        }

        Widget::render(Paragraph::new(lines), inner, buf);
    }

    fn render_details(&self, area: Rect, buf: &mut Buffer) {
        let accent_color = accent(self.high_contrast);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(self.high_contrast))
            .title(title_span(" Career Details ", self.high_contrast));

        let inner = block.inner(area);
        Widget::render(block, area, buf);

        let Some(career) = self.state.selected_career(self.careers()) else {
            return;
        };

        let mut lines = vec![
            Line::from(Span::styled(
                career.title.clone(),
                Style::default()
                    .fg(accent_color)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("{}% match", career.confidence),
                Style::default().fg(accent_color),
            )),
            Line::from(""),
            Line::from(Span::styled("Why this matches:", dim())),
        ];
        for bullet in &career.bullets {
            lines.push(Line::from(format!("  • {}", bullet)));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Actions:", dim())));
        lines.push(Line::from("  [Enter] Select This Path"));
        lines.push(Line::from("  [e] Edit Profile"));

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
        Widget::render(paragraph, inner, buf);
    }
}

impl<'a> Widget for DashboardScreen<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);

        self.render_list(chunks[0], buf);
        self.render_details(chunks[1], buf);
    }
}
