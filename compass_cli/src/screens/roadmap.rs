/// Roadmap screen - milestone checklist with overall progress
use crate::components::theme::{accent, border_style, dim, title_span};
use crate::components::{check_item_line, CheckItem};
use compass_core::RoadmapProgress;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Widget, Wrap},
};

const LEARNING_RESOURCES: &[&str] = &[
    "Intro to Python — free course",
    "Project: Guided dataset challenge",
    "Mock interview session",
];

#[derive(Debug, Clone, Default)]
pub struct RoadmapScreenState {
    pub cursor: usize,
}

impl RoadmapScreenState {
    pub fn move_down(&mut self, len: usize) {
        if self.cursor + 1 < len {
            self.cursor += 1;
        }
    }

    pub fn move_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }
}

pub struct RoadmapScreen<'a> {
    progress: &'a RoadmapProgress,
    state: &'a RoadmapScreenState,
    high_contrast: bool,
}

impl<'a> RoadmapScreen<'a> {
    pub fn new(
        progress: &'a RoadmapProgress,
        state: &'a RoadmapScreenState,
        high_contrast: bool,
    ) -> Self {
        Self {
            progress,
            state,
            high_contrast,
        }
    }

    fn render_milestones(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(self.high_contrast))
            .title(title_span(
                format!(" {} Roadmap ", self.progress.career_title),
                self.high_contrast,
            ));

        let inner = block.inner(area);
        Widget::render(block, area, buf);

        let mut lines = vec![
            Line::from(Span::styled("6-month adaptive learning path", dim())),
            Line::from(""),
        ];
        for (index, milestone) in self.progress.milestones.iter().enumerate() {
            let months = milestone.suggested_months;
            let meta = format!(
                "Suggested: {} month{}",
                months,
                if months > 1 { "s" } else { "" }
            );
            let item = CheckItem::new(
                format!("{}. {}", index + 1, milestone.key),
                milestone.completed,
            )
            .with_meta(meta);
            lines.push(check_item_line(
                &item,
                index == self.state.cursor,
                self.high_contrast,
            ));
            lines.push(Line::from(Span::styled(
                format!("       {}", milestone.description),
                dim(),
            )));
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(
            "[Space/Enter] Mark Done / Reopen  [b/Esc] Back to Dashboard",
            dim(),
        )));

        Widget::render(Paragraph::new(lines), inner, buf);
    }

    fn render_sidebar(&self, area: Rect, buf: &mut Buffer) {
        let accent_color = accent(self.high_contrast);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(self.high_contrast))
            .title(title_span(" Roadmap Summary ", self.high_contrast));

        let inner = block.inner(area);
        Widget::render(block, area, buf);

        let mut lines = vec![
            Line::from(Span::styled(
                "Track progress and get dynamic updates. Resources are integrated for seamless learning.",
                dim(),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Learning Resources",
                Style::default()
                    .fg(accent_color)
                    .add_modifier(Modifier::BOLD),
            )),
        ];
        for resource in LEARNING_RESOURCES {
            lines.push(Line::from(format!("  • {}", resource)));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Next Steps",
            Style::default()
                .fg(accent_color)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from("  • Complete current milestone"));
        lines.push(Line::from("  • Schedule mock interview"));
        lines.push(Line::from("  • Build portfolio project"));

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        Widget::render(paragraph, inner, buf);
    }

    fn render_progress(&self, area: Rect, buf: &mut Buffer) {
        let label = format!(
            "Overall Progress: {}/{} completed",
            self.progress.completed_count(),
            self.progress.total()
        );
        let gauge = Gauge::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style(self.high_contrast)),
            )
            .gauge_style(Style::default().fg(accent(self.high_contrast)))
            .percent(self.progress.percent_complete())
            .label(label);
        Widget::render(gauge, area, buf);
    }
}

impl<'a> Widget for RoadmapScreen<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        self.render_progress(rows[0], buf);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
            .split(rows[1]);

        self.render_milestones(columns[0], buf);
        self.render_sidebar(columns[1], buf);
    }
}
