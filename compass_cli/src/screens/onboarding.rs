/// Onboarding screen - two-step profile form
///
/// Step 1 collects the basics (name, grade, region); step 2 collects
/// interests and skills. The form keeps its own editable state and only
/// produces a `Profile` value when the user submits.
use crate::components::theme::{accent, border_style, dim, title_span};
use crate::components::{check_item_line, CheckItem};
use compass_core::{parse_skills, toggle_interest, Profile, Region, INTEREST_TAGS};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::Title, Block, Borders, Paragraph, Widget},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStep {
    Basics,
    Strengths,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Grade,
    Region,
    Interests,
    Skills,
}

#[derive(Debug, Clone)]
pub struct OnboardingState {
    pub step: FormStep,
    pub field: FormField,
    pub name: String,
    pub grade: String,
    /// Index into `Region::ALL`; `None` means not set yet.
    pub region_idx: Option<usize>,
    pub interests: Vec<String>,
    pub interest_cursor: usize,
    pub skills_raw: String,
}

impl OnboardingState {
    pub fn new() -> Self {
        Self {
            step: FormStep::Basics,
            field: FormField::Name,
            name: String::new(),
            grade: String::new(),
            region_idx: None,
            interests: Vec::new(),
            interest_cursor: 0,
            skills_raw: String::new(),
        }
    }

    /// Prefills the form from an existing profile (edit-profile flow).
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            name: profile.name.clone(),
            grade: profile.grade.clone(),
            region_idx: profile
                .region
                .and_then(|r| Region::ALL.iter().position(|candidate| *candidate == r)),
            interests: profile.interests.clone(),
            skills_raw: profile.skills.join(", "),
            ..Self::new()
        }
    }

    /// Produces the profile for submission. The form replaces the whole
    /// profile value; only `language` carries over from the previous one.
    pub fn to_profile(&self, base: &Profile) -> Profile {
        Profile {
            name: self.name.trim().to_string(),
            grade: self.grade.trim().to_string(),
            interests: self.interests.clone(),
            skills: parse_skills(&self.skills_raw),
            region: self
                .region_idx
                .and_then(|i| Region::ALL.get(i))
                .copied(),
            language: base.language.clone(),
        }
    }

    pub fn next_field(&mut self) {
        self.field = match (self.step, self.field) {
            (FormStep::Basics, FormField::Name) => FormField::Grade,
            (FormStep::Basics, FormField::Grade) => FormField::Region,
            (FormStep::Basics, _) => FormField::Name,
            (FormStep::Strengths, FormField::Interests) => FormField::Skills,
            (FormStep::Strengths, _) => FormField::Interests,
        };
    }

    pub fn prev_field(&mut self) {
        self.field = match (self.step, self.field) {
            (FormStep::Basics, FormField::Name) => FormField::Region,
            (FormStep::Basics, FormField::Grade) => FormField::Name,
            (FormStep::Basics, _) => FormField::Grade,
            (FormStep::Strengths, FormField::Interests) => FormField::Skills,
            (FormStep::Strengths, _) => FormField::Interests,
        };
    }

    /// Up/down arrows: move the tag cursor inside the interest picker,
    /// otherwise move field focus.
    pub fn focus_up(&mut self) {
        if self.field == FormField::Interests && self.interest_cursor > 0 {
            self.interest_cursor -= 1;
        } else {
            self.prev_field();
        }
    }

    pub fn focus_down(&mut self) {
        if self.field == FormField::Interests && self.interest_cursor + 1 < INTEREST_TAGS.len() {
            self.interest_cursor += 1;
        } else {
            self.next_field();
        }
    }

    /// Cycles the region through unset -> metro -> tier2 -> rural -> unset.
    pub fn cycle_region(&mut self) {
        self.region_idx = match self.region_idx {
            None => Some(0),
            Some(i) if i + 1 < Region::ALL.len() => Some(i + 1),
            Some(_) => None,
        };
    }

    pub fn toggle_cursor_interest(&mut self) {
        if let Some(tag) = INTEREST_TAGS.get(self.interest_cursor) {
            self.interests = toggle_interest(&self.interests, tag);
        }
    }

    pub fn push_char(&mut self, c: char) {
        match self.field {
            FormField::Name => self.name.push(c),
            FormField::Grade => self.grade.push(c),
            FormField::Skills => self.skills_raw.push(c),
            FormField::Region | FormField::Interests => {}
        }
    }

    pub fn backspace(&mut self) {
        match self.field {
            FormField::Name => {
                self.name.pop();
            }
            FormField::Grade => {
                self.grade.pop();
            }
            FormField::Skills => {
                self.skills_raw.pop();
            }
            FormField::Region | FormField::Interests => {}
        }
    }

    /// Enter: advance to step 2, or request submission from step 2.
    pub fn advance_step(&mut self) -> bool {
        match self.step {
            FormStep::Basics => {
                self.step = FormStep::Strengths;
                self.field = FormField::Interests;
                false
            }
            FormStep::Strengths => true,
        }
    }

    /// Esc: step back inside the form. Returns false when already on
    /// step 1, i.e. the caller should leave the form.
    pub fn back(&mut self) -> bool {
        match self.step {
            FormStep::Strengths => {
                self.step = FormStep::Basics;
                self.field = FormField::Name;
                true
            }
            FormStep::Basics => false,
        }
    }

    fn step_number(&self) -> u8 {
        match self.step {
            FormStep::Basics => 1,
            FormStep::Strengths => 2,
        }
    }

    fn region_label(&self) -> &'static str {
        match self.region_idx.and_then(|i| Region::ALL.get(i)) {
            Some(region) => region.label(),
            None => "(not set)",
        }
    }
}

impl Default for OnboardingState {
    fn default() -> Self {
        Self::new()
    }
}

pub struct OnboardingForm<'a> {
    state: &'a OnboardingState,
    high_contrast: bool,
}

impl<'a> OnboardingForm<'a> {
    pub fn new(state: &'a OnboardingState, high_contrast: bool) -> Self {
        Self {
            state,
            high_contrast,
        }
    }

    fn text_field_line(&self, label: &str, value: &str, field: FormField) -> Line<'static> {
        let focused = self.state.field == field;
        let label_style = if focused {
            Style::default()
                .fg(accent(self.high_contrast))
                .add_modifier(Modifier::BOLD)
        } else {
            dim()
        };
        let cursor = if focused { "_" } else { "" };

        Line::from(vec![
            Span::styled(format!("  {:<24}", label), label_style),
            Span::styled(format!("{}{}", value, cursor), Style::default().fg(Color::White)),
        ])
    }

    fn render_basics(&self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(""),
            self.text_field_line("Full Name", &self.state.name, FormField::Name),
            Line::from(""),
            self.text_field_line("Grade / Degree", &self.state.grade, FormField::Grade),
            Line::from(Span::styled(
                "                          e.g., 12th Grade, B.Tech CSE",
                dim(),
            )),
            Line::from(""),
            self.text_field_line("Region", self.state.region_label(), FormField::Region),
            Line::from(Span::styled(
                "                          Space cycles Metro / Tier 2 / Rural",
                dim(),
            )),
        ];
        Widget::render(Paragraph::new(lines), area, buf);
    }

    fn render_strengths(&self, area: Rect, buf: &mut Buffer) {
        let interests_focused = self.state.field == FormField::Interests;
        let label_style = if interests_focused {
            Style::default()
                .fg(accent(self.high_contrast))
                .add_modifier(Modifier::BOLD)
        } else {
            dim()
        };

        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled("  Interests", label_style)),
        ];
        for (index, tag) in INTEREST_TAGS.iter().enumerate() {
            let item = CheckItem::new(*tag, self.state.interests.iter().any(|i| i == tag));
            let under_cursor = interests_focused && index == self.state.interest_cursor;
            lines.push(check_item_line(&item, under_cursor, self.high_contrast));
        }
        lines.push(Line::from(""));
        lines.push(self.text_field_line(
            "Skills (comma separated)",
            &self.state.skills_raw,
            FormField::Skills,
        ));
        lines.push(Line::from(Span::styled(
            "                          e.g., Python, Figma, Communication",
            dim(),
        )));

        Widget::render(Paragraph::new(lines), area, buf);
    }
}

impl<'a> Widget for OnboardingForm<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(self.high_contrast))
            .title(title_span(" Create your profile ", self.high_contrast))
            .title(
                Title::from(Span::styled(
                    format!(" Step {} of 2 ", self.state.step_number()),
                    dim(),
                ))
                .alignment(Alignment::Right),
            );

        let inner = block.inner(area);
        Widget::render(block, area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(2)])
            .split(inner);

        match self.state.step {
            FormStep::Basics => self.render_basics(chunks[0], buf),
            FormStep::Strengths => self.render_strengths(chunks[0], buf),
        }

        let hint = match self.state.step {
            FormStep::Basics => "[Tab] Next field  [Enter] Next  [Esc] Back",
            FormStep::Strengths => {
                "[Tab] Next field  [Space] Toggle  [Enter] Analyze & Recommend  [Esc] Back"
            }
        };
        let hints = Paragraph::new(Line::from(Span::styled(hint, dim())));
        Widget::render(hints, chunks[1], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_step_then_submit() {
        let mut state = OnboardingState::new();
        assert!(!state.advance_step());
        assert_eq!(state.step, FormStep::Strengths);
        assert!(state.advance_step());
    }

    #[test]
    fn test_back_from_step_two_returns_to_basics() {
        let mut state = OnboardingState::new();
        state.advance_step();
        assert!(state.back());
        assert_eq!(state.step, FormStep::Basics);
        assert!(!state.back());
    }

    #[test]
    fn test_typing_targets_focused_field() {
        let mut state = OnboardingState::new();
        state.push_char('A');
        state.next_field();
        state.push_char('9');
        assert_eq!(state.name, "A");
        assert_eq!(state.grade, "9");

        state.backspace();
        assert!(state.grade.is_empty());
    }

    #[test]
    fn test_region_cycles_back_to_unset() {
        let mut state = OnboardingState::new();
        assert!(state.region_idx.is_none());
        state.cycle_region();
        state.cycle_region();
        state.cycle_region();
        assert_eq!(state.region_label(), "Rural");
        state.cycle_region();
        assert!(state.region_idx.is_none());
    }

    #[test]
    fn test_interest_toggle_via_cursor() {
        let mut state = OnboardingState::new();
        state.advance_step();
        state.toggle_cursor_interest();
        assert_eq!(state.interests, vec!["Coding".to_string()]);
        state.toggle_cursor_interest();
        assert!(state.interests.is_empty());
    }

    #[test]
    fn test_to_profile_parses_skills_and_trims_name() {
        let mut state = OnboardingState::new();
        state.name = "  Asha ".to_string();
        state.skills_raw = "Python,  Figma ,, Communication".to_string();
        state.region_idx = Some(1);

        let profile = state.to_profile(&Profile::default());
        assert_eq!(profile.name, "Asha");
        assert_eq!(profile.skills, vec!["Python", "Figma", "Communication"]);
        assert_eq!(profile.region, Some(Region::Tier2));
        assert_eq!(profile.language, "English");
    }

    #[test]
    fn test_from_profile_round_trip() {
        let profile = Profile {
            name: "Ravi".to_string(),
            grade: "B.Tech CSE".to_string(),
            interests: vec!["Design".to_string()],
            skills: vec!["Figma".to_string(), "Sketching".to_string()],
            region: Some(Region::Rural),
            ..Profile::default()
        };
        let state = OnboardingState::from_profile(&profile);
        assert_eq!(state.skills_raw, "Figma, Sketching");
        assert_eq!(state.region_label(), "Rural");
        assert_eq!(state.to_profile(&profile), profile);
    }
}
