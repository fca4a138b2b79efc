use crate::components::theme::{accent, border_style};
/// Top-level TUI event loop and input handler
use crate::keymap::KeyMap;
use crate::screens::{
    DashboardScreen, DashboardScreenState, FormField, HomeScreen, OnboardingForm, OnboardingState,
    RoadmapScreen, RoadmapScreenState,
};
use anyhow::Result;
use compass_core::{Profile, Route, Session};
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Terminal,
};
use std::io;
use std::time::Duration;

pub struct AppState {
    session: Session,
    onboarding: OnboardingState,
    dashboard: DashboardScreenState,
    roadmap: RoadmapScreenState,
    high_contrast: bool,
    help_open: bool,
    status: String,
    should_quit: bool,
}

impl AppState {
    fn new(initial_profile: Option<Profile>) -> Self {
        let session = match initial_profile {
            Some(profile) => Session::with_profile(profile),
            None => Session::new(),
        };
        let onboarding = OnboardingState::from_profile(&session.profile);

        Self {
            session,
            onboarding,
            dashboard: DashboardScreenState::default(),
            roadmap: RoadmapScreenState::default(),
            high_contrast: false,
            help_open: false,
            status: "Ready".to_string(),
            should_quit: false,
        }
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if KeyMap::is_ctrl_c(code, modifiers) {
            self.should_quit = true;
            return;
        }

        if self.help_open {
            // Any key closes help
            if matches!(code, KeyCode::Char(_) | KeyCode::Enter | KeyCode::Esc) {
                self.help_open = false;
            }
            return;
        }

        // The form consumes plain characters, so it gets keys before the
        // global single-letter bindings.
        if self.session.route == Route::Onboarding {
            self.handle_onboarding_key(code);
            return;
        }

        if KeyMap::is_help(code) {
            self.help_open = true;
            return;
        }

        if KeyMap::is_toggle_theme(code) {
            self.high_contrast = !self.high_contrast;
            return;
        }

        if KeyMap::is_quit(code, modifiers) {
            // Roadmap backs out to the dashboard; everywhere else quits.
            if self.session.route == Route::Roadmap {
                self.session.navigate(Route::Dashboard);
            } else {
                self.should_quit = true;
            }
            return;
        }

        match self.session.route {
            Route::Home => self.handle_home_key(code),
            Route::Dashboard => self.handle_dashboard_key(code),
            Route::Roadmap => self.handle_roadmap_key(code),
            Route::Onboarding => {}
        }
    }

    fn handle_home_key(&mut self, code: KeyCode) {
        if KeyMap::is_confirm(code) {
            self.onboarding = OnboardingState::from_profile(&self.session.profile);
            self.session.navigate(Route::Onboarding);
        }
    }

    fn handle_onboarding_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => {
                if !self.onboarding.back() {
                    self.session.navigate(Route::Home);
                }
            }
            KeyCode::Tab => self.onboarding.next_field(),
            KeyCode::BackTab => self.onboarding.prev_field(),
            KeyCode::Up => self.onboarding.focus_up(),
            KeyCode::Down => self.onboarding.focus_down(),
            KeyCode::Right if self.onboarding.field == FormField::Region => {
                self.onboarding.cycle_region();
            }
            KeyCode::Enter => {
                if self.onboarding.advance_step() {
                    self.submit_profile();
                }
            }
            KeyCode::Backspace => self.onboarding.backspace(),
            KeyCode::Char(' ') if self.onboarding.field == FormField::Interests => {
                self.onboarding.toggle_cursor_interest();
            }
            KeyCode::Char(' ') if self.onboarding.field == FormField::Region => {
                self.onboarding.cycle_region();
            }
            KeyCode::Char(c) => self.onboarding.push_char(c),
            _ => {}
        }
    }

    fn handle_dashboard_key(&mut self, code: KeyCode) {
        if KeyMap::is_down(code) {
            let len = self.session.careers().len();
            self.dashboard.move_down(len);
        } else if KeyMap::is_up(code) {
            self.dashboard.move_up();
        } else if KeyMap::is_confirm(code) {
            self.select_highlighted_career();
        } else if KeyMap::is_edit_profile(code) {
            self.onboarding = OnboardingState::from_profile(&self.session.profile);
            self.session.navigate(Route::Onboarding);
        }
    }

    fn handle_roadmap_key(&mut self, code: KeyCode) {
        if KeyMap::is_down(code) {
            let len = self
                .session
                .progress
                .as_ref()
                .map(|p| p.total())
                .unwrap_or(0);
            self.roadmap.move_down(len);
        } else if KeyMap::is_up(code) {
            self.roadmap.move_up();
        } else if KeyMap::is_space(code) || KeyMap::is_confirm(code) {
            self.toggle_highlighted_milestone();
        } else if KeyMap::is_back(code) {
            self.session.navigate(Route::Dashboard);
        }
    }

    fn submit_profile(&mut self) {
        let profile = self.onboarding.to_profile(&self.session.profile);
        self.session.profile = profile;
        let count = self.session.submit_profile();
        self.dashboard = DashboardScreenState::default();
        self.status = format!(
            "Profile analyzed successfully! Found {} matching career paths for you.",
            count
        );
    }

    fn select_highlighted_career(&mut self) {
        let Some(id) = self
            .dashboard
            .selected_career(self.session.careers())
            .map(|c| c.id.clone())
        else {
            return;
        };

        match self.session.select_career(&id) {
            Ok(career) => {
                self.roadmap = RoadmapScreenState::default();
                self.status = format!(
                    "Career path selected! Starting your {} roadmap.",
                    career.title
                );
            }
            Err(err) => self.status = err.to_string(),
        }
    }

    fn toggle_highlighted_milestone(&mut self) {
        let Some(key) = self
            .session
            .progress
            .as_ref()
            .and_then(|p| p.milestones.get(self.roadmap.cursor))
            .map(|m| m.key.clone())
        else {
            return;
        };

        match self.session.toggle_milestone(&key) {
            Ok(true) => {
                self.status = format!("Milestone completed! Great job completing {}!", key);
            }
            Ok(false) => self.status = format!("Reopened {}.", key),
            Err(err) => self.status = err.to_string(),
        }
    }
}

pub fn run_tui(initial_profile: Option<Profile>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = AppState::new(initial_profile);

    // Main loop
    while !app.should_quit {
        terminal.draw(|f| {
            let size = f.area();
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(1)])
                .split(size);

            if app.help_open {
                render_help(f, chunks[0], app.high_contrast);
            } else {
                match app.session.route {
                    Route::Home => {
                        f.render_widget(HomeScreen::new(app.high_contrast), chunks[0]);
                    }
                    Route::Onboarding => {
                        let form = OnboardingForm::new(&app.onboarding, app.high_contrast);
                        f.render_widget(form, chunks[0]);
                    }
                    Route::Dashboard => {
                        let dashboard = DashboardScreen::new(
                            &app.session.profile,
                            app.session.recommendations.as_ref(),
                            &app.dashboard,
                            app.high_contrast,
                        );
                        f.render_widget(dashboard, chunks[0]);
                    }
                    Route::Roadmap => {
                        if let Some(ref progress) = app.session.progress {
                            let roadmap =
                                RoadmapScreen::new(progress, &app.roadmap, app.high_contrast);
                            f.render_widget(roadmap, chunks[0]);
                        }
                    }
                }
            }

            render_status_bar(f, chunks[1], &app.status, app.high_contrast);
        })?;

        // Handle input
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key.code, key.modifiers);
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

fn render_help(f: &mut ratatui::Frame, area: Rect, high_contrast: bool) {
    let accent_color = accent(high_contrast);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(high_contrast))
        .title(Span::styled(
            " Help - Keybindings ",
            Style::default()
                .fg(accent_color)
                .add_modifier(Modifier::BOLD),
        ));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines = vec![
        Line::from(Span::styled(
            "CareerCompass",
            Style::default()
                .fg(accent_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for (key, desc) in KeyMap::help_text() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:10}", key),
                Style::default()
                    .fg(accent_color)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(desc),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press any key to close",
        Style::default().add_modifier(Modifier::DIM),
    )));

    let paragraph = Paragraph::new(lines).alignment(Alignment::Left);
    f.render_widget(paragraph, inner);
}

fn render_status_bar(f: &mut ratatui::Frame, area: Rect, status: &str, high_contrast: bool) {
    let line = Line::from(vec![
        Span::styled("Status: ", Style::default().add_modifier(Modifier::DIM)),
        Span::styled(status, Style::default().fg(accent(high_contrast))),
        Span::raw("  "),
        Span::styled("[?] Help", Style::default().add_modifier(Modifier::DIM)),
        Span::raw("  "),
        Span::styled("[q] Quit", Style::default().add_modifier(Modifier::DIM)),
    ]);

    let paragraph = Paragraph::new(line).alignment(Alignment::Left);
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submitted_app() -> AppState {
        let mut app = AppState::new(Some(Profile {
            name: "Asha".to_string(),
            interests: vec!["Coding".to_string()],
            ..Profile::default()
        }));
        app.session.navigate(Route::Onboarding);
        app.onboarding.advance_step();
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        app
    }

    #[test]
    fn test_enter_on_home_opens_onboarding() {
        let mut app = AppState::new(None);
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(app.session.route, Route::Onboarding);
    }

    #[test]
    fn test_submit_flow_lands_on_dashboard() {
        let app = submitted_app();
        assert_eq!(app.session.route, Route::Dashboard);
        assert_eq!(app.session.careers().len(), 2);
        assert!(app.status.starts_with("Profile analyzed successfully!"));
    }

    #[test]
    fn test_select_career_from_dashboard() {
        let mut app = submitted_app();
        app.handle_key(KeyCode::Down, KeyModifiers::NONE);
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);

        assert_eq!(app.session.route, Route::Roadmap);
        assert_eq!(
            app.session.selected.as_ref().map(|c| c.id.as_str()),
            Some("fe")
        );
    }

    #[test]
    fn test_space_toggles_milestone_on_roadmap() {
        let mut app = submitted_app();
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        app.handle_key(KeyCode::Char(' '), KeyModifiers::NONE);

        let progress = app.session.progress.as_ref().unwrap();
        assert_eq!(progress.completed_count(), 1);
        assert!(app.status.starts_with("Milestone completed!"));
    }

    #[test]
    fn test_quit_from_roadmap_backs_out_to_dashboard() {
        let mut app = submitted_app();
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(app.session.route, Route::Roadmap);

        app.handle_key(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(app.session.route, Route::Dashboard);
        assert!(!app.should_quit);

        app.handle_key(KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(app.should_quit);
    }

    #[test]
    fn test_typing_q_in_form_does_not_quit() {
        let mut app = AppState::new(None);
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        app.handle_key(KeyCode::Char('q'), KeyModifiers::NONE);

        assert!(!app.should_quit);
        assert_eq!(app.onboarding.name, "q");
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let mut app = AppState::new(None);
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        app.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.should_quit);
    }
}
