//! Interactive matrix view.
//!
//! Single-threaded, synchronous, event-driven: draw the current projection,
//! wait for a key, route it through `Selection`, draw again. The pickers
//! only ever offer keys taken from the catalogs, so `InvalidKey` is
//! unreachable from the keyboard.

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame, Terminal,
};

use crate::core::Selection;
use crate::domain::{MatrixData, INVESTMENT_NOTE, MATRIX_ATTRIBUTION, MATRIX_SUBTITLE, MATRIX_TITLE};
use crate::render::widgets::{CompliancePanel, IpRiskPanel, PackageSummary, SectorPicker, TierPicker};
use crate::utils::error::Result;

const KEY_HINTS: &str = "←/→ sector   ↑/↓ or Tab stage   1-6 jump to sector   q quit";

/// TUI application state: the datasets plus the one mutable selection.
pub struct MatrixApp {
    data: MatrixData,
    selection: Selection,
}

impl MatrixApp {
    pub fn new(data: MatrixData, selection: Selection) -> Self {
        Self { data, selection }
    }

    /// Run the event loop. Blocks until the user quits.
    pub fn run(mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.run_loop(&mut terminal);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn run_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| self.draw(f))?;

            if event::poll(Duration::from_millis(250))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press && self.handle_key_event(key.code)? {
                        return Ok(());
                    }
                }
            }
        }
    }

    /// Handle one key press. Returns true on quit.
    fn handle_key_event(&mut self, code: KeyCode) -> Result<bool> {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(true),

            KeyCode::Left | KeyCode::Char('h') => self.cycle_sector(-1)?,
            KeyCode::Right | KeyCode::Char('l') => self.cycle_sector(1)?,

            KeyCode::Up | KeyCode::Char('k') => self.cycle_tier(-1)?,
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => self.cycle_tier(1)?,

            KeyCode::Char(c) if c.is_ascii_digit() && c != '0' => {
                let idx = (c as usize) - ('1' as usize);
                if let Some(key) = self.data.sectors().key_at(idx) {
                    let key = key.to_string();
                    self.selection.select_sector(&self.data, &key)?;
                }
            }

            _ => {}
        }
        Ok(false)
    }

    /// Move the sector selection by `step` in authoring order, wrapping.
    fn cycle_sector(&mut self, step: isize) -> Result<()> {
        let len = self.data.sectors().len();
        if len == 0 {
            return Ok(());
        }
        let current = self
            .data
            .sectors()
            .position(self.selection.sector())
            .unwrap_or(0);
        let next = (current as isize + step).rem_euclid(len as isize) as usize;
        if let Some(key) = self.data.sectors().key_at(next) {
            let key = key.to_string();
            self.selection.select_sector(&self.data, &key)?;
        }
        Ok(())
    }

    /// Same as `cycle_sector`, over the tier catalog.
    fn cycle_tier(&mut self, step: isize) -> Result<()> {
        let len = self.data.tiers().len();
        if len == 0 {
            return Ok(());
        }
        let current = self
            .data
            .tiers()
            .position(self.selection.tier())
            .unwrap_or(0);
        let next = (current as isize + step).rem_euclid(len as isize) as usize;
        if let Some(key) = self.data.tiers().key_at(next) {
            let key = key.to_string();
            self.selection.select_tier(&self.data, &key)?;
        }
        Ok(())
    }

    fn draw(&self, f: &mut Frame) {
        let projection = match self.selection.project(&self.data) {
            Ok(projection) => projection,
            Err(err) => {
                // Unreachable through the state invariant; shown instead of
                // rendering mismatched or blank data.
                let message = Paragraph::new(err.user_friendly_message())
                    .style(Style::default().fg(Color::Red));
                f.render_widget(message, f.area());
                return;
            }
        };

        let summary_height = projection.tier.deliverables.len() as u16 + 4;
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(4),
                Constraint::Length(5),
                Constraint::Min(8),
                Constraint::Length(summary_height),
                Constraint::Length(3),
            ])
            .split(f.area());

        let header = Paragraph::new(vec![
            Line::from(Span::styled(
                MATRIX_TITLE,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(MATRIX_SUBTITLE),
            Line::from(Span::styled(
                MATRIX_ATTRIBUTION,
                Style::default().fg(Color::Magenta),
            )),
        ]);
        f.render_widget(header, rows[0]);

        f.render_widget(
            SectorPicker::new(self.data.sectors(), self.selection.sector()),
            rows[1],
        );
        f.render_widget(
            TierPicker::new(self.data.tiers(), self.selection.tier()),
            rows[2],
        );

        let details = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[3]);
        f.render_widget(CompliancePanel::new(projection.sector), details[0]);
        f.render_widget(IpRiskPanel::new(projection.sector), details[1]);

        f.render_widget(PackageSummary::new(projection), rows[4]);

        let footer = Paragraph::new(vec![
            Line::from(Span::styled(KEY_HINTS, Style::default().fg(Color::DarkGray))),
            Line::from(Span::styled(
                format!("⚠ {}", INVESTMENT_NOTE),
                Style::default().fg(Color::Yellow),
            )),
        ])
        .wrap(Wrap { trim: true });
        f.render_widget(footer, rows[5]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> MatrixApp {
        let data = MatrixData::builtin();
        let selection = Selection::default_for(&data).unwrap();
        MatrixApp::new(data, selection)
    }

    #[test]
    fn test_cycle_sector_follows_authoring_order() {
        let mut app = app();
        assert_eq!(app.selection.sector(), "fintech");
        app.cycle_sector(1).unwrap();
        assert_eq!(app.selection.sector(), "healthtech");
        app.cycle_sector(-2).unwrap();
        assert_eq!(app.selection.sector(), "energy"); // wraps backwards
    }

    #[test]
    fn test_cycle_tier_wraps() {
        let mut app = app();
        app.cycle_tier(1).unwrap();
        assert_eq!(app.selection.tier(), "grow");
        app.cycle_tier(2).unwrap();
        assert_eq!(app.selection.tier(), "hustle"); // wrapped past "lead"
    }

    #[test]
    fn test_digit_jump_selects_by_position() {
        let mut app = app();
        app.handle_key_event(KeyCode::Char('4')).unwrap();
        assert_eq!(app.selection.sector(), "agritech");
        // out-of-range digits are ignored
        app.handle_key_event(KeyCode::Char('9')).unwrap();
        assert_eq!(app.selection.sector(), "agritech");
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        assert!(app.handle_key_event(KeyCode::Char('q')).unwrap());
        assert!(app.handle_key_event(KeyCode::Esc).unwrap());
        assert!(!app.handle_key_event(KeyCode::Char('x')).unwrap());
    }
}
