//! Picker rows: every key in authoring order, the current one highlighted.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::domain::{Catalog, SectorProfile, TierPackage};

fn cell_block(selected: bool) -> Block<'static> {
    let style = if selected {
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default().borders(Borders::ALL).border_style(style)
}

/// Row of sector cells (icon + name).
pub struct SectorPicker<'a> {
    sectors: &'a Catalog<SectorProfile>,
    selected: &'a str,
}

impl<'a> SectorPicker<'a> {
    pub fn new(sectors: &'a Catalog<SectorProfile>, selected: &'a str) -> Self {
        Self { sectors, selected }
    }
}

impl Widget for SectorPicker<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let outer = Block::default()
            .borders(Borders::ALL)
            .title(" Select Your Sector ");
        let inner = outer.inner(area);
        outer.render(area, buf);

        if self.sectors.is_empty() {
            return;
        }
        let constraints =
            vec![Constraint::Ratio(1, self.sectors.len() as u32); self.sectors.len()];
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(inner);

        for (idx, (key, profile)) in self.sectors.iter().enumerate() {
            let selected = key == self.selected;
            let lines = vec![
                Line::from(format!("{} {}", profile.icon, profile.name)),
                Line::from(format!("[{}] {}", idx + 1, key)).style(Style::default().fg(Color::DarkGray)),
            ];
            Paragraph::new(lines)
                .block(cell_block(selected))
                .render(cells[idx], buf);
        }
    }
}

/// Row of tier cells (name, price, focus).
pub struct TierPicker<'a> {
    tiers: &'a Catalog<TierPackage>,
    selected: &'a str,
}

impl<'a> TierPicker<'a> {
    pub fn new(tiers: &'a Catalog<TierPackage>, selected: &'a str) -> Self {
        Self { tiers, selected }
    }
}

impl Widget for TierPicker<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let outer = Block::default()
            .borders(Borders::ALL)
            .title(" Select Your Growth Stage ");
        let inner = outer.inner(area);
        outer.render(area, buf);

        if self.tiers.is_empty() {
            return;
        }
        let constraints = vec![Constraint::Ratio(1, self.tiers.len() as u32); self.tiers.len()];
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(inner);

        for (idx, (key, package)) in self.tiers.iter().enumerate() {
            let selected = key == self.selected;
            let lines = vec![
                Line::from(package.name.clone())
                    .style(Style::default().add_modifier(Modifier::BOLD)),
                Line::from(package.price.clone()).style(Style::default().fg(Color::Magenta)),
                Line::from(package.focus.clone()),
            ];
            Paragraph::new(lines)
                .block(cell_block(selected))
                .render(cells[idx], buf);
        }
    }
}
