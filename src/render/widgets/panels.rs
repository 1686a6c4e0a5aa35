//! Sector detail panels: compliance requirements, IP focus, and risks.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::domain::SectorProfile;

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    ))
}

fn bullet(prefix: &str, item: &str, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{} ", prefix), Style::default().fg(color)),
        Span::raw(item.to_string()),
    ])
}

/// Regulators and critical compliance items for the current sector.
pub struct CompliancePanel<'a> {
    sector: &'a SectorProfile,
}

impl<'a> CompliancePanel<'a> {
    pub fn new(sector: &'a SectorProfile) -> Self {
        Self { sector }
    }
}

impl Widget for CompliancePanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![heading("Key Regulators:")];
        lines.push(Line::from(Span::styled(
            self.sector.regulators.join("  "),
            Style::default().fg(Color::Blue),
        )));
        lines.push(Line::default());
        lines.push(heading("Critical Compliance Items:"));
        for item in &self.sector.critical_compliance {
            lines.push(bullet("✔", item, Color::Green));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" 🛡 {} Compliance Requirements ", self.sector.name)),
            )
            .render(area, buf);
    }
}

/// IP protection focus and common legal risks for the current sector.
pub struct IpRiskPanel<'a> {
    sector: &'a SectorProfile,
}

impl<'a> IpRiskPanel<'a> {
    pub fn new(sector: &'a SectorProfile) -> Self {
        Self { sector }
    }
}

impl Widget for IpRiskPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![heading("IP Protection Focus:")];
        for item in &self.sector.ip_focus {
            lines.push(bullet("•", item, Color::Magenta));
        }
        lines.push(Line::default());
        lines.push(heading("Common Legal Risks:"));
        for item in &self.sector.common_risks {
            lines.push(bullet("!", item, Color::Red));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title(" ⚡ IP & Risk Profile "))
            .render(area, buf);
    }
}
