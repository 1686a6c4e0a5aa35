//! Combined tier + sector package summary.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::core::Projection;

pub struct PackageSummary<'a> {
    projection: Projection<'a>,
}

impl<'a> PackageSummary<'a> {
    pub fn new(projection: Projection<'a>) -> Self {
        Self { projection }
    }
}

impl Widget for PackageSummary<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let tier = self.projection.tier;
        let sector = self.projection.sector;

        let mut lines = vec![Line::from(vec![
            Span::styled(
                tier.price.clone(),
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::raw(tier.focus.clone()),
        ])];
        lines.push(Line::from(Span::styled(
            "Deliverables:",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for item in &tier.deliverables {
            lines.push(Line::from(vec![
                Span::styled("✔ ", Style::default().fg(Color::Green)),
                Span::raw(item.clone()),
            ]));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Magenta))
                    .title(format!(" {} - {} Package ", tier.name, sector.name)),
            )
            .render(area, buf);
    }
}
