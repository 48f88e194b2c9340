#[cfg(test)]
#[path = "dashboard_test.rs"]
mod tests;

use ratatui::buffer::Buffer;
use ratatui::layout::Constraint;
use ratatui::layout::Direction;
use ratatui::layout::Layout;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Padding;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Widget;
use ratatui::widgets::Wrap;

use crate::domain::models::Analysis;
use crate::domain::models::ROADMAP_PLACEHOLDER;

pub const SKILLS_PLACEHOLDER: &str = "No skills detected yet.";
pub const VALUES_PLACEHOLDER: &str = "Share your thoughts to see values.";
pub const PATHS_PLACEHOLDER: &str = "Awaiting analysis...";

const ACCENT: Color = Color::Rgb(30, 136, 229);
const CHIP_FG: Color = Color::Rgb(21, 101, 192);
const CHIP_BG: Color = Color::Rgb(227, 242, 253);

/// The four analysis cards. Drawn from the analysis alone, every frame.
pub struct Dashboard<'a> {
    analysis: &'a Analysis,
}

impl<'a> Dashboard<'a> {
    pub fn new(analysis: &'a Analysis) -> Dashboard<'a> {
        return Dashboard { analysis };
    }

    fn card(title: &str) -> Block<'static> {
        return Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(ACCENT))
            .title(Span::styled(
                title.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .padding(Padding::new(1, 1, 0, 0));
    }

    fn placeholder(text: &str) -> Vec<Line<'static>> {
        return vec![Line::from(Span::styled(
            text.to_string(),
            Style::default().add_modifier(Modifier::DIM),
        ))];
    }

    fn skills(&self) -> Vec<Line<'static>> {
        if self.analysis.skills.is_empty() {
            return Dashboard::placeholder(SKILLS_PLACEHOLDER);
        }

        let chip_style = Style::default()
            .fg(CHIP_FG)
            .bg(CHIP_BG)
            .add_modifier(Modifier::BOLD);

        let mut spans: Vec<Span> = vec![];
        for (idx, skill) in self.analysis.skills.iter().enumerate() {
            if idx > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(format!(" {skill} "), chip_style));
        }

        return vec![Line::from(spans)];
    }

    fn values(&self) -> Vec<Line<'static>> {
        if self.analysis.values.is_empty() {
            return Dashboard::placeholder(VALUES_PLACEHOLDER);
        }

        return self
            .analysis
            .values
            .iter()
            .map(|value| {
                return Line::from(vec![
                    Span::styled("✔ ", Style::default().fg(Color::Green)),
                    Span::raw(value.to_string()),
                ]);
            })
            .collect();
    }

    fn paths(&self) -> Vec<Line<'static>> {
        if self.analysis.paths.is_empty() {
            return Dashboard::placeholder(PATHS_PLACEHOLDER);
        }

        let path_style = Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD);

        return self
            .analysis
            .paths
            .iter()
            .map(|path| {
                return Line::from(Span::styled(format!("» {path}"), path_style));
            })
            .collect();
    }

    fn roadmap(&self) -> Vec<Line<'static>> {
        let mut roadmap = self.analysis.roadmap.trim();
        if roadmap.is_empty() {
            roadmap = ROADMAP_PLACEHOLDER;
        }

        return vec![Line::from(Span::styled(
            roadmap.to_string(),
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        ))];
    }
}

impl Widget for Dashboard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![
                Constraint::Ratio(1, 4),
                Constraint::Ratio(1, 4),
                Constraint::Ratio(1, 4),
                Constraint::Ratio(1, 4),
            ])
            .split(area);

        let cards = [
            ("Identified Skills", self.skills()),
            ("Core Values & Drivers", self.values()),
            ("Suggested Career Paths", self.paths()),
            ("Growth Roadmap", self.roadmap()),
        ];

        for (idx, (title, lines)) in cards.into_iter().enumerate() {
            Paragraph::new(lines)
                .block(Dashboard::card(title))
                .wrap(Wrap { trim: false })
                .render(layout[idx], buf);
        }
    }
}
