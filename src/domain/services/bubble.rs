#[cfg(test)]
#[path = "bubble_test.rs"]
mod tests;

use ratatui::style::Color;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;

use crate::domain::models::Message;
use crate::domain::models::Role;

#[derive(Copy, Clone, PartialEq, Eq)]
pub enum BubbleAlignment {
    Left,
    Right,
}

pub struct Bubble<'a> {
    message: &'a Message,
    alignment: BubbleAlignment,
    window_max_width: usize,
}

impl<'a> Bubble<'a> {
    pub fn new(message: &'a Message, window_max_width: usize) -> Bubble<'a> {
        let mut alignment = BubbleAlignment::Left;
        if message.role == Role::User {
            alignment = BubbleAlignment::Right;
        }

        return Bubble {
            message,
            alignment,
            window_max_width,
        };
    }

    pub fn as_lines(&self) -> Vec<Line<'static>> {
        // Keep at least 4% of the width free on the far side of the bubble.
        let min_bubble_padding_length = (self.window_max_width as f32 * 0.04).ceil() as usize;

        // Left border + left padding + right padding + right border + scrollbar.
        let line_border_width = 5 + min_bubble_padding_length;
        let text_width = self
            .window_max_width
            .saturating_sub(line_border_width)
            .max(1);

        let message_lines = self.message.as_string_lines(text_width);
        let author = self.message.role.to_string();
        let author_len = author.chars().count();

        let max_line_length = message_lines
            .iter()
            .map(|line| return line.chars().count())
            .max()
            .unwrap_or(0)
            .max(author_len);

        let mut lines: Vec<Line<'static>> = vec![];

        let top_bar = format!(
            "╭{author}{}╮",
            "─".repeat(max_line_length + 2 - author_len)
        );
        lines.push(self.pad_line(top_bar, max_line_length + 4));

        for line in message_lines {
            let fill = " ".repeat(max_line_length - line.chars().count());
            lines.push(self.pad_line(format!("│ {line}{fill} │"), max_line_length + 4));
        }

        let bottom_bar = format!("╰{}╯", "─".repeat(max_line_length + 2));
        lines.push(self.pad_line(bottom_bar, max_line_length + 4));

        return lines;
    }

    fn pad_line(&self, text: String, text_len: usize) -> Line<'static> {
        let padding = " ".repeat(self.window_max_width.saturating_sub(text_len + 1));
        let bubble = Span::styled(text, self.style());

        if self.alignment == BubbleAlignment::Left {
            return Line::from(vec![bubble, Span::from(padding)]);
        }

        return Line::from(vec![Span::from(padding), bubble]);
    }

    fn style(&self) -> Style {
        if self.message.role == Role::User {
            return Style::default().fg(Color::Cyan);
        }

        return Style::default();
    }
}
