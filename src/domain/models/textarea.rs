use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Padding;

pub struct TextArea {}

impl<'a> TextArea {
    pub fn default() -> tui_textarea::TextArea<'a> {
        let mut textarea = tui_textarea::TextArea::default();
        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .title("Ex: I'm a teacher but I love data and want more flexibility...")
                .padding(Padding::new(1, 1, 0, 0)),
        );

        return textarea;
    }

    /// Editing buffer for the API key. The UI never draws this widget
    /// directly, only a masked copy of its contents.
    pub fn credential() -> tui_textarea::TextArea<'a> {
        return tui_textarea::TextArea::default();
    }
}
