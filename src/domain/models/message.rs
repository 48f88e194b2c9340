#[cfg(test)]
#[path = "message_test.rs"]
mod tests;

use serde_derive::Deserialize;
use serde_derive::Serialize;

use super::Role;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub text: String,
}

impl Message {
    pub fn new(role: Role, text: &str) -> Message {
        return Message {
            role,
            text: text.to_string(),
        };
    }

    /// Word wraps the message to fit `line_max_width` columns. Words longer
    /// than the width are kept whole on their own line. Tabs are drawn as two
    /// spaces.
    pub fn as_string_lines(&self, line_max_width: usize) -> Vec<String> {
        let mut lines: Vec<String> = vec![];
        let text = self.text.replace('\t', "  ");

        for full_line in text.split('\n') {
            if full_line.trim().is_empty() {
                lines.push(" ".to_string());
                continue;
            }

            let mut char_count = 0;
            let mut current_words: Vec<&str> = vec![];

            for word in full_line.split(' ') {
                let word_len = word.chars().count();
                if !current_words.is_empty() && word_len + char_count + 1 > line_max_width {
                    lines.push(current_words.join(" ").trim_end().to_string());
                    current_words = vec![];
                    char_count = 0;
                }

                current_words.push(word);
                char_count += word_len + 1;
            }

            if !current_words.is_empty() {
                lines.push(current_words.join(" ").trim_end().to_string());
            }
        }

        return lines;
    }
}
