#[cfg(test)]
#[path = "slash_commands_test.rs"]
mod tests;

pub struct SlashCommand {
    command: String,
}

impl SlashCommand {
    /// Only a bare command is recognised. Text following a command is a
    /// regular chat message.
    pub fn parse(text: &str) -> Option<SlashCommand> {
        let command = text.trim();
        if command.is_empty() || command.contains(char::is_whitespace) {
            return None;
        }

        let cmd = SlashCommand {
            command: command.to_string(),
        };
        if cmd.is_quit() || cmd.is_clear() || cmd.is_help() {
            return Some(cmd);
        }

        return None;
    }

    pub fn is_quit(&self) -> bool {
        return ["/q", "/quit", "/exit"].contains(&self.command.as_str());
    }

    pub fn is_clear(&self) -> bool {
        return ["/cl", "/clear"].contains(&self.command.as_str());
    }

    pub fn is_help(&self) -> bool {
        return ["/h", "/help"].contains(&self.command.as_str());
    }
}
