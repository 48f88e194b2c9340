#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

use anyhow::Result;
use ratatui::prelude::Rect;
use tokio::sync::mpsc;

use super::BubbleList;
use super::Scroll;
use crate::domain::models::Action;
use crate::domain::models::BackendPrompt;
use crate::domain::models::BackendResponse;
use crate::domain::models::Notice;
use crate::domain::models::Reply;
use crate::domain::models::Session;
use crate::domain::models::SlashCommand;

pub const MISSING_CREDENTIAL_WARNING: &str =
    "Please enter your OpenAI API key with CTRL+K before sending a message.";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Focus {
    Chat,
    Credential,
}

pub struct AppState {
    pub bubble_list: BubbleList,
    pub focus: Focus,
    pub history_limit: usize,
    pub last_known_height: u16,
    pub last_known_width: u16,
    pub notice: Option<Notice>,
    pub scroll: Scroll,
    pub session: Session,
    pub show_help: bool,
    pub waiting_for_backend: bool,
}

impl AppState {
    pub fn new(credential: &str, history_limit: usize) -> AppState {
        let session = Session::new(credential);
        let mut focus = Focus::Chat;
        if !session.has_credential() {
            focus = Focus::Credential;
        }

        return AppState {
            bubble_list: BubbleList::default(),
            focus,
            history_limit,
            last_known_height: 0,
            last_known_width: 0,
            notice: None,
            scroll: Scroll::default(),
            session,
            show_help: false,
            waiting_for_backend: false,
        };
    }

    /// Returns `(should_break, should_continue)` for the UI loop. Slash
    /// commands are never added to the transcript.
    pub fn handle_slash_commands(&mut self, input_str: &str) -> (bool, bool) {
        let command = match SlashCommand::parse(input_str) {
            Some(command) => command,
            None => return (false, false),
        };

        if command.is_quit() {
            return (true, false);
        }

        if command.is_clear() {
            self.clear_history();
            return (false, true);
        }

        if command.is_help() {
            self.show_help = true;
            return (false, true);
        }

        return (false, false);
    }

    /// Starts a turn. Returns false when the input was rejected, in which case
    /// nothing is appended and no request is sent.
    pub fn submit(&mut self, input_str: &str, tx: &mpsc::UnboundedSender<Action>) -> Result<bool> {
        if input_str.trim().is_empty() || self.waiting_for_backend {
            return Ok(false);
        }

        if !self.session.has_credential() {
            tracing::warn!("Message submitted without an API key");
            self.notice = Some(Notice::warning(MISSING_CREDENTIAL_WARNING));
            return Ok(false);
        }

        self.notice = None;
        self.session.push_user_message(input_str);
        self.waiting_for_backend = true;

        let prompt = BackendPrompt::compose(
            self.session.credential(),
            &self.session.messages,
            self.history_limit,
        );
        tx.send(Action::BackendRequest(prompt))?;

        self.sync_dependants();
        self.scroll.last();

        return Ok(true);
    }

    pub fn handle_backend_response(&mut self, res: BackendResponse) {
        self.waiting_for_backend = false;

        let reply = Reply::parse(&res.text);
        match &reply {
            Reply::Structured { analysis, .. } => {
                tracing::debug!(
                    skills = analysis.skills.len(),
                    values = analysis.values.len(),
                    paths = analysis.paths.len(),
                    "Dashboard updated"
                );
            }
            Reply::Unstructured { .. } => {
                tracing::debug!("Reply had no structured block, dashboard unchanged");
            }
            Reply::Malformed { error, .. } => {
                tracing::warn!(error = %error, "Failed to decode structured block");
            }
        }

        self.session.apply_reply(reply);
        self.sync_dependants();
        self.scroll.last();
    }

    /// The user message stays in the transcript. No assistant turn is added.
    pub fn handle_backend_error(&mut self, err: &str) {
        tracing::error!(error = %err, "Completion request failed");
        self.waiting_for_backend = false;
        self.notice = Some(Notice::error(&format!("The request failed: {err}")));
    }

    pub fn clear_history(&mut self) {
        if self.waiting_for_backend {
            self.notice = Some(Notice::warning(
                "Wait for the current reply before clearing the history.",
            ));
            return;
        }

        self.session.clear_history();
        self.scroll = Scroll::default();
        self.notice = Some(Notice::info("History cleared."));
        self.sync_dependants();
    }

    pub fn begin_credential_entry(&mut self) {
        self.focus = Focus::Credential;
    }

    pub fn cancel_credential_entry(&mut self) {
        self.focus = Focus::Chat;
    }

    pub fn save_credential(&mut self, credential: &str) {
        self.session.set_credential(credential);
        self.focus = Focus::Chat;

        if self.session.has_credential() {
            self.notice = Some(Notice::info("API key saved for this session."));
        } else {
            self.notice = Some(Notice::warning(MISSING_CREDENTIAL_WARNING));
        }
    }

    pub fn credential_indicator(&self) -> String {
        if self.session.has_credential() {
            return "API key: ●●●●●●●●".to_string();
        }

        return "API key: not set".to_string();
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.last_known_width = rect.width;
        self.last_known_height = rect.height;
        self.sync_dependants();
    }

    fn sync_dependants(&mut self) {
        self.bubble_list
            .set_messages(&self.session.messages, self.last_known_width as usize);

        let lines_len = u16::try_from(self.bubble_list.len()).unwrap_or(u16::MAX);
        self.scroll.set_state(lines_len, self.last_known_height);

        if self.waiting_for_backend {
            self.scroll.last();
        }
    }
}
