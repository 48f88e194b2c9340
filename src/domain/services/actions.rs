#[cfg(test)]
#[path = "actions_test.rs"]
mod tests;

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;

use crate::domain::models::Action;
use crate::domain::models::Backend;
use crate::domain::models::BackendBox;
use crate::domain::models::Event;

pub fn help_text() -> String {
    let text = r#"
COMMANDS:
- /clear (/cl) - Clears the conversation back to the welcome message. The dashboard keeps its last analysis.
- /help (/h) - Provides this help menu.
- /quit /exit (/q) - Exit Career Mind.

HOTKEYS:
- Enter - Send your message, or save the API key when the key field is open.
- CTRL+K - Enter your OpenAI API key. It is kept in memory for this session only.
- ESC - Close the API key field without saving.
- CTRL+L - Clear the conversation.
- Up arrow - Scroll up
- Down arrow - Scroll down
- CTRL+U / Page Up - Page up
- CTRL+D / Page Down - Page down
- CTRL+C - Exit.
        "#;

    return text.trim().to_string();
}

fn worker_error(err: anyhow::Error, tx: &mpsc::UnboundedSender<Event>) -> Result<()> {
    tx.send(Event::BackendError(format!("{err}")))?;

    return Ok(());
}

pub struct ActionsService {}

impl ActionsService {
    /// Runs completion requests off the UI loop. The UI holds back new
    /// submissions while one is in flight. Results and failures are both sent
    /// back as events.
    pub async fn start(
        backend: BackendBox,
        tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        let backend: Arc<dyn Backend + Send + Sync> = Arc::from(backend);

        while let Some(action) = rx.recv().await {
            match action {
                Action::BackendRequest(prompt) => {
                    let worker_backend = backend.clone();
                    let worker_tx = tx.clone();
                    tokio::spawn(async move {
                        match worker_backend.get_completion(prompt).await {
                            Ok(res) => {
                                worker_tx.send(Event::BackendPromptResponse(res))?;
                            }
                            Err(err) => {
                                worker_error(err, &worker_tx)?;
                            }
                        }

                        return Ok::<(), anyhow::Error>(());
                    });
                }
            }
        }

        return Ok(());
    }
}
