use super::BackendPrompt;
use super::SYSTEM_PROMPT;
use crate::domain::models::Message;
use crate::domain::models::Role;

fn transcript() -> Vec<Message> {
    return vec![
        Message::new(Role::Assistant, "Welcome!"),
        Message::new(Role::User, "I'm a nurse who loves coding"),
        Message::new(Role::Assistant, "Consider health-tech roles."),
        Message::new(Role::User, "What about remote work?"),
    ];
}

#[test]
fn it_places_instructions_first() {
    let prompt = BackendPrompt::compose("abc", &transcript(), 0);

    assert_eq!(prompt.credential, "abc");
    assert_eq!(prompt.messages.len(), 5);
    assert_eq!(prompt.messages[0].role, "system");
    assert_eq!(prompt.messages[0].content, SYSTEM_PROMPT);
}

#[test]
fn it_keeps_transcript_order_and_roles() {
    let prompt = BackendPrompt::compose("abc", &transcript(), 0);
    let roles = prompt
        .messages
        .iter()
        .map(|message| return message.role.as_str())
        .collect::<Vec<&str>>();

    assert_eq!(roles, vec!["system", "assistant", "user", "assistant", "user"]);
    assert_eq!(prompt.messages[4].content, "What about remote work?");
}

#[test]
fn it_limits_history() {
    let prompt = BackendPrompt::compose("abc", &transcript(), 2);

    assert_eq!(prompt.messages.len(), 3);
    assert_eq!(prompt.messages[0].role, "system");
    assert_eq!(prompt.messages[1].content, "Consider health-tech roles.");
    assert_eq!(prompt.messages[2].content, "What about remote work?");
}

#[test]
fn it_ignores_limits_larger_than_history() {
    let prompt = BackendPrompt::compose("abc", &transcript(), 50);
    assert_eq!(prompt.messages.len(), 5);
}

#[test]
fn it_asks_for_both_sections() {
    assert!(SYSTEM_PROMPT.contains("[CONVERSATION]"));
    assert!(SYSTEM_PROMPT.contains("[DATA]"));
}
