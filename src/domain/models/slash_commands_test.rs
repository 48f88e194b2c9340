use super::SlashCommand;

#[test]
fn it_parses_quit() {
    for text in ["/q", "/quit", "/exit", "  /quit  "] {
        let cmd = SlashCommand::parse(text).unwrap();
        assert!(cmd.is_quit());
        assert!(!cmd.is_clear());
        assert!(!cmd.is_help());
    }
}

#[test]
fn it_parses_clear() {
    for text in ["/cl", "/clear"] {
        let cmd = SlashCommand::parse(text).unwrap();
        assert!(cmd.is_clear());
    }
}

#[test]
fn it_parses_help() {
    for text in ["/h", "/help", "/help\n"] {
        let cmd = SlashCommand::parse(text).unwrap();
        assert!(cmd.is_help());
    }
}

#[test]
fn it_treats_commands_followed_by_text_as_chat() {
    assert!(SlashCommand::parse("/help me find a new career").is_none());
    assert!(SlashCommand::parse("/q is my favourite letter").is_none());
    assert!(SlashCommand::parse("/clear\nthe air").is_none());
}

#[test]
fn it_ignores_regular_text() {
    assert!(SlashCommand::parse("I'm a nurse who loves coding").is_none());
    assert!(SlashCommand::parse("/unknown").is_none());
    assert!(SlashCommand::parse("").is_none());
    assert!(SlashCommand::parse("   ").is_none());
}
