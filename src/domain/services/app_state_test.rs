use anyhow::bail;
use anyhow::Result;
use test_utils::nurse_reply_fixture;
use test_utils::teacher_reply_fixture;
use test_utils::truncated_reply_fixture;
use tokio::sync::mpsc;

use super::AppState;
use super::Focus;
use super::MISSING_CREDENTIAL_WARNING;
use crate::domain::models::Action;
use crate::domain::models::Analysis;
use crate::domain::models::BackendPrompt;
use crate::domain::models::BackendResponse;
use crate::domain::models::NoticeKind;
use crate::domain::models::Role;
use crate::domain::models::Session;
use crate::domain::models::DASHBOARD_APOLOGY;

impl Default for AppState {
    fn default() -> AppState {
        let mut app_state = AppState::new("sk-test", 0);
        app_state.last_known_width = 100;
        app_state.last_known_height = 300;
        return app_state;
    }
}

fn respond(app_state: &mut AppState, text: &str) {
    app_state.handle_backend_response(BackendResponse {
        text: text.to_string(),
    });
}

fn expect_prompt(rx: &mut mpsc::UnboundedReceiver<Action>) -> Result<BackendPrompt> {
    match rx.try_recv()? {
        Action::BackendRequest(prompt) => return Ok(prompt),
    }
}

mod submit {
    use super::*;

    #[test]
    fn it_grows_by_two_messages_per_turn() -> Result<()> {
        let (tx, mut rx) = mpsc::unbounded_channel::<Action>();
        let mut app_state = AppState::default();

        for turn in 1..=4 {
            assert!(app_state.submit("Tell me about my options", &tx)?);
            expect_prompt(&mut rx)?;
            respond(&mut app_state, teacher_reply_fixture());

            assert_eq!(app_state.session.messages.len(), 1 + 2 * turn);
        }

        return Ok(());
    }

    #[test]
    fn it_runs_the_nurse_scenario() -> Result<()> {
        let (tx, mut rx) = mpsc::unbounded_channel::<Action>();
        let mut app_state = AppState::default();
        assert_eq!(app_state.session.analysis.roadmap, "Awaiting your thoughts...");

        assert!(app_state.submit("I'm a nurse who loves coding", &tx)?);
        assert!(app_state.waiting_for_backend);

        let prompt = expect_prompt(&mut rx)?;
        assert_eq!(prompt.credential, "sk-test");
        assert_eq!(prompt.messages.len(), 3);
        assert_eq!(prompt.messages[0].role, "system");
        assert_eq!(prompt.messages[2].role, "user");
        assert_eq!(prompt.messages[2].content, "I'm a nurse who loves coding");

        respond(&mut app_state, nurse_reply_fixture());

        let last = app_state.session.messages.last().unwrap();
        assert_eq!(last.role, Role::Assistant);
        assert_eq!(last.text, "Consider health-tech roles.");
        assert_eq!(app_state.session.analysis.roadmap, "Take an SQL course");
        assert!(!app_state.waiting_for_backend);

        return Ok(());
    }

    #[test]
    fn it_rejects_turns_without_credential() -> Result<()> {
        let (tx, mut rx) = mpsc::unbounded_channel::<Action>();
        let mut app_state = AppState::new("", 0);

        assert!(!app_state.submit("I'm a nurse who loves coding", &tx)?);

        assert_eq!(app_state.session.messages, vec![Session::welcome()]);
        assert!(rx.try_recv().is_err());
        assert!(!app_state.waiting_for_backend);

        let notice = app_state.notice.unwrap();
        assert_eq!(notice.kind, NoticeKind::Warning);
        assert_eq!(notice.text, MISSING_CREDENTIAL_WARNING);

        return Ok(());
    }

    #[test]
    fn it_ignores_blank_input() -> Result<()> {
        let (tx, mut rx) = mpsc::unbounded_channel::<Action>();
        let mut app_state = AppState::default();

        assert!(!app_state.submit("   \n ", &tx)?);
        assert_eq!(app_state.session.messages.len(), 1);
        assert!(rx.try_recv().is_err());

        return Ok(());
    }

    #[test]
    fn it_allows_one_request_in_flight() -> Result<()> {
        let (tx, mut rx) = mpsc::unbounded_channel::<Action>();
        let mut app_state = AppState::default();

        assert!(app_state.submit("First", &tx)?);
        assert!(!app_state.submit("Second", &tx)?);

        expect_prompt(&mut rx)?;
        assert!(rx.try_recv().is_err());
        assert_eq!(app_state.session.messages.len(), 2);

        return Ok(());
    }

    #[test]
    fn it_respects_history_limit() -> Result<()> {
        let (tx, mut rx) = mpsc::unbounded_channel::<Action>();
        let mut app_state = AppState::new("sk-test", 2);

        for _ in 0..3 {
            app_state.submit("Hello", &tx)?;
            expect_prompt(&mut rx)?;
            respond(&mut app_state, "Tell me more.");
        }

        app_state.submit("Last one", &tx)?;
        let prompt = expect_prompt(&mut rx)?;
        assert_eq!(prompt.messages.len(), 3);
        assert_eq!(prompt.messages[2].content, "Last one");

        return Ok(());
    }
}

mod handle_backend_response {
    use super::*;

    #[test]
    fn it_replaces_analysis_wholesale() -> Result<()> {
        let (tx, _rx) = mpsc::unbounded_channel::<Action>();
        let mut app_state = AppState::default();

        app_state.submit("Hello", &tx)?;
        respond(&mut app_state, teacher_reply_fixture());
        app_state.submit("Hello again", &tx)?;
        respond(
            &mut app_state,
            r#"[CONVERSATION] Noted. [DATA] {"skills":["A"],"values":["B"],"paths":["C"],"roadmap":"D"}"#,
        );

        assert_eq!(
            app_state.session.analysis,
            Analysis {
                skills: vec!["A".to_string()],
                values: vec!["B".to_string()],
                paths: vec!["C".to_string()],
                roadmap: "D".to_string(),
            }
        );

        return Ok(());
    }

    #[test]
    fn it_keeps_analysis_without_marker() -> Result<()> {
        let (tx, _rx) = mpsc::unbounded_channel::<Action>();
        let mut app_state = AppState::default();

        app_state.submit("Hello", &tx)?;
        respond(&mut app_state, nurse_reply_fixture());
        let before = app_state.session.analysis.clone();

        app_state.submit("What next?", &tx)?;
        respond(&mut app_state, "Could you tell me more about your current role?");

        assert_eq!(app_state.session.analysis, before);
        assert_eq!(
            app_state.session.messages.last().unwrap().text,
            "Could you tell me more about your current role?"
        );

        return Ok(());
    }

    #[test]
    fn it_apologises_for_invalid_payloads() -> Result<()> {
        let (tx, _rx) = mpsc::unbounded_channel::<Action>();
        let mut app_state = AppState::default();
        let before = app_state.session.analysis.clone();

        app_state.submit("Hello", &tx)?;
        respond(&mut app_state, truncated_reply_fixture());

        let last = app_state.session.messages.last().unwrap();
        assert_eq!(last.role, Role::Assistant);
        assert_eq!(last.text, DASHBOARD_APOLOGY);
        assert_eq!(app_state.session.analysis, before);

        return Ok(());
    }

    #[test]
    fn it_keeps_the_user_message_on_failure() -> Result<()> {
        let (tx, _rx) = mpsc::unbounded_channel::<Action>();
        let mut app_state = AppState::default();

        app_state.submit("Hello", &tx)?;
        app_state.handle_backend_error("OpenAI returned 429: quota exceeded");

        assert!(!app_state.waiting_for_backend);
        assert_eq!(app_state.session.messages.len(), 2);
        assert_eq!(app_state.session.messages[1].role, Role::User);

        let notice = app_state.notice.unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        insta::assert_snapshot!(notice.text, @"The request failed: OpenAI returned 429: quota exceeded");

        return Ok(());
    }
}

mod handle_slash_commands {
    use super::*;

    #[test]
    fn it_breaks_on_quit() {
        let mut app_state = AppState::default();
        let (should_break, should_continue) = app_state.handle_slash_commands("/q");

        assert!(should_break);
        assert!(!should_continue);
    }

    #[test]
    fn it_clears_history() -> Result<()> {
        let (tx, _rx) = mpsc::unbounded_channel::<Action>();
        let mut app_state = AppState::default();
        for _ in 0..3 {
            app_state.submit("Hello", &tx)?;
            respond(&mut app_state, nurse_reply_fixture());
        }

        let (should_break, should_continue) = app_state.handle_slash_commands("/clear");

        assert!(!should_break);
        assert!(should_continue);
        assert_eq!(app_state.session.messages, vec![Session::welcome()]);

        return Ok(());
    }

    #[test]
    fn it_refuses_to_clear_while_waiting() -> Result<()> {
        let (tx, _rx) = mpsc::unbounded_channel::<Action>();
        let mut app_state = AppState::default();
        app_state.submit("Hello", &tx)?;

        app_state.clear_history();

        assert_eq!(app_state.session.messages.len(), 2);
        assert_eq!(app_state.notice.unwrap().kind, NoticeKind::Warning);

        return Ok(());
    }

    #[test]
    fn it_opens_help() {
        let mut app_state = AppState::default();
        let (should_break, should_continue) = app_state.handle_slash_commands("/help");

        assert!(!should_break);
        assert!(should_continue);
        assert!(app_state.show_help);
        assert_eq!(app_state.session.messages.len(), 1);
    }

    #[test]
    fn it_passes_through_regular_text() {
        let mut app_state = AppState::default();
        let (should_break, should_continue) =
            app_state.handle_slash_commands("I love working with people");

        assert!(!should_break);
        assert!(!should_continue);
    }
}

mod credentials {
    use super::*;

    #[test]
    fn it_asks_for_a_credential_on_start() {
        let app_state = AppState::new("", 0);

        assert_eq!(app_state.focus, Focus::Credential);
        insta::assert_snapshot!(app_state.credential_indicator(), @"API key: not set");
    }

    #[test]
    fn it_saves_credentials_for_the_session() -> Result<()> {
        let (tx, mut rx) = mpsc::unbounded_channel::<Action>();
        let mut app_state = AppState::new("", 0);

        app_state.save_credential("sk-live");
        assert_eq!(app_state.focus, Focus::Chat);
        insta::assert_snapshot!(app_state.credential_indicator(), @"API key: ●●●●●●●●");

        assert!(app_state.submit("Hello", &tx)?);
        let prompt = match rx.try_recv()? {
            Action::BackendRequest(prompt) => prompt,
        };
        if prompt.credential != "sk-live" {
            bail!("Credential was not forwarded");
        }

        return Ok(());
    }

    #[test]
    fn it_cancels_credential_entry() {
        let mut app_state = AppState::default();
        app_state.begin_credential_entry();
        assert_eq!(app_state.focus, Focus::Credential);

        app_state.cancel_credential_entry();
        assert_eq!(app_state.focus, Focus::Chat);
        assert_eq!(app_state.session.credential(), "sk-test");
    }
}
