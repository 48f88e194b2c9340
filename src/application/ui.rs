use std::io;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableBracketedPaste;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableBracketedPaste;
use crossterm::event::EnableMouseCapture;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::CrosstermBackend;
use ratatui::prelude::*;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Clear;
use ratatui::widgets::Padding;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Scrollbar;
use ratatui::widgets::ScrollbarOrientation;
use ratatui::widgets::Wrap;
use ratatui::Terminal;
use tokio::sync::mpsc;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::Loading;
use crate::domain::models::NoticeKind;
use crate::domain::models::TextArea;
use crate::domain::services::actions::help_text;
use crate::domain::services::events::EventsService;
use crate::domain::services::AppState;
use crate::domain::services::Dashboard;
use crate::domain::services::Focus;

const ACCENT: Color = Color::Rgb(30, 136, 229);

fn insert_text(textarea: &mut tui_textarea::TextArea, text: &str, allow_newlines: bool) {
    for char in text.chars() {
        if char == '\n' || char == '\r' {
            if allow_newlines && char == '\n' {
                textarea.insert_newline();
            }
            continue;
        }
        textarea.insert_char(char);
    }
}

fn is_keypress(event: &Event) -> bool {
    return matches!(
        event,
        Event::KeyboardCharInput(_)
            | Event::KeyboardCTRLK()
            | Event::KeyboardCTRLL()
            | Event::KeyboardEnter()
            | Event::KeyboardEsc()
            | Event::KeyboardPaste(_)
    );
}

fn centered_rect(percent_x: u16, percent_y: u16, rect: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(rect);

    return Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1];
}

fn render_status<B: Backend>(frame: &mut Frame<B>, rect: Rect, app_state: &AppState, model: &str) {
    let right = format!(" Model: {model} | {} ", app_state.credential_indicator());
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![
            Constraint::Min(1),
            Constraint::Length(right.chars().count() as u16),
        ])
        .split(rect);

    let left = match &app_state.notice {
        Some(notice) => {
            let colour = match notice.kind {
                NoticeKind::Info => Color::Green,
                NoticeKind::Warning => Color::Yellow,
                NoticeKind::Error => Color::Red,
            };
            Span::styled(format!(" {}", notice.text), Style::default().fg(colour))
        }
        None => Span::styled(
            " Enter: send | CTRL+K: API key | CTRL+L: clear | /help | CTRL+C: quit",
            Style::default().add_modifier(Modifier::DIM),
        ),
    };

    frame.render_widget(Paragraph::new(Line::from(left)), layout[0]);
    frame.render_widget(
        Paragraph::new(right).style(Style::default().add_modifier(Modifier::DIM)),
        layout[1],
    );
}

fn render_credential<B: Backend>(
    frame: &mut Frame<B>,
    rect: Rect,
    credential_input: &tui_textarea::TextArea,
) {
    let len = credential_input
        .lines()
        .iter()
        .map(|line| return line.chars().count())
        .sum::<usize>();

    frame.render_widget(
        Paragraph::new(format!("{}▏", "•".repeat(len))).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::Yellow))
                .title("OpenAI API key (Enter to save, ESC to cancel)")
                .padding(Padding::new(1, 1, 0, 0)),
        ),
        rect,
    );
}

fn render_help<B: Backend>(frame: &mut Frame<B>) {
    let rect = centered_rect(70, 70, frame.size());
    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(help_text())
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title("Help (press any key to close)")
                    .padding(Padding::new(1, 1, 1, 1)),
            ),
        rect,
    );
}

/// Draws the whole page from the current state.
fn render<B: Backend>(
    frame: &mut Frame<B>,
    app_state: &mut AppState,
    textarea: &tui_textarea::TextArea,
    credential_input: &tui_textarea::TextArea,
    model: &str,
) {
    let page = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(frame.size());

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            " Career Mind Analyst",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))),
        page[0],
    );

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(page[1]);

    let chat = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Min(1), Constraint::Length(4)])
        .split(columns[0]);

    let transcript_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title("Career Coaching");
    let transcript_rect = transcript_block.inner(chat[0]);
    frame.render_widget(transcript_block, chat[0]);

    if transcript_rect.width != app_state.last_known_width
        || transcript_rect.height != app_state.last_known_height
    {
        app_state.set_rect(transcript_rect);
    }

    app_state
        .bubble_list
        .render(frame, transcript_rect, app_state.scroll.position);
    frame.render_stateful_widget(
        Scrollbar::new(ScrollbarOrientation::VerticalRight),
        transcript_rect,
        &mut app_state.scroll.scrollbar_state,
    );

    if app_state.focus == Focus::Credential {
        render_credential(frame, chat[1], credential_input);
    } else if app_state.waiting_for_backend {
        Loading::default().render(frame, chat[1]);
    } else {
        frame.render_widget(textarea.widget(), chat[1]);
    }

    frame.render_widget(Dashboard::new(&app_state.session.analysis), columns[1]);
    render_status(frame, page[2], app_state, model);

    if app_state.show_help {
        render_help(frame);
    }
}

async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: &mut AppState,
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let mut events = EventsService::new(rx);
    let mut textarea = TextArea::default();
    let mut credential_input = TextArea::credential();
    let model = Config::get(ConfigKey::Model);

    #[cfg(feature = "dev")]
    {
        insert_text(
            &mut textarea,
            "I'm a teacher but I love data and want more flexibility. What could I do next?",
            false,
        );
    }

    loop {
        terminal.draw(|frame| {
            render(frame, app_state, &textarea, &credential_input, &model);
        })?;

        let event = events.next().await?;

        if let Event::KeyboardCTRLC() = event {
            break;
        }

        if app_state.show_help && is_keypress(&event) {
            app_state.show_help = false;
            continue;
        }

        match event {
            Event::BackendPromptResponse(res) => {
                app_state.handle_backend_response(res);
            }
            Event::BackendError(err) => {
                app_state.handle_backend_error(&err);
            }
            Event::KeyboardCTRLK() => {
                credential_input = TextArea::credential();
                app_state.begin_credential_entry();
            }
            Event::KeyboardCTRLL() => {
                app_state.clear_history();
            }
            Event::KeyboardEsc() => {
                if app_state.focus == Focus::Credential {
                    credential_input = TextArea::credential();
                    app_state.cancel_credential_entry();
                }
            }
            Event::KeyboardPaste(text) => {
                if app_state.focus == Focus::Credential {
                    insert_text(&mut credential_input, &text, false);
                } else if !app_state.waiting_for_backend {
                    insert_text(&mut textarea, &text, true);
                }
            }
            Event::KeyboardCharInput(input) => {
                if app_state.focus == Focus::Credential {
                    credential_input.input(input);
                } else if !app_state.waiting_for_backend {
                    textarea.input(input);
                }
            }
            Event::KeyboardEnter() => {
                if app_state.focus == Focus::Credential {
                    app_state.save_credential(&credential_input.lines().join(""));
                    credential_input = TextArea::credential();
                    continue;
                }

                if app_state.waiting_for_backend {
                    continue;
                }

                let input_str = textarea.lines().join("\n");
                let (should_break, should_continue) = app_state.handle_slash_commands(&input_str);
                if should_break {
                    break;
                }
                if should_continue {
                    textarea = TextArea::default();
                    continue;
                }

                if app_state.submit(&input_str, &tx)? {
                    textarea = TextArea::default();
                }
            }
            Event::UIScrollDown() => {
                app_state.scroll.down();
            }
            Event::UIScrollUp() => {
                app_state.scroll.up();
            }
            Event::UIScrollPageDown() => {
                app_state.scroll.down_page();
            }
            Event::UIScrollPageUp() => {
                app_state.scroll.up_page();
            }
            Event::KeyboardCTRLC() | Event::UIResize() | Event::UITick() => (),
        }
    }

    return Ok(());
}

pub fn destruct_terminal_for_panic() {
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    );
    let _ = crossterm::execute!(io::stdout(), cursor::Show);
}

pub async fn start(
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let mut app_state = AppState::new(
        &Config::get(ConfigKey::OpenAiToken),
        Config::get_usize(ConfigKey::HistoryLimit)?,
    );

    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    enable_raw_mode()?;
    crossterm::execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;

    let res = start_loop(&mut terminal, &mut app_state, tx, rx).await;

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    return res;
}
