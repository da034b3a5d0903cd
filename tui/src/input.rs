//! Input handling for the Folio TUI.
//!
//! Terminal events are read on a blocking thread and pumped through a
//! bounded channel; `handle_events` drains them with a per-frame
//! budget so a burst of input can never starve rendering.

use anyhow::{Result, anyhow};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use std::time::Duration;
use tokio::sync::mpsc;

use folio_engine::{App, InputMode, Section};

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 1024; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

enum InputMsg {
    Event(Event),
    Error(String),
}

pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<tokio::task::JoinHandle<()>>,
}

impl InputPump {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop2 = stop.clone();

        let join = tokio::task::spawn_blocking(move || input_loop(stop2, tx));
        Self {
            rx,
            stop,
            join: Some(join),
        }
    }

    pub async fn shutdown(&mut self) {
        // Close the receiver first so the input thread unblocks if it
        // is currently backpressured on a send.
        self.rx.close();

        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            let _ = tokio::time::timeout(Duration::from_secs(2), join).await;
        }
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        // Best-effort stop if the caller exits early; never block in Drop.
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: Arc<AtomicBool>, tx: mpsc::Sender<InputMsg>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    // Bounded queue: apply backpressure instead of
                    // dropping events, so large pastes arrive intact.
                    if tx.blocking_send(InputMsg::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                break;
            }
        }
    }
}

/// Drain pending input into the app. Returns `Ok(true)` when the app
/// should exit.
pub fn handle_events(app: &mut App, input: &mut InputPump) -> Result<bool> {
    let mut processed = 0;
    while processed < MAX_EVENTS_PER_FRAME {
        let ev = match input.rx.try_recv() {
            Ok(InputMsg::Event(ev)) => ev,
            Ok(InputMsg::Error(msg)) => return Err(anyhow!("input error: {msg}")),
            Err(mpsc::error::TryRecvError::Empty) => break,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                return Err(anyhow!("input pump disconnected"));
            }
        };

        if apply_event(app, ev) {
            return Ok(true);
        }
        processed += 1;
    }
    Ok(app.should_quit())
}

fn apply_event(app: &mut App, event: Event) -> bool {
    match event {
        Event::Key(key) => {
            // Press + repeat only; releases are noise.
            if matches!(key.kind, KeyEventKind::Release) {
                return app.should_quit();
            }

            // Ctrl+C quits from anywhere.
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return true;
            }

            match app.input_mode() {
                InputMode::Browse => handle_browse_mode(app, key),
                InputMode::Edit => handle_edit_mode(app, key),
            }
        }
        Event::Paste(text) => {
            if app.input_mode() == InputMode::Edit && !app.form().status().is_submitted() {
                let normalized = normalize_line_endings(&text);
                app.edit_field().paste(&normalized);
            }
        }
        _ => {}
    }
    app.should_quit()
}

fn handle_browse_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => {
            app.request_quit();
        }
        KeyCode::Char('i') | KeyCode::Enter => {
            app.enter_edit_mode();
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.scroll_down();
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.scroll_up();
        }
        KeyCode::PageDown => {
            app.scroll_page_down();
        }
        KeyCode::PageUp => {
            app.scroll_page_up();
        }
        KeyCode::Char('g') | KeyCode::Home => {
            app.scroll_to_top();
        }
        KeyCode::Char('G') | KeyCode::End => {
            app.scroll_to_bottom();
        }
        KeyCode::Tab => {
            app.next_section();
        }
        KeyCode::BackTab => {
            app.prev_section();
        }
        KeyCode::Char(c) if c.is_ascii_digit() => {
            if let Some(section) = c.to_digit(10).and_then(Section::from_digit) {
                app.jump_to_section(section);
            }
        }
        _ => {}
    }
}

fn handle_edit_mode(app: &mut App, key: KeyEvent) {
    // Success panel: a reduced keymap until the user leaves it.
    if app.form().status().is_submitted() {
        match key.code {
            KeyCode::Enter | KeyCode::Char('r') => app.send_another(),
            KeyCode::Esc => app.enter_browse_mode(),
            _ => {}
        }
        return;
    }

    // Newline in the message field: Shift+Enter or Ctrl+J.
    let is_newline = matches!(
        (key.code, key.modifiers),
        (KeyCode::Enter, m) if m.contains(KeyModifiers::SHIFT) || m.contains(KeyModifiers::CONTROL)
    ) || matches!(
        key,
        KeyEvent { code: KeyCode::Char('j'), modifiers: m, .. } if m.contains(KeyModifiers::CONTROL)
    );
    if is_newline {
        app.edit_field().insert_newline();
        return;
    }

    match key.code {
        KeyCode::Esc => {
            app.enter_browse_mode();
        }
        // Submit from any field; the engine guards re-entry while a
        // delivery is in flight.
        KeyCode::Enter => {
            app.submit_form();
        }
        KeyCode::Tab | KeyCode::Down => {
            app.focus_next_field();
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.focus_prev_field();
        }
        KeyCode::Backspace => {
            app.edit_field().backspace();
        }
        KeyCode::Delete => {
            app.edit_field().delete_forward();
        }
        KeyCode::Left => {
            app.edit_field().move_cursor_left();
        }
        KeyCode::Right => {
            app.edit_field().move_cursor_right();
        }
        KeyCode::Home => {
            app.edit_field().move_cursor_home();
        }
        KeyCode::End => {
            app.edit_field().move_cursor_end();
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.edit_field().clear_line();
        }
        KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.edit_field().delete_word_backwards();
        }
        // Insert character (ignore \r - Enter is handled above).
        KeyCode::Char(c) if c != '\r' && !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.edit_field().insert_char(c);
        }
        _ => {}
    }
}
