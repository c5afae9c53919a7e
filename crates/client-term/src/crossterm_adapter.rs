use std::{io::Stdout, time::Duration};

use anyhow::Result;
use crossterm::event as ct;
use hiscore_client::tui_adapter::{Event, KeyCode, TuiApp};
use ratatui::{Terminal, prelude::CrosstermBackend};

pub struct CrosstermAdapter<T: TuiApp> {
    app: T,
}

impl<T: TuiApp> CrosstermAdapter<T> {
    pub fn new(app: T) -> CrosstermAdapter<T> {
        CrosstermAdapter { app }
    }

    pub fn run(self) {
        let mut terminal = ratatui::init();
        let result = self.do_run(&mut terminal);
        ratatui::restore();
        if let Err(e) = result {
            eprintln!("Tui ended with an error: {e:?}");
        }
    }

    pub fn do_run(mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| self.app.render(f))?;
            if ct::poll(Duration::from_millis(50))? {
                let event = ct::read()?;

                // Check for Ctrl+C to exit
                if let ct::Event::Key(key) = &event {
                    if key.code == ct::KeyCode::Char('c')
                        && key.modifiers.contains(ct::KeyModifiers::CONTROL)
                    {
                        break;
                    }
                }

                if let Some(event) = convert_event(event) {
                    self.app.handle_events(event);
                }
            }
            if self.app.should_exit() {
                break;
            }
        }
        Ok(())
    }
}

/// Maps crossterm events onto the slim adapter enums; everything the UI
/// does not bind converts to `None`.
fn convert_event(ct_event: ct::Event) -> Option<Event> {
    match ct_event {
        ct::Event::Key(key) => convert_key_event(key),
        ct::Event::Paste(text) => Some(Event::Paste(text)),
        ct::Event::Resize(cols, rows) => Some(Event::Resize(cols, rows)),
        _ => None,
    }
}

fn convert_key_event(ct_key: ct::KeyEvent) -> Option<Event> {
    if ct_key.kind == ct::KeyEventKind::Release {
        return None;
    }
    let code = match ct_key.code {
        ct::KeyCode::Char(c) => KeyCode::Char(c),
        ct::KeyCode::Enter => KeyCode::Enter,
        ct::KeyCode::Esc => KeyCode::Esc,
        ct::KeyCode::Tab => KeyCode::Tab,
        ct::KeyCode::BackTab => KeyCode::BackTab,
        ct::KeyCode::Backspace => KeyCode::Backspace,
        ct::KeyCode::Delete => KeyCode::Delete,
        ct::KeyCode::Up => KeyCode::Up,
        ct::KeyCode::Down => KeyCode::Down,
        ct::KeyCode::Left => KeyCode::Left,
        ct::KeyCode::Right => KeyCode::Right,
        _ => return None,
    };
    Some(Event::Key(code))
}
