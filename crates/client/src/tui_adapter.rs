use ratatui::Frame;

/// Terminal events, reduced to what this UI binds. The terminal backend
/// converts its own event type into these so the pages stay backend-free.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Key(KeyCode),
    /// Text pasted into the terminal (bracketed paste)
    Paste(String),
    /// Terminal resized (columns, rows)
    Resize(u16, u16),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    Char(char),
    Enter,
    Esc,
    Tab,
    BackTab,
    Backspace,
    Delete,
    Up,
    Down,
    Left,
    Right,
}

/// App that a terminal backend can drive.
pub trait TuiApp {
    fn render(&mut self, f: &mut Frame);
    fn handle_events(&mut self, event: Event) -> bool;
    fn should_exit(&self) -> bool;
}
