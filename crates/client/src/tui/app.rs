use std::sync::{Arc, Mutex};

use hiscore_core::tracker::ScoreTracker;
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Widget,
};

use crate::{
    tui::{
        THEME,
        component::Component,
        pages::{BoardsPage, ManagePage, SubmitPage},
        state::{PageSelection, TuiState},
    },
    tui_adapter::{Event, KeyCode, TuiApp},
};

pub struct ScoreTui {
    state: TuiState,
}

impl ScoreTui {
    pub fn new(tracker: Arc<Mutex<ScoreTracker>>) -> Self {
        Self {
            state: TuiState::new(tracker),
        }
    }
}

impl TuiApp for ScoreTui {
    fn render(&mut self, f: &mut Frame) {
        let [tabs_a, page_a] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(f.area());
        let buf = f.buffer_mut();

        let mut spans = Vec::new();
        for page in PageSelection::all() {
            let style = if page == self.state.page {
                Style::default().fg(THEME.palette.ui_selected).bold()
            } else {
                Style::default().fg(THEME.palette.page_info)
            };
            spans.push(Span::styled(format!(" {} ", page.title()), style));
        }
        Line::from(spans).render(tabs_a, buf);

        match self.state.page {
            PageSelection::Submit => SubmitPage {}.render(page_a, buf, &mut self.state),
            PageSelection::Boards => BoardsPage {}.render(page_a, buf, &mut self.state),
            PageSelection::Manage => ManagePage {}.render(page_a, buf, &mut self.state),
        };
    }

    fn handle_events(&mut self, event: Event) -> bool {
        if let Event::Key(key) = &event {
            match key {
                KeyCode::Tab => {
                    self.state.page = self.state.page.next();
                    return true;
                }
                KeyCode::BackTab => {
                    self.state.page = self.state.page.prev();
                    return true;
                }
                KeyCode::Esc => {
                    self.state.should_exit = true;
                    return true;
                }
                _ => {}
            }
        }

        match self.state.page {
            PageSelection::Submit => SubmitPage {}.on_event(&event, &mut self.state),
            PageSelection::Boards => BoardsPage {}.on_event(&event, &mut self.state),
            PageSelection::Manage => ManagePage {}.on_event(&event, &mut self.state),
        }
    }

    fn should_exit(&self) -> bool {
        self.state.should_exit
    }
}
