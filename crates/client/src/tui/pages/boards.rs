use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    widgets::{Block, Borders, List, ListItem, StatefulWidget, Widget},
};

use crate::{
    tui::{THEME, component::Component, state::TuiState, widgets::score_table::ScoreTable},
    tui_adapter::{Event, KeyCode},
};

/// Leaderboard browser: game types on the left, ranked scores on the right.
pub struct BoardsPage {}

impl Component for BoardsPage {
    type State = TuiState;

    fn on_event(self, event: &Event, state: &mut Self::State) -> bool {
        let Event::Key(key) = event else {
            return false;
        };

        match key {
            KeyCode::Up => {
                state.boards.list_state.select_previous();
                true
            }
            KeyCode::Down => {
                state.boards.list_state.select_next();
                true
            }
            _ => false,
        }
    }

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let [list_a, board_a] =
            Layout::horizontal([Constraint::Percentage(30), Constraint::Percentage(70)])
                .areas(area);

        let tracker = state.external.tracker.lock().unwrap();
        let game_types = tracker.game_types();

        // keep the highlight inside the collection after removals
        let list_state = &mut state.boards.list_state;
        match game_types.len() {
            0 => list_state.select(None),
            len => {
                if list_state.selected().is_none_or(|i| i >= len) {
                    list_state.select(Some(len - 1));
                }
            }
        }

        let items: Vec<ListItem> = game_types
            .iter()
            .map(|g| ListItem::new(g.name.clone()))
            .collect();
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(" Games "))
            .style(Style::default().fg(THEME.palette.ui_text))
            .highlight_style(Style::default().fg(THEME.palette.ui_selected).bold())
            .highlight_symbol("> ");
        StatefulWidget::render(list, list_a, buf, list_state);

        let highlighted = list_state.selected().and_then(|i| game_types.get(i));
        let Some(game_type) = highlighted else {
            Block::default()
                .borders(Borders::ALL)
                .title(" Top Scores ")
                .render(board_a, buf);
            return;
        };

        let top = tracker.top_scores(&game_type.id);
        let block = Block::default().borders(Borders::ALL).title(format!(
            " {} — {} scores ",
            game_type.name,
            tracker.count_scores(&game_type.id)
        ));
        let inner = block.inner(board_a);
        block.render(board_a, buf);
        ScoreTable { scores: &top }.render(inner, buf);
    }
}
