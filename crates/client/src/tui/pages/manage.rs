use itertools::Itertools;
use log::debug;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, StatefulWidget, Widget},
};

use crate::{
    tui::{
        THEME,
        component::Component,
        state::{ManageFocus, TuiState},
        widgets::text_input::TextInput,
    },
    tui_adapter::{Event, KeyCode},
};

/// Game-type management: register new types, remove existing ones
/// (cascading away their scores).
pub struct ManagePage {}

impl Component for ManagePage {
    type State = TuiState;

    fn on_event(self, event: &Event, state: &mut Self::State) -> bool {
        let Event::Key(key) = event else {
            return forward_to_input(event, state);
        };

        match key {
            KeyCode::Up => {
                move_up(state);
                true
            }
            KeyCode::Down => {
                move_down(state);
                true
            }
            KeyCode::Enter if state.manage.focus != ManageFocus::List => {
                let mut tracker = state.external.tracker.lock().unwrap();
                let added = tracker
                    .add_game_type(&state.manage.name.value, &state.manage.description.value);
                match added {
                    Some(_) => {
                        state.manage.name.clear();
                        state.manage.description.clear();
                    }
                    None => debug!("ignored game type with a blank name"),
                }
                true
            }
            KeyCode::Delete | KeyCode::Char('d') if state.manage.focus == ManageFocus::List => {
                let mut tracker = state.external.tracker.lock().unwrap();
                let removed_id = state
                    .manage
                    .list_state
                    .selected()
                    .and_then(|i| tracker.game_types().get(i))
                    .map(|g| g.id.clone());
                if let Some(id) = removed_id {
                    tracker.remove_game_type(&id);
                }
                true
            }
            _ => forward_to_input(event, state),
        }
    }

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let [form_a, list_a, summary_a] = Layout::vertical([
            Constraint::Length(5),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(area);

        let tracker = state.external.tracker.lock().unwrap();
        let game_types = tracker.game_types();

        let form_block = Block::default()
            .borders(Borders::ALL)
            .title(" New game type ");
        let form_inner = form_block.inner(form_a);
        form_block.render(form_a, buf);
        let form_rows: [Rect; 3] = Layout::vertical([Constraint::Length(1); 3]).areas(form_inner);

        TextInput {
            label: "Name",
            value: &state.manage.name.value,
            focused: state.manage.focus == ManageFocus::Name,
        }
        .render(form_rows[0], buf);
        TextInput {
            label: "About",
            value: &state.manage.description.value,
            focused: state.manage.focus == ManageFocus::Description,
        }
        .render(form_rows[1], buf);
        Line::styled(
            "Enter adds — d removes the highlighted game",
            Style::default().fg(THEME.palette.page_info),
        )
        .render(form_rows[2], buf);

        // keep the highlight inside the collection after removals
        let list_state = &mut state.manage.list_state;
        if let Some(selected) = list_state.selected()
            && selected >= game_types.len()
        {
            list_state.select(game_types.len().checked_sub(1));
        }

        let items: Vec<ListItem> = game_types
            .iter()
            .map(|g| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{:<16}", g.name),
                        Style::default().fg(THEME.palette.ui_text),
                    ),
                    Span::styled(
                        format!("{:>4} scores  ", tracker.count_scores(&g.id)),
                        Style::default().fg(THEME.palette.accent),
                    ),
                    Span::styled(
                        g.description.clone(),
                        Style::default().fg(THEME.palette.ui_disabled),
                    ),
                ]))
            })
            .collect();

        let focused = state.manage.focus == ManageFocus::List;
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(" Games "))
            .highlight_style(if focused {
                Style::default().fg(THEME.palette.ui_selected).bold()
            } else {
                Style::default().fg(THEME.palette.ui_highlight)
            })
            .highlight_symbol("> ");
        StatefulWidget::render(list, list_a, buf, list_state);

        let summary = if game_types.is_empty() {
            "No game types yet".to_owned()
        } else {
            game_types
                .iter()
                .map(|g| format!("{} ({})", g.name, tracker.count_scores(&g.id)))
                .join(", ")
        };
        Line::styled(summary, Style::default().fg(THEME.palette.page_info)).render(summary_a, buf);
    }
}

fn move_up(state: &mut TuiState) {
    match state.manage.focus {
        ManageFocus::Name => {}
        ManageFocus::Description => state.manage.focus = ManageFocus::Name,
        ManageFocus::List => {
            if state.manage.list_state.selected().unwrap_or(0) == 0 {
                state.manage.focus = ManageFocus::Description;
                state.manage.list_state.select(None);
            } else {
                state.manage.list_state.select_previous();
            }
        }
    }
}

fn move_down(state: &mut TuiState) {
    match state.manage.focus {
        ManageFocus::Name => state.manage.focus = ManageFocus::Description,
        ManageFocus::Description => {
            state.manage.focus = ManageFocus::List;
            state.manage.list_state.select(Some(0));
        }
        ManageFocus::List => state.manage.list_state.select_next(),
    }
}

fn forward_to_input(event: &Event, state: &mut TuiState) -> bool {
    match state.manage.focus {
        ManageFocus::Name => state.manage.name.on_event(event),
        ManageFocus::Description => state.manage.description.on_event(event),
        ManageFocus::List => false,
    }
}
