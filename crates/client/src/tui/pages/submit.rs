use hiscore_core::tracker::{ScoreTracker, SubmitOutcome};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::{
    clock::wall_ms,
    tui::{
        THEME,
        component::Component,
        state::{SubmitFocus, TuiState},
        utils::center,
        widgets::{status::StatusLine, text_input::TextInput},
    },
    tui_adapter::{Event, KeyCode},
};

/// The submission form: player name, score, game-type selector.
pub struct SubmitPage {}

impl Component for SubmitPage {
    type State = TuiState;

    fn on_event(self, event: &Event, state: &mut Self::State) -> bool {
        let Event::Key(key) = event else {
            return forward_to_input(event, state);
        };

        match key {
            KeyCode::Up => {
                state.submit.focus = match state.submit.focus {
                    SubmitFocus::Name => SubmitFocus::Name,
                    SubmitFocus::Score => SubmitFocus::Name,
                    SubmitFocus::Game => SubmitFocus::Score,
                };
                true
            }
            KeyCode::Down => {
                state.submit.focus = match state.submit.focus {
                    SubmitFocus::Name => SubmitFocus::Score,
                    SubmitFocus::Score => SubmitFocus::Game,
                    SubmitFocus::Game => SubmitFocus::Game,
                };
                true
            }
            KeyCode::Left if state.submit.focus == SubmitFocus::Game => {
                let mut tracker = state.external.tracker.lock().unwrap();
                cycle_selection(&mut tracker, -1);
                true
            }
            KeyCode::Right if state.submit.focus == SubmitFocus::Game => {
                let mut tracker = state.external.tracker.lock().unwrap();
                cycle_selection(&mut tracker, 1);
                true
            }
            KeyCode::Enter => {
                let mut tracker = state.external.tracker.lock().unwrap();
                let selected = tracker.selected().map(str::to_owned);
                let outcome = tracker.submit_score(
                    &state.submit.name.value,
                    &state.submit.score.value,
                    selected.as_deref(),
                    wall_ms(),
                );
                if matches!(outcome, SubmitOutcome::Accepted(_)) {
                    state.submit.score.clear();
                }
                true
            }
            _ => forward_to_input(event, state),
        }
    }

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let form = center(area, Constraint::Length(48), Constraint::Length(7));
        let rows: [Rect; 7] = Layout::vertical([Constraint::Length(1); 7]).areas(form);

        let tracker = state.external.tracker.lock().unwrap();

        TextInput {
            label: "Name",
            value: &state.submit.name.value,
            focused: state.submit.focus == SubmitFocus::Name,
        }
        .render(rows[0], buf);

        TextInput {
            label: "Score",
            value: &state.submit.score.value,
            focused: state.submit.focus == SubmitFocus::Score,
        }
        .render(rows[1], buf);

        game_selector_line(&tracker, state.submit.focus == SubmitFocus::Game).render(rows[2], buf);

        let snapshot = tracker.rate_limit();
        StatusLine {
            status: tracker.status(),
            rate_limit: &snapshot,
        }
        .render(rows[4], buf);

        Line::styled(
            "Enter submits — Tab switches pages — Esc quits",
            Style::default().fg(THEME.palette.page_info),
        )
        .render(rows[6], buf);
    }
}

fn game_selector_line(tracker: &ScoreTracker, focused: bool) -> Line<'static> {
    let label_style = if focused {
        Style::default().fg(THEME.palette.ui_highlight)
    } else {
        Style::default().fg(THEME.palette.ui_disabled)
    };

    let selection = match tracker.selected().and_then(|id| tracker.find_game_type(id)) {
        Some(game_type) => Span::styled(
            format!("◂ {} ▸", game_type.name),
            Style::default().fg(THEME.palette.ui_selected),
        ),
        None if tracker.game_types().is_empty() => Span::styled(
            "no games yet — add one in Manage",
            Style::default().fg(THEME.palette.ui_disabled),
        ),
        None => Span::styled(
            "◂ pick a game ▸",
            Style::default().fg(THEME.palette.ui_disabled),
        ),
    };

    Line::from(vec![
        Span::styled(format!("{:<7}", "Game"), label_style),
        selection,
    ])
}

/// Steps the submission target through the registered game types in order.
fn cycle_selection(tracker: &mut ScoreTracker, step: isize) {
    let ids: Vec<_> = tracker.game_types().iter().map(|g| g.id.clone()).collect();
    if ids.is_empty() {
        return;
    }

    let current = tracker
        .selected()
        .and_then(|selected| ids.iter().position(|id| id == selected));
    let next = match current {
        Some(index) => (index as isize + step).rem_euclid(ids.len() as isize) as usize,
        None => 0,
    };
    tracker.select_game_type(&ids[next]);
}

fn forward_to_input(event: &Event, state: &mut TuiState) -> bool {
    match state.submit.focus {
        SubmitFocus::Name => state.submit.name.on_event(event),
        SubmitFocus::Score => state.submit.score.on_event(event),
        SubmitFocus::Game => false,
    }
}
