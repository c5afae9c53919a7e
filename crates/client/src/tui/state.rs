use std::sync::{Arc, Mutex};

use hiscore_core::tracker::ScoreTracker;
use ratatui::widgets::ListState;

use crate::tui::widgets::text_input::InputState;

const NAME_INPUT_MAX: usize = 16;
const SCORE_INPUT_MAX: usize = 12;
const DESCRIPTION_INPUT_MAX: usize = 40;

pub struct TuiState {
    pub external: ExternalState,
    pub page: PageSelection,
    pub submit: SubmitState,
    pub boards: BoardsState,
    pub manage: ManageState,
    pub should_exit: bool,
}

impl TuiState {
    pub fn new(tracker: Arc<Mutex<ScoreTracker>>) -> Self {
        TuiState {
            external: ExternalState { tracker },
            page: PageSelection::Submit,
            submit: SubmitState::default(),
            boards: BoardsState::default(),
            manage: ManageState::default(),
            should_exit: false,
        }
    }
}

/// State owned outside the tui and shared with the tick task.
pub struct ExternalState {
    pub tracker: Arc<Mutex<ScoreTracker>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSelection {
    Submit,
    Boards,
    Manage,
}

impl PageSelection {
    pub fn title(&self) -> &'static str {
        match self {
            PageSelection::Submit => "Submit",
            PageSelection::Boards => "Boards",
            PageSelection::Manage => "Manage",
        }
    }

    pub fn all() -> [PageSelection; 3] {
        [
            PageSelection::Submit,
            PageSelection::Boards,
            PageSelection::Manage,
        ]
    }

    pub fn next(self) -> Self {
        match self {
            PageSelection::Submit => PageSelection::Boards,
            PageSelection::Boards => PageSelection::Manage,
            PageSelection::Manage => PageSelection::Submit,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            PageSelection::Submit => PageSelection::Manage,
            PageSelection::Boards => PageSelection::Submit,
            PageSelection::Manage => PageSelection::Boards,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitFocus {
    #[default]
    Name,
    Score,
    Game,
}

#[derive(Debug)]
pub struct SubmitState {
    pub name: InputState,
    pub score: InputState,
    pub focus: SubmitFocus,
}

impl Default for SubmitState {
    fn default() -> Self {
        SubmitState {
            name: InputState::with_max(NAME_INPUT_MAX),
            score: InputState::with_max(SCORE_INPUT_MAX),
            focus: SubmitFocus::default(),
        }
    }
}

#[derive(Debug)]
pub struct BoardsState {
    pub list_state: ListState,
}

impl Default for BoardsState {
    fn default() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self { list_state }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ManageFocus {
    #[default]
    Name,
    Description,
    List,
}

#[derive(Debug)]
pub struct ManageState {
    pub name: InputState,
    pub description: InputState,
    pub focus: ManageFocus,
    pub list_state: ListState,
}

impl Default for ManageState {
    fn default() -> Self {
        ManageState {
            name: InputState::with_max(NAME_INPUT_MAX),
            description: InputState::with_max(DESCRIPTION_INPUT_MAX),
            focus: ManageFocus::default(),
            list_state: ListState::default(),
        }
    }
}
