use std::time::Duration;

use log::debug;

use crate::board::{Board, GameType, GameTypeId, Removal, Score, ScoreId, TOP_SCORES_LIMIT};
use crate::rate_limit::{RateLimitConfig, RateLimitSnapshot, RateLimiter};
use crate::validate::{self, Severity, ValidationResult};

/// How long the last submission outcome stays visible before it auto-clears.
pub const STATUS_DISPLAY: Duration = Duration::from_secs(3);

/// A game type to register at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameTypeSpec {
    pub name: String,
    pub description: String,
}

impl GameTypeSpec {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        GameTypeSpec {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Construction-time configuration. Not reloadable.
#[derive(Debug, Clone, Default)]
pub struct TrackerConfig {
    pub rate_limit: RateLimitConfig,
    pub game_types: Vec<GameTypeSpec>,
}

/// What a submission attempt amounted to. Every variant is a normal,
/// recoverable outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted(ScoreId),
    RateLimited(Duration),
    Rejected(ValidationResult),
}

/// The most recent submission outcome, kept around for display until it is
/// superseded or its display window lapses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub message: String,
    pub severity: Severity,
    pub expires_at_ms: u64,
}

/**
* Ties the limiter, the validator and the board together behind the
* operations the presentation layer drives. Single-actor: one submitter,
* one selection, one limiter. All mutation happens synchronously inside
* one call; a rejected submission never partially mutates state.
*/
pub struct ScoreTracker {
    board: Board,
    limiter: RateLimiter,
    selected: Option<GameTypeId>,
    status: Option<StatusMessage>,
}

impl ScoreTracker {
    pub fn new(config: TrackerConfig) -> Self {
        let mut board = Board::new();
        for game_type in &config.game_types {
            board.add_game_type(&game_type.name, &game_type.description);
        }

        ScoreTracker {
            board,
            limiter: RateLimiter::new(config.rate_limit),
            selected: None,
            status: None,
        }
    }

    /// Admission first, validation second, mutation last. The limiter only
    /// advances once the score is actually recorded.
    pub fn submit_score(
        &mut self,
        name: &str,
        raw_score: &str,
        game_type: Option<&str>,
        now_ms: u64,
    ) -> SubmitOutcome {
        if !self.limiter.is_admitted(now_ms) {
            self.limiter.tick(now_ms);
            let remaining = self.limiter.snapshot().time_until_reset;
            self.set_status(
                format!(
                    "Too many submissions, try again in {}s",
                    remaining.as_secs().max(1)
                ),
                Severity::Error,
                now_ms,
            );
            debug!("submission throttled, {remaining:?} until reset");
            return SubmitOutcome::RateLimited(remaining);
        }

        let result = validate::validate(name, raw_score, game_type, self.board.game_types());
        self.set_status(result.message.clone(), result.severity, now_ms);
        if !result.valid {
            debug!("submission rejected: {}", result.message);
            return SubmitOutcome::Rejected(result);
        }

        // validate() only accepts submissions whose score parses in range
        // and whose game type exists, so these lookups cannot miss
        let value = validate::parse_score(raw_score).unwrap_or_default() as u32;
        let game_type = game_type.unwrap_or_default().to_owned();

        let id = self
            .board
            .add_score(name.trim().to_owned(), value, game_type, now_ms);
        self.limiter.record_submission(now_ms);
        debug!("score {id} accepted at {now_ms}ms");
        SubmitOutcome::Accepted(id)
    }

    pub fn add_game_type(&mut self, name: &str, description: &str) -> Option<GameType> {
        let game_type = self.board.add_game_type(name, description);
        if let Some(ref game_type) = game_type {
            debug!("game type {} registered", game_type.id);
        }
        game_type
    }

    /// Cascading removal. Clears the current selection when it pointed at
    /// the removed type.
    pub fn remove_game_type(&mut self, id: &str) -> Removal {
        let removal = self.board.remove_game_type(id);
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
        if removal.removed {
            debug!(
                "game type {id} removed, {} scores cascaded",
                removal.scores_removed
            );
        }
        removal
    }

    /// Selects the submission target. Unknown ids leave the selection as is.
    pub fn select_game_type(&mut self, id: &str) -> bool {
        match self.board.find_game_type(id) {
            Some(game_type) => {
                self.selected = Some(game_type.id.clone());
                true
            }
            None => false,
        }
    }

    /// Periodic 1s refresh: updates the rate-limit countdown and expires
    /// the status message once its display window lapses.
    pub fn tick(&mut self, now_ms: u64) {
        self.limiter.tick(now_ms);
        if let Some(ref status) = self.status
            && now_ms >= status.expires_at_ms
        {
            self.status = None;
        }
    }

    pub fn game_types(&self) -> &[GameType] {
        self.board.game_types()
    }

    pub fn find_game_type(&self, id: &str) -> Option<&GameType> {
        self.board.find_game_type(id)
    }

    pub fn top_scores(&self, game_type: &str) -> Vec<Score> {
        self.board.top_scores(game_type, TOP_SCORES_LIMIT)
    }

    pub fn count_scores(&self, game_type: &str) -> usize {
        self.board.count_scores(game_type)
    }

    pub fn rate_limit(&self) -> RateLimitSnapshot {
        self.limiter.snapshot()
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    fn set_status(&mut self, message: String, severity: Severity, now_ms: u64) {
        self.status = Some(StatusMessage {
            message,
            severity,
            expires_at_ms: now_ms + STATUS_DISPLAY.as_millis() as u64,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker_with_arcade() -> ScoreTracker {
        ScoreTracker::new(TrackerConfig {
            rate_limit: RateLimitConfig::default(),
            game_types: vec![GameTypeSpec::new("Arcade", "Classic cabinet")],
        })
    }

    fn arcade_id(tracker: &ScoreTracker) -> String {
        tracker.game_types()[0].id.clone()
    }

    #[test]
    fn initial_game_types_come_from_the_config() {
        let tracker = tracker_with_arcade();
        assert_eq!(tracker.game_types().len(), 1);
        assert_eq!(tracker.game_types()[0].name, "Arcade");
        assert_eq!(tracker.selected(), None);
    }

    #[test]
    fn accepted_scores_rank_by_value() {
        let mut tracker = tracker_with_arcade();
        let arcade = arcade_id(&tracker);

        let outcome = tracker.submit_score("Ann", "150", Some(&arcade), 0);
        assert!(matches!(outcome, SubmitOutcome::Accepted(_)));
        assert_eq!(tracker.top_scores(&arcade)[0].player, "Ann");

        let outcome = tracker.submit_score("Bo", "300", Some(&arcade), 1_000);
        assert!(matches!(outcome, SubmitOutcome::Accepted(_)));

        let top = tracker.top_scores(&arcade);
        let players: Vec<_> = top.iter().map(|s| s.player.as_str()).collect();
        assert_eq!(players, ["Bo", "Ann"]);
    }

    #[test]
    fn rejected_submissions_leave_the_board_unchanged() {
        let mut tracker = tracker_with_arcade();
        let arcade = arcade_id(&tracker);
        tracker.submit_score("Ann", "150", Some(&arcade), 0);
        tracker.submit_score("Bo", "300", Some(&arcade), 1_000);

        let outcome = tracker.submit_score("Xe", "abc", Some(&arcade), 2_000);
        let SubmitOutcome::Rejected(result) = outcome else {
            panic!("expected a validation rejection, got {outcome:?}");
        };
        assert!(result.message.contains("whole number"));

        let top = tracker.top_scores(&arcade);
        let players: Vec<_> = top.iter().map(|s| s.player.as_str()).collect();
        assert_eq!(players, ["Bo", "Ann"]);
    }

    #[test]
    fn short_names_are_rejected_before_anything_else() {
        let mut tracker = tracker_with_arcade();
        let arcade = arcade_id(&tracker);

        let outcome = tracker.submit_score("X", "abc", Some(&arcade), 0);
        assert!(matches!(outcome, SubmitOutcome::Rejected(_)));
        assert_eq!(tracker.count_scores(&arcade), 0);
        assert_eq!(tracker.rate_limit().submission_count, 0);
    }

    #[test]
    fn second_submission_within_the_window_is_throttled() {
        let mut tracker = ScoreTracker::new(TrackerConfig {
            rate_limit: RateLimitConfig::new(1, Duration::from_millis(60_000)),
            game_types: vec![GameTypeSpec::new("Arcade", "")],
        });
        let arcade = arcade_id(&tracker);

        let first = tracker.submit_score("Ann", "150", Some(&arcade), 0);
        assert!(matches!(first, SubmitOutcome::Accepted(_)));

        let second = tracker.submit_score("Bo", "300", Some(&arcade), 10);
        assert_eq!(
            second,
            SubmitOutcome::RateLimited(Duration::from_millis(59_990))
        );
        assert_eq!(tracker.count_scores(&arcade), 1);
    }

    #[test]
    fn admission_is_checked_before_validation() {
        let mut tracker = ScoreTracker::new(TrackerConfig {
            rate_limit: RateLimitConfig::new(1, Duration::from_millis(60_000)),
            game_types: vec![GameTypeSpec::new("Arcade", "")],
        });
        let arcade = arcade_id(&tracker);
        tracker.submit_score("Ann", "150", Some(&arcade), 0);

        // malformed input, but the limiter answers first
        let outcome = tracker.submit_score("", "abc", Some(&arcade), 10);
        assert!(matches!(outcome, SubmitOutcome::RateLimited(_)));
    }

    #[test]
    fn removing_the_selected_game_type_clears_the_selection() {
        let mut tracker = ScoreTracker::new(TrackerConfig {
            rate_limit: RateLimitConfig::default(),
            game_types: vec![
                GameTypeSpec::new("Arcade", ""),
                GameTypeSpec::new("Puzzle", ""),
            ],
        });
        let arcade = arcade_id(&tracker);

        assert!(tracker.select_game_type(&arcade));
        tracker.remove_game_type(&arcade);
        assert_eq!(tracker.selected(), None);

        // removing an unselected type keeps the selection
        let puzzle = tracker.game_types()[0].id.clone();
        tracker.select_game_type(&puzzle);
        tracker.remove_game_type("game-404");
        assert_eq!(tracker.selected(), Some(puzzle.as_str()));
    }

    #[test]
    fn selecting_an_unknown_game_type_is_refused() {
        let mut tracker = tracker_with_arcade();
        assert!(!tracker.select_game_type("game-404"));
        assert_eq!(tracker.selected(), None);
    }

    #[test]
    fn status_expires_after_the_display_window() {
        let mut tracker = tracker_with_arcade();
        tracker.submit_score("Ann", "abc", None, 0);
        assert!(tracker.status().is_some());

        tracker.tick(2_999);
        assert!(tracker.status().is_some());

        tracker.tick(3_000);
        assert!(tracker.status().is_none());
    }

    #[test]
    fn newer_outcomes_supersede_the_status() {
        let mut tracker = tracker_with_arcade();
        let arcade = arcade_id(&tracker);

        tracker.submit_score("Ann", "abc", Some(&arcade), 0);
        let rejected = tracker.status().unwrap().message.clone();

        tracker.submit_score("Ann", "150", Some(&arcade), 1_000);
        let accepted = tracker.status().unwrap().message.clone();
        assert_ne!(rejected, accepted);
        assert_eq!(tracker.status().unwrap().severity, Severity::Info);
    }
}
