use itertools::Itertools;
use serde::{Deserialize, Serialize};

pub type GameTypeId = String;
pub type ScoreId = u64;

/// Description shown for game types registered without one.
pub const DEFAULT_DESCRIPTION: &str = "No description yet";

/// How many entries a leaderboard query returns at most.
pub const TOP_SCORES_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameType {
    pub id: GameTypeId,
    pub name: String,
    pub description: String,
}

/// A single accepted submission. Append-only: scores are created once and
/// only ever removed by a game-type cascade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub id: ScoreId,
    pub player: String,
    pub value: u32,
    pub created_at_ms: u64,
    pub game_type: GameTypeId,
}

/// What a removal did. The caller uses it to clear a stale selection; the
/// board itself never touches presentation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Removal {
    pub removed: bool,
    pub scores_removed: usize,
}

/**
* Owns the game-type and score collections. A trusted sink: submissions
* reach it only after admission and validation, so it performs no checking
* of its own beyond the blank-name guard on game types.
*/
#[derive(Debug, Default)]
pub struct Board {
    game_types: Vec<GameType>,
    scores: Vec<Score>,
    next_game_type: u64,
    next_score: u64,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a game type, keeping insertion order. Blank names are a
    /// caller error and yield `None` without touching the collection.
    pub fn add_game_type(&mut self, name: &str, description: &str) -> Option<GameType> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        let description = match description.trim() {
            "" => DEFAULT_DESCRIPTION,
            trimmed => trimmed,
        };

        self.next_game_type += 1;
        let game_type = GameType {
            id: format!("game-{}", self.next_game_type),
            name: name.to_owned(),
            description: description.to_owned(),
        };
        self.game_types.push(game_type.clone());
        Some(game_type)
    }

    /// Removes a game type and every score referencing it. Idempotent:
    /// removing an absent id reports `removed: false` and changes nothing.
    pub fn remove_game_type(&mut self, id: &str) -> Removal {
        // scores go first so no orphan can ever be observed
        let before = self.scores.len();
        self.scores.retain(|score| score.game_type != id);
        let scores_removed = before - self.scores.len();

        let removed = match self.game_types.iter().position(|g| g.id == id) {
            Some(index) => {
                self.game_types.remove(index);
                true
            }
            None => false,
        };

        Removal {
            removed,
            scores_removed,
        }
    }

    /// Appends an already-validated submission and assigns the next id.
    pub fn add_score(
        &mut self,
        player: String,
        value: u32,
        game_type: GameTypeId,
        now_ms: u64,
    ) -> ScoreId {
        self.next_score += 1;
        self.scores.push(Score {
            id: self.next_score,
            player,
            value,
            created_at_ms: now_ms,
            game_type,
        });
        self.next_score
    }

    /// Ranked entries for one game type: value descending, ties keeping
    /// submission order, truncated to `limit`. Returns an owned sequence
    /// safe to render directly.
    pub fn top_scores(&self, game_type: &str, limit: usize) -> Vec<Score> {
        self.scores
            .iter()
            .filter(|score| score.game_type == game_type)
            .sorted_by(|a, b| b.value.cmp(&a.value))
            .take(limit)
            .cloned()
            .collect()
    }

    pub fn count_scores(&self, game_type: &str) -> usize {
        self.scores
            .iter()
            .filter(|score| score.game_type == game_type)
            .count()
    }

    pub fn game_types(&self) -> &[GameType] {
        &self.game_types
    }

    pub fn find_game_type(&self, id: &str) -> Option<&GameType> {
        self.game_types.iter().find(|g| g.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(names: &[&str]) -> Board {
        let mut board = Board::new();
        for name in names {
            board.add_game_type(name, "");
        }
        board
    }

    fn submit(board: &mut Board, player: &str, value: u32, game_type: &str) -> ScoreId {
        board.add_score(player.to_owned(), value, game_type.to_owned(), 0)
    }

    #[test]
    fn game_types_keep_insertion_order() {
        let board = board_with(&["Arcade", "Puzzle", "Racing"]);
        let names: Vec<_> = board.game_types().iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, ["Arcade", "Puzzle", "Racing"]);
    }

    #[test]
    fn blank_names_are_not_registered() {
        let mut board = Board::new();
        assert!(board.add_game_type("   ", "whatever").is_none());
        assert!(board.game_types().is_empty());
    }

    #[test]
    fn blank_descriptions_fall_back_to_the_placeholder() {
        let mut board = Board::new();
        let game_type = board.add_game_type("Arcade", "  ").unwrap();
        assert_eq!(game_type.description, DEFAULT_DESCRIPTION);
    }

    #[test]
    fn game_type_ids_are_unique() {
        let board = board_with(&["Arcade", "Arcade"]);
        assert_ne!(board.game_types()[0].id, board.game_types()[1].id);
    }

    #[test]
    fn score_ids_grow_with_generation_order() {
        let mut board = board_with(&["Arcade"]);
        let first = submit(&mut board, "Ann", 10, "game-1");
        let second = submit(&mut board, "Bo", 20, "game-1");
        assert!(second > first);
    }

    #[test]
    fn top_scores_sorts_descending_and_truncates() {
        let mut board = board_with(&["Arcade"]);
        for value in [50, 300, 10, 200, 150, 75, 25, 90, 60, 40, 110, 5] {
            submit(&mut board, "Ann", value, "game-1");
        }

        let top = board.top_scores("game-1", TOP_SCORES_LIMIT);
        assert_eq!(top.len(), 10);
        assert!(top.windows(2).all(|pair| pair[0].value >= pair[1].value));
        assert_eq!(top[0].value, 300);
    }

    #[test]
    fn equal_values_keep_submission_order() {
        let mut board = board_with(&["Arcade"]);
        submit(&mut board, "Ann", 300, "game-1");
        submit(&mut board, "Bo", 300, "game-1");
        submit(&mut board, "Cy", 300, "game-1");

        let top = board.top_scores("game-1", TOP_SCORES_LIMIT);
        let players: Vec<_> = top.iter().map(|s| s.player.as_str()).collect();
        assert_eq!(players, ["Ann", "Bo", "Cy"]);
    }

    #[test]
    fn top_scores_only_covers_the_requested_game_type() {
        let mut board = board_with(&["Arcade", "Puzzle"]);
        submit(&mut board, "Ann", 100, "game-1");
        submit(&mut board, "Bo", 999, "game-2");

        let top = board.top_scores("game-1", TOP_SCORES_LIMIT);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].player, "Ann");
    }

    #[test]
    fn removal_cascades_to_scores_and_is_idempotent() {
        let mut board = board_with(&["Arcade", "Puzzle"]);
        submit(&mut board, "Ann", 100, "game-1");
        submit(&mut board, "Bo", 200, "game-1");
        submit(&mut board, "Cy", 300, "game-2");

        let removal = board.remove_game_type("game-1");
        assert_eq!(
            removal,
            Removal {
                removed: true,
                scores_removed: 2
            }
        );
        assert_eq!(board.count_scores("game-1"), 0);
        assert_eq!(board.count_scores("game-2"), 1);

        let again = board.remove_game_type("game-1");
        assert_eq!(
            again,
            Removal {
                removed: false,
                scores_removed: 0
            }
        );
    }

    #[test]
    fn count_scores_tracks_one_game_type() {
        let mut board = board_with(&["Arcade", "Puzzle"]);
        submit(&mut board, "Ann", 1, "game-1");
        submit(&mut board, "Bo", 2, "game-1");
        assert_eq!(board.count_scores("game-1"), 2);
        assert_eq!(board.count_scores("game-2"), 0);
    }
}
