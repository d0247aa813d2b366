//! History consistency invariant: one marked cell per move.

use super::super::GameInProgress;
use super::Invariant;

/// Invariant: history length equals the number of marked cells.
pub struct HistoryConsistentInvariant;

impl Invariant<GameInProgress> for HistoryConsistentInvariant {
    fn holds(game: &GameInProgress) -> bool {
        game.history().len() == game.board().marked_count()
    }

    fn description() -> &'static str {
        "History length matches number of marked cells"
    }
}
