//! Alternating turn invariant: markers alternate X, O, X, O, ...

use super::super::{GameInProgress, Marker};
use super::Invariant;

/// Invariant: markers alternate turns, X first, and the marker to move
/// follows the history.
pub struct AlternatingTurnInvariant;

impl Invariant<GameInProgress> for AlternatingTurnInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let history = game.history();

        if history.first().is_some_and(|first| first.marker != Marker::X) {
            return false;
        }

        if history.windows(2).any(|pair| pair[0].marker == pair[1].marker) {
            return false;
        }

        let expected_next = if history.len() % 2 == 0 {
            Marker::X
        } else {
            Marker::O
        };
        game.to_move() == expected_next
    }

    fn description() -> &'static str {
        "Markers alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{GameResult, GameSetup, Move};

    #[test]
    fn test_empty_game_holds() {
        let game = GameSetup::new(3).unwrap().start();
        assert!(AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_alternating_moves_hold() {
        let moves = [
            Move::new(Marker::X, 0),
            Move::new(Marker::O, 1),
            Move::new(Marker::X, 5),
        ];
        let Ok(GameResult::InProgress(game)) = GameInProgress::replay(4, &moves) else {
            panic!("Expected in-progress game");
        };
        assert_eq!(game.to_move(), Marker::O);
        assert!(AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_repeated_marker_violates() {
        let game = GameSetup::new(3).unwrap().start();
        let Ok(GameResult::InProgress(mut game)) = game.make_move(Move::new(Marker::X, 0)) else {
            panic!("Expected in-progress game");
        };

        game.history.push(Move::new(Marker::X, 1));
        assert!(!AlternatingTurnInvariant::holds(&game));
    }
}
