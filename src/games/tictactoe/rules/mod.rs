//! Game rules for grid tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). Window extraction, the
//! run-of-three test and draw detection are kept apart so each can be
//! checked on its own.

pub mod draw;
pub mod win;
pub mod window;

pub use draw::{is_draw, is_full};
pub use win::{Direction, LineCheck, RUN_LENGTH, check_vector, evaluate};
