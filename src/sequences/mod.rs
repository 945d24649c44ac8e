//! Secuencias concretas.
//!
//! - Primitivas: [`CursorMove`], [`ButtonTap`]
//! - Combinadores: [`FirstSuccessfulSequence`]

mod button_tap;
mod cursor_move;
mod first_successful;

pub use button_tap::{ButtonTap, TapState};
pub use cursor_move::CursorMove;
pub use first_successful::FirstSuccessfulSequence;
