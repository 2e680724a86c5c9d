//! Game rules: win and draw detection.

mod draw;
mod win;

pub use draw::{is_draw, outcome};
pub use win::{has_win, winner, winning_line};
