//! Terminal play: seats, prompt parsing and the turn loop.

mod input;
mod orchestrator;
mod seat;

pub use input::{InputError, parse_coordinates};
pub use orchestrator::Orchestrator;
pub use seat::{Seat, Seats};
