//! Seat assignment: who produces the move for each mark.

use crate::config::{GameConfig, PlayMode};
use crate::games::mnk::{SearchEngine, Symbol};

/// Source of moves for one mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    /// Moves typed at the prompt.
    Human,
    /// Moves chosen by the search engine.
    Bot(SearchEngine),
}

impl Seat {
    /// Returns true for an engine-driven seat.
    pub fn is_bot(&self) -> bool {
        matches!(self, Seat::Bot(_))
    }

    /// Short label used in announcements.
    pub fn label(&self) -> &'static str {
        match self {
            Seat::Human => "Human",
            Seat::Bot(_) => "Bot",
        }
    }
}

/// The seats for X and O.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seats {
    x: Seat,
    o: Seat,
}

impl Seats {
    /// Creates a seat table.
    pub fn new(x: Seat, o: Seat) -> Self {
        Self { x, o }
    }

    /// Builds the seats described by a configuration.
    pub fn from_config(config: &GameConfig) -> Self {
        let bot = Seat::Bot(SearchEngine::new().with_pruning(*config.pruning()));
        match config.mode() {
            PlayMode::HumanVsHuman => Self::new(Seat::Human, Seat::Human),
            PlayMode::BotVsBot => Self::new(bot, bot),
            PlayMode::HumanVsBot => match config.human_symbol() {
                Symbol::X => Self::new(Seat::Human, bot),
                Symbol::O => Self::new(bot, Seat::Human),
            },
        }
    }

    /// The seat playing `symbol`.
    pub fn get(&self, symbol: Symbol) -> Seat {
        match symbol {
            Symbol::X => self.x,
            Symbol::O => self.o,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_symbol_picks_seat() {
        let config = GameConfig::default().with_human_symbol(Symbol::O);
        let seats = Seats::from_config(&config);
        assert!(seats.get(Symbol::X).is_bot());
        assert_eq!(seats.get(Symbol::O), Seat::Human);
    }

    #[test]
    fn test_bot_vs_bot_carries_pruning_flag() {
        let config = GameConfig::default()
            .with_mode(PlayMode::BotVsBot)
            .with_pruning(false);
        let seats = Seats::from_config(&config);
        assert_eq!(seats.get(Symbol::X), Seat::Bot(SearchEngine::unpruned()));
        assert_eq!(seats.get(Symbol::O), Seat::Bot(SearchEngine::unpruned()));
    }
}
