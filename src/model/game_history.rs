use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnError};

use super::{CoinFlip, DiceRoll, GameResult, GameType, WheelSpin};

/// Number of results retained per game, newest first.
pub const HISTORY_LIMIT: usize = 20;

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameHistory {
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub dice: Vec<DiceRoll>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub coin: Vec<CoinFlip>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub wheel: Vec<WheelSpin>,
}

fn push_newest<T>(entries: &mut Vec<T>, entry: T) {
    entries.insert(0, entry);
    entries.truncate(HISTORY_LIMIT);
}

impl GameHistory {
    pub fn record(&mut self, result: &GameResult) {
        match result {
            GameResult::Dice(roll) => push_newest(&mut self.dice, roll.clone()),
            GameResult::Coin(flip) => push_newest(&mut self.coin, flip.clone()),
            GameResult::Wheel(spin) => push_newest(&mut self.wheel, spin.clone()),
        }
    }

    pub fn clear(&mut self, game: GameType) {
        match game {
            GameType::Dice => self.dice.clear(),
            GameType::Coin => self.coin.clear(),
            GameType::Wheel => self.wheel.clear(),
        }
    }

    pub fn len(&self, game: GameType) -> usize {
        match game {
            GameType::Dice => self.dice.len(),
            GameType::Coin => self.coin.len(),
            GameType::Wheel => self.wheel.len(),
        }
    }

    pub fn is_empty(&self, game: GameType) -> bool {
        self.len(game) == 0
    }

    /// Drops entries past the retention limit, e.g. from an older saved document.
    pub fn enforce_limit(&mut self) {
        self.dice.truncate(HISTORY_LIMIT);
        self.coin.truncate(HISTORY_LIMIT);
        self.wheel.truncate(HISTORY_LIMIT);
    }
}
