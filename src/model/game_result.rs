use serde::{Deserialize, Serialize};

use super::GameType;

/// Milliseconds since the Unix epoch, the timestamp format stored with every result.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// One roll event: every die face thrown together and their total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRoll {
    values: Vec<u8>,
    #[serde(default)]
    sum: u32,
    #[serde(default)]
    timestamp: i64,
}

impl DiceRoll {
    pub fn new(values: Vec<u8>) -> Self {
        let sum = values.iter().map(|&v| v as u32).sum();
        Self {
            values,
            sum,
            timestamp: now_millis(),
        }
    }

    pub fn values(&self) -> &[u8] {
        &self.values
    }

    pub fn sum(&self) -> u32 {
        self.sum
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CoinSide {
    Heads,
    Tails,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinFlip {
    result: CoinSide,
    #[serde(default)]
    timestamp: i64,
}

impl CoinFlip {
    pub fn new(result: CoinSide) -> Self {
        Self {
            result,
            timestamp: now_millis(),
        }
    }

    pub fn result(&self) -> CoinSide {
        self.result
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WheelSpin {
    result: String,
    #[serde(default)]
    timestamp: i64,
}

impl WheelSpin {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            result: label.into(),
            timestamp: now_millis(),
        }
    }

    pub fn label(&self) -> &str {
        &self.result
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum GameResult {
    Dice(DiceRoll),
    Coin(CoinFlip),
    Wheel(WheelSpin),
}

impl GameResult {
    pub fn game_type(&self) -> GameType {
        match self {
            GameResult::Dice(_) => GameType::Dice,
            GameResult::Coin(_) => GameType::Coin,
            GameResult::Wheel(_) => GameType::Wheel,
        }
    }
}

impl From<DiceRoll> for GameResult {
    fn from(roll: DiceRoll) -> Self {
        GameResult::Dice(roll)
    }
}

impl From<CoinFlip> for GameResult {
    fn from(flip: CoinFlip) -> Self {
        GameResult::Coin(flip)
    }
}

impl From<WheelSpin> for GameResult {
    fn from(spin: WheelSpin) -> Self {
        GameResult::Wheel(spin)
    }
}
