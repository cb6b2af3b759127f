use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::game::GameError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum GameType {
    Dice,
    Coin,
    Wheel,
}

impl GameType {
    pub fn all() -> Vec<GameType> {
        vec![GameType::Dice, GameType::Coin, GameType::Wheel]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameType::Dice => "dice",
            GameType::Coin => "coin",
            GameType::Wheel => "wheel",
        }
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameType {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dice" => Ok(GameType::Dice),
            "coin" => Ok(GameType::Coin),
            "wheel" => Ok(GameType::Wheel),
            _ => Err(GameError::UnknownGame(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_games() {
        for game in GameType::all() {
            assert_eq!(game.as_str().parse::<GameType>().ok(), Some(game));
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("Dice".parse::<GameType>().is_err());
        assert!("roulette".parse::<GameType>().is_err());
    }
}
