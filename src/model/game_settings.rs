use log::warn;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnError};
use std::time::Duration;

use super::GameType;
use crate::game::GameError;

pub const MIN_DICE: u8 = 1;
pub const MAX_DICE: u8 = 6;

pub fn is_valid_dice_count(count: u8) -> bool {
    (MIN_DICE..=MAX_DICE).contains(&count)
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AnimationSpeed {
    Slow,
    #[default]
    Normal,
    Fast,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DiceSettings {
    pub count: u8,
    pub animation_speed: AnimationSpeed,
    pub sound_enabled: bool,
}

impl Default for DiceSettings {
    fn default() -> Self {
        DiceSettings {
            count: 2,
            animation_speed: AnimationSpeed::Normal,
            sound_enabled: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CoinSettings {
    pub animation_speed: AnimationSpeed,
    pub show_statistics: bool,
    pub sound_enabled: bool,
}

impl Default for CoinSettings {
    fn default() -> Self {
        CoinSettings {
            animation_speed: AnimationSpeed::Normal,
            show_statistics: true,
            sound_enabled: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WheelSettings {
    #[serde(rename = "spinDuration")]
    pub spin_duration_ms: u64,
    pub animation_speed: AnimationSpeed,
    pub show_weight: bool,
    pub sound_enabled: bool,
}

impl Default for WheelSettings {
    fn default() -> Self {
        WheelSettings {
            spin_duration_ms: 4000,
            animation_speed: AnimationSpeed::Normal,
            show_weight: true,
            sound_enabled: true,
        }
    }
}

impl WheelSettings {
    pub fn spin_duration(&self) -> Duration {
        Duration::from_millis(self.spin_duration_ms)
    }
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub dice: DiceSettings,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub coin: CoinSettings,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub wheel: WheelSettings,
}

/// A partial settings update. Fields that don't exist for the target game are ignored.
#[derive(Debug, Clone, Default)]
pub struct SettingsChange {
    pub count: Option<u8>,
    pub animation_speed: Option<AnimationSpeed>,
    pub sound_enabled: Option<bool>,
    pub show_statistics: Option<bool>,
    pub spin_duration_ms: Option<u64>,
    pub show_weight: Option<bool>,
}

impl GameSettings {
    pub fn apply(&mut self, game: GameType, change: &SettingsChange) -> Result<(), GameError> {
        match game {
            GameType::Dice => {
                if let Some(count) = change.count {
                    if !is_valid_dice_count(count) {
                        return Err(GameError::InvalidDiceCount(count));
                    }
                    self.dice.count = count;
                }
                if let Some(speed) = change.animation_speed {
                    self.dice.animation_speed = speed;
                }
                if let Some(enabled) = change.sound_enabled {
                    self.dice.sound_enabled = enabled;
                }
            }
            GameType::Coin => {
                if let Some(speed) = change.animation_speed {
                    self.coin.animation_speed = speed;
                }
                if let Some(show) = change.show_statistics {
                    self.coin.show_statistics = show;
                }
                if let Some(enabled) = change.sound_enabled {
                    self.coin.sound_enabled = enabled;
                }
            }
            GameType::Wheel => {
                if let Some(duration) = change.spin_duration_ms {
                    self.wheel.spin_duration_ms = duration;
                }
                if let Some(speed) = change.animation_speed {
                    self.wheel.animation_speed = speed;
                }
                if let Some(show) = change.show_weight {
                    self.wheel.show_weight = show;
                }
                if let Some(enabled) = change.sound_enabled {
                    self.wheel.sound_enabled = enabled;
                }
            }
        }
        Ok(())
    }

    pub fn reconcile(&mut self) {
        if !is_valid_dice_count(self.dice.count) {
            warn!(target: "settings", "Stored dice count {} out of range, using default", self.dice.count);
            self.dice.count = DiceSettings::default().count;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_inner_fields_take_defaults() {
        let settings: GameSettings =
            serde_json::from_str(r#"{"dice":{"count":4},"wheel":{"spinDuration":2500}}"#).unwrap();

        assert_eq!(settings.dice.count, 4);
        assert!(settings.dice.sound_enabled);
        assert_eq!(settings.coin, CoinSettings::default());
        assert_eq!(settings.wheel.spin_duration(), Duration::from_millis(2500));
        assert!(settings.wheel.show_weight);
    }

    #[test]
    fn test_malformed_game_settings_fall_back() {
        let settings: GameSettings =
            serde_json::from_str(r#"{"dice":{"count":"many"},"coin":{"showStatistics":false}}"#)
                .unwrap();

        assert_eq!(settings.dice, DiceSettings::default());
        assert!(!settings.coin.show_statistics);
    }

    #[test]
    fn test_apply_ignores_fields_of_other_games() {
        let mut settings = GameSettings::default();
        let change = SettingsChange {
            show_weight: Some(false),
            animation_speed: Some(AnimationSpeed::Fast),
            ..Default::default()
        };
        settings.apply(GameType::Coin, &change).unwrap();

        assert_eq!(settings.coin.animation_speed, AnimationSpeed::Fast);
        assert!(settings.wheel.show_weight);
        assert_eq!(settings.wheel.animation_speed, AnimationSpeed::Normal);
    }

    #[test]
    fn test_invalid_dice_count_rejects_whole_change() {
        let mut settings = GameSettings::default();
        let change = SettingsChange {
            count: Some(7),
            sound_enabled: Some(false),
            ..Default::default()
        };

        assert!(matches!(
            settings.apply(GameType::Dice, &change),
            Err(GameError::InvalidDiceCount(7))
        ));
        assert_eq!(settings.dice, DiceSettings::default());
    }

    #[test]
    fn test_reconcile_out_of_range_dice_count() {
        let mut settings: GameSettings = serde_json::from_str(r#"{"dice":{"count":0}}"#).unwrap();
        settings.reconcile();
        assert_eq!(settings.dice.count, 2);
    }
}
