mod game_history;
mod game_result;
mod game_settings;
mod game_stats;
mod game_type;
mod identity;
mod wheel_segment;

pub use game_history::{GameHistory, HISTORY_LIMIT};
pub use game_result::{now_millis, CoinFlip, CoinSide, DiceRoll, GameResult, WheelSpin};
pub use game_settings::{
    is_valid_dice_count, AnimationSpeed, CoinSettings, DiceSettings, GameSettings,
    SettingsChange, WheelSettings, MAX_DICE, MIN_DICE,
};
pub use game_stats::{probability, CoinStats, DiceStats, GameStats, WheelStats, DICE_FACES};
pub use game_type::GameType;
pub use identity::{Identity, DEFAULT_NICKNAME};
pub use wheel_segment::{Weighted, WheelSegment};
