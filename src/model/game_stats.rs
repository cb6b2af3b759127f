use log::warn;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnError};
use std::collections::BTreeMap;

use super::{CoinFlip, CoinSide, DiceRoll, GameResult, GameType, WheelSpin};

pub const DICE_FACES: usize = 6;

/// Share of `count` in `total`, zero for an empty table.
pub fn probability(count: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 / total as f64
}

/// Sum of loaded counters, `None` when it doesn't fit in a `u64`.
fn checked_total<'a>(counts: impl IntoIterator<Item = &'a u64>) -> Option<u64> {
    counts
        .into_iter()
        .try_fold(0u64, |total, &count| total.checked_add(count))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DiceStats {
    /// Roll events, not individual dice.
    pub total_rolls: u64,
    pub counts: [u64; DICE_FACES],
    pub last_sum: u32,
}

impl DiceStats {
    pub fn record(&mut self, roll: &DiceRoll) {
        self.total_rolls = self.total_rolls.saturating_add(1);
        for &face in roll.values() {
            if (1..=DICE_FACES as u8).contains(&face) {
                let count = &mut self.counts[face as usize - 1];
                *count = count.saturating_add(1);
            }
        }
        self.last_sum = roll.sum();
    }

    pub fn face_count(&self, face: u8) -> u64 {
        match face {
            1..=6 => self.counts[face as usize - 1],
            _ => 0,
        }
    }

    /// How often `face` came up among all dice thrown. Zero when the counts overflow.
    pub fn face_share(&self, face: u8) -> f64 {
        checked_total(&self.counts)
            .map(|total| probability(self.face_count(face), total))
            .unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CoinStats {
    pub total_flips: u64,
    pub heads_count: u64,
    pub tails_count: u64,
    pub current_streak: u64,
    pub max_streak: u64,
    pub last_result: Option<CoinSide>,
}

impl CoinStats {
    pub fn record(&mut self, flip: &CoinFlip) {
        let side = flip.result();
        self.total_flips = self.total_flips.saturating_add(1);
        match side {
            CoinSide::Heads => self.heads_count = self.heads_count.saturating_add(1),
            CoinSide::Tails => self.tails_count = self.tails_count.saturating_add(1),
        }
        if self.last_result == Some(side) {
            self.current_streak = self.current_streak.saturating_add(1);
        } else {
            self.current_streak = 1;
        }
        self.last_result = Some(side);
        self.max_streak = self.max_streak.max(self.current_streak);
    }

    pub fn heads_share(&self) -> f64 {
        probability(self.heads_count, self.total_flips)
    }

    pub fn is_consistent(&self) -> bool {
        self.heads_count.checked_add(self.tails_count) == Some(self.total_flips)
            && self.current_streak <= self.max_streak
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WheelStats {
    pub total_spins: u64,
    pub result_counts: BTreeMap<String, u64>,
}

impl WheelStats {
    /// Spins without a label are kept in history but not counted.
    pub fn record(&mut self, spin: &WheelSpin) {
        if spin.label().is_empty() {
            return;
        }
        self.total_spins = self.total_spins.saturating_add(1);
        let count = self
            .result_counts
            .entry(spin.label().to_string())
            .or_insert(0);
        *count = count.saturating_add(1);
    }

    pub fn count(&self, label: &str) -> u64 {
        self.result_counts.get(label).copied().unwrap_or(0)
    }

    pub fn share(&self, label: &str) -> f64 {
        checked_total(self.result_counts.values())
            .map(|total| probability(self.count(label), total))
            .unwrap_or(0.0)
    }

    pub fn is_consistent(&self) -> bool {
        checked_total(self.result_counts.values()) == Some(self.total_spins)
    }
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub dice: DiceStats,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub coin: CoinStats,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub wheel: WheelStats,
}

impl GameStats {
    pub fn record(&mut self, result: &GameResult) {
        match result {
            GameResult::Dice(roll) => self.dice.record(roll),
            GameResult::Coin(flip) => self.coin.record(flip),
            GameResult::Wheel(spin) => self.wheel.record(spin),
        }
    }

    pub fn clear(&mut self, game: GameType) {
        match game {
            GameType::Dice => self.dice = DiceStats::default(),
            GameType::Coin => self.coin = CoinStats::default(),
            GameType::Wheel => self.wheel = WheelStats::default(),
        }
    }

    /// Replaces loaded counters that break their own invariants.
    pub fn reconcile(&mut self) {
        if !self.coin.is_consistent() {
            warn!(target: "stats", "Discarding inconsistent coin stats: {:?}", self.coin);
            self.coin = CoinStats::default();
        }
        if !self.wheel.is_consistent() {
            warn!(target: "stats", "Discarding inconsistent wheel stats: {:?}", self.wheel);
            self.wheel = WheelStats::default();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flip(side: CoinSide) -> GameResult {
        CoinFlip::new(side).into()
    }

    #[test]
    fn test_coin_streaks() {
        let mut stats = GameStats::default();
        stats.record(&flip(CoinSide::Heads));
        stats.record(&flip(CoinSide::Heads));
        stats.record(&flip(CoinSide::Heads));
        stats.record(&flip(CoinSide::Tails));

        assert_eq!(stats.coin.heads_count, 3);
        assert_eq!(stats.coin.tails_count, 1);
        assert_eq!(stats.coin.current_streak, 1);
        assert_eq!(stats.coin.max_streak, 3);
        assert_eq!(stats.coin.total_flips, 4);
        assert_eq!(stats.coin.last_result, Some(CoinSide::Tails));
        assert_eq!(stats.coin.heads_share(), 0.75);
    }

    #[test]
    fn test_dice_counts_per_die_and_rolls_per_event() {
        let mut stats = GameStats::default();
        stats.record(&DiceRoll::new(vec![3, 5]).into());

        assert_eq!(stats.dice.total_rolls, 1);
        assert_eq!(stats.dice.counts[2], 1);
        assert_eq!(stats.dice.counts[4], 1);
        assert_eq!(stats.dice.last_sum, 8);

        stats.record(&DiceRoll::new(vec![5, 5, 5]).into());
        assert_eq!(stats.dice.total_rolls, 2);
        assert_eq!(stats.dice.face_count(5), 4);
        assert_eq!(stats.dice.counts.iter().sum::<u64>(), 5);
    }

    #[test]
    fn test_dice_ignores_out_of_range_faces() {
        let roll: DiceRoll = serde_json::from_str(r#"{"values":[0,7,6]}"#).unwrap();
        let mut stats = DiceStats::default();
        stats.record(&roll);

        assert_eq!(stats.total_rolls, 1);
        assert_eq!(stats.counts, [0, 0, 0, 0, 0, 1]);
        assert_eq!(stats.last_sum, 0);
    }

    #[test]
    fn test_wheel_counts_sum_to_spins() {
        let mut stats = GameStats::default();
        for label in ["Sweets", "Try Again", "Sweets"] {
            stats.record(&WheelSpin::new(label).into());
        }

        assert_eq!(stats.wheel.total_spins, 3);
        assert_eq!(stats.wheel.count("Sweets"), 2);
        assert_eq!(stats.wheel.count("Grand Prize"), 0);
        assert!(stats.wheel.is_consistent());
        assert!((stats.wheel.share("Sweets") - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_clear_only_touches_one_game() {
        let mut stats = GameStats::default();
        stats.record(&DiceRoll::new(vec![1]).into());
        stats.record(&flip(CoinSide::Heads));

        stats.clear(GameType::Dice);

        assert_eq!(stats.dice, DiceStats::default());
        assert_eq!(stats.dice.counts, [0; DICE_FACES]);
        assert_eq!(stats.coin.total_flips, 1);
    }

    #[test]
    fn test_empty_wheel_label_not_counted() {
        let mut stats = WheelStats::default();
        stats.record(&WheelSpin::new(""));

        assert_eq!(stats.total_spins, 0);
        assert!(stats.result_counts.is_empty());
        assert!(stats.is_consistent());
    }

    #[test]
    fn test_overflowing_counters_are_not_consistent() {
        let coin = CoinStats {
            heads_count: u64::MAX,
            tails_count: 1,
            ..Default::default()
        };
        assert!(!coin.is_consistent());

        let mut wheel = WheelStats::default();
        wheel.result_counts.insert("a".to_string(), u64::MAX);
        wheel.result_counts.insert("b".to_string(), 1);
        assert!(!wheel.is_consistent());
        assert_eq!(wheel.share("a"), 0.0);

        let dice = DiceStats {
            counts: [u64::MAX, 1, 0, 0, 0, 0],
            ..Default::default()
        };
        assert_eq!(dice.face_share(1), 0.0);
    }

    #[test]
    fn test_record_saturates_at_maximum() {
        let mut coin = CoinStats {
            total_flips: u64::MAX,
            heads_count: u64::MAX,
            current_streak: u64::MAX,
            max_streak: u64::MAX,
            last_result: Some(CoinSide::Heads),
            ..Default::default()
        };
        coin.record(&CoinFlip::new(CoinSide::Heads));
        assert_eq!(coin.total_flips, u64::MAX);
        assert_eq!(coin.max_streak, u64::MAX);
    }

    #[test]
    fn test_probability_of_empty_table() {
        assert_eq!(probability(0, 0), 0.0);
        assert_eq!(DiceStats::default().face_share(3), 0.0);
    }

    #[test]
    fn test_reconcile_drops_inconsistent_counters() {
        let mut stats: GameStats = serde_json::from_str(
            r#"{
                "dice": {"totalRolls": 2, "counts": [1, 1, 0, 0, 0, 0], "lastSum": 2},
                "coin": {"totalFlips": 5, "headsCount": 1, "tailsCount": 1},
                "wheel": {"totalSpins": 1, "resultCounts": {"Sweets": 1}}
            }"#,
        )
        .unwrap();
        stats.reconcile();

        assert_eq!(stats.dice.total_rolls, 2);
        assert_eq!(stats.coin, CoinStats::default());
        assert_eq!(stats.wheel.count("Sweets"), 1);
    }
}
