use log::trace;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use super::GameError;
use crate::model::{
    is_valid_dice_count, CoinFlip, CoinSide, DiceRoll, Weighted, WheelSegment, WheelSpin,
};

fn effective_weight<T: Weighted>(option: &T) -> f64 {
    let weight = option.weight();
    if weight.is_finite() && weight > 0.0 {
        weight
    } else {
        0.0
    }
}

/// Source of every random game outcome.
pub struct OutcomeGenerator<R = StdRng> {
    rng: R,
}

impl OutcomeGenerator<StdRng> {
    /// Seeded generators replay the same outcomes; without a seed one is drawn from the thread RNG.
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| rand::rng().next_u64());
        trace!(target: "outcomes", "Outcome generator seed: {}", seed);
        Self::from_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> OutcomeGenerator<R> {
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Uniform integer in `[ceil(min), floor(max)]`.
    ///
    /// When the rounded bounds cross, the result is `ceil(min)`.
    pub fn uniform_int(&mut self, min: f64, max: f64) -> i64 {
        let lower = min.ceil();
        let upper = max.floor();
        let draw = (self.rng.random::<f64>() * (upper - lower + 1.0)).floor() + lower;
        draw.min(upper).max(lower) as i64
    }

    /// Picks an option with probability proportional to its weight.
    ///
    /// A draw landing exactly on a cumulative boundary belongs to the option that
    /// reaches it. Zero total weight always picks the first option; negative and
    /// non-finite weights count as zero.
    pub fn weighted_select<'a, T: Weighted>(&mut self, options: &'a [T]) -> Option<&'a T> {
        let first = options.first()?;
        let total: f64 = options.iter().map(effective_weight).sum();
        if total <= 0.0 {
            return Some(first);
        }

        let draw = self.rng.random::<f64>() * total;
        let mut cumulative = 0.0;
        for option in options {
            cumulative += effective_weight(option);
            if draw <= cumulative {
                return Some(option);
            }
        }
        options.last()
    }

    pub fn roll_dice(&mut self, count: u8) -> Result<DiceRoll, GameError> {
        if !is_valid_dice_count(count) {
            return Err(GameError::InvalidDiceCount(count));
        }
        let values: Vec<u8> = (0..count)
            .map(|_| self.uniform_int(1.0, 6.0) as u8)
            .collect();
        trace!(target: "outcomes", "Rolled {:?}", values);
        Ok(DiceRoll::new(values))
    }

    pub fn flip_coin(&mut self) -> CoinFlip {
        let side = if self.uniform_int(0.0, 1.0) == 0 {
            CoinSide::Heads
        } else {
            CoinSide::Tails
        };
        trace!(target: "outcomes", "Flipped {:?}", side);
        CoinFlip::new(side)
    }

    pub fn spin_wheel(&mut self, segments: &[WheelSegment]) -> Option<WheelSpin> {
        let segment = self.weighted_select(segments)?;
        trace!(target: "outcomes", "Wheel stopped on {}", segment.label);
        Some(WheelSpin::new(segment.label.clone()))
    }
}
