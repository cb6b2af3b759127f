use log::{debug, info};

use super::settings::{Language, Settings, Theme};
use super::{GameError, GamesManager, OutcomeGenerator};
use crate::config::Config;
use crate::model::{
    CoinFlip, DiceRoll, GameResult, GameType, Identity, WheelSegment, WheelSpin,
};
use crate::storage::PersistentStore;

/// Everything one application run needs: created at startup and handed to whatever
/// drives the games.
pub struct Session {
    store: PersistentStore,
    generator: OutcomeGenerator,
    games: GamesManager,
    settings: Settings,
    identity: Identity,
    prizes: Vec<WheelSegment>,
}

impl Session {
    pub fn start(store: PersistentStore, config: &Config) -> Self {
        Self::with_seed(store, config.seed)
    }

    pub fn with_seed(store: PersistentStore, seed: Option<u64>) -> Self {
        let games = GamesManager::load(store.clone());
        let settings = Settings::load(&store);
        info!(
            "Session started: {} dice, {} coin, {} wheel results on record",
            games.stats().dice.total_rolls,
            games.stats().coin.total_flips,
            games.stats().wheel.total_spins
        );
        Self {
            store,
            generator: OutcomeGenerator::new(seed),
            games,
            settings,
            identity: Identity::default(),
            prizes: WheelSegment::default_prizes(),
        }
    }

    pub fn games(&self) -> &GamesManager {
        &self.games
    }

    pub fn games_mut(&mut self) -> &mut GamesManager {
        &mut self.games
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn prizes(&self) -> &[WheelSegment] {
        &self.prizes
    }

    pub fn set_prizes(&mut self, prizes: Vec<WheelSegment>) {
        self.prizes = prizes;
    }

    /// Rolls as many dice as the dice settings ask for.
    pub fn roll_dice(&mut self) -> Result<DiceRoll, GameError> {
        let roll = self.generator.roll_dice(self.games.settings().dice.count)?;
        self.finish_play(roll.clone().into());
        Ok(roll)
    }

    pub fn flip_coin(&mut self) -> CoinFlip {
        let flip = self.generator.flip_coin();
        self.finish_play(flip.clone().into());
        flip
    }

    pub fn spin_wheel(&mut self) -> Result<WheelSpin, GameError> {
        let spin = self
            .generator
            .spin_wheel(&self.prizes)
            .ok_or(GameError::EmptyWheel)?;
        self.finish_play(spin.clone().into());
        Ok(spin)
    }

    pub fn play(&mut self, game: GameType) -> Result<GameResult, GameError> {
        self.games.set_current_game(game);
        match game {
            GameType::Dice => self.roll_dice().map(GameResult::from),
            GameType::Coin => Ok(self.flip_coin().into()),
            GameType::Wheel => self.spin_wheel().map(GameResult::from),
        }
    }

    fn finish_play(&mut self, result: GameResult) {
        self.identity.touch();
        self.games.record_result(result);
    }

    pub fn set_nickname(&mut self, name: impl Into<String>) {
        self.identity.set_nickname(name);
    }

    pub fn toggle_sound(&mut self) {
        self.settings.toggle_sound();
        self.persist_settings();
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.settings.set_theme(theme);
        self.persist_settings();
    }

    pub fn toggle_animations(&mut self) {
        self.settings.toggle_animations();
        self.persist_settings();
    }

    pub fn set_language(&mut self, language: Language) {
        self.settings.set_language(language);
        self.persist_settings();
    }

    /// Always written, so that turning autosave off is itself remembered.
    pub fn set_auto_save(&mut self, enabled: bool) {
        self.settings.set_auto_save(enabled);
        self.settings.save(&self.store);
    }

    pub fn reset_settings(&mut self) {
        self.settings.reset();
        self.persist_settings();
    }

    fn persist_settings(&self) {
        if !self.settings.persist(&self.store) {
            debug!(target: "settings", "Settings not saved (autosave {})", self.settings.auto_save);
        }
    }
}
