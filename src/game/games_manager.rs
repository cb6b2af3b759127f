use log::debug;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnError};

use super::GameError;
use crate::model::{GameHistory, GameResult, GameSettings, GameStats, GameType, SettingsChange};
use crate::storage::PersistentStore;

pub const GAMES_STORAGE_KEY: &str = "nyg-games";

/// The persisted games document. Each section falls back to its default on its own.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GamesDocument {
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub game_history: GameHistory,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub game_settings: GameSettings,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub game_stats: GameStats,
}

impl GamesDocument {
    pub fn reconcile(&mut self) {
        self.game_history.enforce_limit();
        self.game_settings.reconcile();
        self.game_stats.reconcile();
    }
}

/// History, statistics and per-game settings for every game, saved after each change.
#[derive(Debug)]
pub struct GamesManager {
    store: PersistentStore,
    current_game: Option<GameType>,
    document: GamesDocument,
}

impl GamesManager {
    pub fn load(store: PersistentStore) -> Self {
        let mut document = store.load(GAMES_STORAGE_KEY, GamesDocument::default());
        document.reconcile();
        Self {
            store,
            current_game: None,
            document,
        }
    }

    pub fn document(&self) -> &GamesDocument {
        &self.document
    }

    pub fn history(&self) -> &GameHistory {
        &self.document.game_history
    }

    pub fn stats(&self) -> &GameStats {
        &self.document.game_stats
    }

    pub fn settings(&self) -> &GameSettings {
        &self.document.game_settings
    }

    pub fn current_game(&self) -> Option<GameType> {
        self.current_game
    }

    /// The active game is session state and is not written to storage.
    pub fn set_current_game(&mut self, game: GameType) {
        self.current_game = Some(game);
    }

    pub fn record_result(&mut self, result: GameResult) {
        debug!(target: "stats", "Recording {} result: {:?}", result.game_type(), result);
        self.document.game_history.record(&result);
        self.document.game_stats.record(&result);
        self.persist();
    }

    /// Records `result` under a game identifier. Unknown identifiers and results from a
    /// different game are ignored; returns whether anything was recorded.
    pub fn record_named(&mut self, game: &str, result: GameResult) -> bool {
        match game.parse::<GameType>() {
            Ok(game_type) if game_type == result.game_type() => {
                self.record_result(result);
                true
            }
            Ok(game_type) => {
                debug!(
                    target: "stats",
                    "Ignoring {} result recorded as {}",
                    result.game_type(),
                    game_type
                );
                false
            }
            Err(e) => {
                debug!(target: "stats", "Ignoring result: {}", e);
                false
            }
        }
    }

    pub fn clear_history(&mut self, game: GameType) {
        debug!(target: "stats", "Clearing {} history", game);
        self.document.game_history.clear(game);
        self.document.game_stats.clear(game);
        self.persist();
    }

    pub fn clear_history_named(&mut self, game: &str) -> bool {
        match game.parse::<GameType>() {
            Ok(game_type) => {
                self.clear_history(game_type);
                true
            }
            Err(e) => {
                debug!(target: "stats", "Ignoring clear: {}", e);
                false
            }
        }
    }

    pub fn update_game_settings(
        &mut self,
        game: GameType,
        change: &SettingsChange,
    ) -> Result<(), GameError> {
        self.document.game_settings.apply(game, change)?;
        self.persist();
        Ok(())
    }

    pub fn reset(&mut self) {
        self.current_game = None;
        self.document = GamesDocument::default();
        self.persist();
    }

    fn persist(&self) -> bool {
        self.store.save(GAMES_STORAGE_KEY, &self.document)
    }
}
