mod error;
pub mod games_manager;
pub mod outcome_generator;
pub mod session;
pub mod settings;

pub use error::GameError;
pub use games_manager::{GamesDocument, GamesManager, GAMES_STORAGE_KEY};
pub use outcome_generator::OutcomeGenerator;
pub use session::Session;
pub use settings::{Language, Settings, Theme, SETTINGS_STORAGE_KEY};
