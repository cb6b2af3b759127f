use std::path::PathBuf;

pub const DATA_DIR_ENV: &str = "FESTIVAL_GAMES_DATA_DIR";
const APP_DIR_NAME: &str = "festival-games";

/// Process configuration read from the environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub seed: Option<u64>,
    pub debug: bool,
    pub data_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            seed: Self::seed_from_env(),
            debug: Self::is_debug_mode(),
            data_dir: Self::data_dir_from_env(),
        }
    }

    pub fn is_debug_mode() -> bool {
        std::env::var("DEBUG").map(|v| v == "1").unwrap_or(false)
    }

    pub fn seed_from_env() -> Option<u64> {
        std::env::var("SEED").ok().and_then(|v| v.parse::<u64>().ok())
    }

    pub fn data_dir_from_env() -> PathBuf {
        if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
            if !dir.is_empty() {
                return PathBuf::from(dir);
            }
        }
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .unwrap_or_else(|| PathBuf::from(".").join(APP_DIR_NAME))
    }
}
