use std::process::ExitCode;
use std::rc::Rc;

use festival_games::config::Config;
use festival_games::game::Session;
use festival_games::model::GameType;
use festival_games::storage::{FileStorage, PersistentStore};
use log::{debug, error};
use serde_json::json;

fn init_logging() {
    env_logger::init();
}

fn usage() {
    eprintln!("usage: festival-games <dice|coin|wheel>");
}

fn main() -> ExitCode {
    init_logging();

    let config = Config::from_env();
    if config.debug {
        debug!("Config: {:?}", config);
    }

    let Some(name) = std::env::args().nth(1) else {
        usage();
        return ExitCode::from(2);
    };
    let game = match name.parse::<GameType>() {
        Ok(game) => game,
        Err(e) => {
            eprintln!("{}", e);
            usage();
            return ExitCode::from(2);
        }
    };

    let store = PersistentStore::new(Rc::new(FileStorage::new(&config.data_dir)));
    let mut session = Session::start(store, &config);

    let result = match session.play(game) {
        Ok(result) => result,
        Err(e) => {
            error!("Could not play {}: {}", game, e);
            return ExitCode::FAILURE;
        }
    };

    let stats = session.games().stats();
    let stats = match game {
        GameType::Dice => serde_json::to_value(&stats.dice),
        GameType::Coin => serde_json::to_value(&stats.coin),
        GameType::Wheel => serde_json::to_value(&stats.wheel),
    };
    let report = stats.and_then(|stats| {
        serde_json::to_string_pretty(&json!({
            "game": game,
            "result": result,
            "stats": stats,
        }))
    });

    match report {
        Ok(report) => {
            println!("{}", report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Could not format report: {}", e);
            ExitCode::FAILURE
        }
    }
}
