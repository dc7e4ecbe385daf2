//! `space-conquest`: a synchronous hot-seat shell around the `engine`
//! crate (spec.md §6). Builds the CLI surface with `clap`'s builder API,
//! the way the teacher's own standardized app builder does
//! (`common/src/cli.rs`), rather than the derive-macro style used
//! elsewhere in the pack -- this keeps the flag-to-field wiring explicit,
//! matching that file's `Command`/`Arg` shape.

mod orders;
mod session;

use std::fs;
use std::process::ExitCode;

use clap::{value_parser, Arg, ArgAction, Command};
use engine::game::snapshot::Snapshot;
use engine::Game;
use log::{debug, error};

use session::Mode;

const APP_NAME: &str = "space-conquest";
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const DEFAULT_SEED: u64 = 0;

fn app() -> Command {
    Command::new(APP_NAME)
        .version(APP_VERSION)
        .about("A deterministic, turn-based two-player space strategy engine")
        .arg(
            Arg::new("mode")
                .long("mode")
                .help("hvh (hot-seat), hvl (human vs LLM), or lvl (LLM vs LLM)")
                .default_value("hvh")
                .value_parser(|s: &str| Mode::parse(s)),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .help("RNG seed for a new game (ignored with --load)")
                .default_value("0")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("load")
                .long("load")
                .help("Load a snapshot JSON file instead of starting a new game"),
        )
        .arg(
            Arg::new("save")
                .long("save")
                .help("Write the final snapshot JSON to this file on game over"),
        )
        .arg(
            Arg::new("tui")
                .long("tui")
                .action(ArgAction::SetTrue)
                .help("Print a plain-text board dump each turn instead of a one-line summary"),
        )
        .arg(
            Arg::new("provider")
                .long("provider")
                .help("LLM provider name (hvl/lvl modes; decision loop itself is out of scope)"),
        )
        .arg(
            Arg::new("model")
                .long("model")
                .help("LLM model name (hvl/lvl modes; decision loop itself is out of scope)"),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .action(ArgAction::SetTrue)
                .help("Enable debug-level logging"),
        )
}

fn load_game(path: &str) -> Result<Game, String> {
    let contents = fs::read_to_string(path).map_err(|e| format!("reading '{path}': {e}"))?;
    let snapshot: Snapshot =
        serde_json::from_str(&contents).map_err(|e| format!("parsing '{path}': {e}"))?;
    Game::load(snapshot).map_err(|e| format!("loading snapshot from '{path}': {e}"))
}

fn save_game(game: &Game, path: &str) -> Result<(), String> {
    let snapshot = game.save();
    let contents =
        serde_json::to_string_pretty(&snapshot).map_err(|e| format!("encoding snapshot: {e}"))?;
    fs::write(path, contents).map_err(|e| format!("writing '{path}': {e}"))
}

fn main() -> ExitCode {
    let matches = app().get_matches();

    if matches.get_flag("debug") {
        std::env::set_var("RUST_LOG", "debug");
    }
    pretty_env_logger::init_timed();

    let mode = matches.get_one::<Mode>("mode").copied().unwrap();
    debug!("mode: {mode:?}");

    if matches!(mode, Mode::HumanVsLlm | Mode::LlmVsLlm) && std::env::var("ANTHROPIC_API_KEY").is_err() {
        error!("{mode:?} requires ANTHROPIC_API_KEY to be set");
        return ExitCode::FAILURE;
    }

    let game = if let Some(path) = matches.get_one::<String>("load") {
        match load_game(path) {
            Ok(game) => game,
            Err(message) => {
                error!("{message}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        let seed = matches.get_one::<u64>("seed").copied().unwrap_or(DEFAULT_SEED);
        debug!("starting a new game with seed {seed}");
        Game::new(seed)
    };

    let show_board = matches.get_flag("tui");
    let final_game = match session::run(game, mode, show_board) {
        Ok(game) => game,
        Err(io_err) => {
            error!("I/O error during session: {io_err}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(path) = matches.get_one::<String>("save") {
        if let Err(message) = save_game(&final_game, path) {
            error!("{message}");
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
