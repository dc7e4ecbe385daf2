//! The synchronous hot-seat session loop (spec.md §6).
//!
//! `SessionHint` is UI/orchestration state, not game state -- spec.md §5
//! draws this line explicitly, so it lives here rather than on
//! `engine::Game`. Mirrors the way the teacher's `ui::mode::Mode`
//! (`src/ui/mode.rs`) is a front-end-owned enum driving a loop around the
//! engine rather than something the engine itself tracks.

use std::io::{self, BufRead, Write};

use log::debug;

use engine::game::order::Order;
use engine::game::player::PlayerId;
use engine::Game;

use crate::orders::parse_order_line;

/// Whether the session is waiting on a human to type orders, or (in
/// `hvl`/`lvl` modes) waiting on a stubbed-out agent decision.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SessionHint {
    AwaitingOrders(PlayerId),
    AiThinking(PlayerId),
}

impl SessionHint {
    fn for_player(mode: Mode, player: PlayerId) -> Self {
        if mode.is_human(player) {
            SessionHint::AwaitingOrders(player)
        } else {
            SessionHint::AiThinking(player)
        }
    }
}

/// Which side(s) are human versus the `PendingAgentOrders` stub, per
/// `--mode`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Mode {
    HumanVsHuman,
    HumanVsLlm,
    LlmVsLlm,
}

impl Mode {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s {
            "hvh" => Ok(Mode::HumanVsHuman),
            "hvl" => Ok(Mode::HumanVsLlm),
            "lvl" => Ok(Mode::LlmVsLlm),
            other => Err(format!(
                "'{other}' is not a valid mode (expected hvh, hvl, or lvl)"
            )),
        }
    }

    fn is_human(self, player: PlayerId) -> bool {
        match self {
            Mode::HumanVsHuman => true,
            Mode::HumanVsLlm => player == PlayerId::P1,
            Mode::LlmVsLlm => false,
        }
    }
}

/// An LLM decision loop is out of scope here (spec.md §1); a non-human
/// side simply submits an empty, always-valid order batch each turn.
fn pending_agent_orders() -> Vec<Order> {
    Vec::new()
}

/// Read one player's order batch from stdin: one `FROM,TO,SHIPS` line per
/// order, terminated by a blank line.
fn read_orders_from_stdin(player: PlayerId) -> io::Result<Vec<Order>> {
    println!("{player}, enter orders (blank line to submit):");
    let stdin = io::stdin();
    let mut orders = Vec::new();

    loop {
        print!("{player}> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        match parse_order_line(&line) {
            Ok(None) => break,
            Ok(Some(order)) => orders.push(order),
            Err(message) => println!("  {message}, try again"),
        }
    }

    Ok(orders)
}

fn orders_for(mode: Mode, game: &Game, player: PlayerId, show_board: bool) -> io::Result<Vec<Order>> {
    debug!("{:?}", SessionHint::for_player(mode, player));
    if mode.is_human(player) {
        if show_board {
            print_board(game, player);
        }
        read_orders_from_stdin(player)
    } else {
        Ok(pending_agent_orders())
    }
}

fn print_board(game: &Game, player: PlayerId) {
    let observation = engine::game::observation::observe(game, player);
    println!("--- turn {} ({player}'s view) ---", observation.turn);
    for star in &observation.stars {
        println!(
            "  {} [{},{}]{}{} owner={:?} ru={:?} ships={:?}",
            star.id,
            star.x,
            star.y,
            if star.is_home { " HOME" } else { "" },
            if star.is_explored() { "" } else { " unexplored" },
            star.owner,
            star.base_ru,
            star.stationed_ships,
        );
    }
}

/// Run the session to completion: alternate collecting both players'
/// orders and executing a turn until `Game::execute_turn` reports an
/// `Outcome`. Returns the final game so the caller can save it if asked.
pub fn run(mut game: Game, mode: Mode, show_board: bool) -> io::Result<Game> {
    loop {
        let p1_orders = orders_for(mode, &game, PlayerId::P1, show_board)?;
        let p2_orders = orders_for(mode, &game, PlayerId::P2, show_board)?;

        let report = game
            .execute_turn(p1_orders, p2_orders)
            .map_err(|err| io::Error::new(io::ErrorKind::Other, err.to_string()))?;
        for event in &report.events {
            println!("{event:?}");
        }

        if let Some(outcome) = report.outcome {
            println!("game over: {outcome:?}");
            return Ok(game);
        }
    }
}
