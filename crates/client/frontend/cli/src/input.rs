//! Input processing for the console client.
//!
//! Owns the line-to-command mapping so the event loop stays agnostic about
//! the concrete command syntax.
use game_core::{GameCandidate, GameConfig, GameResult, WinningLine, WinningParty};
use thiserror::Error;

pub const HELP: &str =
    "commands: list | retry | record <party> <line|-> <m1,m2,...> | help | quit";

/// High-level outcome of processing one input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputAction {
    /// Exit the frontend.
    Quit,
    /// Redraw the current history.
    List,
    /// Fetch the history from storage again.
    Retry,
    /// Append a finished game to the history.
    Record(GameCandidate),
    Help,
    /// Blank line.
    None,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("unknown command `{0}`")]
    UnknownCommand(String),

    #[error("usage: record <party> <line|-> <m1,m2,...>")]
    RecordUsage,

    #[error("unknown party `{0}` (expected playerA, playerB, draw or none)")]
    UnknownParty(String),

    #[error("unknown line `{0}`")]
    UnknownLine(String),

    #[error("`{0}` is not a board cell (0-80)")]
    InvalidMove(String),
}

/// Converts a raw input line into a command.
pub fn parse_line(line: &str) -> Result<InputAction, InputError> {
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return Ok(InputAction::None);
    };

    match command.to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" => Ok(InputAction::Quit),
        "l" | "ls" | "list" => Ok(InputAction::List),
        "r" | "retry" | "refresh" => Ok(InputAction::Retry),
        "h" | "help" | "?" => Ok(InputAction::Help),
        "record" => {
            let args: Vec<&str> = words.collect();
            parse_record(&args).map(InputAction::Record)
        }
        other => Err(InputError::UnknownCommand(other.to_owned())),
    }
}

fn parse_record(args: &[&str]) -> Result<GameCandidate, InputError> {
    let (party, line, moves) = match args {
        [party, line] => (*party, *line, None),
        [party, line, moves] => (*party, *line, Some(*moves)),
        _ => return Err(InputError::RecordUsage),
    };

    let party: WinningParty = party
        .parse()
        .map_err(|_| InputError::UnknownParty(party.to_owned()))?;

    let line = match line {
        "-" => None,
        name => Some(
            name.parse::<WinningLine>()
                .map_err(|_| InputError::UnknownLine(name.to_owned()))?,
        ),
    };

    let move_history = match moves {
        None | Some("-") => Vec::new(),
        Some(raw) => raw
            .split(',')
            .filter(|cell| !cell.is_empty())
            .map(parse_cell)
            .collect::<Result<_, _>>()?,
    };

    // Undecided results pass through; the history layer rejects them.
    Ok(GameCandidate::new(move_history, GameResult::new(party, line)))
}

fn parse_cell(raw: &str) -> Result<u32, InputError> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|cell| GameConfig::is_cell(*cell))
        .ok_or_else(|| InputError::InvalidMove(raw.to_owned()))
}
