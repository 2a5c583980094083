//! REPL Module
//!
//! Line-oriented prompt driving the cached PokeAPI client.
//!
//! # Commands
//! - `help` - List commands
//! - `map` / `mapb` - Page forward / backward through location areas
//! - `explore <area>` - List Pokémon found in an area
//! - `exit` - Leave the prompt

mod commands;

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::api::PokeApiClient;

pub use commands::{Command, Outcome};

/// Prompt printed before each line of input.
pub const PROMPT: &str = "Pokedex > ";

/// Session state carried between commands.
///
/// Pagination cursors are the `next`/`previous` links of the last page shown;
/// `None` means there is no such page (or nothing has been listed yet).
#[derive(Debug)]
pub struct Session {
    pub client: PokeApiClient,
    pub next_locations_url: Option<String>,
    pub prev_locations_url: Option<String>,
}

impl Session {
    pub fn new(client: PokeApiClient) -> Self {
        Self {
            client,
            next_locations_url: None,
            prev_locations_url: None,
        }
    }
}

/// Lowercases `text` and splits it on whitespace.
pub fn clean_input(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Runs one line of input against the session.
///
/// Command failures are written to `out` and do not end the session.
pub async fn eval_line<W: Write>(
    session: &mut Session,
    line: &str,
    out: &mut W,
) -> std::io::Result<Outcome> {
    let words = clean_input(line);
    let Some((name, args)) = words.split_first() else {
        return Ok(Outcome::Continue);
    };

    let Some(command) = Command::parse(name) else {
        writeln!(out, "Unknown command")?;
        return Ok(Outcome::Continue);
    };

    debug!(command = %name, args = ?args, "running command");
    match command.run(session, args, out).await {
        Ok(outcome) => Ok(outcome),
        Err(err) => {
            writeln!(out, "{:#}", err)?;
            Ok(Outcome::Continue)
        }
    }
}

/// Reads lines from `input` until EOF or `exit`, printing results to `out`.
pub async fn run<R, W>(session: &mut Session, input: R, out: &mut W) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            return Ok(());
        };

        if eval_line(session, &line, out).await? == Outcome::Exit {
            return Ok(());
        }
    }
}
