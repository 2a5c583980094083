//! REPL commands

use std::io::Write;

use anyhow::{bail, Context};

use super::Session;

/// What the prompt loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Exit,
}

/// A command the prompt understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Map,
    Mapb,
    Explore,
    Exit,
}

impl Command {
    /// Every command, in the order `help` lists them.
    pub const ALL: [Command; 5] = [
        Command::Help,
        Command::Map,
        Command::Mapb,
        Command::Explore,
        Command::Exit,
    ];

    /// Looks a command up by the word typed at the prompt.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Map => "map",
            Command::Mapb => "mapb",
            Command::Explore => "explore",
            Command::Exit => "exit",
        }
    }

    /// Name plus argument placeholders, as shown by `help`.
    pub fn usage(self) -> &'static str {
        match self {
            Command::Explore => "explore <location_name>",
            other => other.name(),
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Command::Help => "Displays a help message",
            Command::Map => "Get the next page of locations",
            Command::Mapb => "Get the previous page of locations",
            Command::Explore => "Explore a location",
            Command::Exit => "Exit the Pokedex",
        }
    }

    pub async fn run<W: Write>(
        self,
        session: &mut Session,
        args: &[String],
        out: &mut W,
    ) -> anyhow::Result<Outcome> {
        match self {
            Command::Help => help(out)?,
            Command::Map => {
                let url = session.next_locations_url.clone();
                show_locations(session, url.as_deref(), out).await?;
            }
            Command::Mapb => {
                let Some(url) = session.prev_locations_url.clone() else {
                    bail!("you're on the first page");
                };
                show_locations(session, Some(&url), out).await?;
            }
            Command::Explore => explore(session, args, out).await?,
            Command::Exit => return Ok(Outcome::Exit),
        }
        Ok(Outcome::Continue)
    }
}

fn help<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Welcome to the Pokedex!")?;
    writeln!(out, "Usage:")?;
    writeln!(out)?;
    for command in Command::ALL {
        writeln!(out, "{}: {}", command.usage(), command.description())?;
    }
    writeln!(out)
}

async fn show_locations<W: Write>(
    session: &mut Session,
    page_url: Option<&str>,
    out: &mut W,
) -> anyhow::Result<()> {
    let page = session
        .client
        .list_locations(page_url)
        .await
        .context("failed to list locations")?;

    session.next_locations_url = page.next;
    session.prev_locations_url = page.previous;

    for location in &page.results {
        writeln!(out, "{}", location.name)?;
    }
    Ok(())
}

async fn explore<W: Write>(
    session: &mut Session,
    args: &[String],
    out: &mut W,
) -> anyhow::Result<()> {
    let [name] = args else {
        bail!("you must provide exactly one location name");
    };

    let location = session
        .client
        .get_location(name)
        .await
        .with_context(|| format!("failed to explore {}", name))?;

    writeln!(out, "Exploring {}...", location.name)?;
    writeln!(out, "Found Pokemon:")?;
    for pokemon in location.pokemon_names() {
        writeln!(out, " - {}", pokemon)?;
    }
    Ok(())
}
