//! Line-oriented command interface for the podcast-player harness.
//!
//! Each input line is parsed into a [`Command`] and applied to the shared
//! [`Player`]. The harness also stands in for the media-playback
//! collaborator through the `ended` command.

use crate::error::{AppError, Result};
use crate::player::{Player, PlayerState};
use crate::types::Episode;
use log::info;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Commands accepted by the harness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play a single catalog episode by index.
    Play(usize),
    /// Load the whole catalog, starting at the given index (default 0).
    List(usize),
    /// Skip to the next episode.
    Next,
    /// Go back one episode.
    Previous,
    /// Pause or resume.
    Toggle,
    /// Flip shuffle mode.
    Shuffle,
    /// Flip loop mode.
    Loop,
    /// Force the playing flag.
    Playing(bool),
    /// The current media finished.
    Ended,
    /// Unload the episode list.
    Clear,
    /// Print the player state.
    Status,
    /// Print the catalog.
    Episodes,
    /// Print the command list.
    Help,
    /// Leave the harness.
    Quit,
}

pub const HELP: &str = "\
Commands:
  play <n>           play catalog episode n on its own
  list [n]           play the whole catalog starting at episode n
  next | prev        move through the list
  toggle             pause or resume
  shuffle | loop     flip shuffle or loop mode
  playing <on|off>   set the playing flag
  ended              signal that the current episode finished
  clear              unload the episode list
  status | episodes  show the player or the catalog
  help | quit";

fn parse_index(arg: Option<&str>, command: &str) -> Result<usize> {
    let arg = arg.ok_or_else(|| {
        AppError::InvalidInput(format!("'{}' needs an episode number", command))
    })?;
    arg.parse()
        .map_err(|_| AppError::Parse(format!("'{}' is not an episode number", arg)))
}

impl FromStr for Command {
    type Err = AppError;

    fn from_str(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace();
        let name = words
            .next()
            .ok_or_else(|| AppError::InvalidInput("empty command".to_string()))?;
        let arg = words.next();

        if words.next().is_some() {
            return Err(AppError::InvalidInput(format!(
                "too many arguments for '{}'",
                name
            )));
        }

        let command = match name.to_lowercase().as_str() {
            "play" => Command::Play(parse_index(arg, name)?),
            "list" => match arg {
                Some(_) => Command::List(parse_index(arg, name)?),
                None => Command::List(0),
            },
            "next" | "n" => Command::Next,
            "prev" | "previous" | "p" => Command::Previous,
            "toggle" | "t" => Command::Toggle,
            "shuffle" => Command::Shuffle,
            "loop" => Command::Loop,
            "playing" => match arg {
                Some("on") | Some("true") => Command::Playing(true),
                Some("off") | Some("false") => Command::Playing(false),
                _ => {
                    return Err(AppError::InvalidInput(
                        "'playing' takes 'on' or 'off'".to_string(),
                    ));
                }
            },
            "ended" => Command::Ended,
            "clear" => Command::Clear,
            "status" | "s" => Command::Status,
            "episodes" | "ls" => Command::Episodes,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => {
                return Err(AppError::InvalidInput(format!(
                    "unknown command '{}'",
                    other
                )));
            }
        };

        Ok(command)
    }
}

impl Command {
    /// Apply a state-changing command to the player.
    ///
    /// Read-only commands (`status`, `episodes`, `help`, `quit`) are left to
    /// the caller and do nothing here.
    pub fn apply(&self, player: &mut Player, catalog: &[Episode]) -> Result<()> {
        match self {
            Command::Play(n) => {
                let episode = catalog
                    .get(*n)
                    .cloned()
                    .ok_or_else(|| AppError::NotFound(format!("no episode {} in catalog", n)))?;
                player.play(episode);
            }
            Command::List(n) => player.play_list(catalog.to_vec(), *n)?,
            Command::Next => player.play_next(),
            Command::Previous => player.play_previous(),
            Command::Toggle => player.toggle_play(),
            Command::Shuffle => player.toggle_shuffle(),
            Command::Loop => player.toggle_looping(),
            Command::Playing(playing) => player.set_playing_state(*playing),
            Command::Ended => on_media_ended(player),
            Command::Clear => player.clear_player_state(),
            Command::Status | Command::Episodes | Command::Help | Command::Quit => {}
        }
        Ok(())
    }
}

/// React to the media element finishing the current episode.
///
/// Looping replays the same episode, so the state is left alone. Otherwise
/// playback moves on when there is a next episode and stops when there isn't.
pub fn on_media_ended(player: &mut Player) {
    let state = player.state();
    if state.is_looping() {
        info!("Looping current episode");
    } else if state.has_next() {
        player.play_next();
    } else {
        player.set_playing_state(false);
    }
}

/// Render the player state for the terminal.
pub fn render_status(state: &PlayerState) -> String {
    let now = match state.current_episode() {
        Some(episode) => format!(
            "[{}/{}] {}",
            state.current_episode_index() + 1,
            state.episode_list().len(),
            episode.to_display()
        ),
        None => "Nothing loaded".to_string(),
    };

    let flag = |on: bool| if on { "on" } else { "off" };
    format!(
        "{}\n  {} | shuffle {} | loop {} | prev {} | next {}",
        now,
        if state.is_playing() { "playing" } else { "paused" },
        flag(state.is_shuffling()),
        flag(state.is_looping()),
        flag(state.has_previous()),
        flag(state.has_next()),
    )
}

/// Render the catalog as a numbered list.
pub fn render_episodes(catalog: &[Episode]) -> String {
    if catalog.is_empty() {
        return "Catalog is empty".to_string();
    }
    catalog
        .iter()
        .enumerate()
        .map(|(i, episode)| format!("{:>3}. {}", i, episode.to_display()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Prompt for the next command line.
///
/// Returns `None` at end of input.
pub fn prompt_command<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    print!("> ");
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
