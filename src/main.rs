//! Main entry point for the podcast-player command harness.

use clap::Parser;
use log::{debug, info, warn};
use podcast_player::catalog::load_episodes;
use podcast_player::config::Config;
use podcast_player::player::Player;
use podcast_player::types::Episode;
use podcast_player::ui::{Command, HELP, prompt_command, render_episodes, render_status};
use std::io;
use std::path::PathBuf;

/// Command-line arguments for the podcast-player harness.
#[derive(Parser, Debug)]
#[command(
    name = "podcast-player",
    version,
    about = "Drive a podcast player state from the terminal",
    long_about = "Load an episode catalog and play, skip, shuffle and loop through it \
                  with commands read from stdin."
)]
struct Args {
    /// JSON file with the episode catalog (overrides config)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Seed for the shuffle order (overrides config)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Log verbosity level: 0=error, 1=warn, 2=info, 3=debug, 4=trace
    #[arg(short, long, default_value_t = 1)]
    log: u8,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize logging
    let log_level = match args.log {
        0 => log::LevelFilter::Error,
        1 => log::LevelFilter::Warn,
        2 => log::LevelFilter::Info,
        3 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp(None)
        .format_target(false)
        .init();

    debug!("Log level set to {:?}", log_level);

    let config = Config::load().unwrap_or_else(|e| {
        warn!("Failed to load config: {}. Using defaults.", e);
        Config::new()
    });

    let catalog: Vec<Episode> = match config.catalog_path(args.catalog.as_deref()) {
        Ok(path) => match load_episodes(&path) {
            Ok(episodes) => episodes,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        Err(e) => {
            warn!("{}. Starting with an empty catalog.", e);
            Vec::new()
        }
    };

    info!("Catalog has {} episodes", catalog.len());

    let mut player = match args.seed.or(config.seed) {
        Some(seed) => Player::with_seed(seed),
        None => Player::new(),
    };

    if config.start_shuffled {
        player.toggle_shuffle();
    }
    if config.start_looping {
        player.toggle_looping();
    }

    player.subscribe(|state| {
        if let Some(episode) = state.current_episode() {
            debug!("Now at {} ({})", episode.title, episode.url);
        }
    });

    run(&mut player, &catalog)?;

    Ok(())
}

fn run(player: &mut Player, catalog: &[Episode]) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", HELP);

    let stdin = io::stdin();
    let mut input = stdin.lock();

    while let Some(line) = prompt_command(&mut input)? {
        if line.is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                eprintln!("Error: {}", e);
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => println!("{}", HELP),
            Command::Episodes => println!("{}", render_episodes(catalog)),
            Command::Status => println!("{}", render_status(player.state())),
            command => match command.apply(player, catalog) {
                Ok(()) => println!("{}", render_status(player.state())),
                Err(e) => eprintln!("Error: {}", e),
            },
        }
    }

    Ok(())
}
