//! Shared player state for a podcast-style media player.
//!
//! podcast-player keeps track of which episode list is loaded, which episode
//! is current, and whether playback is running, shuffled or looped. UI code
//! and the media-playback collaborator drive it through a small set of
//! operations on [`player::Player`] and observe it by subscribing.
//!
//! # Features
//!
//! - Play a single episode or a whole list from a given position
//! - Sequential or shuffled next/previous navigation
//! - Subscribers notified after every committed change
//! - A command-line harness reading episode catalogs from JSON
//!
//! # Usage
//!
//! ```bash
//! # Drive the player from stdin with a catalog file
//! cargo run -- --catalog episodes.json
//!
//! # Reproducible shuffle
//! cargo run -- --catalog episodes.json --seed 42
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod player;
pub mod types;
pub mod ui;
