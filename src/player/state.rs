//! Player snapshot and its transition rules.

use crate::error::{AppError, Result};
use crate::types::Episode;
use rand::Rng;

/// Everything a consumer needs to render the player.
///
/// Fields are read through accessors only; transitions are applied by
/// [`Player`](super::Player), which notifies subscribers afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerState {
    episode_list: Vec<Episode>,
    current_episode_index: usize,
    is_playing: bool,
    is_looping: bool,
    is_shuffling: bool,
}

impl PlayerState {
    /// Create an empty state: no episodes, index 0, every flag off.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn episode_list(&self) -> &[Episode] {
        &self.episode_list
    }

    pub fn current_episode_index(&self) -> usize {
        self.current_episode_index
    }

    /// The episode at the current index, if the list is not empty.
    pub fn current_episode(&self) -> Option<&Episode> {
        self.episode_list.get(self.current_episode_index)
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn is_looping(&self) -> bool {
        self.is_looping
    }

    pub fn is_shuffling(&self) -> bool {
        self.is_shuffling
    }

    pub fn has_previous(&self) -> bool {
        self.current_episode_index > 0
    }

    /// Always true while shuffling, since a random pick is always possible.
    pub fn has_next(&self) -> bool {
        self.is_shuffling || self.current_episode_index + 1 < self.episode_list.len()
    }

    pub(super) fn play(&mut self, episode: Episode) {
        self.episode_list = vec![episode];
        self.current_episode_index = 0;
        self.is_playing = true;
    }

    /// Replace the list and start playing at `index`.
    ///
    /// Leaves the state untouched when `index` is outside `list`.
    pub(super) fn play_list(&mut self, list: Vec<Episode>, index: usize) -> Result<()> {
        if index >= list.len() {
            return Err(AppError::InvalidInput(format!(
                "episode index {} out of range for a list of {}",
                index,
                list.len()
            )));
        }

        self.episode_list = list;
        self.current_episode_index = index;
        self.is_playing = true;
        Ok(())
    }

    pub(super) fn toggle_play(&mut self) {
        self.is_playing = !self.is_playing;
    }

    pub(super) fn toggle_looping(&mut self) {
        self.is_looping = !self.is_looping;
    }

    pub(super) fn toggle_shuffle(&mut self) {
        self.is_shuffling = !self.is_shuffling;
    }

    pub(super) fn set_playing_state(&mut self, state: bool) {
        self.is_playing = state;
    }

    /// Shuffle picks any index, including the current one.
    pub(super) fn play_next<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.is_shuffling {
            // An empty list has nothing to pick from; fall back to the start.
            self.current_episode_index = if self.episode_list.is_empty() {
                0
            } else {
                rng.gen_range(0..self.episode_list.len())
            };
        } else if self.has_next() {
            self.current_episode_index += 1;
        }
    }

    pub(super) fn play_previous(&mut self) {
        if self.has_previous() {
            self.current_episode_index -= 1;
        }
    }

    /// Playback flags are kept as they are.
    pub(super) fn clear(&mut self) {
        self.episode_list.clear();
        self.current_episode_index = 0;
    }
}
