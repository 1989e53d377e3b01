//! Observable store that owns the player state.

use super::state::PlayerState;
use crate::error::Result;
use crate::types::Episode;
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fmt;

/// Handle returned by [`Player::subscribe`], used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&PlayerState)>;

/// Single owner of the player state.
///
/// Every operation runs to completion before subscribers are called, so a
/// subscriber never observes a half-applied transition. Operations that leave
/// the state unchanged do not notify.
pub struct Player {
    state: PlayerState,
    rng: StdRng,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    /// Create a player with an empty state and an entropy-seeded shuffle.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Create a player whose shuffle order is reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            state: PlayerState::new(),
            rng,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    /// Owned copy of the current state.
    pub fn snapshot(&self) -> PlayerState {
        self.state.clone()
    }

    /// Register a callback invoked after every state change.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&PlayerState) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        debug!("Added subscriber {:?}", id);
        id
    }

    /// Remove a subscriber. Returns false if the id was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        let removed = self.subscribers.len() != before;
        if removed {
            debug!("Removed subscriber {:?}", id);
        }
        removed
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Load a single episode and start playing it.
    pub fn play(&mut self, episode: Episode) {
        debug!("play: {}", episode.title);
        self.update(|state| state.play(episode));
    }

    /// Load `list` and start playing at `index`.
    ///
    /// Fails with [`AppError::InvalidInput`](crate::error::AppError::InvalidInput)
    /// when `index` is outside `list`; the state is left as it was.
    pub fn play_list(&mut self, list: Vec<Episode>, index: usize) -> Result<()> {
        debug!("play_list: {} episodes, index {}", list.len(), index);
        let before = self.state.clone();
        self.state.play_list(list, index)?;
        self.notify_if_changed(&before);
        Ok(())
    }

    pub fn toggle_play(&mut self) {
        self.update(PlayerState::toggle_play);
        debug!("toggle_play: playing={}", self.state.is_playing());
    }

    pub fn toggle_looping(&mut self) {
        self.update(PlayerState::toggle_looping);
        debug!("toggle_looping: looping={}", self.state.is_looping());
    }

    pub fn toggle_shuffle(&mut self) {
        self.update(PlayerState::toggle_shuffle);
        debug!("toggle_shuffle: shuffling={}", self.state.is_shuffling());
    }

    /// Set the playing flag exactly, e.g. when the media element stops.
    pub fn set_playing_state(&mut self, playing: bool) {
        debug!("set_playing_state: {}", playing);
        self.update(|state| state.set_playing_state(playing));
    }

    /// Advance to the next episode, or a random one while shuffling.
    pub fn play_next(&mut self) {
        let before = self.state.clone();
        self.state.play_next(&mut self.rng);
        debug!(
            "play_next: index {} -> {}",
            before.current_episode_index(),
            self.state.current_episode_index()
        );
        self.notify_if_changed(&before);
    }

    pub fn play_previous(&mut self) {
        self.update(PlayerState::play_previous);
        debug!("play_previous: index {}", self.state.current_episode_index());
    }

    /// Drop the loaded list. Playback flags are not reset.
    pub fn clear_player_state(&mut self) {
        debug!("clear_player_state");
        self.update(PlayerState::clear);
    }

    fn update<F>(&mut self, transition: F)
    where
        F: FnOnce(&mut PlayerState),
    {
        let before = self.state.clone();
        transition(&mut self.state);
        self.notify_if_changed(&before);
    }

    fn notify_if_changed(&mut self, before: &PlayerState) {
        if *before == self.state {
            return;
        }
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(&self.state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn episodes(count: usize) -> Vec<Episode> {
        (0..count)
            .map(|i| Episode {
                title: format!("Episode {}", i),
                members: "Host".to_string(),
                thumbnail: format!("{}.jpg", i),
                duration: 120,
                url: format!("{}.mp3", i),
            })
            .collect()
    }

    fn counting(player: &mut Player) -> (SubscriptionId, Rc<RefCell<usize>>) {
        let calls = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&calls);
        let id = player.subscribe(move |_| *counter.borrow_mut() += 1);
        (id, calls)
    }

    #[test]
    fn test_subscriber_called_on_change() {
        let mut player = Player::with_seed(7);
        let (_, calls) = counting(&mut player);

        player.toggle_play();
        player.toggle_looping();
        assert_eq!(*calls.borrow(), 2);
    }

    #[test]
    fn test_subscriber_not_called_on_noop() {
        let mut player = Player::with_seed(7);
        let (_, calls) = counting(&mut player);

        player.play_previous();
        player.play_next();
        player.set_playing_state(false);
        player.clear_player_state();
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn test_subscriber_sees_committed_state() {
        let mut player = Player::with_seed(7);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        player.subscribe(move |state| {
            sink.borrow_mut().push((
                state.episode_list().len(),
                state.current_episode_index(),
                state.is_playing(),
            ))
        });

        player.play_list(episodes(3), 1).unwrap();
        assert_eq!(*seen.borrow(), vec![(3, 1, true)]);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let mut player = Player::with_seed(7);
        let (id, calls) = counting(&mut player);

        player.toggle_shuffle();
        assert!(player.unsubscribe(id));
        assert!(!player.unsubscribe(id));
        player.toggle_shuffle();

        assert_eq!(*calls.borrow(), 1);
        assert_eq!(player.subscriber_count(), 0);
    }

    #[test]
    fn test_failed_play_list_does_not_notify() {
        let mut player = Player::with_seed(7);
        let (_, calls) = counting(&mut player);

        let result = player.play_list(episodes(2), 5);
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
        assert_eq!(*calls.borrow(), 0);
        assert!(!player.state().is_playing());
    }

    #[test]
    fn test_same_seed_same_shuffle() {
        let mut a = Player::with_seed(99);
        let mut b = Player::with_seed(99);
        for player in [&mut a, &mut b] {
            player.play_list(episodes(10), 0).unwrap();
            player.toggle_shuffle();
        }

        for _ in 0..20 {
            a.play_next();
            b.play_next();
            assert_eq!(
                a.state().current_episode_index(),
                b.state().current_episode_index()
            );
        }
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut player = Player::with_seed(1);
        player.play(episodes(1).remove(0));
        let snapshot = player.snapshot();

        player.clear_player_state();
        assert_eq!(snapshot.episode_list().len(), 1);
        assert!(player.state().episode_list().is_empty());
    }
}
