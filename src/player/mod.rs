//! Shared player state for podcast playback.
//!
//! [`PlayerState`] is the plain snapshot of what is loaded and how it is
//! playing. [`Player`] owns one snapshot and is the only way to mutate it;
//! consumers that need to react to changes register with
//! [`Player::subscribe`].

mod state;
mod store;

pub use state::PlayerState;
pub use store::{Player, SubscriptionId};
