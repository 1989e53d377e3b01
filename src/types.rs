//! Type definitions for the podcast-player application.
//!
//! This module contains the core value types shared by the player store,
//! the episode catalog and the command harness.

use serde::{Deserialize, Serialize};

/// A single playable podcast episode.
///
/// Episodes are plain values: the player clones them into its list and never
/// mutates them afterwards.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Episode {
    /// Episode title.
    pub title: String,

    /// Participants or hosts, as a single label.
    pub members: String,

    /// URI or path of the artwork image.
    pub thumbnail: String,

    /// Length of the episode in seconds.
    pub duration: u64,

    /// URI or path of the playable media.
    pub url: String,
}

impl Episode {
    /// Format the duration as `h:mm:ss`, or `m:ss` below one hour.
    ///
    /// # Examples
    ///
    /// ```
    /// use podcast_player::types::Episode;
    ///
    /// let ep = Episode {
    ///     title: "Pilot".to_string(),
    ///     members: "Ana, Bo".to_string(),
    ///     thumbnail: "pilot.jpg".to_string(),
    ///     duration: 3725,
    ///     url: "pilot.mp3".to_string(),
    /// };
    /// assert_eq!(ep.formatted_duration(), "1:02:05");
    /// ```
    pub fn formatted_duration(&self) -> String {
        let hours = self.duration / 3600;
        let minutes = (self.duration % 3600) / 60;
        let seconds = self.duration % 60;

        if hours > 0 {
            format!("{}:{:02}:{:02}", hours, minutes, seconds)
        } else {
            format!("{}:{:02}", minutes, seconds)
        }
    }

    /// Format the episode for display in listings.
    ///
    /// # Examples
    ///
    /// ```
    /// use podcast_player::types::Episode;
    ///
    /// let ep = Episode {
    ///     title: "Pilot".to_string(),
    ///     members: "Ana, Bo".to_string(),
    ///     thumbnail: "pilot.jpg".to_string(),
    ///     duration: 95,
    ///     url: "pilot.mp3".to_string(),
    /// };
    /// assert_eq!(ep.to_display(), "Pilot - Ana, Bo (1:35)");
    /// ```
    pub fn to_display(&self) -> String {
        format!(
            "{} - {} ({})",
            self.title,
            self.members,
            self.formatted_duration()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn episode(duration: u64) -> Episode {
        Episode {
            title: "Ep".to_string(),
            members: "Host".to_string(),
            thumbnail: "thumb.png".to_string(),
            duration,
            url: "ep.mp3".to_string(),
        }
    }

    #[test]
    fn test_formatted_duration_zero() {
        assert_eq!(episode(0).formatted_duration(), "0:00");
    }

    #[test]
    fn test_formatted_duration_minutes() {
        assert_eq!(episode(59 * 60 + 9).formatted_duration(), "59:09");
    }

    #[test]
    fn test_formatted_duration_hours() {
        assert_eq!(episode(2 * 3600 + 5).formatted_duration(), "2:00:05");
    }

    #[test]
    fn test_episode_to_display_empty_members() {
        let mut ep = episode(61);
        ep.members = String::new();
        assert_eq!(ep.to_display(), "Ep -  (1:01)");
    }

    #[test]
    fn test_episode_deserialization() {
        let json = r#"{
            "title": "Intro",
            "members": "Diego",
            "thumbnail": "https://example.com/intro.jpg",
            "duration": 1800,
            "url": "https://example.com/intro.mp3"
        }"#;

        let ep: Episode = serde_json::from_str(json).unwrap();
        assert_eq!(ep.title, "Intro");
        assert_eq!(ep.duration, 1800);
        assert_eq!(ep.url, "https://example.com/intro.mp3");
    }
}
