//! Episode catalog loading.
//!
//! A catalog is a JSON array of [`Episode`] objects. It is read once at
//! startup and handed to the player; nothing is ever written back.

use crate::error::{AppError, Result};
use crate::types::Episode;
use log::{debug, warn};
use std::fs;
use std::path::Path;

/// Parse a catalog from a JSON string.
pub fn parse_episodes(content: &str) -> Result<Vec<Episode>> {
    let episodes: Vec<Episode> = serde_json::from_str(content)?;
    Ok(episodes)
}

/// Load a catalog file from disk.
pub fn load_episodes(path: &Path) -> Result<Vec<Episode>> {
    if !path.exists() {
        return Err(AppError::NotFound(format!(
            "catalog {} does not exist",
            path.display()
        )));
    }

    let content = fs::read_to_string(path)?;
    let episodes = parse_episodes(&content)?;

    if episodes.is_empty() {
        warn!("Catalog {} contains no episodes", path.display());
    }
    debug!("Loaded {} episodes from {}", episodes.len(), path.display());

    Ok(episodes)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"[
        {"title": "One", "members": "A", "thumbnail": "1.jpg", "duration": 10, "url": "1.mp3"},
        {"title": "Two", "members": "B", "thumbnail": "2.jpg", "duration": 20, "url": "2.mp3"}
    ]"#;

    #[test]
    fn test_parse_keeps_order() {
        let episodes = parse_episodes(CATALOG).unwrap();
        assert_eq!(episodes.len(), 2);
        assert_eq!(episodes[0].title, "One");
        assert_eq!(episodes[1].title, "Two");
    }

    #[test]
    fn test_parse_rejects_negative_duration() {
        let json = r#"[{"title": "x", "members": "", "thumbnail": "", "duration": -1, "url": ""}]"#;
        assert!(matches!(parse_episodes(json), Err(AppError::Parse(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_episodes(&dir.path().join("nope.json"));
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("episodes.json");
        fs::write(&path, CATALOG).unwrap();

        let episodes = load_episodes(&path).unwrap();
        assert_eq!(episodes[1].url, "2.mp3");
    }
}
