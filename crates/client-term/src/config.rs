use std::fs;
use std::time::Duration;

use anyhow::{Context, Result};
use hiscore_core::rate_limit::RateLimitConfig;
use hiscore_core::tracker::{GameTypeSpec, TrackerConfig};
use serde::Deserialize;

/// Startup configuration, optionally read from a JSON file. Fixed for the
/// lifetime of the process.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game_types: Vec<GameTypeEntry>,
    pub window_ms: u64,
    pub max_submissions: u32,
}

#[derive(Debug, Deserialize)]
pub struct GameTypeEntry {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let defaults = RateLimitConfig::default();
        AppConfig {
            game_types: vec![
                GameTypeEntry {
                    name: "Arcade".to_owned(),
                    description: "Classic cabinet scores".to_owned(),
                },
                GameTypeEntry {
                    name: "Puzzle".to_owned(),
                    description: String::new(),
                },
            ],
            window_ms: defaults.window.as_millis() as u64,
            max_submissions: defaults.max_submissions,
        }
    }
}

impl AppConfig {
    pub fn tracker_config(&self) -> TrackerConfig {
        TrackerConfig {
            rate_limit: RateLimitConfig::new(
                self.max_submissions,
                Duration::from_millis(self.window_ms),
            ),
            game_types: self
                .game_types
                .iter()
                .map(|entry| GameTypeSpec::new(&entry.name, &entry.description))
                .collect(),
        }
    }
}

pub fn load(path: Option<&str>) -> Result<AppConfig> {
    let Some(path) = path else {
        return Ok(AppConfig::default());
    };
    let raw = fs::read_to_string(path).with_context(|| format!("reading config {path}"))?;
    let config = serde_json::from_str(&raw).with_context(|| format!("parsing config {path}"))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{ "max_submissions": 5 }"#).unwrap();
        assert_eq!(config.max_submissions, 5);
        assert_eq!(config.window_ms, 60_000);
        assert_eq!(config.game_types.len(), 2);
    }

    #[test]
    fn game_types_parse_without_descriptions() {
        let config: AppConfig =
            serde_json::from_str(r#"{ "game_types": [{ "name": "Racing" }] }"#).unwrap();
        let tracker_config = config.tracker_config();
        assert_eq!(tracker_config.game_types.len(), 1);
        assert_eq!(tracker_config.game_types[0].name, "Racing");
        assert!(tracker_config.game_types[0].description.is_empty());
    }
}
