/// Runtime configuration read from the environment.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::TICK_MS;
use crate::highscores::NAME_LEN;

pub const DEFAULT_PLAYER_NAME: &str = "YOU";
const HIGH_SCORE_FILE: &str = ".galaxy_shooter_scores";

#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub high_score_path: PathBuf,
    /// Always exactly `NAME_LEN` characters.
    pub player_name: String,
    pub tick: Duration,
    pub log_path: Option<PathBuf>,
}

impl GameConfig {
    pub fn from_env() -> Self {
        let high_score_path = env::var("SHOOTER_HIGH_SCORES")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_high_score_path());

        let player_name = env::var("SHOOTER_PLAYER")
            .map(|raw| normalize_player_name(&raw))
            .unwrap_or_else(|_| DEFAULT_PLAYER_NAME.to_string());

        Self {
            high_score_path,
            player_name,
            tick: Duration::from_millis(read_env_u64("SHOOTER_TICK_MS", TICK_MS)),
            log_path: env::var("SHOOTER_LOG").ok().filter(|p| !p.is_empty()).map(PathBuf::from),
        }
    }
}

fn default_high_score_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(HIGH_SCORE_FILE)
}

/// Uppercase ASCII alphanumerics only, cut or padded with `-` to exactly
/// `NAME_LEN` characters.  An input with nothing usable gets the default.
pub fn normalize_player_name(raw: &str) -> String {
    let mut name: String = raw
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_uppercase())
        .take(NAME_LEN)
        .collect();
    if name.is_empty() {
        return DEFAULT_PLAYER_NAME.to_string();
    }
    while name.len() < NAME_LEN {
        name.push('-');
    }
    name
}

fn read_env_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .filter(|value| *value > 0)
        .unwrap_or(default)
}
