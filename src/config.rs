use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use engine::{FieldOrientation, MatchSettings};
use std::env;
use std::time::Duration;

const MAX_TIME_SCALE: u64 = 1_000;

/// Startup options read from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub orientation: FieldOrientation,
    pub period_seconds: Option<u32>,
    /// Virtual milliseconds per wall-clock millisecond.
    pub time_scale: u64,
    pub is_one_shot_game: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            orientation: FieldOrientation::default(),
            period_seconds: None,
            time_scale: 1,
            is_one_shot_game: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = AppConfig::default();

        if let Some(orientation) = lookup("ORIENTATION") {
            config.orientation = orientation.parse().map_err(|e: String| eyre!(e))?;
        }

        if let Some(seconds) = lookup("PERIOD_SECONDS") {
            let seconds: u32 = seconds
                .trim()
                .parse()
                .wrap_err_with(|| format!("PERIOD_SECONDS must be a number, got '{}'", seconds))?;

            if seconds == 0 {
                return Err(eyre!("PERIOD_SECONDS must be positive"));
            }

            config.period_seconds = Some(seconds);
        }

        if let Some(scale) = lookup("TIME_SCALE") {
            config.time_scale = scale
                .trim()
                .parse()
                .wrap_err_with(|| format!("TIME_SCALE must be a number, got '{}'", scale))?;

            if config.time_scale == 0 || config.time_scale > MAX_TIME_SCALE {
                return Err(eyre!("TIME_SCALE must be between 1 and {}", MAX_TIME_SCALE));
            }
        }

        config.is_one_shot_game = lookup("MODE").as_deref() == Some("ONESHOT");

        Ok(config)
    }

    /// Virtual match time for `elapsed` wall time, saturating on huge scales.
    pub fn scaled_ms(&self, elapsed: Duration) -> u64 {
        let elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);

        elapsed_ms.saturating_mul(self.time_scale)
    }

    pub fn settings(&self) -> MatchSettings {
        match self.period_seconds {
            Some(seconds) => MatchSettings::default().with_period_seconds(seconds),
            None => MatchSettings::default(),
        }
    }
}
