use std::str::FromStr;

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::BoardError;

/// Start-up settings for the board.
///
/// Every field is optional in JSON; missing ones take the defaults below.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BoardConfig {
    pub seed_demo_data: bool,
    pub log_level: String,
    pub due_soon_days: i64,
    pub due_week_days: i64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            seed_demo_data: true,
            log_level: "info".to_string(),
            due_soon_days: 3,
            due_week_days: 7,
        }
    }
}

impl BoardConfig {
    pub fn from_json(json: &str) -> Result<Self, BoardError> {
        let config: BoardConfig =
            serde_json::from_str(json).map_err(|e| BoardError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), BoardError> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| BoardError::Config(format!("unknown log level `{}`", self.log_level)))?;
        if self.due_soon_days < 0 || self.due_soon_days > self.due_week_days {
            return Err(BoardError::Config(format!(
                "due_soon_days ({}) must be between 0 and due_week_days ({})",
                self.due_soon_days, self.due_week_days
            )));
        }
        Ok(())
    }

    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(&self.log_level).unwrap_or(LevelFilter::Info)
    }
}
