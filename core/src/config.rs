use std::fmt;

use serde::{Deserialize, Serialize};

use crate::message::{MessageSchedule, MESSAGE_DISMISS_DELAY_MS, MESSAGE_REMOVE_DELAY_MS};
use crate::nav::NAV_SCROLL_THRESHOLD_PX;
use crate::rating::RATING_BAR_DELAY_MS;
use crate::reveal::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};

/// Tunables for the page behaviors. Every field is optional in the embedded
/// JSON block; missing fields keep the stock values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    pub nav_scroll_threshold_px: f64,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub rating_bar_delay_ms: u32,
    pub message_dismiss_delay_ms: u32,
    pub message_remove_delay_ms: u32,
    pub custom_cursor: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            nav_scroll_threshold_px: NAV_SCROLL_THRESHOLD_PX,
            reveal_threshold: REVEAL_THRESHOLD,
            reveal_root_margin: REVEAL_ROOT_MARGIN.to_string(),
            rating_bar_delay_ms: RATING_BAR_DELAY_MS,
            message_dismiss_delay_ms: MESSAGE_DISMISS_DELAY_MS,
            message_remove_delay_ms: MESSAGE_REMOVE_DELAY_MS,
            custom_cursor: true,
        }
    }
}

impl PageConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: PageConfig =
            serde_json::from_str(raw).map_err(|err| ConfigError::Malformed(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.nav_scroll_threshold_px.is_finite() || self.nav_scroll_threshold_px < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "navScrollThresholdPx",
                reason: "must be a finite, non-negative offset",
            });
        }
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(ConfigError::InvalidValue {
                field: "revealThreshold",
                reason: "must be within 0..=1",
            });
        }
        if self.reveal_root_margin.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "revealRootMargin",
                reason: "must not be empty",
            });
        }
        Ok(())
    }

    pub fn message_schedule(&self) -> MessageSchedule {
        MessageSchedule {
            dismiss_after_ms: self.message_dismiss_delay_ms,
            remove_after_ms: self.message_remove_delay_ms,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Malformed(String),
    InvalidValue {
        field: &'static str,
        reason: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Malformed(detail) => write!(f, "malformed page config: {detail}"),
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "invalid page config field {field}: {reason}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
