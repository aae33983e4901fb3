use super::traits::ConfigSection;
use crate::error::EaError;
use serde::{Deserialize, Serialize};

pub const MAX_INDENT_WIDTH: usize = 16;

/// Output settings for written archives. Reading accepts any layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArchiveConfig {
    pub pretty: bool,
    pub indent_width: usize,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            pretty: true,
            indent_width: 2,
        }
    }
}

impl ArchiveConfig {
    /// Single-line documents, e.g. one individual per line in a log.
    pub fn compact() -> Self {
        Self {
            pretty: false,
            ..Self::default()
        }
    }
}

impl ConfigSection for ArchiveConfig {
    fn section_name() -> &'static str {
        "archive"
    }

    fn validate(&self) -> Result<(), EaError> {
        if self.indent_width > MAX_INDENT_WIDTH {
            return Err(EaError::Configuration(format!(
                "[{}] indent_width must be at most {}, got {}",
                Self::section_name(),
                MAX_INDENT_WIDTH,
                self.indent_width
            )));
        }
        Ok(())
    }
}
