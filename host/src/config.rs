use serde::{Deserialize, Serialize};
use std::fs;

/// Canvas and walk parameters for a squiggle drawing
///
/// Loaded from JSON; any missing field takes its default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SquiggleSettings {
    /// Canvas width in pixels
    pub width: f64,
    /// Canvas height in pixels
    pub height: f64,
    /// Distance from each edge at which the turtle is turned back to the centre
    pub margin: f64,
    /// Number of strokes drawn by a full run
    pub steps: usize,
}

impl Default for SquiggleSettings {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            margin: 50.0,
            steps: 500,
        }
    }
}

impl SquiggleSettings {
    /// Check that the margin box is non-empty
    pub fn validate(&self) -> Result<(), String> {
        if !(self.width.is_finite() && self.height.is_finite() && self.margin.is_finite()) {
            return Err("Canvas dimensions must be finite".to_string());
        }
        if self.margin < 0.0 {
            return Err(format!("Margin must not be negative, got {}", self.margin));
        }
        if self.width <= 2.0 * self.margin || self.height <= 2.0 * self.margin {
            return Err(format!(
                "Canvas {}x{} is too small for a margin of {}",
                self.width, self.height, self.margin
            ));
        }
        Ok(())
    }

    /// Load settings from a JSON file
    pub fn load(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let json = fs::read_to_string(path)?;
        let settings: SquiggleSettings = serde_json::from_str(&json)?;
        settings.validate()?;
        tracing::debug!("Loaded settings from {}: {:?}", path, settings);
        Ok(settings)
    }
}
