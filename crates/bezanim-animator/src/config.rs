//! Serializable animator settings.

use bezanim_core::traits::Validate;
use bezanim_core::{BezanimError, Result};
use bezanim_curve::CurvePositions;
use serde::{Deserialize, Serialize};

/// Duration and geometry of an animation, loadable from JSON.
///
/// ```json
/// { "duration": 2.0, "positions": { "p0": [0, 0, 0], "p1": [0, 50, 0] } }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimatorConfig {
    /// Length of one run in seconds
    pub duration: f64,
    pub positions: CurvePositions,
}

impl AnimatorConfig {
    pub fn new(duration: f64, positions: CurvePositions) -> Self {
        Self {
            duration,
            positions,
        }
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| BezanimError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| BezanimError::Serialize(e.to_string()))
    }
}

impl Validate for AnimatorConfig {
    fn validate(&self) -> Result<()> {
        if !(self.duration.is_finite() && self.duration > 0.0) {
            return Err(BezanimError::InvalidArgument(format!(
                "duration must be a positive number of seconds, got {}",
                self.duration
            )));
        }
        self.positions.validate()
    }
}
