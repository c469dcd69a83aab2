use super::error::*;

use assdraw_engine::*;

use std::fs;
use std::path::Path;

///
/// Settings for the command line tool, read from a JSON file
///
/// Any setting missing from the file takes its default value.
///
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct AssDrawConfig {
    /// The coordinate system used when deriving control points and reporting bounds
    pub coordinate_system: CoordinateSystem,

    /// Whether an empty drawing starts with `m 0 0`
    pub initial_move: bool,

    /// The log filter to use when `RUST_LOG` isn't set
    pub log_filter: String
}

impl Default for AssDrawConfig {
    fn default() -> AssDrawConfig {
        AssDrawConfig {
            coordinate_system:  CoordinateSystem::default(),
            initial_move:       true,
            log_filter:         "warn".to_string()
        }
    }
}

impl AssDrawConfig {
    ///
    /// Reads a configuration from a JSON string
    ///
    pub fn from_json(json: &str) -> Result<AssDrawConfig, AssDrawError> {
        Ok(serde_json::from_str(json)?)
    }

    ///
    /// Reads a configuration from a JSON file
    ///
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<AssDrawConfig, AssDrawError> {
        let json = fs::read_to_string(path)?;
        AssDrawConfig::from_json(&json)
    }

    ///
    /// Replaces the scale of the coordinate system
    ///
    pub fn with_scale(self, scale: f64) -> AssDrawConfig {
        let coordinate_system = self.coordinate_system.with_scale_clamped(scale);
        AssDrawConfig { coordinate_system, ..self }
    }

    ///
    /// Replaces the origin of the coordinate system
    ///
    pub fn with_origin(self, (origin_x, origin_y): (f64, f64)) -> AssDrawConfig {
        let coordinate_system = CoordinateSystem { origin_x, origin_y, ..self.coordinate_system };
        AssDrawConfig { coordinate_system, ..self }
    }

    ///
    /// Parses some drawing text using the settings in this configuration
    ///
    pub fn parse_drawing(&self, text: &str) -> CommandSequence {
        let mut sequence = CommandSequence::new();
        sequence.set_coordinate_system(self.coordinate_system);

        if text.trim().is_empty() {
            sequence.reset(self.initial_move);
        } else {
            sequence.parse_into(text);
        }

        sequence
    }
}
