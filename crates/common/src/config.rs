//! Startup configuration. Defaults reproduce the stock castle; an optional
//! YAML file can override any subset of fields before the map is built.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Stock dimensions, in world units (metres).
pub mod defaults {
    pub const ROOM_SIZE: f32 = 10.0;
    pub const ROOM_HEIGHT: f32 = 4.0;
    pub const WALL_THICKNESS: f32 = 0.4;
    pub const DOOR_WIDTH: f32 = 3.0;
    pub const CORRIDOR_LENGTH: f32 = 8.0;
    pub const CORRIDOR_WIDTH: f32 = DOOR_WIDTH;
    pub const PLAYER_RADIUS: f32 = 0.4;
    pub const SPEED: f32 = 5.0;
    pub const EYE_HEIGHT: f32 = 1.7;
    pub const BODY_HEIGHT: f32 = 2.0;
    pub const MOUSE_SENSITIVITY: f32 = 0.002;
    /// Largest frame delta the simulation accepts, in seconds.
    pub const MAX_FRAME_DT: f32 = 0.033;
}

/// Errors from loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Map dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub room_size: f32,
    pub room_height: f32,
    pub wall_thickness: f32,
    pub door_width: f32,
    pub corridor_length: f32,
    pub corridor_width: f32,
    /// Add half a wall thickness to the room offset.
    pub fold_wall_thickness: bool,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            room_size: defaults::ROOM_SIZE,
            room_height: defaults::ROOM_HEIGHT,
            wall_thickness: defaults::WALL_THICKNESS,
            door_width: defaults::DOOR_WIDTH,
            corridor_length: defaults::CORRIDOR_LENGTH,
            corridor_width: defaults::CORRIDOR_WIDTH,
            fold_wall_thickness: false,
        }
    }
}

impl MapConfig {
    /// Distance from the origin to each room center along X and Z.
    pub fn room_offset(&self) -> f32 {
        let base = self.room_size / 2.0 + self.corridor_length / 2.0;
        if self.fold_wall_thickness {
            base + self.wall_thickness / 2.0
        } else {
            base
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("map.room_size", self.room_size)?;
        positive("map.room_height", self.room_height)?;
        positive("map.wall_thickness", self.wall_thickness)?;
        positive("map.door_width", self.door_width)?;
        positive("map.corridor_length", self.corridor_length)?;
        positive("map.corridor_width", self.corridor_width)?;
        if self.door_width >= self.room_size {
            return Err(invalid(
                "map.door_width",
                format!(
                    "door width {} must be smaller than room size {}",
                    self.door_width, self.room_size
                ),
            ));
        }
        if self.corridor_width < self.door_width {
            return Err(invalid(
                "map.corridor_width",
                format!(
                    "corridor width {} must be at least the door width {}",
                    self.corridor_width, self.door_width
                ),
            ));
        }
        if self.corridor_width >= self.room_size {
            return Err(invalid(
                "map.corridor_width",
                format!(
                    "corridor width {} must be smaller than room size {}",
                    self.corridor_width, self.room_size
                ),
            ));
        }
        Ok(())
    }
}

/// Player body and movement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub radius: f32,
    pub speed: f32,
    pub eye_height: f32,
    /// Height of the collision volume, measured from the floor.
    pub body_height: f32,
    /// Radians of look rotation per pixel of mouse motion.
    pub mouse_sensitivity: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            radius: defaults::PLAYER_RADIUS,
            speed: defaults::SPEED,
            eye_height: defaults::EYE_HEIGHT,
            body_height: defaults::BODY_HEIGHT,
            mouse_sensitivity: defaults::MOUSE_SENSITIVITY,
        }
    }
}

impl PlayerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("player.radius", self.radius)?;
        positive("player.speed", self.speed)?;
        positive("player.eye_height", self.eye_height)?;
        positive("player.body_height", self.body_height)?;
        positive("player.mouse_sensitivity", self.mouse_sensitivity)
    }
}

/// Frame pacing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    pub max_dt: f32,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            max_dt: defaults::MAX_FRAME_DT,
        }
    }
}

/// Everything read at startup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub map: MapConfig,
    pub player: PlayerConfig,
    pub frame: FrameConfig,
}

impl GameConfig {
    /// Parse a YAML document. Missing keys keep their defaults.
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    /// Load from `path` when given, otherwise use defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.map.validate()?;
        self.player.validate()?;
        positive("frame.max_dt", self.frame.max_dt)?;
        if self.player.radius * 2.0 >= self.map.door_width {
            return Err(invalid(
                "player.radius",
                format!(
                    "a player of radius {} cannot fit through a {} wide door",
                    self.player.radius, self.map.door_width
                ),
            ));
        }
        // Corridor walls straddle the corridor edges, so half a wall
        // thickness is lost on each side.
        let clear = self.map.corridor_width - self.map.wall_thickness;
        if clear <= self.player.radius * 2.0 {
            return Err(invalid(
                "map.corridor_width",
                format!(
                    "corridor width {} leaves {clear} between its walls, too narrow for a player of radius {}",
                    self.map.corridor_width, self.player.radius
                ),
            ));
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("must be a positive number, got {value}")))
    }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::Invalid { field, reason }
}
