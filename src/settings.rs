//! Game settings: ball tuning, grid layout and display labels
//!
//! Loaded from JSON. Anything missing falls back to the defaults in `consts`.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Ball launch, deflection and speed tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallSettings {
    /// Launch direction (normalized before use)
    pub power_direction: Vec2,
    /// Launch impulse magnitude
    pub power_scale: f32,
    /// Horizontal impulse per unit of paddle hit factor
    pub hit_coefficient: f32,
    pub min_speed: f32,
    pub max_speed: f32,
    /// Trajectories with |normalized vy| below this get corrected
    pub horizontal_limit: f32,
    /// Corrective impulse for near-horizontal trajectories
    pub adjust_impulse: Vec2,
    pub mass: f32,
}

impl Default for BallSettings {
    fn default() -> Self {
        Self {
            power_direction: Vec2::new(1.0, 1.0),
            power_scale: BALL_POWER_SCALE,
            hit_coefficient: HIT_COEFFICIENT,
            min_speed: BALL_MIN_SPEED,
            max_speed: BALL_MAX_SPEED,
            horizontal_limit: HORIZONTAL_LIMIT,
            adjust_impulse: Vec2::new(0.0, ADJUST_IMPULSE_Y),
            mass: BALL_MASS,
        }
    }
}

/// A block prefab the grid generator can place
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockTemplate {
    pub name: String,
    /// Measured width/height of an instantiated block
    pub size: Vec2,
    /// Starting hit points
    pub life: u32,
    /// Points awarded per ball contact
    pub score_value: u32,
    /// Entity template spawned when the block is destroyed
    pub spawn: Option<String>,
    /// Play a hit cue on every ball contact
    pub hit_sound: bool,
}

impl Default for BlockTemplate {
    fn default() -> Self {
        Self {
            name: "block".to_string(),
            size: Vec2::new(BLOCK_WIDTH, BLOCK_HEIGHT),
            life: BLOCK_LIFE,
            score_value: BLOCK_SCORE,
            spawn: None,
            hit_sound: false,
        }
    }
}

/// Block grid layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSpec {
    /// Position of the first block
    pub anchor: Vec2,
    pub columns: u32,
    pub rows: u32,
    /// Templates, cycled per row
    pub templates: Vec<BlockTemplate>,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            anchor: Vec2::new(0.0, 4.0),
            columns: GRID_COLUMNS,
            rows: GRID_ROWS,
            templates: vec![BlockTemplate::default()],
        }
    }
}

/// Display strings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub score_prefix: String,
    pub score_suffix: String,
    pub game_over: String,
    pub game_clear: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            score_prefix: "Score: ".to_string(),
            score_suffix: String::new(),
            game_over: "Game Over".to_string(),
            game_clear: "Congratulations!".to_string(),
        }
    }
}

impl Labels {
    pub fn score_text(&self, score: u64) -> String {
        format!("{}{}{}", self.score_prefix, score, self.score_suffix)
    }
}

/// All game settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub ball: BallSettings,
    pub grid: GridSpec,
    pub labels: Labels,
}

impl Settings {
    /// Parse settings from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    return settings.sanitized();
                }
                Err(e) => log::warn!("Invalid settings in {}: {}", path.display(), e),
            },
            Err(e) => log::warn!("Could not read {}: {}", path.display(), e),
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Repair values the gameplay code cannot work with
    pub fn sanitized(mut self) -> Self {
        let ball = &mut self.ball;
        if ball.min_speed < 0.0 {
            log::warn!("min_speed {} < 0, using 0", ball.min_speed);
            ball.min_speed = 0.0;
        }
        if ball.min_speed > ball.max_speed {
            log::warn!(
                "min_speed {} > max_speed {}, swapping",
                ball.min_speed,
                ball.max_speed
            );
            std::mem::swap(&mut ball.min_speed, &mut ball.max_speed);
        }
        if ball.mass <= 0.0 {
            log::warn!("mass {} must be positive, using {}", ball.mass, BALL_MASS);
            ball.mass = BALL_MASS;
        }

        for template in &mut self.grid.templates {
            if template.life == 0 {
                log::warn!("template '{}' has zero life, using 1", template.name);
                template.life = 1;
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let settings = Settings::default();
        assert_eq!(settings.ball.min_speed, BALL_MIN_SPEED);
        assert_eq!(settings.ball.max_speed, BALL_MAX_SPEED);
        assert_eq!(settings.grid.columns, 7);
        assert_eq!(settings.grid.rows, 6);
        assert_eq!(settings.grid.templates[0].life, 2);
        assert_eq!(settings.grid.templates[0].score_value, 100);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{ "ball": { "min_speed": 2.0 }, "grid": { "columns": 3 } }"#;
        let settings = Settings::from_json(json).unwrap();
        assert_eq!(settings.ball.min_speed, 2.0);
        assert_eq!(settings.ball.max_speed, BALL_MAX_SPEED);
        assert_eq!(settings.grid.columns, 3);
        assert_eq!(settings.grid.rows, GRID_ROWS);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(Settings::from_json("{ not json").is_err());
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let settings = Settings::load("/nonexistent/block-breaker.json");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_json_roundtrip() {
        let mut settings = Settings::default();
        settings.grid.templates.push(BlockTemplate {
            name: "crystal".to_string(),
            spawn: Some("gem".to_string()),
            ..Default::default()
        });
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_sanitized_repairs_values() {
        let mut settings = Settings::default();
        settings.ball.min_speed = 9.0;
        settings.ball.max_speed = 3.0;
        settings.ball.mass = 0.0;
        settings.grid.templates[0].life = 0;

        let settings = settings.sanitized();
        assert_eq!(settings.ball.min_speed, 3.0);
        assert_eq!(settings.ball.max_speed, 9.0);
        assert_eq!(settings.ball.mass, BALL_MASS);
        assert_eq!(settings.grid.templates[0].life, 1);
    }

    #[test]
    fn test_score_text() {
        let labels = Labels {
            score_prefix: "Crystals: ".to_string(),
            score_suffix: "/3".to_string(),
            ..Default::default()
        };
        assert_eq!(labels.score_text(2), "Crystals: 2/3");
        assert_eq!(Labels::default().score_text(300), "Score: 300");
    }
}
