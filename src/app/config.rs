//! Configuration Management

use crate::motion::MotionParams;
use crate::scale::ScaleGeometry;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Trajectory settings
    pub motion: MotionConfig,
    /// Rating scale settings
    pub scale: ScaleConfig,
    /// Trial scheduling settings
    #[serde(default)]
    pub trials: TrialConfig,
}

/// Trajectory configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MotionConfig {
    /// Horizontal start coordinate of the stimulus
    pub start_x: i32,
    /// Vertical start coordinate of the stimulus
    pub start_y: i32,
    /// The y coordinate below which the trajectory locks a side
    pub crossover_y: i32,
    /// The y coordinate below which an animation run ends
    pub stop_y: i32,
}

/// Rating scale configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaleConfig {
    /// Number of points on the scale (odd, >= 3)
    pub points: usize,
    /// Presentation canvas width in pixels
    pub canvas_width: i32,
    /// Width of the button row
    pub usable_width: i32,
    /// Hit radius of each rating button
    pub button_radius: i32,
    /// y coordinate of the button row
    pub row_y: i32,
    /// Submit control center
    pub submit_x: i32,
    pub submit_y: i32,
    /// Submit control hit radius
    pub submit_radius: i32,
}

/// Trial scheduling configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialConfig {
    /// How many times each rating speed is presented per stimulus
    pub repeats_per_speed: usize,
    /// Passes over the extreme speeds during training
    pub training_passes: usize,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            start_x: 0,
            start_y: 400,
            crossover_y: -75,
            stop_y: -350,
        }
    }
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            points: 7,
            canvas_width: 800,
            usable_width: 700,
            button_radius: 15,
            row_y: -50,
            submit_x: 225,
            submit_y: -130,
            submit_radius: 15,
        }
    }
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self {
            repeats_per_speed: 2,
            training_passes: 2,
        }
    }
}

impl Config {
    /// Validate config values are within acceptable ranges.
    /// Returns Ok(()) if valid, or Err with a description of the first invalid field.
    pub fn validate(&self) -> Result<(), crate::Error> {
        if self.scale.points < 3 || self.scale.points % 2 == 0 {
            return Err(crate::Error::Config(format!(
                "scale.points must be odd and >= 3, got {}",
                self.scale.points
            )));
        }
        if self.scale.usable_width <= 0 || self.scale.usable_width > self.scale.canvas_width {
            return Err(crate::Error::Config(format!(
                "scale.usable_width must be in (0, canvas_width], got {}",
                self.scale.usable_width
            )));
        }
        if self.scale.button_radius <= 0 || self.scale.submit_radius <= 0 {
            return Err(crate::Error::Config(
                "scale radii must be positive".to_string(),
            ));
        }
        if self.motion.stop_y >= self.motion.crossover_y {
            return Err(crate::Error::Config(format!(
                "motion.stop_y ({}) must be below motion.crossover_y ({})",
                self.motion.stop_y, self.motion.crossover_y
            )));
        }
        if self.motion.crossover_y >= self.motion.start_y {
            return Err(crate::Error::Config(format!(
                "motion.crossover_y ({}) must be below motion.start_y ({})",
                self.motion.crossover_y, self.motion.start_y
            )));
        }
        if self.trials.repeats_per_speed == 0 {
            return Err(crate::Error::Config(
                "trials.repeats_per_speed must be > 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Motion parameters for one animation run at the given speed
    pub fn motion_params(&self, speed_px_per_tick: i32) -> MotionParams {
        MotionParams::new(
            speed_px_per_tick,
            self.motion.crossover_y,
            (self.motion.start_x, self.motion.start_y),
        )
    }

    /// Scale geometry derived from the scale section
    pub fn scale_geometry(&self) -> ScaleGeometry {
        ScaleGeometry {
            canvas_width: self.scale.canvas_width,
            usable_width: self.scale.usable_width,
            button_radius: self.scale.button_radius,
            row_y: self.scale.row_y,
            submit_center: (self.scale.submit_x, self.scale.submit_y),
            submit_radius: self.scale.submit_radius,
        }
    }

    /// Load config from file
    pub fn load(path: &PathBuf) -> Result<Self, crate::Error> {
        let content = std::fs::read_to_string(path)?;
        let config: Self =
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from default location
    pub fn load_default() -> Result<Self, crate::Error> {
        let path = Self::default_path();
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to file
    pub fn save(&self, path: &PathBuf) -> Result<(), crate::Error> {
        let content = toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;

        // Create parent directories
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Save to default location
    pub fn save_default(&self) -> Result<(), crate::Error> {
        self.save(&Self::default_path())
    }

    /// Get default config path
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .map(|h| h.join(".stimulus_rater").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }

    /// Generate TOML representation
    pub fn to_toml(&self) -> Result<String, crate::Error> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }
}
