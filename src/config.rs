//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`GM_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use gridmarch_core::{FieldParams, Rgb, DEFAULT_PALETTE};
use serde::{Serialize, Deserialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Field configuration
    #[serde(default)]
    pub field: FieldConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`GM_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // GM_FIELD__GROUP_COUNT=5 -> field.group_count = 5
        figment = figment.merge(Env::prefixed("GM_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
    /// Enable VSync
    pub vsync: bool,
    /// Simulation frames per second
    pub target_fps: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "GridMarch".to_string(),
            width: 1280,
            height: 720,
            fullscreen: false,
            vsync: true,
            target_fps: 60,
        }
    }
}

/// Field configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Grid cell size in pixels
    pub grid_size: u32,
    /// Gap between cells in pixels
    pub separation: u32,
    /// Number of groups
    pub group_count: usize,
    /// Frames between moves
    pub move_interval: u64,
    /// Probability that a lattice point holds a figure
    pub density: f64,
    /// Cap on direction resampling per group
    pub max_direction_attempts: u32,
    /// Fixed seed for a reproducible field (random when unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Group colors as [r, g, b]
    pub palette: Vec<[u8; 3]>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        let params = FieldParams::default();
        Self {
            grid_size: params.grid_size,
            separation: params.separation,
            group_count: params.group_count,
            move_interval: params.move_interval,
            density: params.density,
            max_direction_attempts: params.max_direction_attempts,
            seed: None,
            palette: DEFAULT_PALETTE.iter().map(|&c| c.into()).collect(),
        }
    }
}

impl FieldConfig {
    /// Convert to core field parameters, normalizing out-of-range values
    pub fn to_field_params(&self) -> FieldParams {
        FieldParams::new(self.grid_size, self.separation)
            .with_group_count(self.group_count)
            .with_move_interval(self.move_interval)
            .with_density(self.density)
            .with_max_direction_attempts(self.max_direction_attempts)
    }

    /// Palette as core colors
    pub fn palette(&self) -> Vec<Rgb> {
        self.palette.iter().map(|&c| Rgb::from(c)).collect()
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// Background color [r, g, b]
    pub background_color: [u8; 3],
    /// Triangles used to approximate each ellipse
    pub ellipse_segments: u32,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            background_color: [0, 0, 0],
            ellipse_segments: 24,
        }
    }
}

impl RenderingConfig {
    pub fn background(&self) -> Rgb {
        Rgb::from(self.background_color)
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
    /// Seconds between frame statistics log lines (0 disables them)
    pub stats_interval_secs: f32,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            stats_interval_secs: 5.0,
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
