use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::wheel::SpringParams;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub wheel: WheelConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
    #[serde(default = "default_panels")]
    pub panels: Vec<PanelConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ui: UiConfig::default(),
            wheel: WheelConfig::default(),
            keymap: KeymapConfig::default(),
            panels: default_panels(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Idle tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Frame rate while the wheel is in motion
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            animation_fps: default_animation_fps(),
        }
    }
}

/// Wheel behavior tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WheelConfig {
    /// Angular distance between adjacent panels, in degrees
    #[serde(default = "default_degree_increment")]
    pub degree_increment: f64,
    /// Raw wheel units that make up one full step
    #[serde(default = "default_wheel_divisor")]
    pub wheel_divisor: f64,
    /// Flip the wheel direction
    #[serde(default = "default_true")]
    pub invert_wheel: bool,
    /// Largest raw-position change a single wheel sample may apply, in steps
    #[serde(default = "default_max_step_delta")]
    pub max_step_delta: f64,
    /// Quiet period after the last input before the raw position is
    /// collapsed onto a whole step, in milliseconds
    #[serde(default = "default_resync_delay")]
    pub resync_delay_ms: u64,
    /// Peak bob displacement, in display units
    #[serde(default = "default_bob_amplitude")]
    pub bob_amplitude: f64,
    /// Rotation speed at which the bob is fully suppressed, in degrees per second
    #[serde(default = "default_bob_max_velocity")]
    pub bob_max_velocity: f64,
    /// Spring driving the rotation angle
    #[serde(
        default = "default_rotation_spring",
        deserialize_with = "de_rotation_spring"
    )]
    pub rotation_spring: SpringParams,
    /// Spring driving the bob displacement
    #[serde(default = "default_bob_spring", deserialize_with = "de_bob_spring")]
    pub bob_spring: SpringParams,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            degree_increment: default_degree_increment(),
            wheel_divisor: default_wheel_divisor(),
            invert_wheel: default_true(),
            max_step_delta: default_max_step_delta(),
            resync_delay_ms: default_resync_delay(),
            bob_amplitude: default_bob_amplitude(),
            bob_max_velocity: default_bob_max_velocity(),
            rotation_spring: default_rotation_spring(),
            bob_spring: default_bob_spring(),
        }
    }
}

impl WheelConfig {
    /// Reject tuning values the controller arithmetic cannot work with.
    pub fn validate(&self) -> crate::Result<()> {
        for (name, value) in [
            ("degree_increment", self.degree_increment),
            ("wheel_divisor", self.wheel_divisor),
            ("max_step_delta", self.max_step_delta),
            ("bob_max_velocity", self.bob_max_velocity),
        ] {
            if value <= 0.0 {
                return Err(crate::Error::Tuning(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        for (name, spring) in [
            ("rotation_spring", &self.rotation_spring),
            ("bob_spring", &self.bob_spring),
        ] {
            if spring.mass <= 0.0 || spring.stiffness <= 0.0 || spring.damping <= 0.0 {
                return Err(crate::Error::Tuning(format!(
                    "{name} needs positive mass, stiffness and damping"
                )));
            }
            if spring.rest_speed <= 0.0 || spring.rest_delta <= 0.0 {
                return Err(crate::Error::Tuning(format!(
                    "{name} needs positive rest thresholds"
                )));
            }
        }

        Ok(())
    }
}

/// Keymap configuration using Vim-style notation
/// Format: "q", "<C-c>" (Ctrl+c), "<Up>", "<Down>", "<Left>", "<Right>"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    /// Quit the application
    #[serde(default = "default_key_quit")]
    pub quit: String,
    /// Toggle the help overlay
    #[serde(default = "default_key_help")]
    pub help: String,
    /// Rotate one step forward
    #[serde(default = "default_key_rotate_forward")]
    pub rotate_forward: String,
    /// Alternate binding for forward rotation
    #[serde(default = "default_key_rotate_forward_alt")]
    pub rotate_forward_alt: String,
    /// Rotate one step back
    #[serde(default = "default_key_rotate_back")]
    pub rotate_back: String,
    /// Alternate binding for backward rotation
    #[serde(default = "default_key_rotate_back_alt")]
    pub rotate_back_alt: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            help: default_key_help(),
            rotate_forward: default_key_rotate_forward(),
            rotate_forward_alt: default_key_rotate_forward_alt(),
            rotate_back: default_key_rotate_back(),
            rotate_back_alt: default_key_rotate_back_alt(),
        }
    }
}

/// One panel on the wheel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Panel title
    pub title: String,
    /// Body text shown inside the panel
    #[serde(default)]
    pub body: String,
    /// Accent color as "#rrggbb"
    #[serde(default = "default_panel_color")]
    pub color: String,
}

// Default keymap values (Vim-style notation)
fn default_key_quit() -> String { "q".to_string() }
fn default_key_help() -> String { "?".to_string() }
fn default_key_rotate_forward() -> String { "<Down>".to_string() }
fn default_key_rotate_forward_alt() -> String { "<Left>".to_string() }
fn default_key_rotate_back() -> String { "<Up>".to_string() }
fn default_key_rotate_back_alt() -> String { "<Right>".to_string() }

fn default_tick_rate() -> u64 {
    100
}

fn default_animation_fps() -> u64 {
    60
}

fn default_degree_increment() -> f64 {
    90.0
}

fn default_wheel_divisor() -> f64 {
    220.0
}

fn default_true() -> bool {
    true
}

fn default_max_step_delta() -> f64 {
    0.03 // steps per wheel sample
}

fn default_resync_delay() -> u64 {
    50 // ms
}

fn default_bob_amplitude() -> f64 {
    100.0
}

fn default_bob_max_velocity() -> f64 {
    200.0 // degrees per second
}

fn default_rotation_spring() -> SpringParams {
    SpringParams {
        mass: 2.0,
        stiffness: 100.0,
        damping: 50.0,
        rest_speed: 10.0,
        rest_delta: 0.01,
    }
}

fn default_bob_spring() -> SpringParams {
    SpringParams {
        mass: 1.0,
        stiffness: 200.0,
        damping: 50.0,
        rest_speed: 3.0,
        rest_delta: 0.01,
    }
}

/// Spring table as written in the config file. Omitted fields keep the
/// enclosing spring's defaults.
#[derive(Debug, Deserialize)]
struct SpringOverrides {
    mass: Option<f64>,
    stiffness: Option<f64>,
    damping: Option<f64>,
    rest_speed: Option<f64>,
    rest_delta: Option<f64>,
}

impl SpringOverrides {
    fn merge(self, base: SpringParams) -> SpringParams {
        SpringParams {
            mass: self.mass.unwrap_or(base.mass),
            stiffness: self.stiffness.unwrap_or(base.stiffness),
            damping: self.damping.unwrap_or(base.damping),
            rest_speed: self.rest_speed.unwrap_or(base.rest_speed),
            rest_delta: self.rest_delta.unwrap_or(base.rest_delta),
        }
    }
}

fn de_rotation_spring<'de, D>(deserializer: D) -> Result<SpringParams, D::Error>
where
    D: serde::Deserializer<'de>,
{
    SpringOverrides::deserialize(deserializer).map(|o| o.merge(default_rotation_spring()))
}

fn de_bob_spring<'de, D>(deserializer: D) -> Result<SpringParams, D::Error>
where
    D: serde::Deserializer<'de>,
{
    SpringOverrides::deserialize(deserializer).map(|o| o.merge(default_bob_spring()))
}

fn default_panel_color() -> String {
    "#9ca3af".to_string()
}

fn default_panels() -> Vec<PanelConfig> {
    let mut panels = vec![PanelConfig {
        title: "Thomas Forbes".to_string(),
        body: "\"to approach obstacles not as impediments, but as creative catalysts\" - Ryan Holiday".to_string(),
        color: "#ddd6fe".to_string(),
    }];

    let projects = [
        ("Project One", "#bfdbfe"),
        ("Project Two", "#bae6fd"),
        ("Project Three", "#a7f3d0"),
        ("Project Four", "#bbf7d0"),
        ("Project Five", "#fed7aa"),
        ("Project Six", "#fecaca"),
    ];
    for (title, color) in projects {
        panels.push(PanelConfig {
            title: title.to_string(),
            body: String::new(),
            color: color.to_string(),
        });
    }

    panels
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/foliowheel/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("foliowheel")
            .join("config.toml")
    }
}
