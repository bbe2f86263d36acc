//! # Configuration Module
//!
//! Handles loading and validating configuration from TOML files.

use serde::Deserialize;
use serde::de::Error;
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::profile::builtin::PROFILE_NAMES;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub pad: PadConfig,

    #[serde(default)]
    pub click: ClickConfig,

    #[serde(default)]
    pub profile: ProfileConfig,

    #[serde(default)]
    pub remote: RemoteConfig,

    #[serde(default)]
    pub view: ViewConfig,

    #[serde(default)]
    pub replay: ReplayConfig,
}

/// Radial pad tuning
#[derive(Debug, Deserialize, Clone)]
pub struct PadConfig {
    /// Hub disc radius as a fraction of the pad radius
    #[serde(default = "default_hub_ratio")]
    pub hub_ratio: f64,
}

/// Quick-tap click detection thresholds
#[derive(Debug, Deserialize, Clone)]
pub struct ClickConfig {
    #[serde(default = "default_detection_time_ms")]
    pub detection_time_ms: u64,

    #[serde(default = "default_detection_dist_px2")]
    pub detection_dist_px2: f32,
}

/// Profile selection
#[derive(Debug, Deserialize, Clone)]
pub struct ProfileConfig {
    /// Profile selected at session start
    #[serde(default = "default_profile_name")]
    pub default: String,

    /// Substitute the default profile for unknown names instead of failing
    #[serde(default = "default_fallback_to_default")]
    pub fallback_to_default: bool,
}

/// Control channel endpoint and remote screen geometry
#[derive(Debug, Deserialize, Clone)]
pub struct RemoteConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Control channel transport: "tcp" or "udp"
    #[serde(default = "default_protocol")]
    pub protocol: String,

    #[serde(default = "default_screen_width")]
    pub screen_width: u16,

    #[serde(default = "default_screen_height")]
    pub screen_height: u16,
}

/// Simulated client view used by the replay binary
#[derive(Debug, Deserialize, Clone)]
pub struct ViewConfig {
    #[serde(default = "default_view_width")]
    pub width: u32,

    #[serde(default = "default_view_height")]
    pub height: u32,
}

/// Touch replay script settings
#[derive(Debug, Deserialize, Clone)]
pub struct ReplayConfig {
    #[serde(default = "default_script")]
    pub script: String,

    #[serde(default = "default_log_interval_events")]
    pub log_interval_events: u64,
}

// Default value functions
fn default_hub_ratio() -> f64 { 0.28 }

fn default_detection_time_ms() -> u64 { 100 }
fn default_detection_dist_px2() -> f32 { 81.0 }

fn default_profile_name() -> String { "Basic".to_string() }
fn default_fallback_to_default() -> bool { true }

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 8555 }
fn default_protocol() -> String { "tcp".to_string() }
fn default_screen_width() -> u16 { 1280 }
fn default_screen_height() -> u16 { 720 }

fn default_view_width() -> u32 { 1280 }
fn default_view_height() -> u32 { 720 }

fn default_script() -> String { "touches.jsonl".to_string() }
fn default_log_interval_events() -> u64 { 100 }

impl Default for PadConfig {
    fn default() -> Self {
        Self { hub_ratio: default_hub_ratio() }
    }
}

impl Default for ClickConfig {
    fn default() -> Self {
        Self {
            detection_time_ms: default_detection_time_ms(),
            detection_dist_px2: default_detection_dist_px2(),
        }
    }
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            default: default_profile_name(),
            fallback_to_default: default_fallback_to_default(),
        }
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            protocol: default_protocol(),
            screen_width: default_screen_width(),
            screen_height: default_screen_height(),
        }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            width: default_view_width(),
            height: default_view_height(),
        }
    }
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            script: default_script(),
            log_interval_events: default_log_interval_events(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pad: PadConfig::default(),
            click: ClickConfig::default(),
            profile: ProfileConfig::default(),
            remote: RemoteConfig::default(),
            view: ViewConfig::default(),
            replay: ReplayConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be read
    /// - TOML parsing fails
    /// - Validation fails
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use vpad_bridge::config::Config;
    ///
    /// let config = Config::load("config/default.toml")?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns error if any configuration value is out of valid range
    pub fn validate(&self) -> Result<()> {
        if self.pad.hub_ratio <= 0.0 || self.pad.hub_ratio >= 1.0 {
            return Err(crate::error::VpadError::Config(
                toml::de::Error::custom("hub_ratio must be between 0.0 and 1.0 exclusive")
            ));
        }

        if self.click.detection_time_ms == 0 || self.click.detection_time_ms > 10000 {
            return Err(crate::error::VpadError::Config(
                toml::de::Error::custom("detection_time_ms must be between 1 and 10000")
            ));
        }

        if self.click.detection_dist_px2 <= 0.0 {
            return Err(crate::error::VpadError::Config(
                toml::de::Error::custom("detection_dist_px2 must be greater than 0")
            ));
        }

        if !PROFILE_NAMES.contains(&self.profile.default.as_str()) {
            return Err(crate::error::VpadError::Config(
                toml::de::Error::custom(format!(
                    "unknown default profile '{}' (expected one of: {})",
                    self.profile.default,
                    PROFILE_NAMES.join(", ")
                ))
            ));
        }

        if self.remote.host.is_empty() {
            return Err(crate::error::VpadError::Config(
                toml::de::Error::custom("remote host cannot be empty")
            ));
        }

        if self.remote.port == 0 {
            return Err(crate::error::VpadError::Config(
                toml::de::Error::custom("remote port cannot be 0")
            ));
        }

        if !["tcp", "udp"].contains(&self.remote.protocol.as_str()) {
            return Err(crate::error::VpadError::Config(
                toml::de::Error::custom("remote protocol must be 'tcp' or 'udp'")
            ));
        }

        if self.remote.screen_width == 0 || self.remote.screen_height == 0 {
            return Err(crate::error::VpadError::Config(
                toml::de::Error::custom("remote screen dimensions cannot be 0")
            ));
        }

        if self.view.width == 0 || self.view.height == 0 {
            return Err(crate::error::VpadError::Config(
                toml::de::Error::custom("view dimensions cannot be 0")
            ));
        }

        if self.replay.script.is_empty() {
            return Err(crate::error::VpadError::Config(
                toml::de::Error::custom("replay script path cannot be empty")
            ));
        }

        if self.replay.log_interval_events == 0 {
            return Err(crate::error::VpadError::Config(
                toml::de::Error::custom("log_interval_events must be greater than 0")
            ));
        }

        Ok(())
    }
}
