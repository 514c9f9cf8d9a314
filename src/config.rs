//! Coordinator configuration.
//!
//! `ViewConfig` holds what an off-screen coordinator starts out with: whether
//! its views are transparent, and the painting state and frame rate that
//! views get when they are created before anybody changed them.
//!
//! # Examples
//!
//! ```rust
//! use gosub_offscreen::config::ViewConfig;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let cfg = ViewConfig::default();
//! assert_eq!(cfg.frame_rate, 60);
//! assert!(cfg.painting_enabled);
//!
//! let cfg = ViewConfig::builder().transparent(true).frame_rate(30).build()?;
//! assert!(cfg.transparent);
//!
//! let cfg = ViewConfig::from_json(r#"{ "frame_rate": 24 }"#)?;
//! assert_eq!(cfg.frame_rate, 24);
//! # Ok(()) }
//! ```

use crate::errors::ConfigError;
use crate::render::MAX_FRAME_RATE;
use serde::Deserialize;

const DEFAULT_FRAME_RATE: u32 = 60;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Views get a transparent background. Fixed for the coordinator's lifetime.
    pub transparent: bool,
    /// Initial painting state for views created before it is changed.
    pub painting_enabled: bool,
    /// Initial frame rate for views created before it is changed.
    pub frame_rate: u32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            transparent: false,
            painting_enabled: true,
            frame_rate: DEFAULT_FRAME_RATE,
        }
    }
}

impl ViewConfig {
    pub fn builder() -> ViewConfigBuilder {
        ViewConfigBuilder::default()
    }

    /// Parses and validates a JSON configuration. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<ViewConfig, ConfigError> {
        let config: ViewConfig = serde_json::from_str(json)?;
        validate(&config)?;
        Ok(config)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ViewConfigBuilder {
    inner: ViewConfig,
}

impl ViewConfigBuilder {
    #[inline]
    fn map(mut self, f: impl FnOnce(&mut ViewConfig)) -> Self {
        f(&mut self.inner);
        self
    }

    pub fn transparent(self, on: bool) -> Self { self.map(|c| c.transparent = on) }
    pub fn painting_enabled(self, on: bool) -> Self { self.map(|c| c.painting_enabled = on) }
    pub fn frame_rate(self, fps: u32) -> Self { self.map(|c| c.frame_rate = fps) }

    /// Validate and build the final config.
    pub fn build(self) -> Result<ViewConfig, ConfigError> {
        validate(&self.inner)?;
        Ok(self.inner)
    }
}

fn validate(c: &ViewConfig) -> Result<(), ConfigError> {
    if c.frame_rate == 0 {
        return Err(ConfigError::ZeroFrameRate);
    }
    if c.frame_rate > MAX_FRAME_RATE {
        return Err(ConfigError::FrameRateTooHigh(c.frame_rate));
    }
    Ok(())
}
