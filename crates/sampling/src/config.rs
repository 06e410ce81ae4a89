//! Typed sampling configuration, loaded from TOML.
//!
//! ```toml
//! [model_params]
//! history_num_frames = 0
//! future_num_frames = 50
//!
//! [raster_params]
//! raster_size = [224, 224]
//! pixel_size = [0.5, 0.5]
//! ego_center = [0.25, 0.5]
//! filter_agents_threshold = 0.5
//! ```

use std::path::Path;

use log::debug;
use rasterization::RenderContext;
use serde::{Deserialize, Serialize};

use crate::{Result, SamplingError};

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub model_params: ModelParams,
    #[serde(default)]
    pub raster_params: RasterParams,
}

/// Window lengths, in frames, around the sampled state.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ModelParams {
    #[serde(default)]
    pub history_num_frames: usize,
    #[serde(default = "default_step_size")]
    pub history_step_size: usize,
    #[serde(default = "default_future_num_frames")]
    pub future_num_frames: usize,
    #[serde(default = "default_step_size")]
    pub future_step_size: usize,
}

/// Consumed by rasterization only; never by target extraction.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct RasterParams {
    /// Width, height in pixels.
    #[serde(default = "default_raster_size")]
    pub raster_size: (u32, u32),
    /// Metres per pixel along x, y.
    #[serde(default = "default_pixel_size")]
    pub pixel_size: (f64, f64),
    /// Anchor of the reference agent as a fraction of the raster size.
    #[serde(default = "default_ego_center")]
    pub ego_center: (f64, f64),
    #[serde(default = "default_filter_agents_threshold")]
    pub filter_agents_threshold: f64,
}

fn default_step_size() -> usize {
    1
}
fn default_future_num_frames() -> usize {
    50
}
fn default_raster_size() -> (u32, u32) {
    (224, 224)
}
fn default_pixel_size() -> (f64, f64) {
    (0.5, 0.5)
}
fn default_ego_center() -> (f64, f64) {
    (0.25, 0.5)
}
fn default_filter_agents_threshold() -> f64 {
    0.5
}

impl Default for ModelParams {
    fn default() -> Self {
        ModelParams {
            history_num_frames: 0,
            history_step_size: default_step_size(),
            future_num_frames: default_future_num_frames(),
            future_step_size: default_step_size(),
        }
    }
}

impl Default for RasterParams {
    fn default() -> Self {
        RasterParams {
            raster_size: default_raster_size(),
            pixel_size: default_pixel_size(),
            ego_center: default_ego_center(),
            filter_agents_threshold: default_filter_agents_threshold(),
        }
    }
}

impl RasterParams {
    pub fn render_context(&self) -> Result<RenderContext> {
        Ok(RenderContext::new(
            self.raster_size,
            self.pixel_size,
            self.ego_center,
        )?)
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        debug!("loaded sampling config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let m = &self.model_params;
        if m.future_num_frames == 0 {
            return Err(SamplingError::Config(
                "future_num_frames must be at least 1".to_string(),
            ));
        }
        if m.history_step_size == 0 || m.future_step_size == 0 {
            return Err(SamplingError::Config(
                "step sizes must be at least 1".to_string(),
            ));
        }
        let r = &self.raster_params;
        if !(0.0..=1.0).contains(&r.filter_agents_threshold) {
            return Err(SamplingError::Config(format!(
                "filter_agents_threshold must lie in [0, 1], got {}",
                r.filter_agents_threshold
            )));
        }
        r.render_context()
            .map_err(|e| SamplingError::Config(e.to_string()))?;
        Ok(())
    }
}
