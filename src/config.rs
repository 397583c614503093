// Copyright 2025 Lars Brubaker
// License: MIT
//
// Placement settings, loadable from TOML. Every key is optional; missing keys
// fall back to the defaults below.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{RegionError, Result};
use crate::geom::{Real, WindingRule};
use crate::sampler::{
    RegionSampler, DEFAULT_CENTER_MARGIN, DEFAULT_MAX_ATTEMPTS, DEFAULT_OFFSET_GAIN,
    DEFAULT_RANGE_SHRINK,
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlacementConfig {
    pub center_margin: Real,
    pub offset_gain: Real,
    pub min_width_frac: Real,
    pub max_width_frac: Real,
    pub min_height_frac: Real,
    pub max_height_frac: Real,
    pub max_attempts: u32,
    pub range_shrink: Real,
    /// Standard deviation of the mask blur, in pixels.
    pub blur_sigma: f32,
    /// One placement is planned per entry; must match `guidance_scales`.
    pub strengths: Vec<f32>,
    pub guidance_scales: Vec<f32>,
    pub winding_rule: WindingRule,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        PlacementConfig {
            center_margin: DEFAULT_CENTER_MARGIN,
            offset_gain: DEFAULT_OFFSET_GAIN,
            min_width_frac: 0.5,
            max_width_frac: 0.9,
            min_height_frac: 0.5,
            max_height_frac: 0.9,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            range_shrink: DEFAULT_RANGE_SHRINK,
            blur_sigma: 50.0,
            strengths: vec![0.5, 0.55, 0.55, 0.6],
            guidance_scales: vec![11.0, 11.0, 6.0, 4.0],
            winding_rule: WindingRule::NonZero,
        }
    }
}

impl PlacementConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let cfg: PlacementConfig = toml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        let fracs = [
            ("min_width_frac", self.min_width_frac),
            ("max_width_frac", self.max_width_frac),
            ("min_height_frac", self.min_height_frac),
            ("max_height_frac", self.max_height_frac),
        ];
        for (name, v) in fracs {
            if !(v > 0.0 && v <= 1.0) {
                return Err(invalid(format!("{} must be in (0, 1], got {}", name, v)));
            }
        }
        if self.min_width_frac > self.max_width_frac {
            return Err(invalid("min_width_frac exceeds max_width_frac"));
        }
        if self.min_height_frac > self.max_height_frac {
            return Err(invalid("min_height_frac exceeds max_height_frac"));
        }
        if !(0.0..0.5).contains(&self.center_margin) {
            return Err(invalid(format!(
                "center_margin must be in [0, 0.5), got {}",
                self.center_margin
            )));
        }
        if !self.offset_gain.is_finite() {
            return Err(invalid("offset_gain must be finite"));
        }
        if self.max_attempts == 0 {
            return Err(invalid("max_attempts must be at least 1"));
        }
        if !(self.range_shrink > 0.0 && self.range_shrink < 1.0) {
            return Err(invalid(format!(
                "range_shrink must be in (0, 1), got {}",
                self.range_shrink
            )));
        }
        if !self.blur_sigma.is_finite() || self.blur_sigma < 0.0 {
            return Err(invalid("blur_sigma must be a non-negative number"));
        }
        if self.strengths.is_empty() {
            return Err(invalid("at least one placement variant is required"));
        }
        if self.strengths.len() != self.guidance_scales.len() {
            return Err(invalid(format!(
                "{} strengths but {} guidance scales",
                self.strengths.len(),
                self.guidance_scales.len()
            )));
        }
        Ok(())
    }

    pub fn sampler(&self) -> RegionSampler {
        RegionSampler {
            center_margin: self.center_margin,
            offset_gain: self.offset_gain,
            max_attempts: self.max_attempts,
            range_shrink: self.range_shrink,
        }
    }
}

fn invalid(msg: impl Into<String>) -> RegionError {
    RegionError::InvalidConfig(msg.into())
}
