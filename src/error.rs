// Copyright 2025 Lars Brubaker
// License: MIT
//
// Error taxonomy for the inscribed-region pipeline.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegionError {
    /// The coordinate string (or raster size) cannot describe a polygon.
    #[error("invalid polygon: {0}")]
    InvalidPolygon(String),

    /// The polygon rasterized fine but no positive-area rectangle fits inside it.
    #[error("no inscribed rectangle with positive area")]
    NoInscribedRegion,

    /// The sampler kept producing zero-width or zero-height boxes.
    #[error("sampled region degenerate after {attempts} attempt(s)")]
    DegenerateSample { attempts: u32 },

    #[error("invalid placement config: {0}")]
    InvalidConfig(String),

    #[error("failed to parse placement config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("failed to read placement config: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RegionError>;

impl RegionError {
    pub(crate) fn invalid_polygon(msg: impl Into<String>) -> Self {
        RegionError::InvalidPolygon(msg.into())
    }
}
