// inpaint-region: largest inscribed rectangle and biased inpainting-region
// sampling for road-surface polygons
// Copyright 2025 Lars Brubaker
// License: MIT

pub mod config;
pub mod error;
pub mod geom;
pub mod heightmap;
pub mod histogram;
pub mod inscribed;
pub mod mask;
pub mod placement;
pub mod polygon;
pub mod raster;
pub mod sampler;

pub use config::PlacementConfig;
pub use error::{RegionError, Result};
pub use geom::{Point, Rect, WindingRule};
pub use heightmap::HeightMap;
pub use inscribed::{find_inscribed_region, find_largest_rectangle, InscribedRegion};
pub use mask::soft_mask;
pub use placement::{Placement, PlacementPlanner};
pub use polygon::{largest_polygon, Polygon};
pub use raster::OccupancyGrid;
pub use sampler::{sample_region, RegionSampler, SampleBounds};
