// Copyright 2025 Lars Brubaker
// License: MIT
//
// Road-surface polygons: parsing the normalized coordinate string a segmenter
// produces and holding the clamped pixel-space vertices.

use crate::error::{RegionError, Result};
use crate::geom::{signed_area, Point, Real};

/// A simple polygon in pixel space, implicitly closed.
///
/// Always has at least 3 vertices, each clamped to
/// `[0, width-1] × [0, height-1]` of the raster it was built against.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
    width: u32,
    height: u32,
}

impl Polygon {
    /// Parse `"nx1 ny1 nx2 ny2 ..."` (normalized to `[0,1]`) against a
    /// `width × height` raster.
    pub fn parse(coords: &str, width: u32, height: u32) -> Result<Self> {
        let tokens: Vec<&str> = coords.split_whitespace().collect();
        if tokens.is_empty() {
            return Err(RegionError::invalid_polygon("empty coordinate string"));
        }
        if tokens.len() % 2 != 0 {
            return Err(RegionError::invalid_polygon(format!(
                "odd number of coordinates ({})",
                tokens.len()
            )));
        }

        let mut values = Vec::with_capacity(tokens.len());
        for tok in &tokens {
            let v: Real = tok
                .parse()
                .map_err(|_| RegionError::invalid_polygon(format!("non-numeric token {:?}", tok)))?;
            if !v.is_finite() {
                return Err(RegionError::invalid_polygon(format!("non-finite token {:?}", tok)));
            }
            values.push(v);
        }

        let pairs: Vec<(Real, Real)> = values.chunks_exact(2).map(|c| (c[0], c[1])).collect();
        Self::from_normalized(&pairs, width, height)
    }

    /// Build from normalized `(nx, ny)` pairs.
    pub fn from_normalized(pairs: &[(Real, Real)], width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(RegionError::invalid_polygon(format!(
                "raster size {}x{} has no pixels",
                width, height
            )));
        }
        if pairs.len() < 3 {
            return Err(RegionError::invalid_polygon(format!(
                "need at least 3 points, got {}",
                pairs.len()
            )));
        }

        let vertices = pairs
            .iter()
            .map(|&(nx, ny)| {
                Point::new(scale_clamped(nx, width), scale_clamped(ny, height))
            })
            .collect();

        Ok(Polygon { vertices, width, height })
    }

    /// Build from a segmenter's pixel-space outline by normalizing against the
    /// image size first, exactly as the string contract would.
    pub fn from_pixels(points: &[(f32, f32)], width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(RegionError::invalid_polygon(format!(
                "raster size {}x{} has no pixels",
                width, height
            )));
        }
        let pairs: Vec<(Real, Real)> = points
            .iter()
            .map(|&(x, y)| (x as Real / width as Real, y as Real / height as Real))
            .collect();
        Self::from_normalized(&pairs, width, height)
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Raster size `(width, height)` the polygon was built against.
    pub fn raster_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Row of the topmost vertex (smallest y). Serves as the horizon proxy.
    pub fn topmost_y(&self) -> i32 {
        self.vertices.iter().map(|p| p.y).min().unwrap_or(0)
    }

    pub fn signed_area(&self) -> Real {
        signed_area(&self.vertices)
    }

    pub fn area(&self) -> Real {
        self.signed_area().abs()
    }
}

/// Serialize a pixel-space outline into the normalized `"nx ny nx ny ..."`
/// form accepted by [`Polygon::parse`].
pub fn normalized_string(points: &[(f32, f32)], width: u32, height: u32) -> String {
    points
        .iter()
        .map(|&(x, y)| {
            let nx = x as Real / width.max(1) as Real;
            let ny = y as Real / height.max(1) as Real;
            format!("{} {}", nx, ny)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Pick the detection with the largest enclosed area. Ties keep the earlier
/// candidate; an empty slice yields `None`.
pub fn largest_polygon(candidates: &[Polygon]) -> Option<&Polygon> {
    let mut best: Option<&Polygon> = None;
    for poly in candidates {
        match best {
            Some(b) if poly.area() <= b.area() => {}
            _ => best = Some(poly),
        }
    }
    best
}

#[inline]
fn scale_clamped(n: Real, extent: u32) -> i32 {
    let px = (n * extent as Real).trunc();
    let max = extent as Real - 1.0;
    px.clamp(0.0, max) as i32
}
