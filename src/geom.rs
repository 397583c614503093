// Copyright 2025 Lars Brubaker
// License: MIT
//
// Pixel-space geometry primitives shared by the rasterizer, the rectangle
// finder and the sampler.

use serde::{Deserialize, Serialize};

pub type Real = f64;

/// A polygon vertex in pixel space.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }
}

/// Axis-aligned box `(x_min, y_min, x_max, y_max)` in integer pixel coordinates.
///
/// Rectangles returned by the inscribed-rectangle search are inclusive cell
/// spans: every cell from `x_min..=x_max` × `y_min..=y_max` is filled. Sampled
/// regions use edge coordinates in `[0, width] × [0, height]`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x_min: i32,
    pub y_min: i32,
    pub x_max: i32,
    pub y_max: i32,
}

impl Rect {
    #[inline]
    pub const fn new(x_min: i32, y_min: i32, x_max: i32, y_max: i32) -> Self {
        Rect { x_min, y_min, x_max, y_max }
    }

    /// Edge-to-edge extent along x.
    #[inline]
    pub fn width(&self) -> i32 {
        self.x_max - self.x_min
    }

    /// Edge-to-edge extent along y.
    #[inline]
    pub fn height(&self) -> i32 {
        self.y_max - self.y_min
    }

    /// Number of columns covered when the rect is read as an inclusive cell span.
    #[inline]
    pub fn cell_width(&self) -> i32 {
        self.x_max - self.x_min + 1
    }

    /// Number of rows covered when the rect is read as an inclusive cell span.
    #[inline]
    pub fn cell_height(&self) -> i32 {
        self.y_max - self.y_min + 1
    }

    #[inline]
    pub fn cell_area(&self) -> u64 {
        if self.x_max < self.x_min || self.y_max < self.y_min {
            return 0;
        }
        self.cell_width() as u64 * self.cell_height() as u64
    }

    /// True when the box has no extent along at least one axis.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    #[inline]
    pub fn contains_cell(&self, x: i32, y: i32) -> bool {
        x >= self.x_min && x <= self.x_max && y >= self.y_min && y <= self.y_max
    }

    pub fn as_tuple(&self) -> (i32, i32, i32, i32) {
        (self.x_min, self.y_min, self.x_max, self.y_max)
    }
}

impl From<(i32, i32, i32, i32)> for Rect {
    fn from(t: (i32, i32, i32, i32)) -> Self {
        Rect::new(t.0, t.1, t.2, t.3)
    }
}

/// Which winding numbers count as "inside" when filling a polygon.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindingRule {
    Odd,
    #[default]
    NonZero,
    Positive,
    Negative,
    AbsGeqTwo,
}

impl WindingRule {
    #[inline]
    pub fn is_inside(self, n: i32) -> bool {
        match self {
            WindingRule::Odd => n & 1 != 0,
            WindingRule::NonZero => n != 0,
            WindingRule::Positive => n > 0,
            WindingRule::Negative => n < 0,
            WindingRule::AbsGeqTwo => n >= 2 || n <= -2,
        }
    }
}

/// Where edge (u, v) crosses the horizontal line at `y`, together with its
/// winding direction (+1 going down in raster order, -1 going up).
///
/// Uses a half-open span `[min(u.y, v.y), max(u.y, v.y))` so a scanline through
/// a shared vertex is counted exactly once. Horizontal edges never cross.
#[inline]
pub fn edge_crossing(u_x: Real, u_y: Real, v_x: Real, v_y: Real, y: Real) -> Option<(Real, i32)> {
    if u_y == v_y {
        return None;
    }
    // Always interpolate from the lower endpoint so coincident edges walked in
    // opposite directions produce bit-identical crossings.
    let ((lo_x, lo_y), (hi_x, hi_y), dir) = if u_y < v_y {
        ((u_x, u_y), (v_x, v_y), 1)
    } else {
        ((v_x, v_y), (u_x, u_y), -1)
    };
    if y < lo_y || y >= hi_y {
        return None;
    }
    let t = (y - lo_y) / (hi_y - lo_y);
    Some((lo_x + (hi_x - lo_x) * t, dir))
}

/// Shoelace signed area of a closed vertex loop. Positive for clockwise
/// loops in raster coordinates (y pointing down).
pub fn signed_area(points: &[Point]) -> Real {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut area = 0.0;
    for i in 0..n {
        let p = points[i];
        let q = points[(i + 1) % n];
        area += p.x as Real * q.y as Real - q.x as Real * p.y as Real;
    }
    area * 0.5
}
