// Copyright 2025 Lars Brubaker
// License: MIT
//
// Scanline polygon fill into a binary occupancy grid.
//
// Pixels are sampled at their centers (x + 0.5, y + 0.5). For each row the
// polygon edges are intersected with the scanline, crossings are sorted by x,
// and the running winding number decides which spans are inside.

use log::debug;

use crate::geom::{edge_crossing, Real, WindingRule};
use crate::polygon::Polygon;

const SPAN_EPSILON: Real = 1e-9;

/// Row-major binary mask; `true` marks a pixel inside the polygon.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OccupancyGrid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl OccupancyGrid {
    /// All-unfilled grid.
    pub fn new(width: usize, height: usize) -> Self {
        OccupancyGrid {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> bool,
    {
        let mut grid = Self::new(width, height);
        for y in 0..height {
            for x in 0..width {
                grid.cells[y * width + x] = f(x, y);
            }
        }
        grid
    }

    /// Fill `polygon` with the nonzero winding rule.
    ///
    /// Pixel `x` is inside when its center `x + 0.5` lies between crossings,
    /// so a square with corners at 10 and 90 fills columns `10..=89`. Vertices
    /// are clamped to `width - 1` / `height - 1`, which means the last column
    /// and row are never filled: a full-frame polygon on 10×10 covers `0..=8`.
    pub fn rasterize(polygon: &Polygon, width: u32, height: u32) -> Self {
        Self::rasterize_with_rule(polygon, width, height, WindingRule::NonZero)
    }

    pub fn rasterize_with_rule(
        polygon: &Polygon,
        width: u32,
        height: u32,
        rule: WindingRule,
    ) -> Self {
        let (w, h) = (width as usize, height as usize);
        let mut grid = Self::new(w, h);
        let verts = polygon.vertices();
        let n = verts.len();
        if n < 3 || w == 0 || h == 0 {
            return grid;
        }

        let y_lo = verts.iter().map(|p| p.y).min().unwrap_or(0).max(0) as usize;
        let y_hi = (verts.iter().map(|p| p.y).max().unwrap_or(0).max(0) as usize).min(h - 1);

        let mut crossings: Vec<(Real, i32)> = Vec::with_capacity(n);
        for y in y_lo..=y_hi {
            let yc = y as Real + 0.5;
            crossings.clear();
            for i in 0..n {
                let u = verts[i];
                let v = verts[(i + 1) % n];
                if let Some(c) =
                    edge_crossing(u.x as Real, u.y as Real, v.x as Real, v.y as Real, yc)
                {
                    crossings.push(c);
                }
            }
            if crossings.len() < 2 {
                continue;
            }
            crossings.sort_by(|a, b| a.0.total_cmp(&b.0));

            let mut winding = 0;
            for k in 0..crossings.len() - 1 {
                winding += crossings[k].1;
                if rule.is_inside(winding) {
                    grid.fill_span(y, crossings[k].0, crossings[k + 1].0);
                }
            }
        }

        debug!(
            "rasterized {} vertices into {}x{} grid, {} cells filled",
            n,
            w,
            h,
            grid.filled_count()
        );
        grid
    }

    /// Fill the pixels of row `y` whose centers lie in `[x_start, x_end)`.
    fn fill_span(&mut self, y: usize, x_start: Real, x_end: Real) {
        // Collinear edges can leave rounding-sized slivers.
        if x_end - x_start <= SPAN_EPSILON {
            return;
        }
        let first = (x_start - 0.5).ceil().max(0.0);
        let last = (x_end - 0.5).ceil().min(self.width as Real);
        if last <= first {
            return;
        }
        let row = y * self.width;
        for x in first as usize..last as usize {
            self.cells[row + x] = true;
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.cells[y * self.width + x]
    }

    pub fn set(&mut self, x: usize, y: usize, filled: bool) {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x] = filled;
        }
    }

    pub fn row(&self, y: usize) -> &[bool] {
        &self.cells[y * self.width..(y + 1) * self.width]
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}
