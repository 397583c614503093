// Copyright 2025 Lars Brubaker
// License: MIT
//
// Per-column run lengths of filled cells. Row `y` of the height map is the
// histogram whose largest rectangle is the best box with its bottom edge on `y`.

use crate::raster::OccupancyGrid;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeightMap {
    width: usize,
    height: usize,
    counts: Vec<u32>,
}

impl HeightMap {
    /// `counts[y][x] = grid[y][x] ? counts[y-1][x] + 1 : 0`, with row -1 all zero.
    pub fn build(grid: &OccupancyGrid) -> Self {
        let (w, h) = (grid.width(), grid.height());
        let mut counts = vec![0u32; w * h];
        for y in 0..h {
            let row = grid.row(y);
            for x in 0..w {
                if row[x] {
                    let above = if y == 0 { 0 } else { counts[(y - 1) * w + x] };
                    counts[y * w + x] = above + 1;
                }
            }
        }
        HeightMap { width: w, height: h, counts }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u32 {
        self.counts[y * self.width + x]
    }

    /// Histogram for the boxes whose bottom edge lies on row `y`.
    pub fn row(&self, y: usize) -> &[u32] {
        &self.counts[y * self.width..(y + 1) * self.width]
    }
}
