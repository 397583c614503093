// Copyright 2025 Lars Brubaker
// Shared test utilities for inpaint-region tests.

#![allow(dead_code)]

use inpaint_region::{OccupancyGrid, Rect};
use rand::rngs::StdRng;
use rand::Rng;

/// Build a grid from ASCII rows: `#` is filled, anything else is empty.
pub fn grid_from_rows(rows: &[&str]) -> OccupancyGrid {
    let h = rows.len();
    let w = rows.first().map(|r| r.len()).unwrap_or(0);
    OccupancyGrid::from_fn(w, h, |x, y| rows[y].as_bytes()[x] == b'#')
}

/// Grid with each cell filled independently with probability `p`.
pub fn random_grid(rng: &mut StdRng, width: usize, height: usize, p: f64) -> OccupancyGrid {
    OccupancyGrid::from_fn(width, height, |_, _| rng.gen_bool(p))
}

/// True if every cell of the inclusive `rect` is filled.
pub fn rect_is_filled(grid: &OccupancyGrid, rect: Rect) -> bool {
    for y in rect.y_min..=rect.y_max {
        for x in rect.x_min..=rect.x_max {
            if x < 0 || y < 0 || !grid.get(x as usize, y as usize) {
                return false;
            }
        }
    }
    true
}

/// Exhaustive search over every rectangle of the grid. Only for small grids.
pub fn brute_force_max_area(grid: &OccupancyGrid) -> u64 {
    let (w, h) = (grid.width() as i32, grid.height() as i32);
    let mut best = 0u64;
    for y0 in 0..h {
        for x0 in 0..w {
            for y1 in y0..h {
                for x1 in x0..w {
                    let r = Rect::new(x0, y0, x1, y1);
                    if r.cell_area() > best && rect_is_filled(grid, r) {
                        best = r.cell_area();
                    }
                }
            }
        }
    }
    best
}

/// Random polygon string with `n` vertices spread around a center, in
/// normalized coordinates.
pub fn random_polygon_string(rng: &mut StdRng, n: usize) -> String {
    let mut coords = Vec::with_capacity(n * 2);
    for i in 0..n {
        let angle = i as f64 / n as f64 * std::f64::consts::TAU;
        let radius = rng.gen_range(0.15..0.5);
        let x = (0.5 + radius * angle.cos()).clamp(0.0, 1.0);
        let y = (0.5 + radius * angle.sin()).clamp(0.0, 1.0);
        coords.push(format!("{} {}", x, y));
    }
    coords.join(" ")
}
