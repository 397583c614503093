// Copyright 2025 Lars Brubaker
// License: MIT
//
// Largest axis-aligned rectangle inside a rasterized polygon.
//
// Every row of the height map is swept as a histogram; the global winner is
// kept with a strict `>` so ties stay with the earliest row, and within a row
// with the leftmost run.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{RegionError, Result};
use crate::geom::{Rect, WindingRule};
use crate::heightmap::HeightMap;
use crate::histogram::{largest_with_stack, HistogramRect};
use crate::polygon::Polygon;
use crate::raster::OccupancyGrid;

/// The inscribed rectangle for one polygon plus the horizon offset that the
/// sampler uses to bias placement.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InscribedRegion {
    /// Inclusive cell span; every cell inside is filled.
    pub rect: Rect,
    pub area: u64,
    /// `rect.y_min` minus the row of the polygon's topmost vertex.
    pub offset_hint: i32,
}

/// Sweep every row of `heights` and return the largest filled rectangle.
pub fn find_largest_rectangle(heights: &HeightMap) -> Result<Rect> {
    let (w, h) = (heights.width(), heights.height());
    let mut stack = Vec::with_capacity(w + 2);
    let mut best: Option<Rect> = None;
    let mut best_area = 0u64;

    for y in 0..h {
        let cand = match largest_with_stack(heights.row(y), &mut stack) {
            Some(c) => c,
            None => continue,
        };
        let area = cand.area();
        if area <= best_area {
            continue;
        }
        match candidate_rect(cand, y, w, h) {
            Some(rect) => {
                best_area = area;
                best = Some(rect);
            }
            None => debug!("discarding out-of-grid candidate {:?} at row {}", cand, y),
        }
    }

    best.ok_or(RegionError::NoInscribedRegion)
}

/// Convert a histogram winner on row `y` into grid coordinates, rejecting
/// anything that leaves the grid or has no extent.
fn candidate_rect(c: HistogramRect, y: usize, grid_w: usize, grid_h: usize) -> Option<Rect> {
    if c.width == 0 || c.height == 0 {
        return None;
    }
    let x_min = c.left as i64;
    let x_max = x_min + c.width as i64 - 1;
    let y_max = y as i64;
    let y_min = y_max - c.height as i64 + 1;
    if x_min < 0 || y_min < 0 || x_max >= grid_w as i64 || y_max >= grid_h as i64 {
        return None;
    }
    Some(Rect::new(x_min as i32, y_min as i32, x_max as i32, y_max as i32))
}

/// Parse, rasterize and sweep a normalized polygon string in one go.
pub fn find_inscribed_region(coords: &str, width: u32, height: u32) -> Result<InscribedRegion> {
    let polygon = Polygon::parse(coords, width, height)?;
    inscribed_region_with_rule(&polygon, WindingRule::NonZero)
}

/// Inscribed region of an already-parsed polygon, filled with `rule`.
pub fn inscribed_region_with_rule(polygon: &Polygon, rule: WindingRule) -> Result<InscribedRegion> {
    let (width, height) = polygon.raster_size();
    let grid = OccupancyGrid::rasterize_with_rule(polygon, width, height, rule);
    let heights = HeightMap::build(&grid);
    let rect = find_largest_rectangle(&heights)?;
    let offset_hint = rect.y_min - polygon.topmost_y();
    debug!(
        "inscribed rect {:?} (area {}), topmost vertex row {}, offset hint {}",
        rect.as_tuple(),
        rect.cell_area(),
        polygon.topmost_y(),
        offset_hint
    );
    Ok(InscribedRegion {
        rect,
        area: rect.cell_area(),
        offset_hint,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_from(rows: &[&str]) -> OccupancyGrid {
        let h = rows.len();
        let w = rows.first().map(|r| r.len()).unwrap_or(0);
        OccupancyGrid::from_fn(w, h, |x, y| rows[y].as_bytes()[x] == b'#')
    }

    #[test]
    fn finds_block_in_grid() {
        let g = grid_from(&[
            "......",
            ".####.",
            ".####.",
            ".###..",
            "......",
        ]);
        let r = find_largest_rectangle(&HeightMap::build(&g)).unwrap();
        assert_eq!(r, Rect::new(1, 1, 3, 3));
        assert_eq!(r.cell_area(), 9);
    }

    #[test]
    fn earliest_row_wins_ties() {
        let g = grid_from(&[
            "##..",
            "##..",
            "....",
            "..##",
            "..##",
        ]);
        let r = find_largest_rectangle(&HeightMap::build(&g)).unwrap();
        assert_eq!(r, Rect::new(0, 0, 1, 1));
    }

    #[test]
    fn leftmost_run_wins_ties_within_a_row() {
        let g = grid_from(&[
            ".#.",
            ".#.",
            "###",
        ]);
        let r = find_largest_rectangle(&HeightMap::build(&g)).unwrap();
        assert_eq!(r, Rect::new(0, 2, 2, 2));
    }

    #[test]
    fn empty_grid_has_no_region() {
        let g = OccupancyGrid::new(5, 5);
        assert!(matches!(
            find_largest_rectangle(&HeightMap::build(&g)),
            Err(RegionError::NoInscribedRegion)
        ));
    }

    #[test]
    fn full_grid_is_its_own_rect() {
        let g = OccupancyGrid::from_fn(7, 3, |_, _| true);
        let r = find_largest_rectangle(&HeightMap::build(&g)).unwrap();
        assert_eq!(r, Rect::new(0, 0, 6, 2));
    }

    #[test]
    fn candidate_rejects_out_of_grid() {
        let c = HistogramRect { height: 4, left: 0, width: 2 };
        assert!(candidate_rect(c, 2, 5, 5).is_none());
        let c = HistogramRect { height: 1, left: 4, width: 2 };
        assert!(candidate_rect(c, 0, 5, 5).is_none());
        let c = HistogramRect { height: 0, left: 0, width: 2 };
        assert!(candidate_rect(c, 0, 5, 5).is_none());
        let c = HistogramRect { height: 3, left: 1, width: 2 };
        assert_eq!(candidate_rect(c, 2, 5, 5), Some(Rect::new(1, 0, 2, 2)));
    }

    #[test]
    fn square_region_and_offset() {
        let region = find_inscribed_region("0.1 0.1 0.9 0.1 0.9 0.9 0.1 0.9", 100, 100).unwrap();
        assert_eq!(region.rect, Rect::new(10, 10, 89, 89));
        assert_eq!(region.area, 80 * 80);
        assert_eq!(region.offset_hint, 0);
    }

    #[test]
    fn offset_measures_distance_below_apex() {
        // Trapezoid narrowing toward the top, like a road receding to the horizon.
        let region =
            find_inscribed_region("0.45 0.2 0.55 0.2 1.0 1.0 0.0 1.0", 200, 100).unwrap();
        assert!(region.offset_hint > 0, "offset={}", region.offset_hint);
        assert_eq!(region.offset_hint, region.rect.y_min - 20);
    }
}
