// Copyright 2025 Lars Brubaker
// The histogram sweep against exhaustive search, plus containment and
// determinism of the full pipeline.

mod helpers;

use inpaint_region::{find_inscribed_region, find_largest_rectangle, HeightMap, OccupancyGrid, Polygon, RegionError};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn hand_built_grids_match_brute_force() {
    let grids: [&[&str]; 5] = [
        &[
            "..........",
            ".######...",
            ".######...",
            ".########.",
            "...#####..",
            "...#####..",
        ],
        &[
            "#.#.#.#.#.",
            ".#.#.#.#.#",
            "#.#.#.#.#.",
        ],
        &[
            "####",
            "####",
            "##..",
            "####",
        ],
        &[
            "..##..",
            ".####.",
            "######",
            ".####.",
            "..##..",
        ],
        &["#"],
    ];
    for rows in grids {
        let g = helpers::grid_from_rows(rows);
        let rect = find_largest_rectangle(&HeightMap::build(&g)).unwrap();
        assert_eq!(rect.cell_area(), helpers::brute_force_max_area(&g), "grid {:?}", rows);
        assert!(helpers::rect_is_filled(&g, rect), "grid {:?}", rows);
    }
}

#[test]
fn random_small_grids_match_brute_force() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for case in 0..200 {
        let w = 1 + case % 10;
        let h = 1 + (case / 10) % 10;
        let p = [0.3, 0.6, 0.85][case % 3];
        let g = helpers::random_grid(&mut rng, w, h, p);
        let expected = helpers::brute_force_max_area(&g);
        match find_largest_rectangle(&HeightMap::build(&g)) {
            Ok(rect) => {
                assert_eq!(rect.cell_area(), expected, "case {} ({}x{})", case, w, h);
                assert!(helpers::rect_is_filled(&g, rect), "case {}", case);
            }
            Err(RegionError::NoInscribedRegion) => assert_eq!(expected, 0, "case {}", case),
            Err(e) => panic!("case {}: unexpected error {}", case, e),
        }
    }
}

#[test]
fn random_polygons_contain_their_rectangle() {
    let mut rng = StdRng::seed_from_u64(17);
    for i in 0..40 {
        let n = 3 + i % 9;
        let coords = helpers::random_polygon_string(&mut rng, n);
        let (w, h) = (96, 72);
        let poly = Polygon::parse(&coords, w, h).unwrap();
        let grid = OccupancyGrid::rasterize(&poly, w, h);
        match find_inscribed_region(&coords, w, h) {
            Ok(region) => {
                assert!(helpers::rect_is_filled(&grid, region.rect), "{}", coords);
                assert_eq!(region.offset_hint, region.rect.y_min - poly.topmost_y());
                assert!(region.rect.x_max < w as i32 && region.rect.y_max < h as i32);
            }
            Err(RegionError::NoInscribedRegion) => assert_eq!(grid.filled_count(), 0),
            Err(e) => panic!("{}: unexpected error {}", coords, e),
        }
    }
}

#[test]
fn pipeline_is_deterministic() {
    let mut rng = StdRng::seed_from_u64(99);
    for n in 3..10 {
        let coords = helpers::random_polygon_string(&mut rng, n);
        let a = find_inscribed_region(&coords, 200, 150);
        let b = find_inscribed_region(&coords, 200, 150);
        match (a, b) {
            (Ok(a), Ok(b)) => assert_eq!(a, b),
            (Err(_), Err(_)) => {}
            (a, b) => panic!("diverging results {:?} vs {:?}", a, b),
        }
    }
}
