// Copyright 2025 Lars Brubaker
// WASM bindings for inpaint-region

use inpaint_region::{
    find_inscribed_region, PlacementConfig, PlacementPlanner, Polygon, RegionError, WindingRule,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main_js() {
    console_error_panic_hook::set_once();
}

fn to_js(err: RegionError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Plans inpainting placements for road polygons with a seeded random source.
#[wasm_bindgen]
pub struct PlannerJs {
    inner: PlacementPlanner,
    rng: StdRng,
}

#[wasm_bindgen]
impl PlannerJs {
    /// Planner with default settings, seeded for reproducible results.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u64) -> Result<PlannerJs, JsValue> {
        Self::with_config("", seed)
    }

    /// Planner configured from a TOML string (empty string for defaults).
    pub fn with_config(toml: &str, seed: u64) -> Result<PlannerJs, JsValue> {
        let config = PlacementConfig::from_toml_str(toml).map_err(to_js)?;
        Ok(PlannerJs {
            inner: PlacementPlanner::new(config).map_err(to_js)?,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// Flat `[x1, y1, x2, y2, ...]` boxes, one per configured variant.
    pub fn plan(&mut self, coords: &str, width: u32, height: u32) -> Result<Vec<i32>, JsValue> {
        let plan = self
            .inner
            .plan_from_polygon(coords, width, height, &mut self.rng)
            .map_err(to_js)?;
        Ok(plan
            .iter()
            .flat_map(|p| {
                let (x1, y1, x2, y2) = p.rect.as_tuple();
                [x1, y1, x2, y2]
            })
            .collect())
    }

    /// Strength/guidance pairs matching the boxes returned by `plan`, flat.
    pub fn variants(&self) -> Vec<f32> {
        let cfg = self.inner.config();
        cfg.strengths
            .iter()
            .zip(&cfg.guidance_scales)
            .flat_map(|(&s, &g)| [s, g])
            .collect()
    }

    /// Soft mask (row-major 8-bit luminance) for one box from `plan`.
    pub fn mask(&self, width: u32, height: u32, x1: i32, y1: i32, x2: i32, y2: i32) -> Vec<u8> {
        let placement = inpaint_region::Placement {
            rect: (x1, y1, x2, y2).into(),
            strength: 0.0,
            guidance_scale: 0.0,
        };
        self.inner.mask(&placement, width, height).into_raw()
    }
}

/// Largest inscribed rectangle `[x_min, y_min, x_max, y_max, offset_hint]`
/// for a normalized polygon string.
#[wasm_bindgen]
pub fn inscribed_rect(coords: &str, width: u32, height: u32) -> Result<Vec<i32>, JsValue> {
    let region = find_inscribed_region(coords, width, height).map_err(to_js)?;
    let (x1, y1, x2, y2) = region.rect.as_tuple();
    Ok(vec![x1, y1, x2, y2, region.offset_hint])
}

/// Occupancy mask (1 = inside) of a polygon under the given winding rule.
/// winding: 0=Odd 1=NonZero 2=Positive 3=Negative 4=AbsGeqTwo
#[wasm_bindgen]
pub fn rasterize(coords: &str, width: u32, height: u32, winding: u32) -> Result<Vec<u8>, JsValue> {
    let polygon = Polygon::parse(coords, width, height).map_err(to_js)?;
    let grid = inpaint_region::OccupancyGrid::rasterize_with_rule(
        &polygon,
        width,
        height,
        winding_rule(winding),
    );
    let mut out = Vec::with_capacity(grid.width() * grid.height());
    for y in 0..grid.height() {
        out.extend(grid.row(y).iter().map(|&c| c as u8));
    }
    Ok(out)
}

fn winding_rule(winding: u32) -> WindingRule {
    match winding {
        0 => WindingRule::Odd,
        1 => WindingRule::NonZero,
        2 => WindingRule::Positive,
        3 => WindingRule::Negative,
        4 => WindingRule::AbsGeqTwo,
        _ => WindingRule::NonZero,
    }
}
