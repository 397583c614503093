// Copyright 2025 Lars Brubaker
// License: MIT
//
// Batch planning: one inscribed region, several sampled inpainting targets,
// each paired with the strength/guidance settings of its variant.

use image::GrayImage;
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::PlacementConfig;
use crate::error::Result;
use crate::geom::Rect;
use crate::inscribed::{inscribed_region_with_rule, InscribedRegion};
use crate::mask::soft_mask;
use crate::polygon::Polygon;
use crate::sampler::{RegionSampler, SampleBounds};

/// One inpainting target handed to the generator.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub rect: Rect,
    pub strength: f32,
    pub guidance_scale: f32,
}

pub struct PlacementPlanner {
    config: PlacementConfig,
    sampler: RegionSampler,
}

impl PlacementPlanner {
    pub fn new(config: PlacementConfig) -> Result<Self> {
        config.validate()?;
        let sampler = config.sampler();
        Ok(PlacementPlanner { config, sampler })
    }

    pub fn config(&self) -> &PlacementConfig {
        &self.config
    }

    /// Pixel size bounds for an image of the given size.
    pub fn bounds(&self, image_width: u32, image_height: u32) -> SampleBounds {
        SampleBounds::from_fractions(
            image_width,
            image_height,
            (self.config.min_width_frac, self.config.max_width_frac),
            (self.config.min_height_frac, self.config.max_height_frac),
        )
    }

    /// Sample one placement per configured variant. Fails on the first
    /// variant whose samples stay degenerate.
    pub fn plan<R: Rng>(
        &self,
        region: &InscribedRegion,
        image_width: u32,
        image_height: u32,
        rng: &mut R,
    ) -> Result<Vec<Placement>> {
        let bounds = self.bounds(image_width, image_height);
        let mut out = Vec::with_capacity(self.config.strengths.len());
        for (&strength, &guidance_scale) in
            self.config.strengths.iter().zip(&self.config.guidance_scales)
        {
            let rect = self.sampler.sample_checked(
                region.rect,
                &bounds,
                region.offset_hint,
                image_width,
                image_height,
                rng,
            )?;
            out.push(Placement { rect, strength, guidance_scale });
        }
        debug!("planned {} placements inside {:?}", out.len(), region.rect.as_tuple());
        Ok(out)
    }

    /// Parse `coords`, find its inscribed region and plan placements for it.
    pub fn plan_from_polygon<R: Rng>(
        &self,
        coords: &str,
        image_width: u32,
        image_height: u32,
        rng: &mut R,
    ) -> Result<Vec<Placement>> {
        let polygon = Polygon::parse(coords, image_width, image_height)?;
        let region = inscribed_region_with_rule(&polygon, self.config.winding_rule)?;
        self.plan(&region, image_width, image_height, rng)
    }

    /// Soft mask for a planned placement, blurred with the configured sigma.
    pub fn mask(&self, placement: &Placement, image_width: u32, image_height: u32) -> GrayImage {
        soft_mask(image_width, image_height, placement.rect, self.config.blur_sigma)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RegionError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const ROAD: &str = "0.45 0.4 0.55 0.4 1.0 1.0 0.0 1.0";

    #[test]
    fn plans_one_placement_per_variant() {
        let planner = PlacementPlanner::new(PlacementConfig::default()).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let plan = planner.plan_from_polygon(ROAD, 320, 160, &mut rng).unwrap();
        assert_eq!(plan.len(), 4);
        assert_eq!(plan[0].strength, 0.5);
        assert_eq!(plan[3].guidance_scale, 4.0);
        for p in &plan {
            assert!(!p.rect.is_degenerate());
            assert!(p.rect.x_max <= 320 && p.rect.y_max <= 160);
        }
    }

    #[test]
    fn same_seed_same_plan() {
        let planner = PlacementPlanner::new(PlacementConfig::default()).unwrap();
        let a = planner
            .plan_from_polygon(ROAD, 320, 160, &mut StdRng::seed_from_u64(8))
            .unwrap();
        let b = planner
            .plan_from_polygon(ROAD, 320, 160, &mut StdRng::seed_from_u64(8))
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_invalid_config() {
        let cfg = PlacementConfig { max_attempts: 0, ..Default::default() };
        assert!(matches!(PlacementPlanner::new(cfg), Err(RegionError::InvalidConfig(_))));
    }

    #[test]
    fn propagates_polygon_errors() {
        let planner = PlacementPlanner::new(PlacementConfig::default()).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            planner.plan_from_polygon("0.1 0.1 0.2 0.2", 100, 100, &mut rng),
            Err(RegionError::InvalidPolygon(_))
        ));
        assert!(matches!(
            planner.plan_from_polygon("0.1 0.1 0.5 0.5 0.9 0.9", 100, 100, &mut rng),
            Err(RegionError::NoInscribedRegion)
        ));
    }

    #[test]
    fn mask_matches_image_size() {
        let cfg = PlacementConfig { blur_sigma: 0.0, ..Default::default() };
        let planner = PlacementPlanner::new(cfg).unwrap();
        let p = Placement { rect: Rect::new(1, 1, 3, 3), strength: 0.5, guidance_scale: 6.0 };
        let m = planner.mask(&p, 10, 6);
        assert_eq!(m.dimensions(), (10, 6));
        assert_eq!(m.get_pixel(2, 2).0[0], 255);
    }
}
