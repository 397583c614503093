// Copyright 2025 Lars Brubaker
// License: MIT
//
// Randomized sub-region selection inside an inscribed rectangle.
//
// The center is drawn away from the left/right margins of the inscribed box,
// the size is drawn from caller bounds, and the vertical edges are pushed by
// the horizon offset so generated content stays clear of the vanishing point.

use log::{debug, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{RegionError, Result};
use crate::geom::{Real, Rect};

pub const DEFAULT_CENTER_MARGIN: Real = 0.2;
pub const DEFAULT_OFFSET_GAIN: Real = 1.5;
pub const DEFAULT_MAX_ATTEMPTS: u32 = 8;
pub const DEFAULT_RANGE_SHRINK: Real = 0.75;

/// Size bounds, in pixels, for a sampled region.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SampleBounds {
    pub min_width: Real,
    pub max_width: Real,
    pub min_height: Real,
    pub max_height: Real,
}

impl SampleBounds {
    pub fn new(min_width: Real, max_width: Real, min_height: Real, max_height: Real) -> Self {
        SampleBounds { min_width, max_width, min_height, max_height }
    }

    /// Bounds expressed as fractions of the image size.
    pub fn from_fractions(
        image_width: u32,
        image_height: u32,
        width_frac: (Real, Real),
        height_frac: (Real, Real),
    ) -> Self {
        let (w, h) = (image_width as Real, image_height as Real);
        SampleBounds {
            min_width: w * width_frac.0,
            max_width: w * width_frac.1,
            min_height: h * height_frac.0,
            max_height: h * height_frac.1,
        }
    }

    /// Narrow each range toward its upper end, keeping `factor` of its span.
    pub fn tightened(&self, factor: Real) -> Self {
        let narrow = |lo: Real, hi: Real| hi - (hi - lo) * factor;
        SampleBounds {
            min_width: narrow(self.min_width, self.max_width),
            max_width: self.max_width,
            min_height: narrow(self.min_height, self.max_height),
            max_height: self.max_height,
        }
    }
}

/// Sampler tunables. `Default` gives a 20% center margin and 1.5x offset gain.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RegionSampler {
    /// Fraction of the inscribed width excluded on each side when drawing the center.
    pub center_margin: Real,
    /// Multiplier applied to the offset hint before pushing the vertical edges.
    pub offset_gain: Real,
    /// Draws allowed in [`RegionSampler::sample_checked`] before giving up.
    pub max_attempts: u32,
    /// Fraction of each size range kept after a degenerate draw.
    pub range_shrink: Real,
}

impl Default for RegionSampler {
    fn default() -> Self {
        RegionSampler {
            center_margin: DEFAULT_CENTER_MARGIN,
            offset_gain: DEFAULT_OFFSET_GAIN,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            range_shrink: DEFAULT_RANGE_SHRINK,
        }
    }
}

impl RegionSampler {
    /// Draw one region. The result lies in `[0, image_width] × [0, image_height]`
    /// but may have zero width or height; see [`RegionSampler::sample_checked`].
    pub fn sample<R: Rng>(
        &self,
        rect: Rect,
        bounds: &SampleBounds,
        offset_hint: i32,
        image_width: u32,
        image_height: u32,
        rng: &mut R,
    ) -> Rect {
        let (x1, y1) = (rect.x_min as Real, rect.y_min as Real);
        let (x2, y2) = (rect.x_max as Real, rect.y_max as Real);
        let margin = self.center_margin * (x2 - x1);

        let cx = uniform(rng, x1 + margin, x2 - margin);
        let cy = uniform(rng, y1, y2);
        let w = uniform(rng, bounds.min_width, bounds.max_width);
        let h = uniform(rng, bounds.min_height, bounds.max_height);

        let bias = offset_hint as Real * self.offset_gain;
        let mut top = cy - h / 2.0 - bias;
        let mut bottom = cy + h / 2.0 + bias;
        if top > bottom {
            // A negative bias larger than half the height inverts the edges.
            let mid = (top + bottom) / 2.0;
            top = mid;
            bottom = mid;
        }
        let left = cx - w / 2.0;
        let right = cx + w / 2.0;

        let (iw, ih) = (image_width as Real, image_height as Real);
        Rect::new(
            clip(left, iw),
            clip(top, ih),
            clip(right, iw),
            clip(bottom, ih),
        )
    }

    /// Like [`RegionSampler::sample`], but redraws zero-area results with
    /// tightened size bounds and fails once `max_attempts` draws are used up.
    pub fn sample_checked<R: Rng>(
        &self,
        rect: Rect,
        bounds: &SampleBounds,
        offset_hint: i32,
        image_width: u32,
        image_height: u32,
        rng: &mut R,
    ) -> Result<Rect> {
        let mut bounds = *bounds;
        for attempt in 1..=self.max_attempts {
            let region = self.sample(rect, &bounds, offset_hint, image_width, image_height, rng);
            if !region.is_degenerate() {
                debug!("sampled region {:?} on attempt {}", region.as_tuple(), attempt);
                return Ok(region);
            }
            warn!(
                "degenerate region {:?} on attempt {}/{}, tightening size bounds",
                region.as_tuple(),
                attempt,
                self.max_attempts
            );
            bounds = bounds.tightened(self.range_shrink);
        }
        Err(RegionError::DegenerateSample {
            attempts: self.max_attempts,
        })
    }
}

/// Draw a region with the default tunables (20% center margin, 1.5× offset gain).
pub fn sample_region<R: Rng>(
    rect: Rect,
    bounds: &SampleBounds,
    offset_hint: i32,
    image_width: u32,
    image_height: u32,
    rng: &mut R,
) -> Rect {
    RegionSampler::default().sample(rect, bounds, offset_hint, image_width, image_height, rng)
}

/// Uniform draw from `[lo, hi)`; reversed bounds are swapped and an empty or
/// non-finite range yields its lower end without consuming randomness.
fn uniform<R: Rng>(rng: &mut R, lo: Real, hi: Real) -> Real {
    let (lo, hi) = if hi < lo { (hi, lo) } else { (lo, hi) };
    if !(lo.is_finite() && hi.is_finite()) || lo >= hi {
        return lo;
    }
    rng.gen_range(lo..hi)
}

#[inline]
fn clip(v: Real, max: Real) -> i32 {
    if v.is_nan() {
        return 0;
    }
    v.clamp(0.0, max).trunc() as i32
}
