// Copyright 2025 Lars Brubaker
// License: MIT
//
// Soft-edged inpainting masks: the sampled region filled white on black,
// then Gaussian-blurred so the generated content fades into the street.

use image::{imageops, GrayImage, Luma};

use crate::geom::Rect;

/// Hard mask: 255 inside the inclusive `rect`, 0 elsewhere. Edges beyond the
/// image are clipped.
pub fn hard_mask(image_width: u32, image_height: u32, rect: Rect) -> GrayImage {
    let mut mask = GrayImage::new(image_width, image_height);
    if image_width == 0 || image_height == 0 {
        return mask;
    }
    // Widen before the +1 so an edge at i32::MAX cannot overflow.
    let span = |lo: i32, hi: i32, extent: u32| {
        let start = (lo as i64).clamp(0, extent as i64) as u32;
        let end = (hi as i64 + 1).clamp(0, extent as i64) as u32;
        start..end
    };
    for y in span(rect.y_min, rect.y_max, image_height) {
        for x in span(rect.x_min, rect.x_max, image_width) {
            mask.put_pixel(x, y, Luma([255]));
        }
    }
    mask
}

/// Hard mask blurred with a Gaussian of standard deviation `blur_sigma`.
/// A non-positive sigma returns the hard mask unchanged.
pub fn soft_mask(image_width: u32, image_height: u32, rect: Rect, blur_sigma: f32) -> GrayImage {
    let mask = hard_mask(image_width, image_height, rect);
    if blur_sigma <= 0.0 || !blur_sigma.is_finite() {
        return mask;
    }
    imageops::blur(&mask, blur_sigma)
}
