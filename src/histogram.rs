// Copyright 2025 Lars Brubaker
// License: MIT
//
// Largest rectangle under a histogram, via a monotonic stack.
//
// The histogram is read as if padded with a zero bar on each side. Extended
// index 0 is the left sentinel, 1..=n are the real bars and n+1 is the right
// sentinel. The stack holds extended indices whose bar heights never
// decrease from bottom to top. The left sentinel is never popped, so the
// stack is never empty while bars are being popped.

/// Winning bar run for one histogram: `width` bars starting at `left`, all at
/// least `height` tall.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HistogramRect {
    pub height: u32,
    pub left: usize,
    pub width: usize,
}

impl HistogramRect {
    #[inline]
    pub fn area(&self) -> u64 {
        self.height as u64 * self.width as u64
    }
}

/// Largest-area rectangle under `heights`, or `None` when every bar is zero.
///
/// Equal areas resolve to the run with the smallest `left`.
pub fn largest_in_histogram(heights: &[u32]) -> Option<HistogramRect> {
    let mut stack: Vec<usize> = Vec::with_capacity(heights.len() + 2);
    largest_with_stack(heights, &mut stack)
}

/// Same as [`largest_in_histogram`] but reuses a caller-owned stack buffer,
/// so sweeping every row of a height map allocates once.
pub fn largest_with_stack(heights: &[u32], stack: &mut Vec<usize>) -> Option<HistogramRect> {
    let n = heights.len();
    let bar = |i: usize| -> u32 {
        if i == 0 || i > n {
            0
        } else {
            heights[i - 1]
        }
    };

    stack.clear();
    stack.push(0);

    let mut best: Option<HistogramRect> = None;

    for i in 1..n + 2 {
        let h = bar(i);
        while let Some(&top) = stack.last() {
            if bar(top) <= h {
                break;
            }
            stack.pop();
            let popped_height = bar(top);
            // Sentinel bar 0 stays at the bottom since no bar is shorter than it.
            let new_top = match stack.last() {
                Some(&t) => t,
                None => break,
            };
            let width = i - new_top - 1;
            let cand = HistogramRect {
                height: popped_height,
                left: new_top,
                width,
            };
            let better = match best {
                None => cand.area() > 0,
                Some(b) => {
                    cand.area() > b.area() || (cand.area() == b.area() && cand.left < b.left)
                }
            };
            if better {
                best = Some(cand);
            }
        }
        stack.push(i);
    }

    best
}
