//! Hough vote accumulation over a binary raster.
//!
//! Every lit raster cell votes for all 360 one-degree line parametrizations
//! (perpendicular distance, angle) it is consistent with. The trigonometry is
//! evaluated once into degree lookup tables; the per-cell angle loop is the
//! hot path of pair scoring.

use crate::raster::BitRaster;

/// Number of one-degree angle buckets.
pub const ANGLE_BINS: usize = 360;

/// Vote accumulator over (perpendicular distance × angle) bins.
#[derive(Clone, Debug)]
pub struct VoteAccumulator {
    /// Number of distance rows: ceil of the source raster's diagonal
    pub rows: usize,
    /// Row-major vote counts, `rows × ANGLE_BINS`
    pub data: Vec<u32>,
    /// Sum of all votes cast
    pub total: u64,
}

impl VoteAccumulator {
    fn new(rows: usize) -> Self {
        Self {
            rows,
            data: vec![0; rows * ANGLE_BINS],
            total: 0,
        }
    }

    #[inline]
    /// Vote count at (distance, angle).
    pub fn get(&self, distance: usize, angle: usize) -> u32 {
        self.data[distance * ANGLE_BINS + angle]
    }

    /// Mean vote count per bin, the threshold the coarse aggregation
    /// compares blocks against.
    pub fn mean_votes(&self) -> f64 {
        self.total as f64 / (self.rows * ANGLE_BINS) as f64
    }

    /// Bin holding the global maximum vote count, as (distance, angle).
    pub fn argmax(&self) -> (usize, usize) {
        let mut best = (0usize, 0usize);
        let mut best_votes = 0u32;
        for distance in 0..self.rows {
            for angle in 0..ANGLE_BINS {
                let votes = self.get(distance, angle);
                if votes > best_votes {
                    best_votes = votes;
                    best = (distance, angle);
                }
            }
        }
        best
    }
}

/// Hough transform with precomputed degree trigonometry.
#[derive(Clone, Debug)]
pub struct HoughTransform {
    cos: [f64; ANGLE_BINS],
    sin: [f64; ANGLE_BINS],
}

impl HoughTransform {
    pub fn new() -> Self {
        let mut cos = [0.0; ANGLE_BINS];
        let mut sin = [0.0; ANGLE_BINS];
        for ang in 0..ANGLE_BINS {
            let theta = (ang as f64).to_radians();
            cos[ang] = theta.cos();
            sin[ang] = theta.sin();
        }
        Self { cos, sin }
    }

    /// Number of distance rows an accumulator for a `w × h` raster carries.
    pub fn distance_rows(w: usize, h: usize) -> usize {
        ((w * w + h * h) as f64).sqrt().ceil() as usize
    }

    /// Accumulates votes for every lit cell of `raster`.
    ///
    /// The real-valued distance x·cosθ + y·sinθ is truncated toward zero
    /// (a fixed policy, not rounding); votes landing outside [0, rows) are
    /// dropped.
    pub fn accumulate(&self, raster: &BitRaster) -> VoteAccumulator {
        let rows = Self::distance_rows(raster.w, raster.h);
        let mut acc = VoteAccumulator::new(rows);
        for y in 0..raster.h {
            for x in 0..raster.w {
                if !raster.get(x, y) {
                    continue;
                }
                let xf = x as f64;
                let yf = y as f64;
                for ang in 0..ANGLE_BINS {
                    let d = (xf * self.cos[ang] + yf * self.sin[ang]) as isize;
                    if d >= 0 && (d as usize) < rows {
                        acc.data[d as usize * ANGLE_BINS + ang] += 1;
                        acc.total += 1;
                    }
                }
            }
        }
        acc
    }
}

impl Default for HoughTransform {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_rows_matches_diagonal() {
        assert_eq!(HoughTransform::distance_rows(500, 500), 708);
        assert_eq!(HoughTransform::distance_rows(100, 100), 142);
        assert_eq!(HoughTransform::distance_rows(3, 4), 5);
    }

    #[test]
    fn horizontal_line_peaks_at_its_parametrization() {
        let mut raster = BitRaster::new(100, 100);
        raster.draw_line(0, 12, 99, 12);

        let hough = HoughTransform::new();
        let acc = hough.accumulate(&raster);

        // every cell of the line hits the (12, 90°) bin
        assert_eq!(acc.get(12, 90), 100);

        let (distance, angle) = acc.argmax();
        assert!(
            distance.abs_diff(12) <= 1,
            "peak distance {distance} too far from 12"
        );
        assert_eq!(angle, 90, "peak angle {angle} not at 90°");
    }

    #[test]
    fn total_matches_the_stored_votes() {
        let mut raster = BitRaster::new(32, 32);
        raster.draw_line(0, 3, 31, 27);
        raster.draw_line(0, 30, 31, 2);

        let acc = HoughTransform::new().accumulate(&raster);
        let summed: u64 = acc.data.iter().map(|&v| u64::from(v)).sum();
        assert_eq!(summed, acc.total);
        assert!(acc.total > 0);
    }

    #[test]
    fn empty_raster_casts_no_votes() {
        let raster = BitRaster::new(16, 16);
        let acc = HoughTransform::new().accumulate(&raster);
        assert_eq!(acc.total, 0);
        assert_eq!(acc.mean_votes(), 0.0);
    }
}
