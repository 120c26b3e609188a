//! Parameter types configuring the arrangement pipeline.

use crate::cells::ThresholdRule;
use serde::{Deserialize, Serialize};

/// Arranger-wide parameters.
///
/// Defaults match the measure the scoring was calibrated with: a 500×500
/// scatter raster, ×5 magnification of projected coordinates and
/// mean-above-median thresholding.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArrangeParams {
    /// Edge length of the square scatter raster.
    pub raster_size: usize,
    /// Factor applied to projected coordinates before rasterization.
    pub magnification: f64,
    /// Coarse-grid thresholding rule.
    pub threshold: ThresholdRule,
}

impl Default for ArrangeParams {
    fn default() -> Self {
        Self {
            raster_size: 500,
            magnification: 5.0,
            threshold: ThresholdRule::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_calibrated_measure() {
        let params = ArrangeParams::default();
        assert_eq!(params.raster_size, 500);
        assert_eq!(params.magnification, 5.0);
        assert_eq!(params.threshold, ThresholdRule::MeanAboveMedian);
    }
}
