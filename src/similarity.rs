//! Pairwise structure scoring and the symmetric similarity matrix.
//!
//! [`PairScorer`] owns the raster buffer and the trig tables so allocations
//! are amortised across all D(D−1)/2 pairs of one arrangement call. Each pair
//! runs raster → accumulator → coarse grid and collapses the grid into a
//! single scalar.

use crate::cells::{aggregate, ThresholdRule, GRID_CELLS};
use crate::hough::HoughTransform;
use crate::raster::{scaled_row, BitRaster};
use nalgebra::DMatrix;
use serde::Serialize;

/// Symmetric matrix of pairwise structure scores.
///
/// Every write sets both (i, j) and (j, i); the diagonal stays zero. The
/// matrix is left untouched by the chaining phase, so it can be dumped into
/// a diagnostics trace afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct SimilarityMatrix {
    m: DMatrix<f64>,
}

impl SimilarityMatrix {
    /// All-zero matrix for `dims` dimensions.
    pub fn zeros(dims: usize) -> Self {
        Self {
            m: DMatrix::zeros(dims, dims),
        }
    }

    /// Number of dimensions the matrix covers.
    pub fn dims(&self) -> usize {
        self.m.nrows()
    }

    #[inline]
    /// Score of the pair (i, j).
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.m[(i, j)]
    }

    /// Writes `value` to both (i, j) and (j, i).
    pub fn set_symmetric(&mut self, i: usize, j: usize, value: f64) {
        self.m[(i, j)] = value;
        self.m[(j, i)] = value;
    }

    /// Matrix contents as rows, for serialization into a trace.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        (0..self.dims())
            .map(|i| (0..self.dims()).map(|j| self.get(i, j)).collect())
            .collect()
    }
}

/// Outcome of scoring one dimension pair.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PairScore {
    /// Lit cells in the coarse grid
    pub big_cells: usize,
    /// 1 − bigCells / 2500; a busier vote surface scores lower
    pub score: f64,
}

/// Reusable workspace turning one dimension pair into a structure score.
pub struct PairScorer {
    raster: BitRaster,
    hough: HoughTransform,
    magnification: f64,
    rule: ThresholdRule,
}

impl PairScorer {
    pub fn new(raster_size: usize, magnification: f64, rule: ThresholdRule) -> Self {
        Self {
            raster: BitRaster::new(raster_size, raster_size),
            hough: HoughTransform::new(),
            magnification,
            rule,
        }
    }

    /// Scores dimensions `i` and `j` over `coords`, a point-major buffer
    /// holding `dims` render-space values per point.
    ///
    /// Each point draws one line from the left raster edge at its `i` value
    /// to the right edge at its `j` value. The raster is cleared first, so
    /// pairs never see each other's cells.
    pub fn score_pair(&mut self, coords: &[f64], dims: usize, i: usize, j: usize) -> PairScore {
        debug_assert!(dims >= 2 && i < dims && j < dims);
        debug_assert_eq!(coords.len() % dims, 0);

        self.raster.clear();
        let right = self.raster.w as i32 - 1;
        let edge = self.raster.h;
        for point in coords.chunks_exact(dims) {
            let y0 = scaled_row(point[i], self.magnification, edge);
            let y1 = scaled_row(point[j], self.magnification, edge);
            self.raster.draw_line(0, y0, right, y1);
        }

        let acc = self.hough.accumulate(&self.raster);
        let median = acc.mean_votes();
        let grid = aggregate(&acc, self.rule, median);
        let big_cells = grid.ones();
        PairScore {
            big_cells,
            score: 1.0 - big_cells as f64 / GRID_CELLS as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symmetric_writes_land_on_both_cells() {
        let mut matrix = SimilarityMatrix::zeros(4);
        matrix.set_symmetric(1, 3, 0.75);
        assert_eq!(matrix.get(1, 3), 0.75);
        assert_eq!(matrix.get(3, 1), 0.75);
        assert_eq!(matrix.get(1, 1), 0.0);
        assert_eq!(matrix.dims(), 4);
    }

    #[test]
    fn rows_mirror_the_matrix() {
        let mut matrix = SimilarityMatrix::zeros(3);
        matrix.set_symmetric(0, 2, 0.5);
        let rows = matrix.to_rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0][2], 0.5);
        assert_eq!(rows[2][0], 0.5);
        assert_eq!(rows[1][1], 0.0);
    }

    #[test]
    fn scores_stay_in_the_unit_interval() {
        let mut scorer = PairScorer::new(64, 5.0, ThresholdRule::default());
        let coords = vec![
            1.0, 1.0, 11.0, //
            4.0, 4.2, 2.0, //
            8.0, 7.9, 9.5, //
            12.0, 12.1, 0.5,
        ];
        for (i, j) in [(0, 1), (0, 2), (1, 2)] {
            let score = scorer.score_pair(&coords, 3, i, j);
            assert!(score.big_cells <= GRID_CELLS);
            assert!(
                (0.0..=1.0).contains(&score.score),
                "score {} out of range for pair ({i}, {j})",
                score.score
            );
        }
    }

    #[test]
    fn scoring_is_deterministic() {
        let coords = vec![2.0, 3.0, 7.0, 5.0, 4.0, 1.0, 9.0, 8.0];
        let mut scorer = PairScorer::new(64, 5.0, ThresholdRule::default());
        let first = scorer.score_pair(&coords, 2, 0, 1);
        let second = scorer.score_pair(&coords, 2, 0, 1);
        assert_eq!(first.big_cells, second.big_cells);
        assert_eq!(first.score, second.score);
    }
}
