//! Pipeline driving an arrangement end-to-end.
//!
//! The [`AxisArranger`] exposes a simple API: hand it a point source and a
//! selector and get back the axis order, optionally with a detailed report.
//!
//! Typical usage:
//! ```no_run
//! use axis_arranger::{ArrangeParams, AxisArranger, MemoryPointSource, PointSelector};
//!
//! # fn example(source: MemoryPointSource) {
//! let arranger = AxisArranger::new(ArrangeParams::default());
//! match arranger.arrange(&source, PointSelector::Sampled) {
//!     Ok(result) => println!("order: {:?}", result.order),
//!     Err(err) => eprintln!("arrangement failed: {err}"),
//! }
//! # }
//! ```

use super::params::ArrangeParams;
use crate::chain::chain_order;
use crate::diagnostics::{
    ArrangeReport, ArrangeTrace, InputDescriptor, PairSample, TimingBreakdown,
};
use crate::error::{ArrangeError, Result};
use crate::similarity::{PairScorer, SimilarityMatrix};
use crate::source::{PointSelector, PointSource};
use crate::types::ArrangeResult;
use log::debug;
use std::time::Instant;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Axis arranger orchestrating pair scoring and greedy chaining.
pub struct AxisArranger {
    params: ArrangeParams,
}

impl AxisArranger {
    /// Create an arranger with the supplied parameters.
    pub fn new(params: ArrangeParams) -> Self {
        Self { params }
    }

    /// Run an arrangement, returning the compact result.
    pub fn arrange<S: PointSource>(
        &self,
        source: &S,
        selector: PointSelector,
    ) -> Result<ArrangeResult> {
        self.arrange_with_diagnostics(source, selector)
            .map(|report| report.result)
    }

    /// Run an arrangement and return both the result and a detailed report.
    pub fn arrange_with_diagnostics<S: PointSource>(
        &self,
        source: &S,
        selector: PointSelector,
    ) -> Result<ArrangeReport> {
        let dims = source.dimensionality();
        if dims < 2 {
            return Err(ArrangeError::DimensionalityTooSmall(dims));
        }
        let ids = source
            .resolve(selector)
            .ok_or(ArrangeError::SelectorMismatch(selector))?;
        if ids.is_empty() {
            return Err(ArrangeError::EmptyPointSet);
        }

        debug!(
            "AxisArranger::arrange start dims={} points={} selector={:?}",
            dims,
            ids.len(),
            selector
        );
        let total_start = Instant::now();

        // Resolve once, project once; pair scoring then reads plain slices.
        let project_start = Instant::now();
        let mut coords = vec![0.0f64; ids.len() * dims];
        for (point, &id) in coords.chunks_exact_mut(dims).zip(ids) {
            source.project(id, point);
        }
        let project_ms = elapsed_ms(project_start);

        let score_start = Instant::now();
        let (matrix, pairs) = self.score_pairs(&coords, dims);
        let score_ms = elapsed_ms(score_start);

        let chain_start = Instant::now();
        let order = chain_order(&matrix);
        let chain_ms = elapsed_ms(chain_start);

        let latency_ms = elapsed_ms(total_start);
        debug!(
            "AxisArranger::arrange done order={:?} latency_ms={:.3}",
            order, latency_ms
        );

        let mut timings = TimingBreakdown::with_total(latency_ms);
        timings.push("project", project_ms);
        timings.push("pair_scoring", score_ms);
        timings.push("chain", chain_ms);

        let result = ArrangeResult {
            order,
            pairs_scored: pairs.len(),
            latency_ms,
        };
        let trace = ArrangeTrace {
            input: InputDescriptor {
                dimensionality: dims,
                point_count: ids.len(),
                selector,
            },
            timings,
            pairs,
            similarity: matrix.to_rows(),
        };
        Ok(ArrangeReport { result, trace })
    }

    #[cfg(not(feature = "parallel"))]
    fn score_pairs(&self, coords: &[f64], dims: usize) -> (SimilarityMatrix, Vec<PairSample>) {
        let total = dims * (dims - 1) / 2;
        let mut scorer = PairScorer::new(
            self.params.raster_size,
            self.params.magnification,
            self.params.threshold,
        );
        let mut matrix = SimilarityMatrix::zeros(dims);
        let mut pairs = Vec::with_capacity(total);
        for i in 0..dims {
            for j in (i + 1)..dims {
                let score = scorer.score_pair(coords, dims, i, j);
                matrix.set_symmetric(i, j, score.score);
                pairs.push(PairSample {
                    dim_a: i,
                    dim_b: j,
                    big_cells: score.big_cells,
                    score: score.score,
                });
                debug!(
                    "AxisArranger::score pair {}/{} ({}, {}) big_cells={} score={:.4}",
                    pairs.len(),
                    total,
                    i,
                    j,
                    score.big_cells,
                    score.score
                );
            }
        }
        (matrix, pairs)
    }

    #[cfg(feature = "parallel")]
    fn score_pairs(&self, coords: &[f64], dims: usize) -> (SimilarityMatrix, Vec<PairSample>) {
        let indices: Vec<(usize, usize)> = (0..dims)
            .flat_map(|i| ((i + 1)..dims).map(move |j| (i, j)))
            .collect();
        let params = self.params;
        let pairs: Vec<PairSample> = indices
            .par_iter()
            .map_init(
                || PairScorer::new(params.raster_size, params.magnification, params.threshold),
                |scorer, &(i, j)| {
                    let score = scorer.score_pair(coords, dims, i, j);
                    PairSample {
                        dim_a: i,
                        dim_b: j,
                        big_cells: score.big_cells,
                        score: score.score,
                    }
                },
            )
            .collect();

        let mut matrix = SimilarityMatrix::zeros(dims);
        for sample in &pairs {
            matrix.set_symmetric(sample.dim_a, sample.dim_b, sample.score);
        }
        debug!("AxisArranger::score {} pairs scored in parallel", pairs.len());
        (matrix, pairs)
    }
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
