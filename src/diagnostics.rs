//! Serializable run report bundling the arrangement result with a trace of
//! every stage: input descriptor, timings, per-pair scores and the final
//! similarity matrix. Observability only; the functional contract is the
//! [`ArrangeResult`](crate::types::ArrangeResult) alone.

use crate::source::PointSelector;
use crate::types::ArrangeResult;
use serde::Serialize;

/// Timing entry describing a single stage of the arrangement.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

impl StageTiming {
    pub fn new(label: impl Into<String>, elapsed_ms: f64) -> Self {
        Self {
            label: label.into(),
            elapsed_ms,
        }
    }
}

/// Aggregated timing trace for one arrangement call.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    pub fn with_total(total_ms: f64) -> Self {
        Self {
            total_ms,
            stages: Vec::new(),
        }
    }

    pub fn push(&mut self, label: impl Into<String>, elapsed_ms: f64) {
        self.stages.push(StageTiming::new(label, elapsed_ms));
    }
}

/// Describes the input of one arrangement call.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub dimensionality: usize,
    pub point_count: usize,
    pub selector: PointSelector,
}

/// Score record for one dimension pair.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PairSample {
    pub dim_a: usize,
    pub dim_b: usize,
    pub big_cells: usize,
    pub score: f64,
}

/// Full trace of an arrangement run.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrangeTrace {
    pub input: InputDescriptor,
    pub timings: TimingBreakdown,
    pub pairs: Vec<PairSample>,
    /// Similarity matrix rows; symmetric, diagonal zero
    pub similarity: Vec<Vec<f64>>,
}

/// Result plus trace returned by the diagnostics entry point.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrangeReport {
    pub result: ArrangeResult,
    pub trace: ArrangeTrace,
}
