//! Data-store seam: point subsets and render-space projection.
//!
//! The arranger never owns data points. A host exposes them through
//! [`PointSource`], which resolves the named subsets and projects raw points
//! into render-space coordinates. [`MemoryPointSource`] is an owned
//! implementation for demos and tests.

use serde::{Deserialize, Serialize};

/// Identifier of a data point inside its source.
pub type PointId = u32;

/// Names the subset of points an arrangement call operates on.
///
/// Resolved exactly once per call, before any scoring starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PointSelector {
    /// Points of one cluster, by cluster index.
    Cluster(usize),
    /// The sampled subset.
    Sampled,
    /// The current selection.
    Selected,
}

/// Read-only access to points, their subsets and their projection.
pub trait PointSource {
    /// Number of render-space coordinates per point.
    fn dimensionality(&self) -> usize;

    /// Point ids of cluster `index`, if such a cluster exists.
    fn cluster_ids(&self, index: usize) -> Option<&[PointId]>;

    /// The sampled subset, if one exists.
    fn sampled_ids(&self) -> Option<&[PointId]>;

    /// The current selection, if one exists.
    fn selected_ids(&self) -> Option<&[PointId]>;

    /// Projects point `id` into render space.
    ///
    /// `out` carries `dimensionality()` slots; implementations fill all of
    /// them.
    fn project(&self, id: PointId, out: &mut [f64]);

    /// Resolves a selector to its subset.
    fn resolve(&self, selector: PointSelector) -> Option<&[PointId]> {
        match selector {
            PointSelector::Cluster(index) => self.cluster_ids(index),
            PointSelector::Sampled => self.sampled_ids(),
            PointSelector::Selected => self.selected_ids(),
        }
    }
}

/// Owned in-memory source holding render-space rows directly.
///
/// Rows are point-major: `dims` consecutive values per point. Projection is
/// the identity; hosts with a real projection implement [`PointSource`] on
/// their own store instead.
#[derive(Clone, Debug)]
pub struct MemoryPointSource {
    dims: usize,
    rows: Vec<f64>,
    clusters: Vec<Vec<PointId>>,
    sampled: Option<Vec<PointId>>,
    selected: Option<Vec<PointId>>,
}

impl MemoryPointSource {
    /// Builds a source from point rows; every row carries `dims` values.
    pub fn new(dims: usize, rows: Vec<f64>) -> Self {
        assert!(dims > 0, "dims must be positive");
        assert_eq!(
            rows.len() % dims,
            0,
            "row buffer must hold whole points of {dims} values"
        );
        Self {
            dims,
            rows,
            clusters: Vec::new(),
            sampled: None,
            selected: None,
        }
    }

    /// Number of points held.
    pub fn point_count(&self) -> usize {
        self.rows.len() / self.dims
    }

    /// Registers every point as the sampled subset.
    pub fn sample_all(mut self) -> Self {
        self.sampled = Some((0..self.point_count() as PointId).collect());
        self
    }

    /// Appends a cluster subset.
    pub fn with_cluster(mut self, ids: Vec<PointId>) -> Self {
        self.clusters.push(ids);
        self
    }

    /// Sets the sampled subset.
    pub fn with_sampled(mut self, ids: Vec<PointId>) -> Self {
        self.sampled = Some(ids);
        self
    }

    /// Sets the current selection.
    pub fn with_selected(mut self, ids: Vec<PointId>) -> Self {
        self.selected = Some(ids);
        self
    }
}

impl PointSource for MemoryPointSource {
    fn dimensionality(&self) -> usize {
        self.dims
    }

    fn cluster_ids(&self, index: usize) -> Option<&[PointId]> {
        self.clusters.get(index).map(Vec::as_slice)
    }

    fn sampled_ids(&self) -> Option<&[PointId]> {
        self.sampled.as_deref()
    }

    fn selected_ids(&self) -> Option<&[PointId]> {
        self.selected.as_deref()
    }

    fn project(&self, id: PointId, out: &mut [f64]) {
        let start = id as usize * self.dims;
        out.copy_from_slice(&self.rows[start..start + self.dims]);
    }
}
