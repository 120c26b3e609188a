#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod arranger;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod source;
pub mod types;

// Algorithm internals – still public, but considered unstable surface.
pub mod cells;
pub mod chain;
pub mod hough;
pub mod raster;
pub mod similarity;

// --- High-level re-exports -------------------------------------------------

// Main entry points: arranger + results.
pub use crate::arranger::{ArrangeParams, AxisArranger};
pub use crate::types::{ArrangeResult, AxisLayout, AxisMove};

// Boundary contracts towards the host.
pub use crate::error::ArrangeError;
pub use crate::source::{MemoryPointSource, PointId, PointSelector, PointSource};

// High-level diagnostics returned by the arranger.
pub use crate::diagnostics::{ArrangeReport, ArrangeTrace};

// Scoring knobs generally useful to callers.
pub use crate::cells::ThresholdRule;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use axis_arranger::prelude::*;
///
/// # fn main() {
/// let rows = vec![0.0, 0.5, 10.0, 9.5, 20.0, 20.5];
/// let source = MemoryPointSource::new(2, rows).sample_all();
/// let arranger = AxisArranger::new(ArrangeParams::default());
/// if let Ok(result) = arranger.arrange(&source, PointSelector::Sampled) {
///     println!("order={:?} latency_ms={:.3}", result.order, result.latency_ms);
/// }
/// # }
/// ```
pub mod prelude {
    pub use crate::arranger::{ArrangeParams, AxisArranger};
    pub use crate::source::{MemoryPointSource, PointSelector, PointSource};
    pub use crate::types::ArrangeResult;
}
