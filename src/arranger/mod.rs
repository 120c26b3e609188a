//! Axis arranger orchestrating the scoring→chaining pipeline.
//!
//! Overview
//! - Validates the input and resolves the selected point subset once.
//! - Projects every selected point into render space.
//! - Scores every unordered dimension pair: scatter raster → Hough vote
//!   accumulator → coarse-grid thresholding → one scalar, written
//!   symmetrically into the similarity matrix.
//! - Chains dimensions greedily from both ends of the strongest pair.
//! - Hands the final order back as per-slot axis moves.
//!
//! Modules
//! - [`params`] – raster size, magnification and threshold configuration.
//! - `pipeline` – the main [`AxisArranger`] implementation.
//!
//! Key Ideas
//! - The similarity matrix is write-once per cell during scoring and
//!   read-only during chaining; diagnostics can dump it afterwards.
//! - An arrangement call is synchronous and runs to completion; with the
//!   `parallel` feature the pair scores are computed concurrently, the
//!   chaining phase never is.

pub mod params;
mod pipeline;

pub use params::ArrangeParams;
pub use pipeline::AxisArranger;
