/// Deterministic linear-congruential generator for reproducible noise
/// columns.
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self(seed.max(1))
    }

    /// Next value in [0, limit).
    pub fn next_f64(&mut self, limit: f64) -> f64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((self.0 >> 33) as f64 / (1u64 << 31) as f64) * limit
    }
}

/// Builds point rows where dimensions 0 and 1 are identical (a degenerate
/// line in their scatter) and dimensions 2 and 3 are independent noise over
/// the full [0, limit) range.
///
/// The correlated values stay in a narrow mid-range band: their rendered
/// lines bundle tightly, while noise lines fan across the whole raster.
pub fn correlated_plus_noise(points: usize, limit: f64, seed: u64) -> Vec<f64> {
    let mut rng = Lcg::new(seed);
    let mut rows = Vec::with_capacity(points * 4);
    for p in 0..points {
        let v = limit * (0.45 + 0.1 * p as f64 / points as f64);
        rows.push(v);
        rows.push(v);
        rows.push(rng.next_f64(limit));
        rows.push(rng.next_f64(limit));
    }
    rows
}
