use serde::Serialize;

/// One positional move consumed by the host axis system.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisMove {
    /// Dimension index to move
    pub dim: usize,
    /// Physical slot it lands in
    pub slot: usize,
}

/// Host-side axis collaborator, fed one move at a time.
pub trait AxisLayout {
    fn move_axis(&mut self, dim: usize, slot: usize);
}

/// Final arrangement of all dimensions.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrangeResult {
    /// Permutation of 0..D; `order[k]` is the dimension shown in slot k
    pub order: Vec<usize>,
    /// Number of unordered dimension pairs that were scored
    pub pairs_scored: usize,
    /// Wall-clock latency of the whole call
    pub latency_ms: f64,
}

impl ArrangeResult {
    /// Move instructions equivalent to `order`.
    pub fn moves(&self) -> impl Iterator<Item = AxisMove> + '_ {
        self.order
            .iter()
            .enumerate()
            .map(|(slot, &dim)| AxisMove { dim, slot })
    }

    /// Applies the arrangement to a live axis layout, one move at a time.
    pub fn apply_to(&self, layout: &mut dyn AxisLayout) {
        for mv in self.moves() {
            layout.move_axis(mv.dim, mv.slot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct RecordingLayout {
        moves: Vec<(usize, usize)>,
    }

    impl AxisLayout for RecordingLayout {
        fn move_axis(&mut self, dim: usize, slot: usize) {
            self.moves.push((dim, slot));
        }
    }

    #[test]
    fn moves_enumerate_slots_in_order() {
        let result = ArrangeResult {
            order: vec![2, 0, 1],
            pairs_scored: 3,
            latency_ms: 0.0,
        };
        let moves: Vec<AxisMove> = result.moves().collect();
        assert_eq!(
            moves,
            vec![
                AxisMove { dim: 2, slot: 0 },
                AxisMove { dim: 0, slot: 1 },
                AxisMove { dim: 1, slot: 2 },
            ]
        );
    }

    #[test]
    fn apply_to_feeds_the_layout_one_move_at_a_time() {
        let result = ArrangeResult {
            order: vec![1, 2, 0],
            pairs_scored: 3,
            latency_ms: 0.0,
        };
        let mut layout = RecordingLayout { moves: Vec::new() };
        result.apply_to(&mut layout);
        assert_eq!(layout.moves, vec![(1, 0), (2, 1), (0, 2)]);
    }
}
