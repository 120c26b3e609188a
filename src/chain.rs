//! Greedy double-ended chain linearization of the similarity matrix.
//!
//! Seeds with the strongest pair, then repeatedly extends whichever chain end
//! has the stronger remaining match. A consumed bitset excludes placed
//! dimensions from the argmax scans, so the matrix itself is never mutated.

use crate::similarity::SimilarityMatrix;
use std::collections::VecDeque;

/// Produces a total order of all dimensions covered by `matrix`.
///
/// Deterministic for a given matrix: argmax scans are row-major with strict
/// greater-than comparisons, and equal frontier strengths extend the back
/// end. The scans work on magnitudes, so any symmetric matrix yields a valid
/// permutation.
pub fn chain_order(matrix: &SimilarityMatrix) -> Vec<usize> {
    let dims = matrix.dims();
    assert!(dims >= 2, "chain arrangement needs at least two dimensions");

    let mut consumed = vec![false; dims];
    let (seed_front, seed_back) = strongest_pair(matrix);
    let mut chain = VecDeque::with_capacity(dims);
    chain.push_back(seed_front);
    chain.push_back(seed_back);
    consumed[seed_front] = true;
    consumed[seed_back] = true;

    let mut front = seed_front;
    let mut back = seed_back;
    for _ in 2..dims {
        let front_best = best_match(matrix, front, &consumed);
        let back_best = best_match(matrix, back, &consumed);
        if matrix.get(front, front_best).abs() > matrix.get(back, back_best).abs() {
            chain.push_front(front_best);
            consumed[front_best] = true;
            front = front_best;
        } else {
            chain.push_back(back_best);
            consumed[back_best] = true;
            back = back_best;
        }
    }
    chain.into()
}

/// Off-diagonal cell with the largest magnitude; row-major scan, first hit
/// wins.
fn strongest_pair(matrix: &SimilarityMatrix) -> (usize, usize) {
    let dims = matrix.dims();
    let (mut a, mut b) = (0, 1);
    let mut best = -1.0f64;
    for i in 0..dims {
        for j in 0..dims {
            if i == j {
                continue;
            }
            let v = matrix.get(i, j).abs();
            if v > best {
                best = v;
                a = i;
                b = j;
            }
        }
    }
    (a, b)
}

/// Best unconsumed partner for `dim`; the lowest index wins an all-equal row.
fn best_match(matrix: &SimilarityMatrix, dim: usize, consumed: &[bool]) -> usize {
    let mut best_idx = None;
    let mut best = -1.0f64;
    for (j, &used) in consumed.iter().enumerate() {
        if used {
            continue;
        }
        let v = matrix.get(dim, j).abs();
        if v > best {
            best = v;
            best_idx = Some(j);
        }
    }
    best_idx.expect("an unconsumed dimension remains while the chain is short")
}
