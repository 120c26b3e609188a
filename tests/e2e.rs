mod common;

use axis_arranger::{ArrangeParams, AxisArranger, MemoryPointSource, PointSelector};
use common::synthetic_points::correlated_plus_noise;

#[test]
fn correlated_pair_scores_highest_and_lands_adjacent() {
    let rows = correlated_plus_noise(48, 100.0, 7);
    let source = MemoryPointSource::new(4, rows).sample_all();
    let arranger = AxisArranger::new(ArrangeParams::default());
    let report = arranger
        .arrange_with_diagnostics(&source, PointSelector::Sampled)
        .expect("arrangement succeeds");

    let sim = &report.trace.similarity;
    for i in 0..4 {
        assert_eq!(sim[i][i], 0.0, "diagonal must stay unused");
        for j in 0..4 {
            assert_eq!(sim[i][j], sim[j][i], "matrix must be symmetric");
            assert!(
                (0.0..=1.0).contains(&sim[i][j]),
                "score {} out of bounds for pair ({i}, {j})",
                sim[i][j]
            );
        }
    }

    let correlated = sim[0][1];
    for (a, b) in [(0, 2), (0, 3), (1, 2), (1, 3), (2, 3)] {
        assert!(
            correlated > sim[a][b],
            "expected score(0,1)={correlated:.4} to beat score({a},{b})={:.4}",
            sim[a][b]
        );
    }

    let order = &report.result.order;
    let mut sorted = order.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, vec![0, 1, 2, 3], "order must be a permutation");

    let pos0 = order.iter().position(|&d| d == 0).expect("dim 0 placed");
    let pos1 = order.iter().position(|&d| d == 1).expect("dim 1 placed");
    assert_eq!(
        pos0.abs_diff(pos1),
        1,
        "correlated dimensions not adjacent in {order:?}"
    );
}

#[test]
fn two_dimensions_return_the_seed_pair() {
    let rows = vec![1.0, 9.0, 20.0, 4.0, 33.0, 60.0];
    let source = MemoryPointSource::new(2, rows).sample_all();
    let arranger = AxisArranger::new(ArrangeParams::default());
    let result = arranger
        .arrange(&source, PointSelector::Sampled)
        .expect("arrangement succeeds");

    let mut sorted = result.order.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, vec![0, 1]);
    assert_eq!(result.pairs_scored, 1);
}

#[test]
fn cluster_selector_scopes_the_arrangement() {
    let rows = correlated_plus_noise(32, 100.0, 11);
    let cluster: Vec<u32> = (0..16).collect();
    let source = MemoryPointSource::new(4, rows).with_cluster(cluster);
    let arranger = AxisArranger::new(ArrangeParams::default());

    let report = arranger
        .arrange_with_diagnostics(&source, PointSelector::Cluster(0))
        .expect("cluster arrangement succeeds");
    assert_eq!(report.trace.input.point_count, 16);

    let err = arranger
        .arrange(&source, PointSelector::Cluster(5))
        .expect_err("cluster 5 does not exist");
    assert_eq!(
        err,
        axis_arranger::ArrangeError::SelectorMismatch(PointSelector::Cluster(5))
    );
}
