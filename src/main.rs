use axis_arranger::{ArrangeParams, AxisArranger, MemoryPointSource, PointSelector};

fn main() {
    // Demo stub: two correlated dimensions followed by two noise dimensions
    let dims = 4usize;
    let points = 64usize;
    let mut rows = Vec::with_capacity(dims * points);
    let mut state = 0x2545_f491_4f6c_dd1du64;
    for p in 0..points {
        let v = (p as f64 / points as f64) * 100.0;
        rows.push(v);
        rows.push(v);
        for _ in 0..2 {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            rows.push((state >> 33) as f64 % 100.0);
        }
    }

    let source = MemoryPointSource::new(dims, rows).sample_all();
    let arranger = AxisArranger::new(ArrangeParams::default());
    match arranger.arrange(&source, PointSelector::Sampled) {
        Ok(result) => println!(
            "order={:?} latency_ms={:.3}",
            result.order, result.latency_ms
        ),
        Err(err) => eprintln!("arrangement failed: {err}"),
    }
}
