use axis_arranger::config::arrange::{load_config, load_points_csv};
use axis_arranger::{AxisArranger, MemoryPointSource, PointSelector};
use std::env;
use std::fs;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let (dims, rows) = load_points_csv(&config.input_path)?;
    let source = MemoryPointSource::new(dims, rows).sample_all();
    let selector = config.selector.unwrap_or(PointSelector::Sampled);

    let arranger = AxisArranger::new(config.arrange_params);
    let report = arranger
        .arrange_with_diagnostics(&source, selector)
        .map_err(|e| format!("Arrangement failed: {e}"))?;

    println!("order: {:?}", report.result.order);
    println!(
        "pairs scored: {} latency_ms={:.3}",
        report.result.pairs_scored, report.result.latency_ms
    );

    if let Some(path) = &config.output.report_json {
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| format!("Failed to serialize report: {e}"))?;
        fs::write(path, json).map_err(|e| format!("Failed to write {}: {e}", path.display()))?;
        println!("Saved arrangement report to {}", path.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: arrange_demo <config.json>".to_string()
}
