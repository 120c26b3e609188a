use crate::source::PointSelector;
use crate::ArrangeParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Default, Deserialize)]
pub struct OutputConfig {
    pub report_json: Option<PathBuf>,
}

#[derive(Clone, Deserialize)]
pub struct RuntimeConfig {
    pub input_path: PathBuf,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub arrange_params: ArrangeParams,
    /// Defaults to the sampled subset when absent.
    pub selector: Option<PointSelector>,
}

pub fn load_config(path: &Path) -> Result<RuntimeConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    let config: RuntimeConfig = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))?;
    Ok(config)
}

/// Loads comma-separated point rows; every line carries one point, the first
/// line fixes the dimensionality.
pub fn load_points_csv(path: &Path) -> Result<(usize, Vec<f64>), String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read points {}: {e}", path.display()))?;

    let mut dims = 0usize;
    let mut rows = Vec::new();
    for (lineno, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut values = Vec::new();
        for field in line.split(',') {
            let value: f64 = field.trim().parse().map_err(|e| {
                format!(
                    "Bad value {:?} on line {} of {}: {e}",
                    field,
                    lineno + 1,
                    path.display()
                )
            })?;
            values.push(value);
        }
        if dims == 0 {
            dims = values.len();
        } else if values.len() != dims {
            return Err(format!(
                "Line {} of {} has {} values, expected {}",
                lineno + 1,
                path.display(),
                values.len(),
                dims
            ));
        }
        rows.extend(values);
    }
    if dims == 0 {
        return Err(format!("No points found in {}", path.display()));
    }
    Ok((dims, rows))
}
