//! Runtime configuration of the demo binary.
//!
//! One JSON file selects the input (a real image or a simulated frame),
//! the catalog codes to judge against, the output sinks and the full
//! [`InspectorParams`] bundle. Every field is optional; an absent config
//! file means "showcase run on a simulated frame".

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::inspector::InspectorParams;

#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Write the combined JSON report here.
    pub json_out: Option<PathBuf>,
    /// Dump intermediate images (grayscale, edge and defect masks) here.
    pub debug_dir: Option<PathBuf>,
}

#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Image to inspect; when unset the demo renders a simulated frame.
    pub input_path: Option<PathBuf>,
    /// Seed of the simulated frame used without an input image.
    pub simulate_seed: u64,
    /// Product code for the dimensional check.
    pub product_code: Option<String>,
    /// Color product code for the color/surface analysis.
    pub color_product: Option<String>,
    pub output: OutputConfig,
    pub params: InspectorParams,
}

pub fn load_config(path: &Path) -> Result<RuntimeConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    let config: RuntimeConfig = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))?;
    Ok(config)
}

/// Parse the single optional CLI argument: a JSON config path.
pub fn parse_cli(program: &str) -> Result<RuntimeConfig, String> {
    let mut args = env::args().skip(1);
    let config = match args.next() {
        Some(arg) if arg == "--help" || arg == "-h" => return Err(usage(program)),
        Some(path) => load_config(Path::new(&path))?,
        None => RuntimeConfig::default(),
    };
    if args.next().is_some() {
        return Err(usage(program));
    }
    Ok(config)
}

fn usage(program: &str) -> String {
    format!("Usage: {program} [config.json]")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_parses_with_defaults() {
        let config: RuntimeConfig =
            serde_json::from_str(r#"{"color_product": "CNT-STR-001"}"#).unwrap();
        assert_eq!(config.color_product.as_deref(), Some("CNT-STR-001"));
        assert!(config.input_path.is_none());
        assert_eq!(config.simulate_seed, 0);
        assert_eq!(config.params.confidence_seed, 42);
        assert!(config.output.json_out.is_none());
    }

    #[test]
    fn nested_params_override() {
        let config: RuntimeConfig = serde_json::from_str(
            r#"{
                "input_path": "frame.png",
                "product_code": "FRC-180-STD",
                "output": {"json_out": "report.json"},
                "params": {"geometry": {"minAreaPx": 2500.0}}
            }"#,
        )
        .unwrap();
        assert_eq!(
            config.input_path.as_deref(),
            Some(Path::new("frame.png"))
        );
        assert_eq!(config.params.geometry.min_area_px, 2500.0);
        assert_eq!(
            config.output.json_out.as_deref(),
            Some(Path::new("report.json"))
        );
    }

    #[test]
    fn missing_file_reports_the_path() {
        let err = load_config(Path::new("/nonexistent/inspect.json")).unwrap_err();
        assert!(err.contains("Failed to read config"));
        assert!(err.contains("/nonexistent/inspect.json"));
    }
}
