use crate::synth::GratingParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Config consumed by the `grating_demo` tool.
#[derive(Debug, Deserialize)]
pub struct SynthDemoConfig {
    #[serde(default)]
    pub params: GratingParams,
    /// Fixed seed for reproducible output; OS entropy when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    pub output: SynthDemoOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct SynthDemoOutputConfig {
    pub image: PathBuf,
    #[serde(default)]
    pub report_json: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<SynthDemoConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

pub fn parse_config(data: &str) -> Result<SynthDemoConfig, serde_json::Error> {
    serde_json::from_str(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_uses_defaults() {
        let cfg = parse_config(r#"{"output": {"image": "out/g.png"}}"#).expect("valid config");
        assert_eq!(cfg.params, GratingParams::default());
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.output.image, PathBuf::from("out/g.png"));
        assert!(cfg.output.report_json.is_none());
    }

    #[test]
    fn full_config_round_trips_fields() {
        let cfg = parse_config(
            r#"{
                "params": {"size": 256, "pitch_px": 33.5, "noise_level": 0,
                           "center_defect": false, "quantization": "truncate"},
                "seed": 42,
                "output": {"image": "a.png", "report_json": "a.json"}
            }"#,
        )
        .expect("valid config");
        assert_eq!(cfg.params.size, 256);
        assert_eq!(cfg.params.pitch_px, 33.5);
        assert!(!cfg.params.center_defect);
        assert_eq!(cfg.seed, Some(42));
        assert_eq!(cfg.output.image, PathBuf::from("a.png"));
        assert_eq!(cfg.output.report_json, Some(PathBuf::from("a.json")));
    }

    #[test]
    fn missing_output_is_an_error() {
        assert!(parse_config(r#"{"seed": 1}"#).is_err());
    }

    #[test]
    fn load_reports_path_on_failure() {
        let err = load_config(Path::new("/nonexistent/grating.json")).unwrap_err();
        assert!(err.contains("/nonexistent/grating.json"), "{err}");
    }
}
