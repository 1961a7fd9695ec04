use std::path::PathBuf;

use super::constants::{DEFAULT_MODEL_PATH, DEFAULT_SAMPLE_RATE, DEFAULT_THRESHOLD};

/// Parameters of one detection run. Immutable once the run starts.
#[derive(Clone, Debug, PartialEq)]
pub struct DetectionConfig {
    pub model_path: PathBuf,
    pub threshold: f64,
    pub sample_rate: u32,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            threshold: DEFAULT_THRESHOLD,
            sample_rate: DEFAULT_SAMPLE_RATE,
        }
    }
}
