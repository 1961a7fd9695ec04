use std::path::Path;

use super::probability_curve::ProbabilityCurve;
use crate::shared::error::VadError;

/// Domain interface for per-sample speech probability inference.
///
/// `infer` receives the whole preprocessed mono waveform and returns one
/// probability per sample. Implementations may keep runtime state,
/// hence `&mut self`.
pub trait SpeechProbabilityModel {
    fn infer(&mut self, samples: &[f32]) -> Result<ProbabilityCurve, Box<dyn std::error::Error>>;
}

/// Acquires a `SpeechProbabilityModel` from a model artifact.
///
/// Must fail with `VadError::ModelNotFound` when `path` is not a readable
/// file, before any runtime work happens.
pub trait SpeechModelLoader {
    fn load(&self, path: &Path) -> Result<Box<dyn SpeechProbabilityModel>, VadError>;
}
