use std::path::PathBuf;

use thiserror::Error;

/// Failures of a speech detection run.
///
/// Only the precondition failures (`SampleRateMismatch`, `ModelNotFound`)
/// are reported to callers as structured error objects. Everything else
/// propagates unmodified.
#[derive(Error, Debug)]
pub enum VadError {
    #[error("Sample rate mismatch: {actual} != {expected}")]
    SampleRateMismatch { actual: u32, expected: u32 },
    #[error("Model not found: {}", .path.display())]
    ModelNotFound { path: PathBuf },
    #[error("failed to read waveform: {0}")]
    WaveformRead(#[source] Box<dyn std::error::Error>),
    #[error("failed to load model: {0}")]
    ModelLoad(#[source] Box<dyn std::error::Error>),
    #[error("inference failed: {0}")]
    InferenceFailure(#[source] Box<dyn std::error::Error>),
}

impl VadError {
    /// Whether this failure is rendered as `{"error": ...}` on the output channel.
    pub fn is_structured(&self) -> bool {
        matches!(
            self,
            VadError::SampleRateMismatch { .. } | VadError::ModelNotFound { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_sample_rate_mismatch_message() {
        let err = VadError::SampleRateMismatch {
            actual: 8000,
            expected: 16000,
        };
        assert_eq!(err.to_string(), "Sample rate mismatch: 8000 != 16000");
        assert!(err.is_structured());
    }

    #[test]
    fn test_model_not_found_message() {
        let err = VadError::ModelNotFound {
            path: PathBuf::from("models/silero_vad.onnx"),
        };
        assert_eq!(err.to_string(), "Model not found: models/silero_vad.onnx");
        assert!(err.is_structured());
    }

    #[test]
    fn test_runtime_failures_are_not_structured() {
        let err = VadError::InferenceFailure("shape mismatch".into());
        assert!(!err.is_structured());
        assert!(err.source().is_some());
        assert_eq!(err.to_string(), "inference failed: shape mismatch");

        let err = VadError::WaveformRead("not a wav".into());
        assert!(!err.is_structured());
    }

    #[test]
    fn test_display_names_cause_exactly_once() {
        let err = VadError::ModelLoad("protobuf parsing failed".into());
        let text = err.to_string();
        assert_eq!(text, "failed to load model: protobuf parsing failed");
        assert_eq!(text.matches("protobuf parsing failed").count(), 1);
    }
}
