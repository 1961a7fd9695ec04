/// Speech-probability model backed by ONNX Runtime via `ort`.
///
/// The whole waveform is fed as one batch row `[1, N]` to the model's first
/// declared input. No sample-rate or recurrent-state inputs are populated,
/// and the first row of the first output is used verbatim as the curve.
use std::fs::File;
use std::path::Path;

use ndarray::{Array2, ArrayViewD, Axis};

use crate::detection::domain::probability_curve::ProbabilityCurve;
use crate::detection::domain::speech_model::{SpeechModelLoader, SpeechProbabilityModel};
use crate::shared::error::VadError;

pub struct OnnxSpeechModel {
    session: ort::session::Session,
    input_name: String,
}

impl OnnxSpeechModel {
    /// Build an ONNX Runtime session for the model at `model_path`.
    pub fn new(model_path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let session = ort::session::Session::builder()?
            .with_optimization_level(ort::session::builder::GraphOptimizationLevel::Level3)?
            .commit_from_file(model_path)?;

        let input_name = session
            .inputs()
            .first()
            .map(|input| input.name().to_string())
            .ok_or("model declares no inputs")?;

        log::debug!(
            "Loaded speech model {} (input '{}')",
            model_path.display(),
            input_name
        );

        Ok(Self {
            session,
            input_name,
        })
    }
}

impl SpeechProbabilityModel for OnnxSpeechModel {
    fn infer(&mut self, samples: &[f32]) -> Result<ProbabilityCurve, Box<dyn std::error::Error>> {
        if samples.is_empty() {
            return Ok(ProbabilityCurve::default());
        }

        let batch = Array2::from_shape_vec((1, samples.len()), samples.to_vec())?;
        let input_value = ort::value::Tensor::from_array(batch)?;
        let outputs = self
            .session
            .run(ort::inputs![self.input_name.as_str() => input_value])?;

        if outputs.len() == 0 {
            return Err("speech model produced no outputs".into());
        }
        let probs = outputs[0].try_extract_array::<f32>()?;
        let values = first_row(&probs)?;

        if values.len() != samples.len() {
            log::warn!(
                "Probability curve length {} differs from waveform length {}",
                values.len(),
                samples.len()
            );
        }

        Ok(ProbabilityCurve::new(values))
    }
}

/// Take batch row 0 of a `[batch, ...]` output tensor as the curve.
fn first_row(probs: &ArrayViewD<f32>) -> Result<Vec<f32>, Box<dyn std::error::Error>> {
    if probs.ndim() < 2 {
        return Err(format!(
            "speech model output has shape {:?}, expected [batch, samples]",
            probs.shape()
        )
        .into());
    }
    if probs.len_of(Axis(0)) == 0 {
        return Err("speech model output has an empty batch dimension".into());
    }
    Ok(probs.index_axis(Axis(0), 0).iter().copied().collect())
}

/// Loads `OnnxSpeechModel`s after checking the artifact is a readable file.
pub struct OnnxSpeechModelLoader;

impl SpeechModelLoader for OnnxSpeechModelLoader {
    fn load(&self, path: &Path) -> Result<Box<dyn SpeechProbabilityModel>, VadError> {
        if !path.is_file() || File::open(path).is_err() {
            return Err(VadError::ModelNotFound {
                path: path.to_path_buf(),
            });
        }
        let model = OnnxSpeechModel::new(path).map_err(VadError::ModelLoad)?;
        Ok(Box::new(model))
    }
}
