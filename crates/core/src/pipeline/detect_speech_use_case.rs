use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::audio::domain::preprocessor::Preprocessor;
use crate::audio::domain::waveform_reader::WaveformReader;
use crate::detection::domain::probability_curve::ProbabilityCurve;
use crate::detection::domain::segment::Segment;
use crate::detection::domain::segmenter::Segmenter;
use crate::detection::domain::speech_model::SpeechModelLoader;
use crate::pipeline::pipeline_logger::PipelineLogger;
use crate::shared::detection_config::DetectionConfig;
use crate::shared::error::VadError;

/// Outcome of one detection run.
#[derive(Clone, Debug, PartialEq)]
pub struct SpeechDetection {
    pub curve: ProbabilityCurve,
    pub segments: Vec<Segment>,
}

/// Runs read → preprocess → load model → infer → segment, once, in order.
///
/// The sample-rate check happens before the model is touched, and the model
/// loader rejects a missing artifact before any inference work.
pub struct DetectSpeechUseCase {
    reader: Box<dyn WaveformReader>,
    loader: Box<dyn SpeechModelLoader>,
    preprocessor: Preprocessor,
    segmenter: Segmenter,
    model_path: PathBuf,
    logger: Box<dyn PipelineLogger>,
}

impl DetectSpeechUseCase {
    pub fn new(
        reader: Box<dyn WaveformReader>,
        loader: Box<dyn SpeechModelLoader>,
        config: DetectionConfig,
        logger: Box<dyn PipelineLogger>,
    ) -> Self {
        Self {
            reader,
            loader,
            preprocessor: Preprocessor::new(config.sample_rate),
            segmenter: Segmenter::new(config.threshold),
            model_path: config.model_path,
            logger,
        }
    }

    pub fn execute(&mut self, input: &Path) -> Result<SpeechDetection, VadError> {
        let t = Instant::now();
        let waveform = self.reader.read(input).map_err(VadError::WaveformRead)?;
        self.record("read", t);
        self.logger.info(&format!(
            "Read {} ({}Hz, {} channel(s), {:.2}s)",
            input.display(),
            waveform.sample_rate(),
            waveform.channels(),
            waveform.duration()
        ));

        let t = Instant::now();
        let waveform = self.preprocessor.preprocess(waveform)?;
        self.record("preprocess", t);

        let t = Instant::now();
        let mut model = self.loader.load(&self.model_path)?;
        self.record("load_model", t);

        let t = Instant::now();
        let curve = model
            .infer(waveform.samples())
            .map_err(VadError::InferenceFailure)?;
        self.record("infer", t);

        let t = Instant::now();
        let segments = self.segmenter.segment(curve.values());
        self.record("segment", t);

        let speech_samples: usize = segments.iter().map(Segment::len).sum();
        let speech_ratio = if curve.is_empty() {
            0.0
        } else {
            speech_samples as f64 / curve.len() as f64
        };
        self.logger.metric("segments", segments.len() as f64);
        self.logger.metric("speech_ratio", speech_ratio);
        self.logger.metric("peak_probability", f64::from(curve.max()));
        self.logger.metric("mean_probability", f64::from(curve.mean()));
        self.logger.info(&format!(
            "Detected {} speech segment(s) covering {:.1}% of {} samples",
            segments.len(),
            speech_ratio * 100.0,
            curve.len()
        ));
        self.logger.summary();

        Ok(SpeechDetection { curve, segments })
    }

    fn record(&mut self, stage: &str, started: Instant) {
        self.logger
            .timing(stage, started.elapsed().as_secs_f64() * 1000.0);
    }
}
