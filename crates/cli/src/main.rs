use std::path::PathBuf;
use std::process;

use clap::Parser;

use vadseg_core::audio::infrastructure::hound_wav_reader::HoundWavReader;
use vadseg_core::detection::infrastructure::onnx_speech_model::OnnxSpeechModelLoader;
use vadseg_core::pipeline::detect_speech_use_case::DetectSpeechUseCase;
use vadseg_core::pipeline::pipeline_logger::LogPipelineLogger;
use vadseg_core::pipeline::result_emitter::{error_json, probability_json, segments_json};
use vadseg_core::shared::constants::{DEFAULT_SAMPLE_RATE, DEFAULT_THRESHOLD};
use vadseg_core::shared::detection_config::DetectionConfig;
use vadseg_core::shared::model_resolver;

/// Detect speech segments in a WAV file and print them as JSON sample ranges.
#[derive(Parser)]
#[command(name = "silero-vad")]
struct Cli {
    /// Input WAV file.
    #[arg(long)]
    input: PathBuf,

    /// Speech model (ONNX). Defaults to models/silero_vad.onnx, then the user cache.
    #[arg(long)]
    model: Option<PathBuf>,

    /// Probabilities strictly above this value count as speech.
    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    threshold: f64,

    /// Required input sample rate in Hz. Files at other rates are rejected.
    #[arg(long, default_value_t = DEFAULT_SAMPLE_RATE)]
    sample_rate: u32,

    /// Print only the peak speech probability instead of segments.
    #[arg(long)]
    prob_only: bool,
}

fn main() {
    env_logger::init();

    match run() {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}

fn run() -> Result<i32, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let model_path = model_resolver::resolve(cli.model.as_deref());
    log::info!("Using model: {}", model_path.display());

    let config = DetectionConfig {
        model_path,
        threshold: cli.threshold,
        sample_rate: cli.sample_rate,
    };
    let mut use_case = DetectSpeechUseCase::new(
        Box::new(HoundWavReader),
        Box::new(OnnxSpeechModelLoader),
        config,
        Box::new(LogPipelineLogger::new()),
    );

    match use_case.execute(&cli.input) {
        Ok(detection) => {
            let json = if cli.prob_only {
                probability_json(detection.curve.max())?
            } else {
                segments_json(&detection.segments)?
            };
            println!("{json}");
            Ok(0)
        }
        Err(e) if e.is_structured() => {
            println!("{}", error_json(&e.to_string())?);
            Ok(1)
        }
        Err(e) => Err(e.into()),
    }
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.input.exists() {
        return Err(format!("Input file not found: {}", cli.input.display()).into());
    }
    if !(0.0..=1.0).contains(&cli.threshold) {
        log::warn!(
            "Threshold {} is outside [0, 1]; segments will be empty or cover everything",
            cli.threshold
        );
    }
    Ok(())
}
