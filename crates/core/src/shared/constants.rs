/// File name of the speech-probability model.
pub const SILERO_MODEL_NAME: &str = "silero_vad.onnx";

/// Conventional model location, relative to the working directory.
pub const DEFAULT_MODEL_PATH: &str = "models/silero_vad.onnx";

/// Probabilities strictly above this value count as speech.
pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// Sample rate the model family expects.
pub const DEFAULT_SAMPLE_RATE: u32 = 16000;

/// Directory name used under the user cache directory.
pub const APP_DIR_NAME: &str = "vadseg";
