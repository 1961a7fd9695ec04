use std::path::Path;

use super::waveform::Waveform;

/// Domain interface for loading a waveform from a file.
///
/// Implementations return the file's native sample rate and channel layout;
/// no resampling or downmixing happens here.
pub trait WaveformReader: Send {
    fn read(&self, path: &Path) -> Result<Waveform, Box<dyn std::error::Error>>;
}
