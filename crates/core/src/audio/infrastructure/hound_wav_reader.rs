use std::path::Path;

use crate::audio::domain::waveform::Waveform;
use crate::audio::domain::waveform_reader::WaveformReader;

/// Decodes RIFF/WAVE files using `hound`.
///
/// Integer PCM is scaled by `1 / 2^(bits - 1)`; float PCM is passed through,
/// so float files may carry values outside [-1, 1].
pub struct HoundWavReader;

impl WaveformReader for HoundWavReader {
    fn read(&self, path: &Path) -> Result<Waveform, Box<dyn std::error::Error>> {
        let reader = hound::WavReader::open(path)?;
        let spec = reader.spec();

        log::debug!(
            "Loading WAV {}: {}Hz, {} channels, {} bits {:?}",
            path.display(),
            spec.sample_rate,
            spec.channels,
            spec.bits_per_sample,
            spec.sample_format
        );

        let samples: Vec<f32> = match spec.sample_format {
            hound::SampleFormat::Float => reader
                .into_samples::<f32>()
                .collect::<Result<Vec<_>, _>>()?,
            hound::SampleFormat::Int => {
                let scale = int_scale(spec.bits_per_sample);
                reader
                    .into_samples::<i32>()
                    .map(|s| s.map(|v| v as f32 / scale))
                    .collect::<Result<Vec<_>, _>>()?
            }
        };

        Ok(Waveform::new(samples, spec.sample_rate, spec.channels))
    }
}

fn int_scale(bits_per_sample: u16) -> f32 {
    (1u64 << (bits_per_sample.clamp(1, 32) - 1)) as f32
}
