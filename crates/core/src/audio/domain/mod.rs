pub mod preprocessor;
pub mod waveform;
pub mod waveform_reader;
