//! Voice activity segmentation: waveform preprocessing, per-sample speech
//! probability inference and threshold-crossing segmentation.

pub mod audio;
pub mod detection;
pub mod pipeline;
pub mod shared;
