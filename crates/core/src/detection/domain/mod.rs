pub mod probability_curve;
pub mod segment;
pub mod segmenter;
pub mod speech_model;
