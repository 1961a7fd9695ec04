pub mod detect_speech_use_case;
pub mod pipeline_logger;
pub mod result_emitter;
