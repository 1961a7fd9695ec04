pub mod constants;
pub mod detection_config;
pub mod error;
pub mod model_resolver;
