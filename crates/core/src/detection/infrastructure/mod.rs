pub mod onnx_speech_model;
