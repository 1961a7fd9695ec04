pub mod hound_wav_reader;
