use std::path::{Path, PathBuf};

use super::constants::{APP_DIR_NAME, DEFAULT_MODEL_PATH, SILERO_MODEL_NAME};

/// Resolve the speech model path.
///
/// Resolution order:
/// 1. Explicitly supplied path (returned as-is, existence is checked by the loader)
/// 2. Conventional path relative to the working directory
/// 3. User cache directory (platform-specific)
///
/// When nothing is found the conventional path is returned so the
/// resulting "model not found" error names it.
pub fn resolve(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }

    let conventional = PathBuf::from(DEFAULT_MODEL_PATH);
    let cached = model_cache_dir().map(|dir| dir.join(SILERO_MODEL_NAME));
    first_existing(conventional, cached)
}

/// Platform-specific model cache directory.
///
/// - macOS: `~/Library/Application Support/vadseg/models/`
/// - Linux: `$XDG_CACHE_HOME/vadseg/models/` or `~/.cache/vadseg/models/`
/// - Windows: `%LOCALAPPDATA%/vadseg/models/`
pub fn model_cache_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        dirs::data_dir().map(|d| d.join(APP_DIR_NAME).join("models"))
    }
    #[cfg(not(target_os = "macos"))]
    {
        dirs::cache_dir().map(|d| d.join(APP_DIR_NAME).join("models"))
    }
}

fn first_existing(conventional: PathBuf, cached: Option<PathBuf>) -> PathBuf {
    if conventional.is_file() {
        return conventional;
    }
    match cached {
        Some(path) if path.is_file() => {
            log::debug!("Using cached model at {}", path.display());
            path
        }
        _ => conventional,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_explicit_path_is_returned_unchanged() {
        let path = Path::new("/nonexistent/custom.onnx");
        assert_eq!(resolve(Some(path)), path.to_path_buf());
    }

    #[test]
    fn test_prefers_conventional_when_present() {
        let tmp = TempDir::new().unwrap();
        let conventional = tmp.path().join("conventional.onnx");
        let cached = tmp.path().join("cached.onnx");
        fs::write(&conventional, b"model").unwrap();
        fs::write(&cached, b"model").unwrap();

        assert_eq!(
            first_existing(conventional.clone(), Some(cached)),
            conventional
        );
    }

    #[test]
    fn test_falls_back_to_cache() {
        let tmp = TempDir::new().unwrap();
        let conventional = tmp.path().join("missing.onnx");
        let cached = tmp.path().join("cached.onnx");
        fs::write(&cached, b"model").unwrap();

        assert_eq!(first_existing(conventional, Some(cached.clone())), cached);
    }

    #[test]
    fn test_nothing_found_returns_conventional() {
        let tmp = TempDir::new().unwrap();
        let conventional = tmp.path().join("missing.onnx");
        let cached = tmp.path().join("also_missing.onnx");

        assert_eq!(
            first_existing(conventional.clone(), Some(cached)),
            conventional
        );
        assert_eq!(first_existing(conventional.clone(), None), conventional);
    }

    #[test]
    fn test_model_cache_dir_layout() {
        if let Some(path) = model_cache_dir() {
            assert!(path.ends_with(Path::new("vadseg").join("models")));
        }
    }
}
