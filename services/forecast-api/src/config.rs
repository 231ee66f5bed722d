//! Artifact configuration for the forecast service.

use std::path::PathBuf;

/// Default classifier artifact filename, next to the service binary.
pub const DEFAULT_MODEL_FILENAME: &str = "weather_model.json";

/// Default label decoder artifact filename.
pub const DEFAULT_LABELS_FILENAME: &str = "label_encoder.json";

/// Where the trained artifacts live and where to fetch the classifier
/// from when it is absent.
#[derive(Debug, Clone)]
pub struct ArtifactConfig {
    /// Path to the serialized classifier.
    pub model_path: PathBuf,

    /// Path to the serialized label decoder. Always expected to be
    /// pre-placed; never downloaded.
    pub labels_path: PathBuf,

    /// URL to download the classifier from when the file is absent.
    pub model_url: Option<String>,
}

impl ArtifactConfig {
    pub fn new(model_path: PathBuf, labels_path: PathBuf, model_url: Option<String>) -> Self {
        Self {
            model_path,
            labels_path,
            model_url,
        }
    }
}
