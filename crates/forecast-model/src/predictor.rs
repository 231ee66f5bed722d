//! The inference adapter over the trained artifacts.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::info;

use forecast_common::FeatureVector;

use crate::error::ModelError;
use crate::forest::RandomForest;
use crate::labels::LabelDecoder;

/// Pre-loaded classifier plus label decoder.
///
/// Constructed once at process start; load failure is fatal by contract,
/// since there is no fallback prediction strategy. After construction the
/// predictor is read-only and safe to share across concurrent requests.
pub struct WeatherPredictor {
    forest: RandomForest,
    labels: LabelDecoder,
}

impl WeatherPredictor {
    /// Load and validate both artifacts.
    pub fn load(model_path: &Path, labels_path: &Path) -> Result<Self, ModelError> {
        let forest: RandomForest = read_artifact(model_path)?;
        let labels: LabelDecoder = read_artifact(labels_path)?;

        let predictor = Self::from_parts(forest, labels)?;

        info!(
            trees = predictor.forest.n_trees(),
            classes = predictor.labels.len(),
            model = %model_path.display(),
            "Loaded weather model"
        );

        Ok(predictor)
    }

    /// Assemble a predictor from already-deserialized artifacts.
    ///
    /// Validates each artifact and their cross-consistency: the forest's
    /// class range must match the decoder vocabulary exactly.
    pub fn from_parts(forest: RandomForest, labels: LabelDecoder) -> Result<Self, ModelError> {
        forest.validate()?;

        if labels.is_empty() {
            return Err(ModelError::CorruptArtifact(
                "label decoder has no classes".to_string(),
            ));
        }

        if forest.n_classes != labels.len() {
            return Err(ModelError::CorruptArtifact(format!(
                "classifier has {} classes but decoder has {} labels",
                forest.n_classes,
                labels.len()
            )));
        }

        Ok(Self { forest, labels })
    }

    /// Classify a feature vector and decode the result.
    pub fn predict(&self, features: &FeatureVector) -> Result<String, ModelError> {
        let code = self.forest.predict(&features.as_array())?;
        Ok(self.labels.decode(code)?.to_string())
    }

    /// Number of trees in the loaded forest.
    pub fn n_trees(&self) -> usize {
        self.forest.n_trees()
    }

    /// The label vocabulary, in class-code order.
    pub fn label_vocabulary(&self) -> &[String] {
        self.labels.classes()
    }
}

fn read_artifact<T: DeserializeOwned>(path: &Path) -> Result<T, ModelError> {
    let file = File::open(path).map_err(|source| ModelError::ArtifactRead {
        path: path.to_path_buf(),
        source,
    })?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| ModelError::ArtifactParse {
        path: path.to_path_buf(),
        source,
    })
}
