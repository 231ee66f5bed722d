//! Random forest classifier over trained trees.

use serde::{Deserialize, Serialize};

use forecast_common::FEATURE_NAMES;

use crate::error::ModelError;
use crate::tree::{DecisionTree, N_FEATURES};

/// A trained random forest: majority vote over its trees.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomForest {
    /// Feature column names the forest was trained with, in order.
    pub feature_names: Vec<String>,

    /// Size of the class vocabulary.
    pub n_classes: usize,

    /// The trained trees.
    pub trees: Vec<DecisionTree>,
}

impl RandomForest {
    /// Structural validation, run once at artifact load.
    ///
    /// Rejects artifacts whose feature columns differ from the serving
    /// order in [`FEATURE_NAMES`]: a reordered artifact would produce
    /// wrong predictions without any runtime error.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.feature_names != FEATURE_NAMES {
            return Err(ModelError::CorruptArtifact(format!(
                "feature columns {:?} do not match serving order {:?}",
                self.feature_names, FEATURE_NAMES
            )));
        }

        if self.n_classes == 0 {
            return Err(ModelError::CorruptArtifact("zero classes".to_string()));
        }

        if self.trees.is_empty() {
            return Err(ModelError::CorruptArtifact("forest has no trees".to_string()));
        }

        for tree in &self.trees {
            tree.validate(self.n_classes)?;
        }

        Ok(())
    }

    /// Predict the class code for one sample by majority vote.
    ///
    /// Ties resolve to the lowest class code.
    pub fn predict(&self, features: &[f64; N_FEATURES]) -> Result<usize, ModelError> {
        if self.trees.is_empty() {
            return Err(ModelError::CorruptArtifact("forest has no trees".to_string()));
        }

        let mut votes = vec![0usize; self.n_classes];
        for tree in &self.trees {
            let class = tree.predict(features)?;
            let count = votes.get_mut(class).ok_or(ModelError::UnknownClass(class))?;
            *count += 1;
        }

        let winner = votes
            .iter()
            .enumerate()
            .max_by_key(|&(class, &count)| (count, std::cmp::Reverse(class)))
            .map(|(class, _)| class)
            .unwrap_or(0);

        Ok(winner)
    }

    /// Number of trees in the forest.
    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }
}
