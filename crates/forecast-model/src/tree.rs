//! Inference-only decision tree.

use serde::{Deserialize, Serialize};

use forecast_common::FEATURE_NAMES;

use crate::error::ModelError;

/// Number of input features per sample.
pub const N_FEATURES: usize = FEATURE_NAMES.len();

/// One node of a trained tree.
///
/// Split nodes carry `feature_idx`, `threshold`, and both children; leaf
/// nodes carry only the predicted class code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeNode {
    /// Feature index for the split (split nodes only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_idx: Option<usize>,

    /// Threshold for the split (split nodes only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,

    /// Predicted class code at this node.
    pub class: usize,

    /// Left child, taken when `feature <= threshold`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<Box<TreeNode>>,

    /// Right child, taken when `feature > threshold`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<Box<TreeNode>>,
}

impl TreeNode {
    /// Create a leaf predicting `class`.
    pub fn leaf(class: usize) -> Self {
        Self {
            feature_idx: None,
            threshold: None,
            class,
            left: None,
            right: None,
        }
    }

    /// Create a split node.
    pub fn split(feature_idx: usize, threshold: f64, left: TreeNode, right: TreeNode) -> Self {
        let class = left.class;
        Self {
            feature_idx: Some(feature_idx),
            threshold: Some(threshold),
            class,
            left: Some(Box::new(left)),
            right: Some(Box::new(right)),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub fn depth(&self) -> usize {
        if self.is_leaf() {
            1
        } else {
            1 + self
                .left
                .as_ref()
                .map(|n| n.depth())
                .unwrap_or(0)
                .max(self.right.as_ref().map(|n| n.depth()).unwrap_or(0))
        }
    }

    pub fn n_leaves(&self) -> usize {
        if self.is_leaf() {
            1
        } else {
            self.left.as_ref().map(|n| n.n_leaves()).unwrap_or(0)
                + self.right.as_ref().map(|n| n.n_leaves()).unwrap_or(0)
        }
    }
}

/// A single trained decision tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTree {
    pub root: TreeNode,
}

impl DecisionTree {
    pub fn new(root: TreeNode) -> Self {
        Self { root }
    }

    /// Predict the class code for one sample.
    ///
    /// Structural problems (split node missing a child or a feature index
    /// out of range) surface as errors rather than panics; after a
    /// successful [`DecisionTree::validate`] they cannot occur.
    pub fn predict(&self, features: &[f64; N_FEATURES]) -> Result<usize, ModelError> {
        let mut node = &self.root;

        loop {
            if node.is_leaf() {
                return Ok(node.class);
            }

            let feature_idx = node
                .feature_idx
                .ok_or_else(|| ModelError::CorruptArtifact("split node without feature index".to_string()))?;
            let threshold = node
                .threshold
                .ok_or_else(|| ModelError::CorruptArtifact("split node without threshold".to_string()))?;
            let value = features.get(feature_idx).ok_or_else(|| {
                ModelError::InvalidInput(format!(
                    "feature index {} out of range (have {})",
                    feature_idx, N_FEATURES
                ))
            })?;

            let child = if *value <= threshold {
                node.left.as_deref()
            } else {
                node.right.as_deref()
            };

            node = child.ok_or_else(|| {
                ModelError::CorruptArtifact("split node missing a child".to_string())
            })?;
        }
    }

    /// Structural validation, run once at artifact load.
    pub fn validate(&self, n_classes: usize) -> Result<(), ModelError> {
        Self::validate_node(&self.root, n_classes)
    }

    fn validate_node(node: &TreeNode, n_classes: usize) -> Result<(), ModelError> {
        if node.is_leaf() {
            if node.class >= n_classes {
                return Err(ModelError::CorruptArtifact(format!(
                    "leaf class {} out of range (have {} classes)",
                    node.class, n_classes
                )));
            }
            return Ok(());
        }

        let feature_idx = node
            .feature_idx
            .ok_or_else(|| ModelError::CorruptArtifact("split node without feature index".to_string()))?;
        if feature_idx >= N_FEATURES {
            return Err(ModelError::CorruptArtifact(format!(
                "split feature index {} out of range (have {})",
                feature_idx, N_FEATURES
            )));
        }

        let threshold = node
            .threshold
            .ok_or_else(|| ModelError::CorruptArtifact("split node without threshold".to_string()))?;
        if !threshold.is_finite() {
            return Err(ModelError::CorruptArtifact(format!(
                "non-finite split threshold {}",
                threshold
            )));
        }

        match (&node.left, &node.right) {
            (Some(left), Some(right)) => {
                Self::validate_node(left, n_classes)?;
                Self::validate_node(right, n_classes)
            }
            _ => Err(ModelError::CorruptArtifact(
                "split node missing a child".to_string(),
            )),
        }
    }
}
