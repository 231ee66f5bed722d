//! Class code to weather label decoding.

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Maps internal class codes back to human-readable weather labels.
///
/// The class list is produced at training time alongside the forest; the
/// vocabulary is closed and opaque to this service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelDecoder {
    classes: Vec<String>,
}

impl LabelDecoder {
    pub fn new(classes: Vec<String>) -> Self {
        Self { classes }
    }

    /// Decode a class code to its label.
    pub fn decode(&self, code: usize) -> Result<&str, ModelError> {
        self.classes
            .get(code)
            .map(String::as_str)
            .ok_or(ModelError::UnknownClass(code))
    }

    /// Number of classes in the vocabulary.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// The full label vocabulary, in class-code order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }
}
