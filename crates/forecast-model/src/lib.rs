//! Weather classifier inference stack.
//!
//! Wraps two externally trained artifacts: a random-forest classifier
//! mapping a feature vector to a class code, and a label decoder mapping
//! that code back to a weather label. Training happens elsewhere; this
//! crate only loads and predicts.

pub mod error;
pub mod forest;
pub mod labels;
pub mod predictor;
pub mod tree;

pub use error::ModelError;
pub use forest::RandomForest;
pub use labels::LabelDecoder;
pub use predictor::WeatherPredictor;
pub use tree::{DecisionTree, TreeNode};
