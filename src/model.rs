//! Classifier seam for model-based evaluation

use crate::error::{Error, Result};

/// Trait for fitted binary classifiers
///
/// Mirrors the `predict` / `predict_proba` split of scikit-learn style
/// estimators. Training is the caller's concern; implementations are
/// expected to be fitted before they are evaluated.
pub trait BinaryClassifier {
    /// Predict hard 0/1 labels for each feature row
    fn predict(&self, x: &[Vec<f64>]) -> Result<Vec<u8>>;

    /// Predict per-class membership probabilities for each feature row
    ///
    /// Each returned row holds one probability per class, with the
    /// positive class in column 1.
    fn predict_proba(&self, x: &[Vec<f64>]) -> Result<Vec<Vec<f64>>> {
        let _ = x;
        Err(Error::NotImplemented("predict_proba not supported".into()))
    }
}
