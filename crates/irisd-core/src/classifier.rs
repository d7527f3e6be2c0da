//! Classifier capability trait

use crate::error::Result;
use ndarray::{Array1, Array2};

/// The minimal contract a servable model must satisfy: a matrix of samples
/// in, one integer class label per sample out.
///
/// The trait is object-safe so the serving process can hold any fitted model
/// behind `Arc<dyn Classifier>` without knowing the concrete algorithm.
pub trait Classifier: Send + Sync {
    /// Predict class labels for a `(n_samples, n_features)` matrix.
    fn predict(&self, features: &Array2<f64>) -> Result<Array1<i64>>;

    /// Get the classifier name
    fn name(&self) -> &str;
}
