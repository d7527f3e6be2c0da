//! Multinomial logistic regression fit by batch gradient descent

use crate::classifier::Classifier;
use crate::error::{Error, Result};
use ndarray::{Array1, Array2, Axis};
use serde::{Deserialize, Serialize};

/// Softmax regression model for multiclass classification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoftmaxRegression {
    /// Fitted weights, shape `(n_features, n_classes)`
    weights: Option<Array2<f64>>,
    /// Fitted per-class bias, shape `(n_classes,)`
    bias: Option<Array1<f64>>,
    /// Gradient descent step size
    learning_rate: f64,
    /// L2 regularization strength
    l2: f64,
    /// Maximum gradient descent iterations
    max_iter: usize,
    /// Convergence tolerance on the gradient norm
    tol: f64,
}

impl Default for SoftmaxRegression {
    fn default() -> Self {
        Self::new()
    }
}

impl SoftmaxRegression {
    /// Create an unfitted model with default hyperparameters
    pub fn new() -> Self {
        Self {
            weights: None,
            bias: None,
            learning_rate: 0.1,
            l2: 1e-4,
            max_iter: 2000,
            tol: 1e-6,
        }
    }

    /// Set the gradient descent step size
    pub fn with_learning_rate(mut self, lr: f64) -> Self {
        self.learning_rate = lr;
        self
    }

    /// Set the L2 regularization strength
    pub fn with_l2(mut self, l2: f64) -> Self {
        self.l2 = l2;
        self
    }

    /// Set the maximum number of iterations
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Set the convergence tolerance
    pub fn with_tol(mut self, tol: f64) -> Self {
        self.tol = tol;
        self
    }

    /// Whether the model has been fitted
    pub fn is_fitted(&self) -> bool {
        self.weights.is_some()
    }

    /// Number of input features the fitted model expects
    pub fn n_features(&self) -> Option<usize> {
        self.weights.as_ref().map(|w| w.nrows())
    }

    /// Number of classes the fitted model predicts
    pub fn n_classes(&self) -> Option<usize> {
        self.weights.as_ref().map(|w| w.ncols())
    }

    fn fitted(&self) -> Result<(&Array2<f64>, &Array1<f64>)> {
        match (self.weights.as_ref(), self.bias.as_ref()) {
            (Some(w), Some(b)) => Ok((w, b)),
            _ => Err(Error::model("model is not fitted")),
        }
    }

    /// Fit the model to training data.
    ///
    /// Labels must be non-negative class indices; the number of classes is
    /// inferred as `max(y) + 1`.
    pub fn fit(&mut self, x: &Array2<f64>, y: &Array1<i64>) -> Result<&mut Self> {
        let n_samples = x.nrows();
        let n_features = x.ncols();

        if n_samples == 0 || n_features == 0 {
            return Err(Error::model("cannot fit on an empty matrix"));
        }
        if n_samples != y.len() {
            return Err(Error::model(format!(
                "sample count mismatch: x has {} rows, y has {} labels",
                n_samples,
                y.len()
            )));
        }
        if y.iter().any(|&label| label < 0) {
            return Err(Error::model("class labels must be non-negative"));
        }

        let n_classes = y.iter().copied().max().unwrap_or(0) as usize + 1;
        if n_classes < 2 {
            return Err(Error::model("need at least two classes to fit"));
        }

        // One-hot encode the targets
        let mut targets = Array2::<f64>::zeros((n_samples, n_classes));
        for (i, &label) in y.iter().enumerate() {
            targets[[i, label as usize]] = 1.0;
        }

        let mut weights = Array2::<f64>::zeros((n_features, n_classes));
        let mut bias = Array1::<f64>::zeros(n_classes);

        for _iter in 0..self.max_iter {
            // Forward pass
            let logits = x.dot(&weights) + &bias;
            let probs = softmax_rows(logits);

            // Gradients of the cross-entropy loss
            let residual = &probs - &targets;
            let grad_w = x.t().dot(&residual) / n_samples as f64 + &weights * self.l2;
            let grad_b = residual
                .mean_axis(Axis(0))
                .unwrap_or_else(|| Array1::zeros(n_classes));

            let grad_norm =
                (grad_w.mapv(|v| v * v).sum() + grad_b.mapv(|v| v * v).sum()).sqrt();
            if grad_norm < self.tol {
                break;
            }

            weights = weights - grad_w * self.learning_rate;
            bias = bias - grad_b * self.learning_rate;
        }

        self.weights = Some(weights);
        self.bias = Some(bias);

        Ok(self)
    }

    /// Predict per-class probabilities, shape `(n_samples, n_classes)`
    pub fn predict_proba(&self, x: &Array2<f64>) -> Result<Array2<f64>> {
        let (weights, bias) = self.fitted()?;

        if x.ncols() != weights.nrows() {
            return Err(Error::model(format!(
                "feature count mismatch: model expects {} features, got {}",
                weights.nrows(),
                x.ncols()
            )));
        }

        let logits = x.dot(weights) + bias;
        Ok(softmax_rows(logits))
    }

    /// Predict class labels, shape `(n_samples,)`
    pub fn predict(&self, x: &Array2<f64>) -> Result<Array1<i64>> {
        let proba = self.predict_proba(x)?;
        Ok(proba.map_axis(Axis(1), argmax))
    }

    /// Fraction of samples predicted with the correct label
    pub fn accuracy(&self, x: &Array2<f64>, y: &Array1<i64>) -> Result<f64> {
        if x.nrows() != y.len() {
            return Err(Error::model(format!(
                "sample count mismatch: x has {} rows, y has {} labels",
                x.nrows(),
                y.len()
            )));
        }
        if y.is_empty() {
            return Err(Error::model("cannot score on an empty set"));
        }

        let predicted = self.predict(x)?;
        let correct = predicted
            .iter()
            .zip(y.iter())
            .filter(|(pred, actual)| pred == actual)
            .count();

        Ok(correct as f64 / y.len() as f64)
    }
}

impl Classifier for SoftmaxRegression {
    fn predict(&self, features: &Array2<f64>) -> Result<Array1<i64>> {
        SoftmaxRegression::predict(self, features)
    }

    fn name(&self) -> &str {
        "softmax_regression"
    }
}

/// Row-wise softmax with the max-subtraction trick for numeric stability
fn softmax_rows(logits: Array2<f64>) -> Array2<f64> {
    let mut out = logits;
    for mut row in out.rows_mut() {
        let max = row.fold(f64::NEG_INFINITY, |m, &v| m.max(v));
        row.mapv_inplace(|v| (v - max).exp());
        let sum = row.sum();
        if sum > 0.0 {
            row.mapv_inplace(|v| v / sum);
        }
    }
    out
}

fn argmax(row: ndarray::ArrayView1<'_, f64>) -> i64 {
    let mut best = 0;
    let mut best_value = f64::NEG_INFINITY;
    for (i, &v) in row.iter().enumerate() {
        if v > best_value {
            best = i;
            best_value = v;
        }
    }
    best as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn three_clusters() -> (Array2<f64>, Array1<i64>) {
        // Three well-separated clusters in two dimensions
        let x = array![
            [0.0, 0.2],
            [0.3, 0.0],
            [0.1, 0.1],
            [5.0, 0.1],
            [5.3, 0.3],
            [4.8, 0.0],
            [0.2, 5.1],
            [0.0, 4.9],
            [0.3, 5.2],
        ];
        let y = array![0, 0, 0, 1, 1, 1, 2, 2, 2];
        (x, y)
    }

    #[test]
    fn test_fit_separable_clusters() {
        let (x, y) = three_clusters();
        let mut model = SoftmaxRegression::new().with_max_iter(3000);
        model.fit(&x, &y).unwrap();

        assert!(model.is_fitted());
        assert_eq!(model.n_features(), Some(2));
        assert_eq!(model.n_classes(), Some(3));

        let accuracy = model.accuracy(&x, &y).unwrap();
        assert!(accuracy >= 0.9, "expected >= 0.9 accuracy, got {}", accuracy);
    }

    #[test]
    fn test_proba_rows_sum_to_one() {
        let (x, y) = three_clusters();
        let mut model = SoftmaxRegression::new();
        model.fit(&x, &y).unwrap();

        let proba = model.predict_proba(&x).unwrap();
        for row in proba.rows() {
            let total: f64 = row.sum();
            assert!((total - 1.0).abs() < 1e-9, "rows must sum to 1, got {}", total);
        }
    }

    #[test]
    fn test_predict_unfitted_fails() {
        let model = SoftmaxRegression::new();
        let x = array![[1.0, 2.0]];
        assert!(model.predict(&x).is_err());
    }

    #[test]
    fn test_feature_count_mismatch_fails() {
        let (x, y) = three_clusters();
        let mut model = SoftmaxRegression::new();
        model.fit(&x, &y).unwrap();

        let wrong = array![[1.0, 2.0, 3.0]];
        let err = model.predict(&wrong).unwrap_err();
        assert!(err.to_string().contains("feature count mismatch"));
    }

    #[test]
    fn test_fit_rejects_mismatched_lengths() {
        let x = array![[1.0, 2.0], [3.0, 4.0]];
        let y = array![0];
        let mut model = SoftmaxRegression::new();
        assert!(model.fit(&x, &y).is_err());
    }

    #[test]
    fn test_fit_rejects_negative_labels() {
        let x = array![[1.0, 2.0], [3.0, 4.0]];
        let y = array![0, -1];
        let mut model = SoftmaxRegression::new();
        assert!(model.fit(&x, &y).is_err());
    }

    #[test]
    fn test_predictions_are_deterministic() {
        let (x, y) = three_clusters();
        let mut model = SoftmaxRegression::new();
        model.fit(&x, &y).unwrap();

        let first = model.predict(&x).unwrap();
        let second = model.predict(&x).unwrap();
        assert_eq!(first, second);
    }
}
