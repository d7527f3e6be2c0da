//! irisd trainer
//!
//! One-shot batch training pipeline: split the built-in iris dataset, fit
//! the softmax-regression classifier, evaluate holdout accuracy, and write
//! the model artifact atomically. The only contract with the serving
//! process is the artifact file itself.

use irisd_core::{artifact, dataset, ArtifactMetadata, Result, SoftmaxRegression, MODEL_FILENAME};
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Trainer configuration
#[derive(Debug, Clone)]
pub struct TrainerConfig {
    /// Directory the artifact is written to (created if missing)
    pub model_dir: PathBuf,
    /// Fraction of samples held out for evaluation
    pub holdout_fraction: f64,
    /// Shuffle seed for the train/holdout split
    pub seed: u64,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            model_dir: PathBuf::from("models"),
            holdout_fraction: 0.2,
            seed: 42,
        }
    }
}

/// Summary of a completed training run
#[derive(Debug, Clone)]
pub struct TrainingReport {
    /// Accuracy on the holdout split
    pub accuracy: f64,
    /// Where the artifact was written
    pub model_path: PathBuf,
    /// Training sample count
    pub n_train: usize,
    /// Holdout sample count
    pub n_holdout: usize,
}

/// Run the full training pipeline and write the artifact.
pub fn run(config: &TrainerConfig) -> Result<TrainingReport> {
    let (x, y) = dataset::iris();
    info!("Loaded {} samples with {} features", x.nrows(), x.ncols());

    let split = dataset::train_test_split(&x, &y, config.holdout_fraction, config.seed)?;

    let mut model = SoftmaxRegression::new();
    model.fit(&split.x_train, &split.y_train)?;

    let accuracy = model.accuracy(&split.x_test, &split.y_test)?;
    info!("Holdout accuracy: {:.4}", accuracy);

    fs::create_dir_all(&config.model_dir)?;
    let model_path = config.model_dir.join(MODEL_FILENAME);

    let metadata = ArtifactMetadata {
        model_type: "softmax_regression".to_string(),
        n_features: dataset::N_FEATURES,
        n_classes: dataset::N_CLASSES,
        holdout_accuracy: accuracy,
        trained_at: chrono::Utc::now(),
    };
    artifact::save(&model_path, &model, metadata)?;

    Ok(TrainingReport {
        accuracy,
        model_path,
        n_train: split.y_train.len(),
        n_holdout: split.y_test.len(),
    })
}
