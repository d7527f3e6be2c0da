//! End-to-end round trip: train, write the artifact, reload it, and
//! predict on training-set samples.

use irisd_core::{artifact, dataset, SoftmaxRegression, MODEL_FILENAME};
use irisd_trainer::{run, TrainerConfig};
use ndarray::Array2;

fn trainer_config(dir: &std::path::Path) -> TrainerConfig {
    TrainerConfig {
        model_dir: dir.to_path_buf(),
        ..Default::default()
    }
}

#[test]
fn test_training_writes_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let report = run(&trainer_config(dir.path())).unwrap();

    assert!(report.model_path.exists());
    assert_eq!(report.model_path, dir.path().join(MODEL_FILENAME));
    assert_eq!(report.n_train + report.n_holdout, 150);
}

#[test]
fn test_holdout_accuracy_is_reasonable() {
    let dir = tempfile::tempdir().unwrap();
    let report = run(&trainer_config(dir.path())).unwrap();

    assert!(
        (0.0..=1.0).contains(&report.accuracy),
        "accuracy must be a fraction, got {}",
        report.accuracy
    );
    // The iris classes are close to linearly separable; anything below this
    // means the training loop is broken, not unlucky.
    assert!(
        report.accuracy >= 0.8,
        "expected >= 0.8 holdout accuracy, got {}",
        report.accuracy
    );
}

#[test]
fn test_reloaded_model_predicts_in_label_space() {
    let dir = tempfile::tempdir().unwrap();
    let report = run(&trainer_config(dir.path())).unwrap();

    let (model, metadata) = artifact::load::<SoftmaxRegression>(&report.model_path).unwrap();
    assert_eq!(metadata.model_type, "softmax_regression");
    assert_eq!(metadata.n_features, dataset::N_FEATURES);
    assert_eq!(metadata.n_classes, dataset::N_CLASSES);
    assert!((metadata.holdout_accuracy - report.accuracy).abs() < f64::EPSILON);

    let (x, _) = dataset::iris();
    let labels = model.predict(&x).unwrap();
    assert_eq!(labels.len(), 150);
    assert!(labels
        .iter()
        .all(|&label| (0..dataset::N_CLASSES as i64).contains(&label)));
}

#[test]
fn test_reloaded_model_matches_in_memory_predictions() {
    let dir = tempfile::tempdir().unwrap();
    let report = run(&trainer_config(dir.path())).unwrap();

    let (model, _) = artifact::load::<SoftmaxRegression>(&report.model_path).unwrap();

    let sample = Array2::from_shape_vec((1, 4), vec![5.1, 3.5, 1.4, 0.2]).unwrap();
    let first = model.predict(&sample).unwrap();
    let second = model.predict(&sample).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_training_is_deterministic() {
    let dir_a = tempfile::tempdir().unwrap();
    let dir_b = tempfile::tempdir().unwrap();

    let report_a = run(&trainer_config(dir_a.path())).unwrap();
    let report_b = run(&trainer_config(dir_b.path())).unwrap();

    assert!((report_a.accuracy - report_b.accuracy).abs() < f64::EPSILON);
}
