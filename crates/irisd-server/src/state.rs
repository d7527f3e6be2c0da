//! Process-wide load state and shared application state

use irisd_core::{artifact, Classifier, SoftmaxRegression};
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Outcome of the startup artifact load.
///
/// Constructed exactly once, before the listener binds, and never mutated
/// afterwards; request handlers only ever read it.
pub enum LoadState {
    /// Artifact deserialized successfully
    Loaded(Arc<dyn Classifier>),
    /// No file at the configured path
    Absent,
    /// File present but undeserializable
    Failed(String),
}

/// Application state shared across request handlers
#[derive(Clone)]
pub struct AppState {
    load_state: Arc<LoadState>,
}

impl AppState {
    /// Attempt the startup load from `path`.
    ///
    /// Never fails: a missing or corrupt artifact is logged and recorded as
    /// a degraded state so the server still starts and the health endpoint
    /// stays reachable.
    pub fn from_artifact(path: &Path) -> Self {
        let load_state = if path.exists() {
            match artifact::load::<SoftmaxRegression>(path) {
                Ok((model, metadata)) => {
                    info!(
                        "Model loaded from {} (type {}, holdout accuracy {:.4})",
                        path.display(),
                        metadata.model_type,
                        metadata.holdout_accuracy
                    );
                    LoadState::Loaded(Arc::new(model))
                }
                Err(e) => {
                    error!("Error loading model from {}: {}", path.display(), e);
                    LoadState::Failed(e.to_string())
                }
            }
        } else {
            warn!(
                "Model not found at {}; starting without a model (train first)",
                path.display()
            );
            LoadState::Absent
        };

        Self::new(load_state)
    }

    /// Build state from an explicit load outcome
    pub fn new(load_state: LoadState) -> Self {
        Self {
            load_state: Arc::new(load_state),
        }
    }

    /// The classifier, if the startup load succeeded
    pub fn classifier(&self) -> Option<&Arc<dyn Classifier>> {
        match self.load_state.as_ref() {
            LoadState::Loaded(classifier) => Some(classifier),
            _ => None,
        }
    }

    /// Whether a model is available for inference
    pub fn model_loaded(&self) -> bool {
        matches!(self.load_state.as_ref(), LoadState::Loaded(_))
    }
}
