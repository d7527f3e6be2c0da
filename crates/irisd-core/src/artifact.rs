//! On-disk model artifact format
//!
//! An artifact is a bincode-encoded envelope carrying magic bytes, a format
//! version, training metadata, the serialized model payload, and a checksum
//! over the payload. Saves are atomic: the envelope is written to a
//! temporary file in the target directory and renamed into place, so a
//! failed save never leaves a partial file at the destination.

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Fixed artifact filename inside the model directory
pub const MODEL_FILENAME: &str = "iris_model.bin";

/// Magic bytes identifying irisd model artifacts
const MAGIC: [u8; 4] = *b"IRIS";

/// Current artifact format version
const FORMAT_VERSION: u32 = 1;

/// Metadata recorded by the trainer alongside the model payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactMetadata {
    /// Model type identifier (e.g. "softmax_regression")
    pub model_type: String,
    /// Number of input features the model expects
    pub n_features: usize,
    /// Number of classes the model predicts
    pub n_classes: usize,
    /// Accuracy on the holdout split at training time
    pub holdout_accuracy: f64,
    /// Training timestamp
    pub trained_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Envelope {
    magic: [u8; 4],
    format_version: u32,
    metadata: ArtifactMetadata,
    payload: Vec<u8>,
    checksum: u64,
}

impl Envelope {
    fn new(metadata: ArtifactMetadata, payload: Vec<u8>) -> Self {
        let checksum = fnv1a(&payload);
        Self {
            magic: MAGIC,
            format_version: FORMAT_VERSION,
            metadata,
            payload,
            checksum,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.magic != MAGIC {
            return Err(Error::artifact("not an irisd model artifact (bad magic)"));
        }
        if self.format_version != FORMAT_VERSION {
            return Err(Error::artifact(format!(
                "unsupported artifact format version {} (expected {})",
                self.format_version, FORMAT_VERSION
            )));
        }
        if fnv1a(&self.payload) != self.checksum {
            return Err(Error::artifact(
                "checksum mismatch; artifact may be corrupted",
            ));
        }
        Ok(())
    }
}

/// FNV-1a hash over the model payload
fn fnv1a(data: &[u8]) -> u64 {
    const FNV_OFFSET: u64 = 14695981039346656037;
    const FNV_PRIME: u64 = 1099511628211;

    let mut hash = FNV_OFFSET;
    for byte in data {
        hash ^= *byte as u64;
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Save a model to `path`, atomically.
pub fn save<M: Serialize>(path: &Path, model: &M, metadata: ArtifactMetadata) -> Result<()> {
    let payload = bincode::serialize(model)?;
    let envelope = Envelope::new(metadata, payload);
    let bytes = bincode::serialize(&envelope)?;

    let file_name = path
        .file_name()
        .ok_or_else(|| Error::artifact(format!("invalid artifact path: {}", path.display())))?;
    let mut tmp = path.to_path_buf();
    tmp.set_file_name(format!(".{}.tmp", file_name.to_string_lossy()));

    let written = (|| -> Result<()> {
        let mut file = File::create(&tmp)?;
        file.write_all(&bytes)?;
        file.sync_all()?;
        Ok(())
    })();

    if let Err(e) = written {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }

    fs::rename(&tmp, path)?;
    Ok(())
}

/// Load a model and its metadata from `path`, verifying the envelope.
pub fn load<M: DeserializeOwned>(path: &Path) -> Result<(M, ArtifactMetadata)> {
    let bytes = fs::read(path)?;

    let envelope: Envelope = bincode::deserialize(&bytes)
        .map_err(|e| Error::artifact(format!("failed to decode artifact: {}", e)))?;
    envelope.validate()?;

    let model = bincode::deserialize(&envelope.payload)
        .map_err(|e| Error::artifact(format!("failed to decode model payload: {}", e)))?;

    Ok((model, envelope.metadata))
}
