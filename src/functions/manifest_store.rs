use std::io::ErrorKind;
use std::path::Path;

use tracing::{info, instrument, warn};

use crate::functions::write_file_atomically;
use crate::structures::{Error, FingerprintManifest};

/// Loads the local manifest, a missing or corrupt file is treated as "no prior state".
#[instrument]
pub async fn load_manifest(manifest_path: &Path) -> FingerprintManifest {
  let text = match tokio::fs::read(manifest_path).await {
    Ok(bytes) => bytes,
    Err(e) if e.kind() == ErrorKind::NotFound => {
      info!("No local manifest at {}, starting fresh", manifest_path.display());
      return FingerprintManifest::new();
    },
    Err(e) => {
      warn!("{}", Error::LocalStateCorrupt(manifest_path.to_path_buf(), e.to_string()));
      return FingerprintManifest::new();
    }
  };
  let parsed = String::from_utf8(text)
    .map_err(|e| e.to_string())
    .and_then(|text| FingerprintManifest::from_json(&text).map_err(|e| e.to_string()));
  match parsed {
    Ok(manifest) => manifest,
    Err(reason) => {
      warn!("{}", Error::LocalStateCorrupt(manifest_path.to_path_buf(), reason));
      FingerprintManifest::new()
    }
  }
}

/// Replaces the local manifest, the previous file stays intact if writing fails halfway.
#[instrument(skip(manifest), fields(entries = manifest.len()))]
pub async fn save_manifest(manifest_path: &Path, manifest: &FingerprintManifest) -> Result<(), Error> {
  write_file_atomically(manifest_path, manifest.to_json().as_bytes()).await?;
  info!("Saved {} fingerprints to {}", manifest.len(), manifest_path.display());
  Ok(())
}
