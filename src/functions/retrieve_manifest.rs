use std::time::Duration;

use tracing::{info, instrument, warn};

use crate::structures::{Error, FingerprintManifest};
use crate::traits::RemoteSource;

/// Fetches the remote manifest.
///
/// Any failure yields an empty manifest, which makes every tracked file count as stale.
#[instrument(skip(remote))]
pub async fn retrieve_manifest(remote: &dyn RemoteSource, manifest_name: &str, timeout: Duration) -> FingerprintManifest {
  match try_retrieve_manifest(remote, manifest_name, timeout).await {
    Ok(manifest) => {
      info!("Remote manifest lists {} files", manifest.len());
      manifest
    },
    Err(e) if e.is_remote() => {
      warn!("Remote {} is unavailable, every tracked file will be downloaded: {}", manifest_name, e);
      FingerprintManifest::new()
    },
    Err(e) => {
      warn!("Remote {} is malformed, every tracked file will be downloaded: {}", manifest_name, e);
      FingerprintManifest::new()
    }
  }
}

async fn try_retrieve_manifest(remote: &dyn RemoteSource, manifest_name: &str, timeout: Duration) -> Result<FingerprintManifest, Error> {
  let response = remote.download_file(manifest_name, timeout).await?;
  if !response.is_success() {
    return Err(Error::InvalidStatus(manifest_name.to_string(), response.status.as_u16()));
  }
  FingerprintManifest::from_json(&response.text().map_err(Error::NotUtf8)?)
}
