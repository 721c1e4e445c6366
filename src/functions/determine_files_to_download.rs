use std::path::Path;

use tracing::{info, instrument};

use crate::functions::{fingerprints_match, hash_of_file};
use crate::structures::{FingerprintManifest, SyncPlan};

/// Decides, in tracked order, which files have to be downloaded.
///
/// The live hash of the cached file is compared against the remote fingerprint. A file is only
/// skipped when both are known and equal. The local manifest never changes the outcome, it is only
/// used to report files that were modified behind our back.
#[instrument(skip_all, fields(tracked = tracked_files.len()))]
pub async fn determine_files_to_download(tracked_files: &[String], remote: &FingerprintManifest, local: &FingerprintManifest, cache_directory: &Path) -> SyncPlan {
  let mut plan = SyncPlan::new();
  for file in tracked_files {
    let local_hash = hash_of_file(&cache_directory.join(file)).await;
    let remote_hash = remote.get(file);

    if let (Some(local_hash), Some(recorded_hash)) = (local_hash.as_deref(), local.get(file)) {
      if !fingerprints_match(local_hash, recorded_hash) {
        info!("{} was modified since it was last updated", file);
      }
    }

    let up_to_date = match (local_hash.as_deref(), remote_hash) {
      (Some(local_hash), Some(remote_hash)) => fingerprints_match(local_hash, remote_hash),
      _ => false,
    };
    if up_to_date {
      info!("{} is up to date", file);
    } else {
      info!("{} needs downloading (local: {:?}, remote: {:?})", file, local_hash, remote_hash);
      plan.push(file.clone());
    }
  }
  plan
}
