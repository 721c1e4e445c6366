use tracing::info;

use crate::functions::{determine_files_to_download, download_file, hash_of_file, load_manifest, retrieve_manifest, save_manifest};
use crate::structures::{Error, FingerprintManifest, SyncReport, UpdateState};
use crate::updater::Updater;

/// Brings the cache directory in line with the remote manifest.
///
/// Downloads happen one after another in plan order, a failed download is recorded and the next
/// file is attempted anyway. The local manifest is rewritten once, after every download was tried,
/// so an interrupted run leaves the previous manifest in place.
pub(crate) async fn flow(updater: &mut Updater) -> Result<SyncReport, Error> {
  updater.transition(UpdateState::FetchingManifest);
  updater.progress.set_status("Checking for updates...".to_string());
  tokio::fs::create_dir_all(&updater.cache_directory).await?;

  let remote = retrieve_manifest(&*updater.remote, &updater.remote_manifest_name, updater.manifest_timeout).await;
  let local = load_manifest(&updater.manifest_path).await;

  updater.transition(UpdateState::Planning);
  let plan = determine_files_to_download(&updater.tracked_files, &remote, &local, &updater.cache_directory).await;
  let mut report = SyncReport {
    planned: plan.files().to_vec(),
    ..SyncReport::default()
  };

  if plan.is_empty() {
    updater.progress.set_status("All files are up to date!".to_string());
  } else {
    updater.progress.set_status(format!("Updating {} file(s)...", plan.len()));
    let total = plan.len();
    for (index, file) in plan.files().iter().enumerate() {
      updater.transition(UpdateState::Downloading { index: index + 1, total });
      updater.progress.set_progress(plan.percent(index), file);
      updater.progress.log(format!("Downloading: {}", file));

      if download_file(&*updater.remote, file, &updater.cache_directory, updater.download_timeout).await {
        report.downloaded.push(file.clone());
      } else {
        updater.progress.log(format!("Failed: {}", file));
        report.failed.push(file.clone());
      }
    }
  }

  updater.transition(UpdateState::PersistingManifest);
  let mut applied = FingerprintManifest::new();
  for file in updater.tracked_files.iter() {
    applied.insert(file.clone(), hash_of_file(&updater.cache_directory.join(file)).await);
  }
  if applied == local {
    info!("Local manifest is unchanged");
  } else {
    save_manifest(&updater.manifest_path, &applied).await?;
    report.manifest_written = true;
  }

  Ok(report)
}
