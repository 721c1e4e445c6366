use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use tokio::process::Child;
use tracing::{error, info, warn};

use crate::functions::{flow, launch};
use crate::structures::{Error, Launcher, Progress, SyncReport, UpdateState};
use crate::traits::RemoteSource;

/// Keeps the cache directory in sync with the remote repository and starts the application from it.
///
/// Built through [`crate::UpdaterBuilder`].
pub struct Updater {
  pub(crate) remote: Arc<dyn RemoteSource>,
  pub(crate) tracked_files: Vec<String>,
  pub(crate) cache_directory: PathBuf,
  pub(crate) manifest_path: PathBuf,
  pub(crate) remote_manifest_name: String,
  pub(crate) manifest_timeout: Duration,
  pub(crate) download_timeout: Duration,
  pub(crate) start_delay: Duration,
  pub(crate) error_delay: Duration,
  pub(crate) launcher: Launcher,
  pub(crate) progress: Progress,
  pub(crate) state: UpdateState,
  pub(crate) report: Option<SyncReport>,
}

impl Updater {
  /// Synchronizes the cache and hands off to the application.
  ///
  /// A failed synchronization does not stop the handoff, whatever is cached gets started. The only
  /// error returned is one from the handoff itself, e.g. a missing entry point.
  pub async fn run(&mut self) -> Result<Child, Error> {
    self.synchronize().await;
    self.launch().await
  }

  /// Runs the synchronization and waits until the handoff may start.
  pub async fn synchronize(&mut self) -> Option<&SyncReport> {
    match flow(self).await {
      Ok(report) => {
        info!("Synchronized: {} planned, {} downloaded, {} failed", report.planned.len(), report.downloaded.len(), report.failed.len());
        self.report = Some(report);
        self.progress.set_status("Starting...".to_string());
        tokio::time::sleep(self.start_delay).await;
      },
      Err(e) => {
        error!("Synchronization failed, launching what is cached: {}", e);
        self.report = None;
        self.transition(UpdateState::Failed(e.to_string()));
        self.progress.set_status(format!("Error: {}", e));
        tokio::time::sleep(self.error_delay).await;
      }
    }
    self.transition(UpdateState::HandoffPending);
    self.report.as_ref()
  }

  /// Starts the entry point from the cache directory.
  pub async fn launch(&mut self) -> Result<Child, Error> {
    if !self.state.is_ready_for_handoff() {
      warn!("Launching from state {}, the cache was not synchronized", self.state);
    }
    let result = launch(&self.cache_directory, &self.launcher, &mut self.progress).await;
    self.transition(UpdateState::Done);
    result
  }

  pub(crate) fn transition(&mut self, state: UpdateState) {
    info!("Update state: {} -> {}", self.state, state);
    self.state = state;
  }

  pub fn state(&self) -> &UpdateState {
    &self.state
  }

  /// Outcome of the last successful synchronization.
  pub fn report(&self) -> Option<&SyncReport> {
    self.report.as_ref()
  }

  pub fn tracked_files(&self) -> &[String] {
    &self.tracked_files
  }

  pub fn cache_directory(&self) -> &Path {
    &self.cache_directory
  }

  pub fn manifest_path(&self) -> &Path {
    &self.manifest_path
  }

  pub fn launcher(&self) -> &Launcher {
    &self.launcher
  }
}
