use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use futures::channel::mpsc::UnboundedSender;
use tracing::warn;

use crate::structures::{Error, Launcher, Progress, RemoteRepository, UpdateEvent, UpdateState};
use crate::traits::RemoteSource;
use crate::updater::Updater;

pub const DEFAULT_BRANCH : &str = "main";
pub const DEFAULT_APPLICATION_NAME : &str = "launcher";
pub const DEFAULT_MANIFEST_NAME : &str = "manifest.json";
pub const CACHE_DIRECTORY_NAME : &str = "files";
pub const LOCAL_MANIFEST_NAME : &str = "manifest.json";

pub struct UpdaterBuilder {
  pub(crate) base_url: Option<String>,
  pub(crate) branch: String,
  pub(crate) remote: Option<Arc<dyn RemoteSource>>,
  pub(crate) application_name: String,
  pub(crate) data_directory: Option<PathBuf>,
  pub(crate) cache_directory: Option<PathBuf>,
  pub(crate) manifest_path: Option<PathBuf>,
  pub(crate) remote_manifest_name: String,
  pub(crate) tracked_files: Vec<String>,
  pub(crate) entry_point: Option<String>,
  pub(crate) interpreter: Option<PathBuf>,
  pub(crate) launch_arguments: Vec<String>,
  pub(crate) manifest_timeout: Duration,
  pub(crate) download_timeout: Duration,
  pub(crate) start_delay: Duration,
  pub(crate) error_delay: Duration,
  pub(crate) event_sender: Option<UnboundedSender<UpdateEvent>>,
}

impl Default for UpdaterBuilder {
  fn default() -> Self {
    Self::new()
  }
}

impl UpdaterBuilder {
    pub fn new() -> Self {
        Self {
            base_url: None,
            branch: DEFAULT_BRANCH.to_string(),
            remote: None,
            application_name: DEFAULT_APPLICATION_NAME.to_string(),
            data_directory: None,
            cache_directory: None,
            manifest_path: None,
            remote_manifest_name: DEFAULT_MANIFEST_NAME.to_string(),
            tracked_files: Vec::new(),
            entry_point: None,
            interpreter: None,
            launch_arguments: Vec::new(),
            manifest_timeout: Duration::from_secs(10),
            download_timeout: Duration::from_secs(60),
            start_delay: Duration::from_millis(500),
            error_delay: Duration::from_millis(2000),
            event_sender: None,
        }
    }

    /// Base location of the remote repository, files are fetched from `{base_url}/{branch}/{file}`.
    pub fn set_base_url(&mut self, base_url: String) -> &mut Self {
        self.base_url = Some(base_url);
        self
    }

    pub fn set_branch(&mut self, branch: String) -> &mut Self {
        self.branch = branch;
        self
    }

    /// Fetch from `remote` instead of the repository at the base url.
    pub fn set_remote(&mut self, remote: Arc<dyn RemoteSource>) -> &mut Self {
        self.remote = Some(remote);
        self
    }

    /// Name of the per-application directory inside the user's data directory.
    pub fn set_application_name(&mut self, application_name: String) -> &mut Self {
        self.application_name = application_name;
        self
    }

    pub fn set_data_directory(&mut self, data_directory: PathBuf) -> &mut Self {
        self.data_directory = Some(data_directory);
        self
    }

    pub fn set_cache_directory(&mut self, cache_directory: PathBuf) -> &mut Self {
        self.cache_directory = Some(cache_directory);
        self
    }

    pub fn set_manifest_path(&mut self, manifest_path: PathBuf) -> &mut Self {
        self.manifest_path = Some(manifest_path);
        self
    }

    pub fn set_remote_manifest_name(&mut self, remote_manifest_name: String) -> &mut Self {
        self.remote_manifest_name = remote_manifest_name;
        self
    }

    /// Files to keep in sync, downloads happen in this order.
    pub fn set_tracked_files(&mut self, tracked_files: Vec<String>) -> &mut Self {
        self.tracked_files = tracked_files;
        self
    }

    /// File inside the cache directory that gets started, defaults to the first tracked file.
    pub fn set_entry_point(&mut self, entry_point: String) -> &mut Self {
        self.entry_point = Some(entry_point);
        self
    }

    pub fn set_interpreter(&mut self, interpreter: PathBuf) -> &mut Self {
        self.interpreter = Some(interpreter);
        self
    }

    pub fn set_launch_arguments(&mut self, launch_arguments: Vec<String>) -> &mut Self {
        self.launch_arguments = launch_arguments;
        self
    }

    pub fn set_manifest_timeout(&mut self, manifest_timeout: Duration) -> &mut Self {
        self.manifest_timeout = manifest_timeout;
        self
    }

    pub fn set_download_timeout(&mut self, download_timeout: Duration) -> &mut Self {
        self.download_timeout = download_timeout;
        self
    }

    pub fn set_start_delay(&mut self, start_delay: Duration) -> &mut Self {
        self.start_delay = start_delay;
        self
    }

    pub fn set_error_delay(&mut self, error_delay: Duration) -> &mut Self {
        self.error_delay = error_delay;
        self
    }

    pub fn set_event_sender(&mut self, event_sender: UnboundedSender<UpdateEvent>) -> &mut Self {
        self.event_sender = Some(event_sender);
        self
    }

    pub fn build(self) -> Result<Updater, Error> {
        let remote = match self.remote {
            Some(remote) => remote,
            None => {
                let base_url = self.base_url.as_deref().ok_or_else(|| Error::InvalidConfiguration("no base url was set".to_string()))?;
                let parsed = url::Url::parse(base_url).map_err(|e| Error::InvalidConfiguration(format!("base url {} is invalid: {}", base_url, e)))?;
                if parsed.scheme() != "http" && parsed.scheme() != "https" {
                    return Err(Error::InvalidConfiguration(format!("base url {} is not http(s)", base_url)));
                }
                if self.branch.trim_matches('/').is_empty() {
                    return Err(Error::InvalidConfiguration("branch is empty".to_string()));
                }
                Arc::new(RemoteRepository::new(base_url, &self.branch)) as Arc<dyn RemoteSource>
            }
        };

        let mut seen = HashSet::new();
        for file in self.tracked_files.iter() {
            validate_tracked_file(file)?;
            if !seen.insert(file.as_str()) {
                return Err(Error::InvalidConfiguration(format!("{} is tracked twice", file)));
            }
        }

        let entry_point = match self.entry_point {
            Some(entry_point) => entry_point,
            None => self.tracked_files.first().cloned().ok_or_else(|| Error::InvalidConfiguration("no entry point and no tracked files".to_string()))?,
        };
        validate_tracked_file(&entry_point)?;
        if !self.tracked_files.contains(&entry_point) {
            warn!("Entry point {} is not a tracked file, it will never be updated", entry_point);
        }

        let data_directory = match self.data_directory {
            Some(data_directory) => data_directory,
            None => dirs::data_dir()
                .map(|directory| directory.join(&self.application_name))
                .ok_or_else(|| Error::InvalidConfiguration("could not determine the data directory".to_string()))?,
        };

        Ok(Updater {
            remote,
            tracked_files: self.tracked_files,
            cache_directory: self.cache_directory.unwrap_or_else(|| data_directory.join(CACHE_DIRECTORY_NAME)),
            manifest_path: self.manifest_path.unwrap_or_else(|| data_directory.join(LOCAL_MANIFEST_NAME)),
            remote_manifest_name: self.remote_manifest_name,
            manifest_timeout: self.manifest_timeout,
            download_timeout: self.download_timeout,
            start_delay: self.start_delay,
            error_delay: self.error_delay,
            launcher: Launcher {
                entry_point,
                interpreter: self.interpreter,
                arguments: self.launch_arguments,
            },
            progress: Progress::new(self.event_sender),
            state: UpdateState::Idle,
            report: None,
        })
    }
}

/// Tracked files live inside the cache directory, so they have to be plain relative paths.
fn validate_tracked_file(file: &str) -> Result<(), Error> {
    if file.is_empty() {
        return Err(Error::InvalidPath(file.to_string()));
    }
    let only_normal = Path::new(file).components().all(|component| matches!(component, Component::Normal(_)));
    if !only_normal || file.contains('\\') {
        return Err(Error::InvalidPath(file.to_string()));
    }
    Ok(())
}
