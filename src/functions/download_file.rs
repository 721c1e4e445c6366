use std::path::Path;
use std::time::Duration;

use tracing::{error, info, instrument};

use crate::functions::write_file_atomically;
use crate::structures::Error;
use crate::traits::RemoteSource;

/// Downloads a tracked file into the cache directory, returns whether it succeeded.
///
/// Failures are logged and leave the cached copy untouched, the file will be retried next run.
#[instrument(skip(remote))]
pub async fn download_file(remote: &dyn RemoteSource, file: &str, cache_directory: &Path, timeout: Duration) -> bool {
  match try_download_file(remote, file, cache_directory, timeout).await {
    Ok(size) => {
      info!("Downloaded {} ({} bytes)", file, size);
      true
    },
    Err(e) => {
      error!("{}", Error::DownloadFailed(file.to_string(), Box::new(e)));
      false
    }
  }
}

async fn try_download_file(remote: &dyn RemoteSource, file: &str, cache_directory: &Path, timeout: Duration) -> Result<usize, Error> {
  let response = remote.download_file(file, timeout).await?;
  if !response.is_success() {
    return Err(Error::InvalidStatus(file.to_string(), response.status.as_u16()));
  }
  let body = response.into_body();
  write_file_atomically(&cache_directory.join(file), &body).await?;
  Ok(body.len())
}
