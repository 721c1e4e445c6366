use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use download_async::http::header::{HeaderValue, USER_AGENT};
use tracing::{debug, instrument};

use crate::structures::{Error, RemoteRepository, Response};
use crate::traits::RemoteSource;

impl RemoteRepository {
  pub fn new(base: &str, branch: &str) -> Self {
    Self {
      base: Arc::new(base.trim_end_matches('/').to_string()),
      branch: Arc::new(branch.trim_matches('/').to_string()),
    }
  }

  pub fn url_of(&self, path: &str) -> String {
    format!("{}/{}/{}", self.base, self.branch, path.trim_start_matches('/'))
  }
}

#[async_trait]
impl RemoteSource for RemoteRepository {
  #[instrument(skip(self), fields(base = %self.base, branch = %self.branch))]
  async fn download_file(&self, path: &str, timeout: Duration) -> Result<Response, Error> {
    let url = self.url_of(path);
    debug!("Requesting {}", &url);

    let uri = url.parse::<download_async::http::Uri>().map_err(|e| Error::RemoteUnavailable(path.to_string(), e.to_string()))?;
    let mut downloader = download_async::Downloader::new();
    downloader.use_uri(uri);
    if let Some(headers) = downloader.headers() {
      if let Ok(user_agent) = HeaderValue::from_str(&format!("launcher-updater ({})", env!("CARGO_PKG_VERSION"))) {
        headers.append(USER_AGENT, user_agent);
      }
    }
    downloader.allow_http();

    let mut buffer = vec![];
    let response = downloader.download(download_async::Body::empty(), &mut buffer);
    // Built directly instead of through `From`, callers log these as warnings
    let result = match tokio::time::timeout(timeout, response).await {
      Ok(Ok(parts)) => parts,
      Ok(Err(e)) => return Err(Error::RemoteUnavailable(path.to_string(), e.to_string())),
      Err(_) => return Err(Error::RemoteUnavailable(path.to_string(), format!("no response within {:?}", timeout))),
    };
    Ok(Response::new(result, buffer))
  }
}
