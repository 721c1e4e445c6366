use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, Once};
use std::time::Duration;

use async_trait::async_trait;
use download_async::http::StatusCode;
use tracing_subscriber::EnvFilter;

use crate::structures::{Error, Response};
use crate::traits::RemoteSource;

static INIT_LOGGING: Once = Once::new();

/// Installs a test subscriber once, honouring `RUST_LOG`.
pub(crate) fn init_test_logging() {
  INIT_LOGGING.call_once(|| {
    if std::env::var("RUST_LOG").is_err() {
      return;
    }
    let _ = tracing_subscriber::fmt()
      .with_env_filter(EnvFilter::from_default_env())
      .with_test_writer()
      .try_init();
  });
}

/// In-memory `RemoteSource` recording every requested path.
#[derive(Default)]
pub(crate) struct FakeRemote {
  files: HashMap<String, Vec<u8>>,
  failing: HashSet<String>,
  unreachable: bool,
  requests: Mutex<Vec<String>>,
}

impl FakeRemote {
  pub(crate) fn new() -> Self {
    init_test_logging();
    Self::default()
  }

  pub(crate) fn with_manifest(self, manifest: &str) -> Self {
    self.with_file("manifest.json", manifest.as_bytes())
  }

  pub(crate) fn with_file(mut self, path: &str, content: &[u8]) -> Self {
    self.files.insert(path.to_string(), content.to_vec());
    self
  }

  /// Answers requests for `path` with a server error.
  pub(crate) fn failing(mut self, path: &str) -> Self {
    self.failing.insert(path.to_string());
    self
  }

  /// Every request fails as if the network is down.
  pub(crate) fn unreachable(mut self) -> Self {
    self.unreachable = true;
    self
  }

  pub(crate) fn requests(&self) -> Vec<String> {
    self.requests.lock().unwrap().clone()
  }
}

#[async_trait]
impl RemoteSource for FakeRemote {
  async fn download_file(&self, path: &str, _timeout: Duration) -> Result<Response, Error> {
    self.requests.lock().unwrap().push(path.to_string());
    if self.unreachable {
      return Err(Error::RemoteUnavailable(path.to_string(), "network is unreachable".to_string()));
    }
    if self.failing.contains(path) {
      return Ok(Response::with_status(StatusCode::INTERNAL_SERVER_ERROR, vec![]));
    }
    match self.files.get(path) {
      Some(content) => Ok(Response::with_status(StatusCode::OK, content.clone())),
      None => Ok(Response::with_status(StatusCode::NOT_FOUND, b"404: Not Found".to_vec())),
    }
  }
}
