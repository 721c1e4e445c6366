use std::time::Duration;

use async_trait::async_trait;

use crate::structures::{Error, Response};

pub trait AsString {
  fn as_string_option(&self) -> Option<String>;
}

impl AsString for json::JsonValue {
  fn as_string_option(&self) -> Option<String> {
    match *self {
      json::JsonValue::Short(ref value)  => Some(value.to_string()),
      json::JsonValue::String(ref value) => Some(value.to_string()),
      _                                  => None
    }
  }
}

/// Somewhere tracked files and the remote manifest can be fetched from.
///
/// `path` is relative to the branch, e.g. `manifest.json` or `main.js`. Implementations give up
/// after `timeout`.
#[async_trait]
pub trait RemoteSource: Send + Sync {
  async fn download_file(&self, path: &str, timeout: Duration) -> Result<Response, Error>;
}
