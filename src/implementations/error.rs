use crate::structures::Error;

impl std::error::Error for Error {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::FileUnreadable(_, error) => Some(error),
      Self::DownloadFailed(_, error) => Some(&**error),
      Self::IoError(error) => Some(error),
      Self::NotUtf8(error) => Some(error),
      Self::JsonError(error) => Some(error),
      _ => None,
    }
  }
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    match self {
      Self::RemoteUnavailable(path, reason) => write!(f, "{} is unavailable: {}", path, reason),
      Self::InvalidStatus(path, status) => write!(f, "{} returned HTTP {}", path, status),
      Self::LocalStateCorrupt(path, reason) => write!(f, "{} is corrupt: {}", path.display(), reason),
      Self::FileUnreadable(path, error) => write!(f, "Could not read {}: {}", path.display(), error),
      Self::DownloadFailed(file, error) => write!(f, "Downloading {} failed: {}", file, error),
      Self::MissingEntryPoint(path) => write!(f, "Entry point {} is missing", path.display()),
      Self::InvalidConfiguration(reason) => write!(f, "Invalid configuration: {}", reason),
      Self::InvalidPath(path) => write!(f, "Invalid tracked file path: {}", path),
      Self::IoError(error) => write!(f, "{}", error),
      Self::NotUtf8(error) => write!(f, "{}", error),
      Self::JsonError(error) => write!(f, "{}", error),
    }
  }
}

impl Error {
  /// Whether this error means the remote could not be used, as opposed to a local problem.
  pub fn is_remote(&self) -> bool {
    matches!(self, Self::RemoteUnavailable(..) | Self::InvalidStatus(..))
  }
}

impl From<std::io::Error> for Error {
  #[track_caller]
  #[inline(always)]
  fn from(error: std::io::Error) -> Self {
    log_error(&error);
    Self::IoError(error)
  }
}

impl From<std::string::FromUtf8Error> for Error {
  #[track_caller]
  #[inline(always)]
  fn from(error: std::string::FromUtf8Error) -> Self {
    log_error(&error);
    Self::NotUtf8(error)
  }
}

impl From<json::Error> for Error {
  #[track_caller]
  #[inline(always)]
  fn from(error: json::Error) -> Self {
    log_error(&error);
    Self::JsonError(error)
  }
}

#[track_caller]
fn log_error(error: &(impl std::error::Error + ?Sized)) {
  let location = core::panic::Location::caller();
  tracing::error!("{}:{}: {:?}", location.file(), location.line(), error);
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn remote_errors_are_classified() {
    assert!(Error::InvalidStatus("main/a.js".to_string(), 404).is_remote());
    assert!(Error::RemoteUnavailable("main/manifest.json".to_string(), "refused".to_string()).is_remote());
    assert!(!Error::MissingEntryPoint("files/main.js".into()).is_remote());
  }

  #[test]
  fn display_names_the_failing_file() {
    let error = Error::DownloadFailed("renderer.js".to_string(), Box::new(Error::InvalidStatus("main/renderer.js".to_string(), 500)));
    assert_eq!(error.to_string(), "Downloading renderer.js failed: main/renderer.js returned HTTP 500");
  }
}
