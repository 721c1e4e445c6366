use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
  /// The remote source could not be reached, first argument is the requested path
  RemoteUnavailable(String, String),
  /// The remote answered with a non-success status, first argument is the requested path
  InvalidStatus(String, u16),
  /// The local manifest exists but could not be understood
  LocalStateCorrupt(PathBuf, String),
  /// A local file could not be read while hashing
  FileUnreadable(PathBuf, std::io::Error),
  /// A tracked file could not be downloaded into the cache
  DownloadFailed(String, Box<Error>),
  /// The configured entry point does not exist in the cache directory
  MissingEntryPoint(PathBuf),

  InvalidConfiguration(String),
  InvalidPath(String),

  IoError(std::io::Error),
  NotUtf8(std::string::FromUtf8Error),
  JsonError(json::Error),
}
