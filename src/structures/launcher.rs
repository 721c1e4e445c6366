use std::path::PathBuf;

/// How the downstream application is started once the cache is up to date.
#[derive(Debug, Clone)]
pub struct Launcher {
  /// Filename of the entry point inside the cache directory
  pub entry_point: String,
  /// Program used to run the entry point, e.g. `node`, or `None` to execute it directly
  pub interpreter: Option<PathBuf>,
  pub arguments: Vec<String>,
}
