/// Summary of a synchronization run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
  /// Files that were planned for download, in plan order
  pub planned: Vec<String>,
  /// Planned files that were written to the cache
  pub downloaded: Vec<String>,
  /// Planned files that stayed stale, they are retried next run
  pub failed: Vec<String>,
  /// Whether the local manifest had to be rewritten
  pub manifest_written: bool,
}
