#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateState {
  Idle,
  FetchingManifest,
  Planning,
  /// Downloading file `index` (1-based) of `total`
  Downloading { index: usize, total: usize },
  PersistingManifest,
  HandoffPending,
  /// Synchronization failed, the description is shown to the user
  Failed(String),
  Done,
}
