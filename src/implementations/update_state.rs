use crate::structures::UpdateState;

impl UpdateState {
  /// Whether synchronization is over and the handoff may start.
  pub fn is_ready_for_handoff(&self) -> bool {
    matches!(self, Self::HandoffPending | Self::Failed(_))
  }
}

impl std::fmt::Display for UpdateState {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    match self {
      Self::Idle => write!(f, "idle"),
      Self::FetchingManifest => write!(f, "fetching manifest"),
      Self::Planning => write!(f, "planning"),
      Self::Downloading { index, total } => write!(f, "downloading {}/{}", index, total),
      Self::PersistingManifest => write!(f, "persisting manifest"),
      Self::HandoffPending => write!(f, "handoff pending"),
      Self::Failed(reason) => write!(f, "failed: {}", reason),
      Self::Done => write!(f, "done"),
    }
  }
}
