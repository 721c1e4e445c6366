use futures::channel::mpsc::UnboundedSender;

/// Event sent to whoever presents the update to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateEvent {
  Status(String),
  Progress { percent: u8, file: String },
  Log(String),
}

/// Best-effort sender of `UpdateEvent`s, sending never blocks and a missing receiver is ignored.
#[derive(Debug, Clone, Default)]
pub struct Progress {
  pub(crate) sender: Option<UnboundedSender<UpdateEvent>>,
}
