use futures::channel::mpsc::UnboundedSender;
use tracing::info;

use crate::structures::{Progress, UpdateEvent};

impl Progress {
  pub fn new(sender: Option<UnboundedSender<UpdateEvent>>) -> Self {
    Self { sender }
  }

  pub(crate) fn set_status(&self, value: String) {
    info!("Status: {}", value);
    self.send(UpdateEvent::Status(value));
  }

  pub(crate) fn set_progress(&self, percent: u8, file: &str) {
    info!("Progress: {}% ({})", percent, file);
    self.send(UpdateEvent::Progress { percent, file: file.to_string() });
  }

  pub(crate) fn log(&self, value: String) {
    info!("{}", value);
    self.send(UpdateEvent::Log(value));
  }

  /// Closes the channel, telling the receiver no further events will follow.
  pub(crate) fn close(&mut self) {
    if let Some(sender) = self.sender.take() {
      sender.close_channel();
    }
  }

  fn send(&self, event: UpdateEvent) {
    if let Some(sender) = &self.sender {
      // A receiver that went away is not our problem
      let _ = sender.unbounded_send(event);
    }
  }
}
