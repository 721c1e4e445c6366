use crate::structures::SyncPlan;

impl SyncPlan {
  pub fn new() -> Self {
    Self::default()
  }

  pub(crate) fn push(&mut self, file: String) {
    self.files.push(file);
  }

  pub fn files(&self) -> &[String] {
    &self.files
  }

  pub fn contains(&self, file: &str) -> bool {
    self.files.iter().any(|planned| planned == file)
  }

  pub fn len(&self) -> usize {
    self.files.len()
  }

  pub fn is_empty(&self) -> bool {
    self.files.is_empty()
  }

  /// Percentage reported before downloading the file at `index` (0-based).
  pub fn percent(&self, index: usize) -> u8 {
    if self.files.is_empty() {
      return 100;
    }
    let percent = (100.0 * (index + 1) as f64 / self.files.len() as f64).round();
    percent.min(100.0) as u8
  }
}
