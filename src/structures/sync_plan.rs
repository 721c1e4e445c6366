/// Ordered list of tracked files that have to be downloaded during this run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncPlan {
  pub(crate) files: Vec<String>,
}
