use std::sync::Arc;

/// Remote repository serving tracked files as `{base}/{branch}/{filename}`.
#[derive(Debug, Clone)]
pub struct RemoteRepository {
  pub base: Arc<String>,
  pub branch: Arc<String>,
}
