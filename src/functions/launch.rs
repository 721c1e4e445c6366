use std::path::Path;

use tokio::process::{Child, Command};
use tracing::{error, info, instrument};

use crate::structures::{Error, Launcher, Progress};

/// Starts the entry point from the cache directory as a new process.
///
/// The process runs with the cache directory as its working directory. The update UI is released
/// right before spawning, a missing entry point leaves it open so the user can see what went wrong.
#[instrument(skip(progress))]
pub async fn launch(cache_directory: &Path, launcher: &Launcher, progress: &mut Progress) -> Result<Child, Error> {
  let entry_point = cache_directory.join(&launcher.entry_point);
  if !tokio::fs::try_exists(&entry_point).await.unwrap_or(false) {
    error!("{} is missing, nothing to launch", entry_point.display());
    progress.set_status("Error: missing files".to_string());
    return Err(Error::MissingEntryPoint(entry_point));
  }

  let mut command = match &launcher.interpreter {
    Some(interpreter) => {
      let mut command = Command::new(interpreter);
      command.arg(&entry_point);
      command
    },
    None => {
      make_executable(&entry_point).await?;
      Command::new(&entry_point)
    }
  };
  command.args(&launcher.arguments).current_dir(cache_directory);

  progress.close();
  let child = command.spawn()?;
  info!("Launched {} (pid {:?})", entry_point.display(), child.id());
  Ok(child)
}

/// Downloaded files arrive without the executable bit.
#[cfg(unix)]
pub(crate) async fn make_executable(path: &Path) -> Result<(), Error> {
  use std::os::unix::fs::PermissionsExt;

  let mut permissions = tokio::fs::metadata(path).await?.permissions();
  let mode = permissions.mode();
  if mode & 0o111 != 0o111 {
    permissions.set_mode(mode | 0o111);
    tokio::fs::set_permissions(path, permissions).await?;
  }
  Ok(())
}

#[cfg(not(unix))]
pub(crate) async fn make_executable(_path: &Path) -> Result<(), Error> {
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::structures::UpdateEvent;
  use futures::StreamExt;

  fn launcher(entry_point: &str, interpreter: Option<&str>) -> Launcher {
    Launcher {
      entry_point: entry_point.to_string(),
      interpreter: interpreter.map(|interpreter| interpreter.into()),
      arguments: vec![],
    }
  }

  #[tokio::test]
  async fn missing_entry_point_is_reported() {
    let cache = tempfile::tempdir().unwrap();
    let (sender, mut receiver) = futures::channel::mpsc::unbounded();
    let mut progress = Progress::new(Some(sender));

    let result = launch(cache.path(), &launcher("main.js", Some("node")), &mut progress).await;
    assert!(matches!(result, Err(Error::MissingEntryPoint(path)) if path == cache.path().join("main.js")));
    assert_eq!(receiver.next().await, Some(UpdateEvent::Status("Error: missing files".to_string())));
  }

  #[cfg(unix)]
  #[tokio::test]
  async fn runs_inside_cache_directory() {
    let cache = tempfile::tempdir().unwrap();
    std::fs::write(cache.path().join("main.sh"), "pwd > launched.txt\n").unwrap();
    let (sender, receiver) = futures::channel::mpsc::unbounded();
    let mut progress = Progress::new(Some(sender));

    let mut child = launch(cache.path(), &launcher("main.sh", Some("sh")), &mut progress).await.unwrap();
    assert!(child.wait().await.unwrap().success());

    let working_directory = std::fs::read_to_string(cache.path().join("launched.txt")).unwrap();
    assert_eq!(std::fs::canonicalize(working_directory.trim()).unwrap(), std::fs::canonicalize(cache.path()).unwrap());
    // The UI channel was released
    assert_eq!(receiver.collect::<Vec<_>>().await, vec![]);
  }

  #[cfg(unix)]
  #[tokio::test]
  async fn entry_point_becomes_executable() {
    use std::os::unix::fs::PermissionsExt;

    let cache = tempfile::tempdir().unwrap();
    let path = cache.path().join("app");
    std::fs::write(&path, "#!/bin/sh\n").unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();

    make_executable(&path).await.unwrap();
    assert_eq!(std::fs::metadata(&path).unwrap().permissions().mode() & 0o777, 0o755);
  }
}
