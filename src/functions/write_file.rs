use std::path::Path;

use tokio::io::AsyncWriteExt;
use tracing::instrument;

use crate::structures::Error;

/// Writes `content` to a uniquely named temporary file next to `path` and renames it over `path`,
/// so an interrupted write never leaves a truncated file behind.
#[instrument(skip(content), fields(bytes = content.len()))]
pub(crate) async fn write_file_atomically(path: &Path, content: &[u8]) -> Result<(), Error> {
  let parent = match path.parent() {
    Some(parent) if !parent.as_os_str().is_empty() => parent,
    _ => Path::new("."),
  };
  tokio::fs::create_dir_all(parent).await?;

  // Created exclusively, and removed again when dropped on any error below
  let temp = tempfile::Builder::new().prefix(".updater-").suffix(".part").tempfile_in(parent)?;
  let mut file = tokio::fs::File::from_std(temp.as_file().try_clone()?);
  file.write_all(content).await?;
  file.flush().await?;
  file.sync_all().await?;
  drop(file);

  temp.persist(path).map_err(|e| Error::from(e.error))?;
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn entries(directory: &Path) -> Vec<String> {
    let mut names : Vec<String> = std::fs::read_dir(directory).unwrap()
      .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
      .collect();
    names.sort();
    names
  }

  #[tokio::test]
  async fn creates_parent_directories() {
    let directory = tempfile::tempdir().unwrap();
    let path = directory.path().join("nested").join("index.html");
    write_file_atomically(&path, b"<html></html>").await.unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), b"<html></html>");
  }

  #[tokio::test]
  async fn overwrites_and_leaves_no_temp_file() {
    let directory = tempfile::tempdir().unwrap();
    let path = directory.path().join("main.js");
    std::fs::write(&path, b"old content that is longer").unwrap();
    write_file_atomically(&path, b"new").await.unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), b"new");
    assert_eq!(entries(directory.path()), vec!["main.js"]);
  }

  #[tokio::test]
  async fn sibling_named_like_a_temp_file_survives() {
    let directory = tempfile::tempdir().unwrap();
    write_file_atomically(&directory.path().join("x.tmp"), b"first").await.unwrap();
    write_file_atomically(&directory.path().join("x"), b"second").await.unwrap();
    assert_eq!(std::fs::read(directory.path().join("x.tmp")).unwrap(), b"first");
    assert_eq!(std::fs::read(directory.path().join("x")).unwrap(), b"second");
    assert_eq!(entries(directory.path()), vec!["x", "x.tmp"]);
  }

  #[tokio::test]
  async fn failed_write_removes_the_temp_file() {
    let directory = tempfile::tempdir().unwrap();
    let target = directory.path().join("main.js");
    std::fs::create_dir(&target).unwrap();
    std::fs::write(target.join("inside"), b"keeps the directory non-empty").unwrap();

    assert!(write_file_atomically(&target, b"content").await.is_err());
    assert_eq!(entries(directory.path()), vec!["main.js"]);
  }
}
