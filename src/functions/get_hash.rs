use std::io::ErrorKind;
use std::path::Path;

use sha2::{Sha256, Digest};
use tokio::io::AsyncReadExt;
use tracing::warn;

use crate::structures::Error;

/// Calculates the SHA256 fingerprint of `bytes`, hex encoded in upper case.
pub fn hash_bytes(bytes: &[u8]) -> String {
  let mut sha256 = Sha256::new();
  sha256.update(bytes);
  hex::encode_upper(sha256.finalize())
}

/// Opens a file and calculates it's SHA256 fingerprint.
///
/// A file that is missing or cannot be read has no fingerprint, it will simply be downloaded again.
pub async fn hash_of_file(file_path: &Path) -> Option<String> {
  match read_and_hash(file_path).await {
    Ok(hash) => Some(hash),
    Err(e) if e.kind() == ErrorKind::NotFound => None,
    Err(e) => {
      warn!("{}", Error::FileUnreadable(file_path.to_path_buf(), e));
      None
    }
  }
}

async fn read_and_hash(file_path: &Path) -> std::io::Result<String> {
  let mut file = tokio::fs::File::open(file_path).await?;
  let mut sha256 = Sha256::new();
  let mut buffer = vec![0u8; 4096];
  loop {
    let read = file.read(&mut buffer).await?;
    if read == 0 {
      break;
    }
    sha256.update(&buffer[..read]);
  }
  Ok(hex::encode_upper(sha256.finalize()))
}

/// Compares two fingerprints, hex digests from other tools are often lower case.
pub fn fingerprints_match(left: &str, right: &str) -> bool {
  left.eq_ignore_ascii_case(right)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn hash_is_deterministic() {
    assert_eq!(hash_bytes(b"console.log('hi');"), hash_bytes(b"console.log('hi');"));
    assert_ne!(hash_bytes(b"console.log('hi');"), hash_bytes(b"console.log('ho');"));
  }

  #[test]
  fn hash_is_upper_case_sha256() {
    assert_eq!(hash_bytes(b""), "E3B0C44298FC1C149AFBF4C8996FB92427AE41E4649B934CA495991B7852B855");
    assert_eq!(hash_bytes(b"abc"), "BA7816BF8F01CFEA414140DE5DAE2223B00361A396177A9CB410FF61F20015AD");
  }

  #[test]
  fn fingerprints_ignore_case() {
    assert!(fingerprints_match("ba7816bf", "BA7816BF"));
    assert!(!fingerprints_match("ba7816bf", "BA7816BE"));
  }

  #[tokio::test]
  async fn missing_file_has_no_hash() {
    let directory = tempfile::tempdir().unwrap();
    assert_eq!(hash_of_file(&directory.path().join("main.js")).await, None);
  }

  #[tokio::test]
  async fn file_hash_matches_content_hash() {
    let directory = tempfile::tempdir().unwrap();
    let path = directory.path().join("main.js");
    std::fs::write(&path, b"abc").unwrap();
    assert_eq!(hash_of_file(&path).await, Some(hash_bytes(b"abc")));
  }

  #[tokio::test]
  async fn large_file_is_hashed_in_chunks() {
    let directory = tempfile::tempdir().unwrap();
    let path = directory.path().join("bundle.js");
    let content : Vec<u8> = (0..10_000u32).map(|i| (i % 251) as u8).collect();
    std::fs::write(&path, &content).unwrap();
    assert_eq!(hash_of_file(&path).await, Some(hash_bytes(&content)));
  }

  #[tokio::test]
  async fn directory_is_unreadable() {
    let directory = tempfile::tempdir().unwrap();
    assert_eq!(hash_of_file(directory.path()).await, None);
  }
}
