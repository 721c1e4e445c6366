use std::collections::BTreeMap;

/// Mapping from tracked filename to the fingerprint of its content.
///
/// A `None` fingerprint records a tracked file that could not be hashed, it is stored as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FingerprintManifest {
  pub(crate) entries: BTreeMap<String, Option<String>>,
}
