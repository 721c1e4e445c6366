use crate::structures::{Error, FingerprintManifest};
use crate::traits::AsString;

impl FingerprintManifest {
  pub fn new() -> Self {
    Self::default()
  }

  /// Parses a flat `{"file": "fingerprint"}` document.
  ///
  /// Values that are not strings are kept as absent fingerprints.
  pub fn from_json(text: &str) -> Result<Self, Error> {
    let parsed = json::parse(text).map_err(Error::JsonError)?;
    if !parsed.is_object() {
      return Err(Error::JsonError(json::Error::WrongType(format!("expected an object, got: {}", parsed.dump()))));
    }
    let mut manifest = Self::new();
    for (file, fingerprint) in parsed.entries() {
      manifest.insert(file.to_string(), fingerprint.as_string_option());
    }
    Ok(manifest)
  }

  pub fn to_json(&self) -> String {
    let mut object = json::object::Object::with_capacity(self.entries.len());
    for (file, fingerprint) in self.entries.iter() {
      let value = match fingerprint {
        Some(fingerprint) => json::JsonValue::from(fingerprint.as_str()),
        None => json::JsonValue::Null,
      };
      object.insert(file, value);
    }
    json::JsonValue::Object(object).pretty(2)
  }

  /// Fingerprint of `file`, `None` if the file is not listed or has no fingerprint.
  pub fn get(&self, file: &str) -> Option<&str> {
    self.entries.get(file).and_then(|fingerprint| fingerprint.as_deref())
  }

  pub fn insert(&mut self, file: String, fingerprint: Option<String>) {
    self.entries.insert(file, fingerprint);
  }

  pub fn contains(&self, file: &str) -> bool {
    self.entries.contains_key(file)
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

impl<F: Into<String>, H: Into<String>> FromIterator<(F, H)> for FingerprintManifest {
  fn from_iter<I: IntoIterator<Item = (F, H)>>(iter: I) -> Self {
    Self {
      entries: iter.into_iter().map(|(file, fingerprint)| (file.into(), Some(fingerprint.into()))).collect(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_flat_mapping() {
    let manifest = FingerprintManifest::from_json(r#"{"main.js": "AB12", "index.html": "CD34"}"#).unwrap();
    assert_eq!(manifest.len(), 2);
    assert_eq!(manifest.get("main.js"), Some("AB12"));
    assert_eq!(manifest.get("index.html"), Some("CD34"));
    assert_eq!(manifest.get("renderer.js"), None);
  }

  #[test]
  fn null_fingerprints_survive_a_save() {
    let mut manifest = FingerprintManifest::new();
    manifest.insert("main.js".to_string(), Some("AB12".to_string()));
    manifest.insert("supabase.js".to_string(), None);

    let reparsed = FingerprintManifest::from_json(&manifest.to_json()).unwrap();
    assert_eq!(reparsed, manifest);
    assert!(reparsed.contains("supabase.js"));
    assert_eq!(reparsed.get("supabase.js"), None);
  }

  #[test]
  fn rejects_documents_that_are_not_objects() {
    assert!(FingerprintManifest::from_json(r#"["main.js"]"#).is_err());
    assert!(FingerprintManifest::from_json("{ not json").is_err());
    assert!(FingerprintManifest::from_json("").is_err());
  }
}
