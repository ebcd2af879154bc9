//! MIME type registry

use indexmap::IndexMap;
use wgen_core::ContentHash;

/// A registered MIME type and the hash its generated symbol is named after
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MimeEntry<'a> {
    pub mime: &'a str,
    pub hash: ContentHash,
}

impl MimeEntry<'_> {
    /// Name of the generated string constant, e.g. `m_<ident>_s`
    pub fn symbol(&self) -> String {
        format!("m_{}_s", self.hash.ident())
    }
}

/// Deduplicating registry of MIME strings, in first-registration order
#[derive(Debug, Default)]
pub struct MimeRegistry {
    entries: IndexMap<String, ContentHash>,
}

impl MimeRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a MIME string, returning its hash.
    ///
    /// Registering the same string again returns the same hash and keeps a
    /// single entry.
    pub fn register(&mut self, mime: &str) -> ContentHash {
        if let Some(hash) = self.entries.get(mime) {
            return *hash;
        }
        let hash = ContentHash::from_str(mime);
        self.entries.insert(mime.to_string(), hash);
        hash
    }

    /// Look up the hash of a registered MIME string
    pub fn get(&self, mime: &str) -> Option<ContentHash> {
        self.entries.get(mime).copied()
    }

    /// Look up a registered MIME string by its hash
    pub fn get_by_hash(&self, hash: &ContentHash) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, h)| *h == hash)
            .map(|(mime, _)| mime.as_str())
    }

    /// All entries in registration order
    pub fn iter(&self) -> impl Iterator<Item = MimeEntry<'_>> {
        self.entries.iter().map(|(mime, hash)| MimeEntry {
            mime: mime.as_str(),
            hash: *hash,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_is_idempotent() {
        let mut registry = MimeRegistry::new();
        let h1 = registry.register("text/html");
        let h2 = registry.register("text/html");
        assert_eq!(h1, h2);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_insertion_order() {
        let mut registry = MimeRegistry::new();
        registry.register("text/html");
        registry.register("image/png");
        registry.register("text/html");
        registry.register("application/json");

        let order: Vec<&str> = registry.iter().map(|e| e.mime).collect();
        assert_eq!(order, vec!["text/html", "image/png", "application/json"]);
    }

    #[test]
    fn test_lookup_both_ways() {
        let mut registry = MimeRegistry::new();
        let hash = registry.register("text/css");
        assert_eq!(registry.get("text/css"), Some(hash));
        assert_eq!(registry.get_by_hash(&hash), Some("text/css"));
        assert_eq!(registry.get("text/plain"), None);
    }

    #[test]
    fn test_symbol_shape() {
        let mut registry = MimeRegistry::new();
        registry.register("text/html");
        let entry = registry.iter().next().unwrap();
        assert_eq!(entry.symbol(), format!("m_{}_s", entry.hash.ident()));
    }
}
