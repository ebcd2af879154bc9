//! Resolved asset table

use crate::classify::classify;
use crate::mime::MimeRegistry;
use crate::types::{Resource, ResourceContent, ResourceKind};
use indexmap::map::Entry;
use indexmap::IndexMap;
use tracing::debug;
use wgen_core::{ContentHash, Result, WgenError};

/// A resource resolved to its hashes
#[derive(Debug, Clone)]
pub struct AssetEntry {
    pub name: String,
    pub content_hash: ContentHash,
    /// Absent for dynamic code
    pub mime_hash: Option<ContentHash>,
    pub content: ResourceContent,
}

impl AssetEntry {
    pub fn kind(&self) -> ResourceKind {
        self.content.kind()
    }

    /// Name of the generated handler, e.g. `f_<ident>`
    pub fn symbol(&self) -> String {
        format!("f_{}", self.content_hash.ident())
    }
}

/// Resolved entries keyed by resource name, in insertion order
#[derive(Debug, Default)]
pub struct AssetTable {
    entries: IndexMap<String, AssetEntry>,
}

impl AssetTable {
    /// Create a new empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify, hash and store a resource, registering its MIME type.
    ///
    /// Resource names must be unique; identical content under different
    /// names is fine and resolves to the same content hash.
    pub fn add(&mut self, resource: Resource, mimes: &mut MimeRegistry) -> Result<&AssetEntry> {
        let slot = match self.entries.entry(resource.name.clone()) {
            Entry::Occupied(_) => return Err(WgenError::DuplicateResource(resource.name)),
            Entry::Vacant(slot) => slot,
        };

        let kind = classify(&resource)?;
        let content_hash = resource.content_hash();
        let mime_hash = resource.mime.as_deref().map(|mime| mimes.register(mime));

        debug!(
            resource = %resource.name,
            %kind,
            hash = %content_hash,
            bytes = resource.content.len(),
            "resource added"
        );

        Ok(slot.insert(AssetEntry {
            name: resource.name,
            content_hash,
            mime_hash,
            content: resource.content,
        }))
    }

    /// Get an entry by resource name
    pub fn get(&self, name: &str) -> Option<&AssetEntry> {
        self.entries.get(name)
    }

    /// First entry holding the given content hash
    pub fn get_by_hash(&self, hash: &ContentHash) -> Option<&AssetEntry> {
        self.entries.values().find(|e| &e.content_hash == hash)
    }

    /// Names of every entry sharing the given content hash
    pub fn aliases(&self, hash: &ContentHash) -> Vec<&str> {
        self.entries
            .values()
            .filter(|e| &e.content_hash == hash)
            .map(|e| e.name.as_str())
            .collect()
    }

    /// All entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &AssetEntry> {
        self.entries.values()
    }

    /// Entries of one kind, in insertion order
    pub fn by_kind(&self, kind: ResourceKind) -> impl Iterator<Item = &AssetEntry> {
        self.entries.values().filter(move |e| e.kind() == kind)
    }

    pub fn static_text(&self) -> impl Iterator<Item = &AssetEntry> {
        self.by_kind(ResourceKind::StaticText)
    }

    pub fn static_binary(&self) -> impl Iterator<Item = &AssetEntry> {
        self.by_kind(ResourceKind::StaticBinary)
    }

    pub fn dynamic(&self) -> impl Iterator<Item = &AssetEntry> {
        self.by_kind(ResourceKind::DynamicCode)
    }

    /// Get all resource names
    pub fn names(&self) -> Vec<&str> {
        self.entries.keys().map(|s| s.as_str()).collect()
    }

    /// Get the number of stored entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (AssetTable, MimeRegistry) {
        let mut table = AssetTable::new();
        let mut mimes = MimeRegistry::new();
        table
            .add(Resource::text("index.html", "<h1>hi</h1>", "text/html"), &mut mimes)
            .unwrap();
        table
            .add(Resource::binary("logo.png", vec![0x00, 0xFF, 0x10], "image/png"), &mut mimes)
            .unwrap();
        table
            .add(Resource::code("toggleLed.cpp", "inline void respond() {}"), &mut mimes)
            .unwrap();
        table
            .add(Resource::text("copy.html", "<h1>hi</h1>", "text/html"), &mut mimes)
            .unwrap();
        (table, mimes)
    }

    #[test]
    fn test_add_and_get() {
        let (table, mimes) = sample();
        assert_eq!(table.len(), 4);
        assert_eq!(mimes.len(), 2);

        let entry = table.get("logo.png").unwrap();
        assert_eq!(entry.kind(), ResourceKind::StaticBinary);
        assert_eq!(entry.mime_hash, mimes.get("image/png"));
        assert!(table.get("toggleLed.cpp").unwrap().mime_hash.is_none());
    }

    #[test]
    fn test_duplicate_name_is_rejected() {
        let (mut table, mut mimes) = sample();
        let err = table
            .add(Resource::text("index.html", "other", "text/html"), &mut mimes)
            .unwrap_err();
        assert!(matches!(err, WgenError::DuplicateResource(ref n) if n == "index.html"));
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn test_invalid_kind_leaves_registry_untouched() {
        let mut table = AssetTable::new();
        let mut mimes = MimeRegistry::new();
        let mut bad = Resource::code("status.cpp", "");
        bad.mime = Some("application/json".to_string());

        assert!(table.add(bad, &mut mimes).is_err());
        assert!(table.is_empty());
        assert!(mimes.is_empty());
    }

    #[test]
    fn test_views_preserve_order() {
        let (table, _) = sample();
        let text: Vec<&str> = table.static_text().map(|e| e.name.as_str()).collect();
        assert_eq!(text, vec!["index.html", "copy.html"]);
        assert_eq!(table.static_binary().count(), 1);
        assert_eq!(table.dynamic().count(), 1);
        assert_eq!(table.names(), vec!["index.html", "logo.png", "toggleLed.cpp", "copy.html"]);
    }

    #[test]
    fn test_static_entries_carry_mime_hash() {
        let (table, mimes) = sample();
        for entry in table.static_text().chain(table.static_binary()) {
            let hash = entry.mime_hash.expect("static entry without MIME");
            assert!(mimes.get_by_hash(&hash).is_some());
        }
        assert!(table.dynamic().all(|e| e.mime_hash.is_none()));
    }

    #[test]
    fn test_identical_content_shares_hash() {
        let (table, _) = sample();
        let a = table.get("index.html").unwrap();
        let b = table.get("copy.html").unwrap();
        assert_eq!(a.content_hash, b.content_hash);
        assert_eq!(a.symbol(), b.symbol());
        assert_eq!(table.aliases(&a.content_hash), vec!["index.html", "copy.html"]);
        assert_eq!(table.get_by_hash(&a.content_hash).unwrap().name, "index.html");
    }
}
