//! Resource type definitions

use std::fmt;
use wgen_core::ContentHash;

/// The three kinds of resource the generator knows how to emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// Printable text emitted as a string literal
    StaticText,
    /// Opaque bytes emitted as a byte initializer list
    StaticBinary,
    /// Handler source compiled as-is inside its own scope
    DynamicCode,
}

impl ResourceKind {
    /// Tag byte mixed into the content hash
    pub(crate) fn tag(self) -> u8 {
        match self {
            ResourceKind::StaticText => 0,
            ResourceKind::StaticBinary => 1,
            ResourceKind::DynamicCode => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ResourceKind::StaticText => "static_text",
            ResourceKind::StaticBinary => "static_binary",
            ResourceKind::DynamicCode => "dynamic_code",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind-specific resource payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceContent {
    Text(String),
    Binary(Vec<u8>),
    Code(String),
}

impl ResourceContent {
    /// The kind this payload declares
    pub fn kind(&self) -> ResourceKind {
        match self {
            ResourceContent::Text(_) => ResourceKind::StaticText,
            ResourceContent::Binary(_) => ResourceKind::StaticBinary,
            ResourceContent::Code(_) => ResourceKind::DynamicCode,
        }
    }

    /// Raw bytes of the payload
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            ResourceContent::Text(s) | ResourceContent::Code(s) => s.as_bytes(),
            ResourceContent::Binary(b) => b,
        }
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }
}

/// A single input resource, as handed over by the asset-loading side
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub name: String,
    pub content: ResourceContent,
    pub mime: Option<String>,
}

impl Resource {
    /// A static text resource
    pub fn text(name: impl Into<String>, content: impl Into<String>, mime: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: ResourceContent::Text(content.into()),
            mime: Some(mime.into()),
        }
    }

    /// A static binary resource
    pub fn binary(name: impl Into<String>, content: impl Into<Vec<u8>>, mime: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: ResourceContent::Binary(content.into()),
            mime: Some(mime.into()),
        }
    }

    /// A dynamic code resource; dynamic handlers set their own headers
    pub fn code(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: ResourceContent::Code(code.into()),
            mime: None,
        }
    }

    pub fn kind(&self) -> ResourceKind {
        self.content.kind()
    }

    /// Content hash naming this resource's generated symbol.
    ///
    /// Static content hashes over kind and bytes only, so identical static
    /// content collapses to one symbol. Dynamic code also hashes its name:
    /// every dynamic resource gets a scope of its own.
    pub fn content_hash(&self) -> ContentHash {
        let tag = [self.kind().tag()];
        match &self.content {
            ResourceContent::Text(_) | ResourceContent::Binary(_) => {
                ContentHash::from_parts(&[&tag[..], self.content.as_bytes()])
            }
            ResourceContent::Code(code) => {
                ContentHash::from_parts(&[&tag[..], self.name.as_bytes(), code.as_bytes()])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_text_same_hash() {
        let a = Resource::text("index.html", "<h1>hi</h1>", "text/html");
        let b = Resource::text("index2.html", "<h1>hi</h1>", "text/plain");
        assert_eq!(a.content_hash(), b.content_hash());
    }

    #[test]
    fn test_kind_separates_identical_bytes() {
        let text = Resource::text("a.txt", "abc", "text/plain");
        let binary = Resource::binary("a.bin", b"abc".to_vec(), "application/octet-stream");
        assert_ne!(text.content_hash(), binary.content_hash());
    }

    #[test]
    fn test_dynamic_code_hash_includes_name() {
        let a = Resource::code("a.cpp", "void respond() {}");
        let b = Resource::code("b.cpp", "void respond() {}");
        assert_ne!(a.content_hash(), b.content_hash());
        assert_eq!(a.content_hash(), Resource::code("a.cpp", "void respond() {}").content_hash());
    }

    #[test]
    fn test_content_kind() {
        assert_eq!(Resource::code("x.cpp", "").kind(), ResourceKind::DynamicCode);
        assert_eq!(
            Resource::binary("x.png", vec![0u8, 1], "image/png").kind(),
            ResourceKind::StaticBinary
        );
        assert_eq!(ResourceKind::StaticText.to_string(), "static_text");
    }
}
