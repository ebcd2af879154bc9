//! Handler code emission

use crate::escape::{byte_list, c_string, indent_code};
use crate::scaffold::{Marker, Scaffold};
use std::collections::HashSet;
use std::fmt::Write;
use tracing::{debug, warn};
use wgen_asset::{AssetEntry, AssetTable, MimeRegistry, ResourceContent};
use wgen_core::{ContentHash, Result};

/// Signature shared by every generated handler
const HANDLER_PARAMS: &str =
    "WebServer &server, WebServer::ConnectionType type, char *url_tail, bool tail_complete";

/// Rendered text for each scaffold marker
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragments {
    pub mime_types: String,
    pub static_pages: String,
    pub dynamic_pages: String,
}

impl Fragments {
    pub fn get(&self, marker: Marker) -> &str {
        match marker {
            Marker::MimeTypes => &self.mime_types,
            Marker::StaticPages => &self.static_pages,
            Marker::DynamicPages => &self.dynamic_pages,
        }
    }
}

/// Renders the sections of one generation run
pub struct CodeEmitter<'a> {
    table: &'a AssetTable,
    mimes: &'a MimeRegistry,
}

impl<'a> CodeEmitter<'a> {
    pub fn new(table: &'a AssetTable, mimes: &'a MimeRegistry) -> Self {
        Self { table, mimes }
    }

    /// Validate `template` as a scaffold and render into it
    pub fn render_template(&self, template: &str) -> Result<String> {
        let scaffold = Scaffold::parse(template)?;
        Ok(self.render(&scaffold))
    }

    /// Render all sections into a validated scaffold
    pub fn render(&self, scaffold: &Scaffold) -> String {
        let fragments = self.fragments();
        scaffold.fill(|marker| fragments.get(marker).to_string())
    }

    /// Render the three sections.
    ///
    /// Each content hash is emitted once per call; later resources with the
    /// same content reuse the symbol of the first.
    pub fn fragments(&self) -> Fragments {
        let mut seen = HashSet::new();

        let mut static_pages = String::from("// STATIC PAGES\n");
        for entry in self.table.static_text() {
            if self.first_sighting(&mut seen, entry) {
                self.emit_static(&mut static_pages, entry);
            }
        }
        static_pages.push_str("\n// BINARY PAGES\n");
        for entry in self.table.static_binary() {
            if self.first_sighting(&mut seen, entry) {
                self.emit_static(&mut static_pages, entry);
            }
        }

        let mut dynamic_pages = String::from("// DYNAMIC PAGES\n");
        for entry in self.table.dynamic() {
            if self.first_sighting(&mut seen, entry) {
                emit_dynamic(&mut dynamic_pages, entry);
            }
        }

        Fragments {
            mime_types: self.mime_types(),
            static_pages,
            dynamic_pages,
        }
    }

    fn mime_types(&self) -> String {
        let mut out = String::from("// MIME TYPES\n");
        for entry in self.mimes.iter() {
            let _ = writeln!(
                out,
                "static const char {}[] = \"{}\";",
                entry.symbol(),
                c_string(entry.mime.as_bytes())
            );
        }
        out
    }

    fn first_sighting(&self, seen: &mut HashSet<ContentHash>, entry: &AssetEntry) -> bool {
        if seen.insert(entry.content_hash) {
            return true;
        }
        debug!(resource = %entry.name, symbol = %entry.symbol(), "content already emitted");
        if let Some(first) = self.table.get_by_hash(&entry.content_hash) {
            if first.mime_hash != entry.mime_hash {
                warn!(
                    resource = %entry.name,
                    served_as = %first.name,
                    "identical content declared with a different MIME type; first declaration wins"
                );
            }
        }
        false
    }

    fn emit_static(&self, out: &mut String, entry: &AssetEntry) {
        // Classification guarantees static entries carry a MIME type.
        debug_assert!(entry.mime_hash.is_some(), "static entry {} has no MIME type", entry.name);
        let Some(mime_hash) = entry.mime_hash else {
            warn!(resource = %entry.name, "static entry without MIME type; handler not emitted");
            return;
        };
        let symbol = entry.symbol();
        let mime_symbol = format!("m_{}_s", mime_hash.ident());

        match &entry.content {
            ResourceContent::Text(text) => {
                let _ = writeln!(
                    out,
                    "static const unsigned char {symbol}_s[] PROGMEM = \"{}\";",
                    c_string(text.as_bytes())
                );
                let _ = writeln!(
                    out,
                    "inline void {symbol} ({HANDLER_PARAMS}) {{ staticResponder(server, type, url_tail, tail_complete, {symbol}_s, {mime_symbol}); }}"
                );
            }
            ResourceContent::Binary(bytes) => {
                // C++ forbids zero-length arrays; the count below keeps the padding unread.
                let data = if bytes.is_empty() {
                    "{0x0}".to_string()
                } else {
                    byte_list(bytes)
                };
                let _ = writeln!(
                    out,
                    "static const unsigned char {symbol}_s[] PROGMEM = {data};"
                );
                let _ = writeln!(
                    out,
                    "inline void {symbol} ({HANDLER_PARAMS}) {{ staticResponder(server, type, url_tail, tail_complete, {symbol}_s, {}, {mime_symbol}); }}",
                    bytes.len()
                );
            }
            ResourceContent::Code(_) => {}
        }
    }
}

fn emit_dynamic(out: &mut String, entry: &AssetEntry) {
    if let ResourceContent::Code(code) = &entry.content {
        let _ = writeln!(out, "namespace {}\n{{\n\t{}\n}}", entry.symbol(), indent_code(code));
    }
}
