//! Route table mapping resource names to generated handlers

use crate::escape::c_string;
use crate::handler::{Body, StaticResponder};
use std::fmt::Write;
use wgen_asset::{AssetTable, MimeRegistry, ResourceContent};

/// Resource served when the request path is empty
pub const DEFAULT_PAGE: &str = "index.html";

/// What a route dispatches to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteTarget<'a> {
    Static(StaticResponder<'a>),
    /// Opaque handler code; only the device can run it
    Dynamic,
}

/// One registered path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route<'a> {
    pub path: &'a str,
    /// Callable handler symbol, e.g. `f_<ident>` or `f_<ident>::respond`
    pub symbol: String,
    pub target: RouteTarget<'a>,
}

/// Every resource name of a run, resolved to the handler that serves it
#[derive(Debug, Default)]
pub struct RouteTable<'a> {
    routes: Vec<Route<'a>>,
}

impl<'a> RouteTable<'a> {
    /// Resolve every table entry to its handler.
    ///
    /// Names sharing content resolve to the first emitted declaration, which
    /// is also where the served MIME type comes from.
    pub fn build(table: &'a AssetTable, mimes: &'a MimeRegistry) -> Self {
        let mut routes = Vec::with_capacity(table.len());
        for entry in table.iter() {
            let canonical = table.get_by_hash(&entry.content_hash).unwrap_or(entry);
            let (symbol, target) = match &canonical.content {
                ResourceContent::Code(_) => (format!("{}::respond", canonical.symbol()), RouteTarget::Dynamic),
                ResourceContent::Text(text) => (
                    canonical.symbol(),
                    static_target(mimes, canonical.mime_hash.as_ref(), Body::Text(text)),
                ),
                ResourceContent::Binary(bytes) => (
                    canonical.symbol(),
                    static_target(mimes, canonical.mime_hash.as_ref(), Body::Binary(bytes)),
                ),
            };
            routes.push(Route {
                path: entry.name.as_str(),
                symbol,
                target,
            });
        }
        Self { routes }
    }

    /// Look up the route registered for a path
    pub fn resolve(&self, path: &str) -> Option<&Route<'a>> {
        self.routes.iter().find(|r| r.path == path)
    }

    /// Route used for requests to `/`
    pub fn default_route(&self) -> Option<&Route<'a>> {
        self.resolve(DEFAULT_PAGE)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Route<'a>> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Render the `registerRoutes` function
    pub fn render(&self) -> String {
        let mut out = String::from("#pragma once\n\n#include \"commands.h\"\n\n// ROUTES\n");
        out.push_str("inline void registerRoutes(WebServer &server)\n{\n");
        if let Some(route) = self.default_route() {
            let _ = writeln!(out, "  server.setDefaultCommand(&{});", route.symbol);
        }
        for route in &self.routes {
            let _ = writeln!(
                out,
                "  server.addCommand(\"{}\", &{});",
                c_string(route.path.as_bytes()),
                route.symbol
            );
        }
        out.push_str("}\n");
        out
    }
}

fn static_target<'a>(
    mimes: &'a MimeRegistry,
    mime_hash: Option<&wgen_core::ContentHash>,
    body: Body<'a>,
) -> RouteTarget<'a> {
    let mime = mime_hash
        .and_then(|hash| mimes.get_by_hash(hash))
        .unwrap_or_default();
    RouteTarget::Static(StaticResponder { mime, body })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::tests::Recorder;
    use crate::handler::RequestKind;
    use wgen_asset::Resource;

    fn build(resources: Vec<Resource>) -> (AssetTable, MimeRegistry) {
        let mut table = AssetTable::new();
        let mut mimes = MimeRegistry::new();
        for r in resources {
            table.add(r, &mut mimes).unwrap();
        }
        (table, mimes)
    }

    #[test]
    fn test_aliases_share_symbol() {
        let (table, mimes) = build(vec![
            Resource::text("index.html", "<h1>hi</h1>", "text/html"),
            Resource::text("index2.html", "<h1>hi</h1>", "text/html"),
        ]);
        let routes = RouteTable::build(&table, &mimes);
        assert_eq!(routes.len(), 2);
        assert_eq!(
            routes.resolve("index.html").unwrap().symbol,
            routes.resolve("index2.html").unwrap().symbol
        );
    }

    #[test]
    fn test_alias_serves_first_mime() {
        let (table, mimes) = build(vec![
            Resource::text("a.html", "same", "text/html"),
            Resource::text("a.txt", "same", "text/plain"),
        ]);
        let routes = RouteTable::build(&table, &mimes);
        let mut conn = Recorder::default();
        match routes.resolve("a.txt").unwrap().target {
            RouteTarget::Static(responder) => responder.respond(&mut conn, RequestKind::Get),
            RouteTarget::Dynamic => panic!("expected a static route"),
        }
        assert_eq!(conn.status, vec![Some("text/html".to_string())]);
        assert_eq!(conn.body, b"same");
    }

    #[test]
    fn test_dynamic_route_symbol() {
        let (table, mimes) = build(vec![Resource::code("toggleLed.cpp", "inline void respond() {}")]);
        let routes = RouteTable::build(&table, &mimes);
        let route = routes.resolve("toggleLed.cpp").unwrap();
        assert!(route.symbol.ends_with("::respond"));
        assert_eq!(route.target, RouteTarget::Dynamic);
        assert!(routes.default_route().is_none());
    }

    #[test]
    fn test_render() {
        let (table, mimes) = build(vec![
            Resource::text("index.html", "<h1>hi</h1>", "text/html"),
            Resource::code("toggle\"Led.cpp", "inline void respond() {}"),
        ]);
        let routes = RouteTable::build(&table, &mimes);
        let text = routes.render();
        let index = table.get("index.html").unwrap().symbol();

        assert!(text.contains(&format!("server.setDefaultCommand(&{index});")));
        assert!(text.contains(&format!("server.addCommand(\"index.html\", &{index});")));
        assert!(text.contains("server.addCommand(\"toggle\\042Led.cpp\", &f_"));
        assert!(text.contains("::respond);"));
    }
}
