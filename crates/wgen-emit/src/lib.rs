//! wgen Emit - Source generation for embedded web servers
//!
//! Renders an [`AssetTable`](wgen_asset::AssetTable) and its
//! [`MimeRegistry`](wgen_asset::MimeRegistry) into handler source spliced
//! into a scaffold, a route table registering every handler, and the sketch
//! that connects to the network and calls it.

mod emitter;
pub mod escape;
mod handler;
mod routes;
mod run;
mod scaffold;
mod sketch;

pub use emitter::{CodeEmitter, Fragments};
pub use handler::{Body, Connection, RequestKind, StaticResponder};
pub use routes::{Route, RouteTable, RouteTarget};
pub use run::{generate, GeneratedSources, GenerationRun, COMMANDS_FILE, ROUTES_FILE};
pub use scaffold::{Marker, Scaffold, DEFAULT_SCAFFOLD};
pub use sketch::{ConnectionMode, SketchSettings, SKETCH_FILE};
