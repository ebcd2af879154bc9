//! A single generation run

use crate::emitter::CodeEmitter;
use crate::routes::RouteTable;
use crate::scaffold::Scaffold;
use crate::sketch::{SketchSettings, SKETCH_FILE};
use std::fs;
use std::path::Path;
use tracing::info;
use wgen_asset::{AssetTable, MimeRegistry, Resource};
use wgen_core::Result;

/// File name of the scaffolded handler source
pub const COMMANDS_FILE: &str = "commands.h";

/// File name of the rendered route table
pub const ROUTES_FILE: &str = "routes.h";

/// State owned by one run. Nothing is shared between runs.
#[derive(Debug, Default)]
pub struct GenerationRun {
    table: AssetTable,
    mimes: MimeRegistry,
}

impl GenerationRun {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resource; any error is fatal to the run
    pub fn add(&mut self, resource: Resource) -> Result<()> {
        self.table.add(resource, &mut self.mimes)?;
        Ok(())
    }

    pub fn table(&self) -> &AssetTable {
        &self.table
    }

    pub fn mimes(&self) -> &MimeRegistry {
        &self.mimes
    }

    /// Render handler source, route table and sketch
    pub fn render(&self, scaffold: &Scaffold, sketch: &SketchSettings) -> GeneratedSources {
        let emitter = CodeEmitter::new(&self.table, &self.mimes);
        let routes = RouteTable::build(&self.table, &self.mimes);
        GeneratedSources {
            commands: emitter.render(scaffold),
            routes: routes.render(),
            sketch: sketch.render(),
        }
    }
}

/// Output of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSources {
    pub commands: String,
    pub routes: String,
    pub sketch: String,
}

impl GeneratedSources {
    /// Write `commands.h`, `routes.h` and `main.ino` into `dir`, creating it if needed
    pub fn write_to<P: AsRef<Path>>(&self, dir: P) -> Result<()> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        fs::write(dir.join(COMMANDS_FILE), &self.commands)?;
        fs::write(dir.join(ROUTES_FILE), &self.routes)?;
        fs::write(dir.join(SKETCH_FILE), &self.sketch)?;
        Ok(())
    }
}

/// Generate sources for `resources` spliced into `scaffold`.
///
/// The scaffold is validated before any resource is looked at. The first
/// error aborts the run and no output is produced.
pub fn generate<I>(resources: I, scaffold: &str, sketch: &SketchSettings) -> Result<GeneratedSources>
where
    I: IntoIterator<Item = Resource>,
{
    let scaffold = Scaffold::parse(scaffold)?;
    let mut run = GenerationRun::new();
    for resource in resources {
        run.add(resource)?;
    }

    let sources = run.render(&scaffold, sketch);
    info!(
        resources = run.table().len(),
        mime_types = run.mimes().len(),
        port = sketch.port,
        "generation complete"
    );
    Ok(sources)
}
