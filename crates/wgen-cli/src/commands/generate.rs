//! Source generation command

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use wgen_asset::load_directory;
use wgen_emit::{
    generate, ConnectionMode, SketchSettings, COMMANDS_FILE, DEFAULT_SCAFFOLD, ROUTES_FILE,
    SKETCH_FILE,
};

/// Folder below the output path that receives generated sources
pub const MAIN_DIR: &str = "main";

pub struct GenerateArgs {
    pub input: String,
    pub template: Option<String>,
    pub output: String,
    pub force: bool,
    pub ssid: String,
    pub password: Option<String>,
    pub port: u16,
    pub mode: ConnectionMode,
    pub quiet: bool,
}

pub fn run(args: GenerateArgs) -> Result<()> {
    let sketch = SketchSettings {
        mode: args.mode,
        ssid: args.ssid,
        password: args.password.unwrap_or_default(),
        port: args.port,
    };
    warn_plaintext_credentials(&sketch, args.quiet);

    let written = generate_into(
        Path::new(&args.input),
        args.template.as_deref().map(Path::new),
        Path::new(&args.output),
        &sketch,
        args.force,
    )?;
    print_summary(&written);
    Ok(())
}

/// Load `input`, render it into the scaffold and write `<output>/main`.
///
/// Nothing is written or deleted until generation has succeeded.
pub fn generate_into(
    input: &Path,
    template: Option<&Path>,
    output: &Path,
    sketch: &SketchSettings,
    replace_existing: bool,
) -> Result<PathBuf> {
    if !input.is_dir() {
        anyhow::bail!("Invalid input path: {}", input.display());
    }
    if !output.is_dir() {
        anyhow::bail!("Invalid output path: {}", output.display());
    }

    let main_dir = output.join(MAIN_DIR);
    if main_dir.exists() && !replace_existing {
        anyhow::bail!(
            "Output folder {} exists. Use --force to replace it",
            main_dir.display()
        );
    }

    let scaffold = match template {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read template {}", path.display()))?,
        None => DEFAULT_SCAFFOLD.to_string(),
    };

    let resources = load_directory(input)?;
    println!("Processing {} input files...", resources.len());
    let sources = generate(resources, &scaffold, sketch)?;

    if main_dir.exists() {
        fs::remove_dir_all(&main_dir)?;
    }
    sources.write_to(&main_dir)?;
    Ok(main_dir)
}

/// Credentials end up in `main.ino` as plain text
pub fn warn_plaintext_credentials(sketch: &SketchSettings, quiet: bool) {
    if !quiet && !(sketch.ssid.is_empty() && sketch.password.is_empty()) {
        tracing::warn!("SSID and password will be saved as plain text in the output");
    }
}

fn print_summary(main_dir: &Path) {
    println!("Generated sources in {}", main_dir.display());
    println!("  {}", main_dir.join(COMMANDS_FILE).display());
    println!("  {}", main_dir.join(ROUTES_FILE).display());
    println!("  {}", main_dir.join(SKETCH_FILE).display());
}
