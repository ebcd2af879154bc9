//! Directory loader producing resources from an input folder

use crate::types::Resource;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};
use walkdir::WalkDir;
use wgen_core::{Result, WgenError};

/// MIME type used when none can be guessed from the file name
pub const DEFAULT_MIME: &str = "application/octet-stream";

/// Files with this extension are compiled in as dynamic handler code
pub const DYNAMIC_EXTENSION: &str = "cpp";

/// Load every file under `root` as a resource.
///
/// Names are `/`-separated paths relative to `root`, sorted so the same
/// directory always yields the same order.
pub fn load_directory<P: AsRef<Path>>(root: P) -> Result<Vec<Resource>> {
    let root = root.as_ref();
    if !root.is_dir() {
        return Err(WgenError::LoadError(format!(
            "Input path {} is not a directory",
            root.display()
        )));
    }

    let mut resources = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| WgenError::LoadError(e.to_string()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let name = relative_name(root, path)?;
        let data = fs::read(path)?;
        resources.push(to_resource(name, data));
    }

    resources.sort_by(|a, b| a.name.cmp(&b.name));
    debug!(count = resources.len(), root = %root.display(), "input loaded");
    Ok(resources)
}

fn relative_name(root: &Path, path: &Path) -> Result<String> {
    let relative = path
        .strip_prefix(root)
        .map_err(|e| WgenError::LoadError(format!("{}: {}", path.display(), e)))?;
    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Ok(parts.join("/"))
}

fn to_resource(name: String, data: Vec<u8>) -> Resource {
    let is_dynamic = Path::new(&name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case(DYNAMIC_EXTENSION))
        .unwrap_or(false);

    let data = match String::from_utf8(data) {
        Ok(code) if is_dynamic => return Resource::code(name, code),
        Ok(text) if !text.contains('\0') => {
            let mime = guess_mime(&name);
            return Resource::text(name, text, mime);
        }
        Ok(text) => text.into_bytes(),
        Err(e) => e.into_bytes(),
    };

    let mime = guess_mime(&name);
    Resource::binary(name, data, mime)
}

fn guess_mime(name: &str) -> String {
    match mime_guess::from_path(name).first() {
        Some(mime) => mime.essence_str().to_string(),
        None => {
            warn!(file = name, fallback = DEFAULT_MIME, "unknown MIME type");
            DEFAULT_MIME.to_string()
        }
    }
}
