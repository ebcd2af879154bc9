//! Project build command

use crate::commands::generate::{generate_into, warn_plaintext_credentials};
use crate::config::ProjectConfig;
use anyhow::Result;
use std::fs;
use std::path::Path;

pub fn run(target: &str) -> Result<()> {
    let config = ProjectConfig::load(Path::new(target))?;
    tracing::debug!(
        input = %config.input_path.display(),
        output = %config.output_path.display(),
        "project config loaded"
    );
    let sketch = config.sketch_settings()?;
    warn_plaintext_credentials(&sketch, false);

    fs::create_dir_all(&config.output_path)?;
    let main_dir = generate_into(
        &config.input_path,
        config.template_path.as_deref(),
        &config.output_path,
        &sketch,
        true,
    )?;

    println!("Built project {}", config.root.display());
    println!("  sources: {}", main_dir.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::init;
    use wgen_emit::{COMMANDS_FILE, ROUTES_FILE, SKETCH_FILE};

    #[test]
    fn test_build_initialized_project() {
        let dir = std::env::temp_dir().join(format!("wgen_build_test_{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        let target = dir.to_string_lossy().to_string();

        init::run(&target, false).unwrap();
        run(&target).unwrap();
        // Rebuilding replaces the previous output.
        run(&target).unwrap();

        let main_dir = dir.join("output/main");
        let commands = fs::read_to_string(main_dir.join(COMMANDS_FILE)).unwrap();
        assert!(commands.contains("namespace f_"));
        let routes = fs::read_to_string(main_dir.join(ROUTES_FILE)).unwrap();
        assert!(routes.contains("server.addCommand(\"toggleLed.cpp\""));
        assert!(routes.contains("server.setDefaultCommand("));
        let sketch = fs::read_to_string(main_dir.join(SKETCH_FILE)).unwrap();
        assert!(sketch.contains("WebServer webserver(\"\", 80);"));

        fs::remove_dir_all(&dir).ok();
    }
}
