//! Project initialization command

use crate::config::{ConfigFile, PROJECT_FILE};
use anyhow::Result;
use std::fs;
use std::path::Path;
use wgen_emit::DEFAULT_SCAFFOLD;

const DEMO_INDEX: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>wgen</title>
</head>
<body>
  <h1>Hello from the board</h1>
  <button onclick="fetch('toggleLed.cpp')">Toggle LED</button>
</body>
</html>
"#;

const DEMO_TOGGLE: &str = r#"inline void respond(WebServer &server, WebServer::ConnectionType type, char *url_tail, bool tail_complete)
{
	if (type == WebServer::POST)
	{
		server.httpFail();
		return;
	}

	server.httpSuccess();
	if (type == WebServer::HEAD)
		return;

	pinMode(LED_BUILTIN, OUTPUT);
	digitalWrite(LED_BUILTIN, !digitalRead(LED_BUILTIN));
	server.print("OK");
}
"#;

pub fn run(target: &str, force: bool) -> Result<()> {
    let project_dir = Path::new(target);
    if !project_dir.is_dir() {
        anyhow::bail!("Path '{}' is invalid or does not exist", target);
    }

    // Check everything up front so a refused init leaves no half-made project.
    let blockers = [PROJECT_FILE, "input", "template", "output"];
    for name in blockers {
        let path = project_dir.join(name);
        if !path.exists() {
            continue;
        }
        if !force {
            anyhow::bail!("{} exists. Use --force to replace it", path.display());
        }
        if path.is_dir() {
            fs::remove_dir_all(&path)?;
        } else {
            fs::remove_file(&path)?;
        }
    }

    fs::write(
        project_dir.join(PROJECT_FILE),
        toml::to_string(&ConfigFile::project_default())?,
    )?;

    fs::create_dir_all(project_dir.join("input"))?;
    fs::write(project_dir.join("input/index.html"), DEMO_INDEX)?;
    fs::write(project_dir.join("input/toggleLed.cpp"), DEMO_TOGGLE)?;

    fs::create_dir_all(project_dir.join("template"))?;
    fs::write(project_dir.join("template/commands.h"), DEFAULT_SCAFFOLD)?;

    fs::create_dir_all(project_dir.join("output"))?;

    println!("Created wgen project in {}", project_dir.display());
    println!();
    println!("Project structure:");
    println!("  {}", PROJECT_FILE);
    println!("  input/");
    println!("  ├── index.html");
    println!("  └── toggleLed.cpp");
    println!("  template/");
    println!("  └── commands.h");
    println!("  output/");
    println!();
    println!("Set the [sketch] ssid in {} and WGEN_WIFI_PASSWORD, then", PROJECT_FILE);
    println!("use 'wgen build' to build your project.");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProjectConfig;

    #[test]
    fn test_init_creates_loadable_project() {
        let dir = std::env::temp_dir().join(format!("wgen_init_test_{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        let target = dir.to_string_lossy().to_string();

        run(&target, false).unwrap();
        assert!(dir.join("input/index.html").exists());
        assert!(dir.join("template/commands.h").exists());

        let config = ProjectConfig::load_from_file(&dir.join(PROJECT_FILE)).unwrap();
        assert_eq!(config.input_path, dir.join("input"));

        // Refuses to clobber without --force
        assert!(run(&target, false).is_err());
        assert!(run(&target, true).is_ok());

        fs::remove_dir_all(&dir).ok();
    }
}
