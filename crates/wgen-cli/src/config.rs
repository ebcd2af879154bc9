//! Layered project configuration
//!
//! Config is loaded with three layers of precedence (highest wins):
//! 1. Environment variables: `WGEN_INPUT_PATH`, `WGEN_TEMPLATE_PATH`, `WGEN_OUTPUT_PATH`,
//!    `WGEN_SSID`, `WGEN_WIFI_PASSWORD`
//! 2. Project file: `<project>/project.wgen`
//! 3. Global: `~/.wgen/config.toml`

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use wgen_core::{Result, WgenError};
use wgen_emit::SketchSettings;

/// Name of the project file at the project root
pub const PROJECT_FILE: &str = "project.wgen";

const ENV_INPUT: &str = "WGEN_INPUT_PATH";
const ENV_TEMPLATE: &str = "WGEN_TEMPLATE_PATH";
const ENV_OUTPUT: &str = "WGEN_OUTPUT_PATH";
const ENV_SSID: &str = "WGEN_SSID";
pub const ENV_PASSWORD: &str = "WGEN_WIFI_PASSWORD";

/// `[project]` table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_path: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_path: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_path: Option<PathBuf>,
}

/// `[sketch]` table: network settings for the generated sketch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SketchSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssid: Option<String>,
    /// Usually supplied through `WGEN_WIFI_PASSWORD` rather than the file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

/// Top-level config file structure, shared by global and project files
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub project: ProjectSection,
    #[serde(default)]
    pub sketch: SketchSection,
}

impl ConfigFile {
    /// Contents written by `wgen init`
    pub fn project_default() -> Self {
        Self {
            project: ProjectSection {
                input_path: Some(PathBuf::from("input")),
                template_path: Some(PathBuf::from("template/commands.h")),
                output_path: Some(PathBuf::from("output")),
            },
            sketch: SketchSection {
                mode: Some("wifinina".to_string()),
                ssid: Some(String::new()),
                password: None,
                port: Some(80),
            },
        }
    }
}

/// Resolved project configuration; every path is joined onto the project root
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectConfig {
    pub root: PathBuf,
    pub input_path: PathBuf,
    /// Built-in scaffold when absent
    pub template_path: Option<PathBuf>,
    pub output_path: PathBuf,
    pub sketch: SketchSection,
}

impl ProjectConfig {
    /// Load config for the project at `root`: global < project < env vars
    pub fn load(root: &Path) -> Result<Self> {
        let project_path = root.join(PROJECT_FILE);
        if !project_path.exists() {
            return Err(WgenError::LoadError(format!(
                "No {} found in {}. Is this a wgen project?",
                PROJECT_FILE,
                root.display()
            )));
        }

        let mut config = ConfigFile::default();

        // Layer 1: Global config (~/.wgen/config.toml)
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global = Self::load_file(&global_path)?;
                Self::merge_into(&mut config, global);
            }
        }

        // Layer 2: Project file
        let local = Self::load_file(&project_path)?;
        Self::merge_into(&mut config, local);

        // Layer 3: Environment variable overrides
        Self::apply_env_overrides(&mut config);

        Ok(Self::resolve(root, config))
    }

    /// Load config from a specific project file only (for testing)
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let mut config = Self::load_file(path)?;
        Self::apply_env_overrides(&mut config);
        let root = path.parent().unwrap_or_else(|| Path::new("."));
        Ok(Self::resolve(root, config))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".wgen").join("config.toml"))
    }

    fn load_file(path: &Path) -> Result<ConfigFile> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            WgenError::TomlParseError(format!("Failed to parse config {}: {}", path.display(), e))
        })
    }

    fn merge_into(base: &mut ConfigFile, overlay: ConfigFile) {
        if overlay.project.input_path.is_some() {
            base.project.input_path = overlay.project.input_path;
        }
        if overlay.project.template_path.is_some() {
            base.project.template_path = overlay.project.template_path;
        }
        if overlay.project.output_path.is_some() {
            base.project.output_path = overlay.project.output_path;
        }
        if overlay.sketch.mode.is_some() {
            base.sketch.mode = overlay.sketch.mode;
        }
        if overlay.sketch.ssid.is_some() {
            base.sketch.ssid = overlay.sketch.ssid;
        }
        if overlay.sketch.password.is_some() {
            base.sketch.password = overlay.sketch.password;
        }
        if overlay.sketch.port.is_some() {
            base.sketch.port = overlay.sketch.port;
        }
    }

    fn apply_env_overrides(config: &mut ConfigFile) {
        Self::apply_overrides(config, |key| std::env::var(key).ok());
    }

    fn apply_overrides<F>(config: &mut ConfigFile, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(ENV_INPUT) {
            config.project.input_path = Some(PathBuf::from(path));
        }
        if let Some(path) = lookup(ENV_TEMPLATE) {
            config.project.template_path = Some(PathBuf::from(path));
        }
        if let Some(path) = lookup(ENV_OUTPUT) {
            config.project.output_path = Some(PathBuf::from(path));
        }
        if let Some(ssid) = lookup(ENV_SSID) {
            config.sketch.ssid = Some(ssid);
        }
        if let Some(password) = lookup(ENV_PASSWORD) {
            config.sketch.password = Some(password);
        }
    }

    fn resolve(root: &Path, config: ConfigFile) -> Self {
        let ConfigFile { project, sketch } = config;
        Self {
            root: root.to_path_buf(),
            input_path: root.join(project.input_path.unwrap_or_else(|| PathBuf::from("input"))),
            template_path: project.template_path.map(|p| root.join(p)),
            output_path: root.join(project.output_path.unwrap_or_else(|| PathBuf::from("output"))),
            sketch,
        }
    }

    /// Sketch settings with defaults filled in; fails on an unknown mode
    pub fn sketch_settings(&self) -> Result<SketchSettings> {
        let mut settings = SketchSettings::default();
        if let Some(mode) = &self.sketch.mode {
            settings.mode = mode.parse()?;
        }
        if let Some(ssid) = &self.sketch.ssid {
            settings.ssid = ssid.clone();
        }
        if let Some(password) = &self.sketch.password {
            settings.password = password.clone();
        }
        if let Some(port) = self.sketch.port {
            settings.port = port;
        }
        Ok(settings)
    }
}
