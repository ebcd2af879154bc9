//! Sketch entry point that connects to the network and serves the routes

use crate::escape::c_string;
use std::fmt;
use std::str::FromStr;
use wgen_core::WgenError;

/// File name of the rendered sketch
pub const SKETCH_FILE: &str = "main.ino";

const SKETCH_TEMPLATE: &str = include_str!("../templates/main.ino");

/// Network library the sketch is written against
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConnectionMode {
    #[default]
    WifiNina,
}

impl ConnectionMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ConnectionMode::WifiNina => "wifinina",
        }
    }
}

impl fmt::Display for ConnectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConnectionMode {
    type Err = WgenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("wifinina") {
            Ok(ConnectionMode::WifiNina)
        } else {
            Err(WgenError::UnsupportedMode(s.to_string()))
        }
    }
}

/// Network settings baked into the sketch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SketchSettings {
    pub mode: ConnectionMode,
    pub ssid: String,
    /// Stored as plain text in the generated sketch
    pub password: String,
    pub port: u16,
}

impl Default for SketchSettings {
    fn default() -> Self {
        Self {
            mode: ConnectionMode::default(),
            ssid: String::new(),
            password: String::new(),
            port: 80,
        }
    }
}

impl SketchSettings {
    /// Render `main.ino`, which registers every route on startup
    pub fn render(&self) -> String {
        SKETCH_TEMPLATE
            .replace("@@WGEN_MODE@@", self.mode.as_str())
            .replace("@@WGEN_SSID@@", &c_string(self.ssid.as_bytes()))
            .replace("@@WGEN_PASS@@", &c_string(self.password.as_bytes()))
            .replace("@@WGEN_PORT@@", &self.port.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parsing() {
        assert_eq!("wifinina".parse::<ConnectionMode>().unwrap(), ConnectionMode::WifiNina);
        assert_eq!("WiFiNINA".parse::<ConnectionMode>().unwrap(), ConnectionMode::WifiNina);
        assert!(matches!(
            "ethernet".parse::<ConnectionMode>(),
            Err(WgenError::UnsupportedMode(ref m)) if m == "ethernet"
        ));
    }

    #[test]
    fn test_render_fills_settings() {
        let settings = SketchSettings {
            ssid: "home \"net\"".to_string(),
            password: "secret".to_string(),
            port: 8080,
            ..Default::default()
        };
        let sketch = settings.render();
        assert!(sketch.contains("static const char ssid[] = \"home \\042net\\042\";"));
        assert!(sketch.contains("static const char pass[] = \"secret\";"));
        assert!(sketch.contains("WebServer webserver(\"\", 8080);"));
        assert!(sketch.contains("// Connection mode: wifinina"));
        assert!(sketch.contains("registerRoutes(webserver);"));
        assert!(!sketch.contains("@@WGEN_"));
    }

    #[test]
    fn test_default_port() {
        assert!(SketchSettings::default()
            .render()
            .contains("WebServer webserver(\"\", 80);"));
    }
}
