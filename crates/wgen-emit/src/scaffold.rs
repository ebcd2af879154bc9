//! Scaffold template with three literal insertion markers

use std::fmt;
use wgen_core::{Result, WgenError};

/// Built-in scaffold carrying the static responder helpers
pub const DEFAULT_SCAFFOLD: &str = include_str!("../templates/commands.h");

/// Insertion points a scaffold must contain exactly once each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    MimeTypes,
    StaticPages,
    DynamicPages,
}

impl Marker {
    pub const ALL: [Marker; 3] = [Marker::MimeTypes, Marker::StaticPages, Marker::DynamicPages];

    /// Literal text of the marker as it appears in a scaffold
    pub fn token(self) -> &'static str {
        match self {
            Marker::MimeTypes => "@@WGEN_MIME_TYPES@@",
            Marker::StaticPages => "@@WGEN_STATIC_PAGES@@",
            Marker::DynamicPages => "@@WGEN_DYNAMIC_PAGES@@",
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// A validated scaffold.
///
/// Construction fails unless every marker occurs exactly once, so filling
/// a `Scaffold` can never silently drop a section.
#[derive(Debug, Clone)]
pub struct Scaffold {
    text: String,
    /// Marker positions, sorted by offset
    slots: Vec<(usize, Marker)>,
}

impl Scaffold {
    /// Validate scaffold text
    pub fn parse(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        let mut slots = Vec::with_capacity(Marker::ALL.len());

        for marker in Marker::ALL {
            let mut found = text.match_indices(marker.token()).map(|(at, _)| at);
            let at = found.next().ok_or_else(|| malformed(marker, "is missing"))?;
            if found.next().is_some() {
                return Err(malformed(marker, "appears more than once"));
            }
            slots.push((at, marker));
        }

        slots.sort_by_key(|(at, _)| *at);
        // Markers share their `@@` delimiters, so two can match on one span.
        for pair in slots.windows(2) {
            let (prev_at, prev) = pair[0];
            let (at, marker) = pair[1];
            if at < prev_at + prev.token().len() {
                return Err(malformed(marker, "overlaps another marker"));
            }
        }
        Ok(Self { text, slots })
    }

    /// The built-in scaffold
    pub fn builtin() -> Self {
        Self {
            text: DEFAULT_SCAFFOLD.to_string(),
            slots: Self::locate(DEFAULT_SCAFFOLD),
        }
    }

    fn locate(text: &str) -> Vec<(usize, Marker)> {
        let mut slots: Vec<(usize, Marker)> = Marker::ALL
            .iter()
            .filter_map(|m| text.find(m.token()).map(|at| (at, *m)))
            .collect();
        slots.sort_by_key(|(at, _)| *at);
        slots
    }

    /// Replace each marker with the fragment `fill` returns for it
    pub fn fill<F>(&self, mut fill: F) -> String
    where
        F: FnMut(Marker) -> String,
    {
        let mut out = String::with_capacity(self.text.len());
        let mut cursor = 0;
        for &(at, marker) in &self.slots {
            out.push_str(&self.text[cursor..at]);
            out.push_str(&fill(marker));
            cursor = at + marker.token().len();
        }
        out.push_str(&self.text[cursor..]);
        out
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

fn malformed(marker: Marker, reason: &str) -> WgenError {
    WgenError::MalformedScaffold {
        marker: marker.token().to_string(),
        reason: reason.to_string(),
    }
}
