use crate::constants::{EDIT_SEGMENT, NEW_SEGMENT};

/// The two lifecycle states of a resource form page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Creation,
    Edition,
}

/// The parts of the current location a form page cares about.
///
/// `/entries/7/edit` has base path `entries` and segments `["7", "edit"]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSnapshot {
    base_path: String,
    segments: Vec<String>,
}

impl RouteSnapshot {
    pub fn new(base_path: impl Into<String>, segments: Vec<String>) -> Self {
        Self {
            base_path: base_path.into(),
            segments,
        }
    }

    /// Splits a location path. Query strings and fragments are dropped.
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let mut parts = path.split('/').filter(|p| !p.is_empty()).map(str::to_string);
        let base_path = parts.next().unwrap_or_default();
        Self {
            base_path,
            segments: parts.collect(),
        }
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// `new` selects creation; any other first segment is an id.
    pub fn mode(&self) -> FormMode {
        match self.segments.first() {
            Some(segment) if segment == NEW_SEGMENT => FormMode::Creation,
            _ => FormMode::Edition,
        }
    }

    /// The `id` parameter, when it is a positive integer.
    pub fn id(&self) -> Option<i64> {
        self.segments
            .first()
            .and_then(|s| s.parse::<i64>().ok())
            .filter(|id| *id > 0)
    }
}

pub fn list_path(base_path: &str) -> String {
    format!("/{}", base_path)
}

pub fn new_path(base_path: &str) -> String {
    format!("/{}/{}", base_path, NEW_SEGMENT)
}

pub fn edit_path(base_path: &str, id: i64) -> String {
    format!("/{}/{}/{}", base_path, id, EDIT_SEGMENT)
}
