//! Detail route parameters.

use super::catalog::ResourceKind;
use serde::{Deserialize, Serialize};

/// Identifies the title a detail screen shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub kind: ResourceKind,
    pub id: String,
}

impl Route {
    pub fn new(kind: ResourceKind, id: impl Into<String>) -> Self {
        Self { kind, id: id.into() }
    }

    /// Parse a path such as "/movies/42" or "shows/1399".
    ///
    /// The first segment picks the kind ("movies" is a movie, anything else
    /// a show) and the second is the id.
    pub fn parse(path: &str) -> crate::Result<Self> {
        let mut segments = path.trim_start_matches('/').split('/');
        let kind = ResourceKind::from_route_segment(segments.next().unwrap_or_default());
        let id = segments.next().unwrap_or_default().trim();

        if id.is_empty() {
            return Err(crate::Error::InvalidRoute(path.to_string()));
        }

        Ok(Self::new(kind, id))
    }

    pub fn path(&self) -> String {
        format!("/{}/{}", self.kind.route_segment(), self.id)
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path())
    }
}
