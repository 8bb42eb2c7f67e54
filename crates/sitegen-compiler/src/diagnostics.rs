//! Non-fatal compile diagnostics

use serde::Serialize;
use std::fmt::{self, Display, Formatter};

/// Something the compiler noticed and worked around
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Diagnostic {
    /// Section dropped before naming because its type is not renderable
    UnsupportedSection {
        /// Route of the page the section was on (`/`, `/about`)
        route: String,
        /// Section `type` tag as found
        type_tag: String,
        /// Why it was dropped
        reason: String,
    },
    /// A later page produced a different section under an existing file path
    NamingCollision {
        /// Contested file path
        path: String,
        /// Route whose section owns the file (`/`, `/about`)
        first_route: String,
        /// Route whose section was not emitted, in the same form
        later_route: String,
    },
    /// A secondary page could not be emitted
    PageSkipped {
        /// Route as written in the config
        path: String,
        /// Why it was skipped
        reason: String,
    },
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedSection {
                route,
                type_tag,
                reason,
            } => write!(f, "{route}: dropped section '{type_tag}': {reason}"),
            Self::NamingCollision {
                path,
                first_route,
                later_route,
            } => write!(
                f,
                "{later_route}: {path} already written by {first_route} for a different section; reusing it"
            ),
            Self::PageSkipped { path, reason } => write!(f, "page '{path}' skipped: {reason}"),
        }
    }
}
