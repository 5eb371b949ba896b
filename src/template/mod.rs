//! Template syntax and compilation
//!
//! Raw templates are plain path strings with placeholder occurrences. This
//! module scans those occurrences ([`PlaceholderSyntax`]) and turns a raw
//! template into an anchored [`CompiledMatcher`] with one capture group per
//! placeholder.
//!
//! # Example
//!
//! ```text
//! <team_slug>/<discussion_id>/<slug>/
//!   => ^([a-zA-Z0-9_-]*)/([a-zA-Z0-9_-]*)/([a-zA-Z0-9_-]*)/$
//! ```

mod matcher;
mod placeholder;

pub use matcher::CompiledMatcher;
pub use placeholder::{Placeholder, PlaceholderSyntax, SyntaxError, NAME_PATTERN, VALUE_PATTERN};
