//! url-crossing - named URL templates in both directions
//!
//! A [`TemplateRegistry`] holds named path templates such as
//! `<team_slug>/<discussion_id>/<slug>/`. It generates concrete paths from a
//! template name plus values ([`TemplateRegistry::get`]) and resolves a
//! concrete path back to the template name and the placeholder values
//! ([`TemplateRegistry::resolve`]).
//!
//! # Example
//!
//! ```rust
//! use url_crossing::{args, TemplateRegistry};
//!
//! let mut urls = TemplateRegistry::new();
//! urls.load([
//!     ("discussion:detail", "<team_slug>/<discussion_id>/<slug>/"),
//!     ("api:lastread", "/api/v2/discussion/<discussion_id>/read/"),
//! ])
//! .unwrap();
//!
//! let path = urls
//!     .get("discussion:detail", args! { "team_slug" => "loop", "discussion_id" => 3, "slug" => "discussion" })
//!     .unwrap();
//! assert_eq!(path, "loop/3/discussion/");
//! assert_eq!(urls.get("api:lastread", args![16468]).unwrap(), "/api/v2/discussion/16468/read/");
//!
//! let resolved = urls.resolve(&path).unwrap();
//! assert_eq!(resolved.name, "discussion:detail");
//! assert_eq!(resolved.get("slug"), Some("discussion"));
//! ```

pub mod args;
pub mod config;
pub mod error;
pub mod registry;
pub mod template;

pub use args::Args;
pub use config::{ConfigError, RegistryConfig, RouteFile, Settings};
pub use error::RegistryError;
pub use registry::{Resolved, TemplateRegistry};
pub use template::{CompiledMatcher, Placeholder, PlaceholderSyntax, SyntaxError};
