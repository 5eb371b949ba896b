//! Registry configuration and TOML route files
//!
//! A route file carries optional settings plus the named templates, in the
//! order they should be tried when resolving:
//!
//! ```toml
//! [settings]
//! syntax = "angle"        # "angle", "colon" or a custom regex
//! trailing_slash = false
//! strict = true
//!
//! [routes]
//! "discussion:detail" = "<team_slug>/<discussion_id>/<slug>/"
//! search = "search/"
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::error::RegistryError;
use crate::registry::TemplateRegistry;
use crate::template::{PlaceholderSyntax, SyntaxError};

/// Construction-time options for a [`TemplateRegistry`]
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Placeholder delimiter syntax
    pub syntax: PlaceholderSyntax,
    /// Accept paths with or without a trailing slash
    pub trailing_slash: bool,
    /// Reject keyword arguments that name no placeholder
    pub strict: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            syntax: PlaceholderSyntax::angle(),
            trailing_slash: false,
            strict: true,
        }
    }
}

impl RegistryConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the placeholder syntax
    pub fn with_syntax(mut self, syntax: PlaceholderSyntax) -> Self {
        self.syntax = syntax;
        self
    }

    /// Enable or disable trailing-slash tolerance
    pub fn with_trailing_slash(mut self, trailing_slash: bool) -> Self {
        self.trailing_slash = trailing_slash;
        self
    }

    /// Enable or disable rejection of unknown keyword arguments
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

/// Errors that can occur when loading a route file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read route file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse route file TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Route '{name}' must be a string template")]
    NonStringRoute { name: String },
    #[error("Invalid placeholder syntax: {0}")]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// The `[settings]` table of a route file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// `"angle"`, `"colon"` or a custom pattern
    pub syntax: Option<String>,
    pub trailing_slash: bool,
    pub strict: Option<bool>,
}

impl Settings {
    /// Build the registry configuration these settings describe
    pub fn to_config(&self) -> Result<RegistryConfig, SyntaxError> {
        let syntax = match self.syntax.as_deref() {
            None | Some("angle") => PlaceholderSyntax::angle(),
            Some("colon") => PlaceholderSyntax::colon(),
            Some(pattern) => PlaceholderSyntax::custom(pattern)?,
        };
        Ok(RegistryConfig::new()
            .with_syntax(syntax)
            .with_trailing_slash(self.trailing_slash)
            .with_strict(self.strict.unwrap_or(true)))
    }
}

/// TOML structure for deserializing route files
#[derive(Deserialize)]
struct TomlRouteFile {
    #[serde(default)]
    settings: Settings,
    #[serde(default)]
    routes: toml::Table,
}

/// A parsed route file
#[derive(Debug, Clone, Default)]
pub struct RouteFile {
    pub settings: Settings,
    /// Named templates in file order
    pub routes: Vec<(String, String)>,
}

impl RouteFile {
    /// Load a route file from disk
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a route file from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlRouteFile = toml::from_str(content)?;

        let routes = parsed
            .routes
            .into_iter()
            .map(|(name, value)| match value {
                toml::Value::String(template) => Ok((name, template)),
                _ => Err(ConfigError::NonStringRoute { name }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(RouteFile {
            settings: parsed.settings,
            routes,
        })
    }

    /// Build and load a registry from this file
    pub fn into_registry(self) -> Result<TemplateRegistry, ConfigError> {
        let config = self.settings.to_config()?;
        let mut registry = TemplateRegistry::with_config(config);
        registry.load(self.routes)?;
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = RegistryConfig::default();
        assert_eq!(config.syntax.as_str(), PlaceholderSyntax::angle().as_str());
        assert!(!config.trailing_slash);
        assert!(config.strict);
    }

    #[test]
    fn test_builder_pattern() {
        let config = RegistryConfig::new()
            .with_syntax(PlaceholderSyntax::colon())
            .with_trailing_slash(true)
            .with_strict(false);
        assert_eq!(config.syntax.as_str(), PlaceholderSyntax::colon().as_str());
        assert!(config.trailing_slash);
        assert!(!config.strict);
    }

    #[test]
    fn test_route_file_keeps_file_order() {
        let file = RouteFile::from_str(
            r#"
            [routes]
            "team:detail" = "<slug>/"
            search = "search/"
            "discussion:detail" = "<team_slug>/<discussion_id>/<slug>/"
            "#,
        )
        .unwrap();

        let names: Vec<_> = file.routes.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["team:detail", "search", "discussion:detail"]);
    }

    #[test]
    fn test_settings_defaults_when_absent() {
        let file = RouteFile::from_str("[routes]\nsearch = \"search/\"\n").unwrap();
        let config = file.settings.to_config().unwrap();
        assert!(!config.trailing_slash);
        assert!(config.strict);
    }

    #[test]
    fn test_settings_custom_syntax() {
        let settings = Settings {
            syntax: Some(r"\{([a-z_]+)\}".to_string()),
            ..Settings::default()
        };
        let config = settings.to_config().unwrap();
        assert_eq!(config.syntax.scan("{org}/{repo}").count(), 2);
    }

    #[test]
    fn test_non_string_route_is_rejected() {
        let result = RouteFile::from_str("[routes]\nsearch = 3\n");
        assert!(matches!(
            result,
            Err(ConfigError::NonStringRoute { name }) if name == "search"
        ));
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        let result = RouteFile::from_str("[routes\n");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }
}
