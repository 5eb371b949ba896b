//! Placeholder syntax and scanning
//!
//! A [`PlaceholderSyntax`] wraps the pattern that recognizes placeholder
//! occurrences in a raw template (`<slug>` by default, `:slug` for the colon
//! syntax). Scanning is a pure function: every call to
//! [`PlaceholderSyntax::scan`] starts from the beginning of the input and
//! carries no position over to the next call.

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Identifier accepted as a placeholder name
pub const NAME_PATTERN: &str = "[a-zA-Z0-9_-]+";

/// Capturing group substituted for every placeholder in a compiled matcher
pub const VALUE_PATTERN: &str = "([a-zA-Z0-9_-]*)";

static ANGLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<([a-zA-Z0-9_-]+)>").unwrap());
static COLON: Lazy<Regex> = Lazy::new(|| Regex::new(r":([a-zA-Z0-9_-]+)").unwrap());

/// Errors raised when building a custom placeholder syntax
#[derive(Debug, Error)]
pub enum SyntaxError {
    /// The pattern is not a valid regular expression
    #[error("invalid placeholder pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// The pattern has no group capturing the placeholder name
    #[error("placeholder pattern '{pattern}' has no capture group for the name")]
    NoNameGroup { pattern: String },
}

/// One placeholder occurrence inside a raw template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    /// Identifier between the delimiters, e.g. `slug`
    pub name: String,
    /// Full occurrence including delimiters, e.g. `<slug>`
    pub token: String,
    /// Byte range of the token in the raw template
    pub span: Range<usize>,
}

/// Pattern recognizing placeholder occurrences
#[derive(Debug, Clone)]
pub struct PlaceholderSyntax {
    regex: Regex,
    name_group: usize,
}

impl Default for PlaceholderSyntax {
    fn default() -> Self {
        Self::angle()
    }
}

impl PlaceholderSyntax {
    /// `<name>` placeholders
    pub fn angle() -> Self {
        Self::builtin(&ANGLE)
    }

    /// `:name` placeholders
    pub fn colon() -> Self {
        Self::builtin(&COLON)
    }

    fn builtin(regex: &Regex) -> Self {
        Self {
            regex: regex.clone(),
            name_group: 1,
        }
    }

    /// Build a syntax from a custom pattern
    ///
    /// The name is taken from a group called `name` when the pattern has one,
    /// otherwise from the first capture group.
    ///
    /// ```
    /// use url_crossing::PlaceholderSyntax;
    ///
    /// let syntax = PlaceholderSyntax::custom(r"\{(?P<name>[a-z_]+)\}").unwrap();
    /// let names: Vec<_> = syntax.scan("/users/{id}/").map(|p| p.name).collect();
    /// assert_eq!(names, vec!["id"]);
    /// ```
    pub fn custom(pattern: &str) -> Result<Self, SyntaxError> {
        let regex = Regex::new(pattern)?;
        let name_group = match regex.capture_names().position(|n| n == Some("name")) {
            Some(index) => index,
            None if regex.captures_len() > 1 => 1,
            None => {
                return Err(SyntaxError::NoNameGroup {
                    pattern: pattern.to_string(),
                })
            }
        };
        Ok(Self { regex, name_group })
    }

    /// The underlying pattern source
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Iterate over placeholder occurrences in `template`, left to right
    ///
    /// Zero-length matches are skipped.
    pub fn scan<'a>(&'a self, template: &'a str) -> impl Iterator<Item = Placeholder> + 'a {
        self.regex.captures_iter(template).filter_map(move |caps| {
            let token = caps.get(0).filter(|m| !m.is_empty())?;
            let name = caps.get(self.name_group)?;
            Some(Placeholder {
                name: name.as_str().to_string(),
                token: token.as_str().to_string(),
                span: token.range(),
            })
        })
    }
}
