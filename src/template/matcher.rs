//! Compiled matchers for raw templates

use regex::Regex;

use super::placeholder::{Placeholder, VALUE_PATTERN};

/// Anchored pattern recognizing the concrete paths of one template
///
/// Literal text is matched verbatim; every placeholder becomes one capture
/// group, in the order the placeholders appear in the raw template.
#[derive(Debug, Clone)]
pub struct CompiledMatcher {
    regex: Regex,
}

impl CompiledMatcher {
    /// Compile `template` given its placeholder occurrences
    ///
    /// With `trailing_slash` set, one trailing `/` of the template becomes
    /// optional and paths may end with an extra optional `/`.
    pub fn compile(
        template: &str,
        placeholders: &[Placeholder],
        trailing_slash: bool,
    ) -> Result<Self, regex::Error> {
        let mut pattern = String::with_capacity(template.len() * 2 + 4);
        pattern.push('^');

        let mut last = 0;
        for placeholder in placeholders {
            pattern.push_str(&regex::escape(&template[last..placeholder.span.start]));
            pattern.push_str(VALUE_PATTERN);
            last = placeholder.span.end;
        }

        let tail = &template[last..];
        if trailing_slash {
            pattern.push_str(&regex::escape(tail.strip_suffix('/').unwrap_or(tail)));
            pattern.push_str("/?");
        } else {
            pattern.push_str(&regex::escape(tail));
        }
        pattern.push('$');

        Ok(Self {
            regex: Regex::new(&pattern)?,
        })
    }

    /// Whether `path` is an instance of the template
    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    /// Captured placeholder values for `path`, left to right
    pub fn captures<'p>(&self, path: &'p str) -> Option<Vec<&'p str>> {
        let caps = self.regex.captures(path)?;
        Some(
            caps.iter()
                .skip(1)
                .map(|m| m.map_or("", |m| m.as_str()))
                .collect(),
        )
    }

    /// Number of placeholder groups
    pub fn group_count(&self) -> usize {
        self.regex.captures_len() - 1
    }

    /// The generated pattern source
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}
