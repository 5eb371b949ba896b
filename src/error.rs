//! Error types for path generation and template loading

use std::ops::Range;

use ariadne::{Config, Label, Report, ReportKind, Source};
use thiserror::Error;

use crate::template::Placeholder;

/// Errors raised by [`TemplateRegistry`](crate::TemplateRegistry)
#[derive(Debug, Error)]
pub enum RegistryError {
    /// No template is registered under this name
    #[error("url not found: {name}")]
    NotFound { name: String },

    /// Keyword argument that names no placeholder of the template
    #[error("invalid parameter ({param}) for {name}")]
    InvalidParameter {
        name: String,
        template: String,
        param: String,
    },

    /// Keyword arguments lack a value for a placeholder
    #[error("missing parameter ({}) for {name}", .placeholder.name)]
    MissingParameter {
        name: String,
        template: String,
        placeholder: Placeholder,
    },

    /// Placeholders left unsubstituted after generation
    #[error("missing arguments ({}) for url {template}", join_tokens(.placeholders))]
    MissingArguments {
        name: String,
        template: String,
        placeholders: Vec<Placeholder>,
    },

    /// The template could not be compiled into a matcher
    #[error("invalid template {name}: {source}")]
    InvalidTemplate {
        name: String,
        #[source]
        source: regex::Error,
    },
}

fn join_tokens(placeholders: &[Placeholder]) -> String {
    placeholders
        .iter()
        .map(|p| p.token.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

impl RegistryError {
    /// Template name the error refers to
    pub fn name(&self) -> &str {
        match self {
            Self::NotFound { name }
            | Self::InvalidParameter { name, .. }
            | Self::MissingParameter { name, .. }
            | Self::MissingArguments { name, .. }
            | Self::InvalidTemplate { name, .. } => name,
        }
    }

    /// Unresolved placeholder tokens, in template order
    pub fn missing_tokens(&self) -> Vec<&str> {
        match self {
            Self::MissingArguments { placeholders, .. } => {
                placeholders.iter().map(|p| p.token.as_str()).collect()
            }
            Self::MissingParameter { placeholder, .. } => vec![placeholder.token.as_str()],
            _ => Vec::new(),
        }
    }

    /// Render the error against its raw template using ariadne
    ///
    /// Returns `None` for errors that carry no template text.
    pub fn report(&self) -> Option<String> {
        let (name, template, labels) = match self {
            Self::InvalidParameter {
                name,
                template,
                param,
            } => (
                name,
                template,
                vec![(0..template.len(), format!("template has no placeholder `{param}`"))],
            ),
            Self::MissingParameter {
                name,
                template,
                placeholder,
            } => (
                name,
                template,
                vec![(placeholder.span.clone(), "no value supplied".to_string())],
            ),
            Self::MissingArguments {
                name,
                template,
                placeholders,
            } => (
                name,
                template,
                placeholders
                    .iter()
                    .map(|p| (p.span.clone(), format!("no value for `{}`", p.name)))
                    .collect(),
            ),
            Self::NotFound { .. } | Self::InvalidTemplate { .. } => return None,
        };

        let id = name.as_str();
        let offset = labels
            .first()
            .map_or(0, |(span, _)| char_offset(template, span.start));
        let mut report = Report::build(ReportKind::Error, id, offset)
            .with_config(Config::default().with_color(false))
            .with_message(self.to_string());
        for (span, message) in labels {
            report = report
                .with_label(Label::new((id, char_range(template, span))).with_message(message));
        }

        let mut buf = Vec::new();
        report
            .finish()
            .write((id, Source::from(template.as_str())), &mut buf)
            .ok()?;
        String::from_utf8(buf).ok()
    }
}

// ariadne spans count characters, regex spans count bytes
fn char_offset(text: &str, byte: usize) -> usize {
    text[..byte].chars().count()
}

fn char_range(text: &str, span: Range<usize>) -> Range<usize> {
    char_offset(text, span.start)..char_offset(text, span.end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placeholder(name: &str, start: usize) -> Placeholder {
        let token = format!("<{name}>");
        let end = start + token.len();
        Placeholder {
            name: name.to_string(),
            token,
            span: start..end,
        }
    }

    fn missing_arguments() -> RegistryError {
        RegistryError::MissingArguments {
            name: "discussion:detail".to_string(),
            template: "<team_slug>/<discussion_id>/<slug>/".to_string(),
            placeholders: vec![placeholder("discussion_id", 12), placeholder("slug", 28)],
        }
    }

    #[test]
    fn test_missing_arguments_display() {
        insta::assert_snapshot!(
            missing_arguments().to_string(),
            @"missing arguments (<discussion_id>, <slug>) for url <team_slug>/<discussion_id>/<slug>/"
        );
    }

    #[test]
    fn test_invalid_parameter_display() {
        let err = RegistryError::InvalidParameter {
            name: "discussion:detail".to_string(),
            template: "<team_slug>/<discussion_id>/<slug>/".to_string(),
            param: "team".to_string(),
        };
        insta::assert_snapshot!(err.to_string(), @"invalid parameter (team) for discussion:detail");
    }

    #[test]
    fn test_missing_tokens() {
        assert_eq!(
            missing_arguments().missing_tokens(),
            vec!["<discussion_id>", "<slug>"]
        );
        let err = RegistryError::NotFound {
            name: "nope".to_string(),
        };
        assert!(err.missing_tokens().is_empty());
        assert_eq!(err.name(), "nope");
    }

    #[test]
    fn test_report_labels_missing_placeholders() {
        let report = missing_arguments().report().expect("should render");
        assert!(report.contains("missing arguments"));
        assert!(report.contains("no value for `discussion_id`"));
        assert!(report.contains("no value for `slug`"));
    }

    #[test]
    fn test_report_unavailable_without_template() {
        let err = RegistryError::NotFound {
            name: "nope".to_string(),
        };
        assert!(err.report().is_none());
    }
}
