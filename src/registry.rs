//! Template registry: path generation and resolution

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;
use tracing::{debug, trace};

use crate::args::Args;
use crate::config::RegistryConfig;
use crate::error::RegistryError;
use crate::template::{CompiledMatcher, Placeholder};

/// Result of resolving a path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolved {
    /// Name of the matching template
    pub name: String,
    /// Captured placeholder values keyed by placeholder name
    pub kwargs: BTreeMap<String, String>,
}

impl Resolved {
    /// Captured value for a placeholder
    pub fn get(&self, key: &str) -> Option<&str> {
        self.kwargs.get(key).map(|s| s.as_str())
    }
}

/// A loaded template with its derived data
#[derive(Debug, Clone)]
struct Route {
    name: String,
    template: String,
    placeholders: Vec<Placeholder>,
    matcher: CompiledMatcher,
}

impl Route {
    fn compile(
        config: &RegistryConfig,
        name: String,
        template: String,
    ) -> Result<Self, RegistryError> {
        let placeholders: Vec<_> = config.syntax.scan(&template).collect();
        let matcher = CompiledMatcher::compile(&template, &placeholders, config.trailing_slash)
            .map_err(|source| RegistryError::InvalidTemplate {
                name: name.clone(),
                source,
            })?;
        Ok(Self {
            name,
            template,
            placeholders,
            matcher,
        })
    }

    fn has_placeholder(&self, name: &str) -> bool {
        self.placeholders.iter().any(|p| p.name == name)
    }

    /// Replace placeholders with the values `value_for` yields
    ///
    /// Placeholders without a value are left in place and returned.
    fn substitute<'v>(
        &self,
        mut value_for: impl FnMut(&Placeholder) -> Option<&'v str>,
    ) -> (String, Vec<Placeholder>) {
        let mut path = String::with_capacity(self.template.len());
        let mut unresolved = Vec::new();
        let mut last = 0;

        for placeholder in &self.placeholders {
            path.push_str(&self.template[last..placeholder.span.start]);
            match value_for(placeholder) {
                Some(value) => path.push_str(value),
                None => {
                    path.push_str(&placeholder.token);
                    unresolved.push(placeholder.clone());
                }
            }
            last = placeholder.span.end;
        }
        path.push_str(&self.template[last..]);

        (path, unresolved)
    }
}

/// Registry of named URL templates
///
/// Templates are tried in load order when resolving, so the first of several
/// overlapping templates wins.
///
/// ```
/// use url_crossing::{args, TemplateRegistry};
///
/// let mut urls = TemplateRegistry::new();
/// urls.load([
///     ("discussion:detail", "<team_slug>/<discussion_id>/<slug>/"),
///     ("search", "search/"),
/// ])
/// .unwrap();
///
/// assert_eq!(
///     urls.get("discussion:detail", args!["loop", 3, "discussion"]).unwrap(),
///     "loop/3/discussion/"
/// );
///
/// let resolved = urls.resolve("loop/3/discussion/").unwrap();
/// assert_eq!(resolved.name, "discussion:detail");
/// assert_eq!(resolved.get("discussion_id"), Some("3"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    config: RegistryConfig,
    routes: Vec<Route>,
    index: HashMap<String, usize>,
}

impl TemplateRegistry {
    /// Create an empty registry with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry with a custom configuration
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            config,
            routes: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Replace all templates with `templates`
    ///
    /// A name given twice keeps its first position and its last template.
    /// On error the previously loaded templates are left untouched.
    pub fn load<I, K, V>(&mut self, templates: I) -> Result<&mut Self, RegistryError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut routes: Vec<Route> = Vec::new();
        let mut index = HashMap::new();

        for (name, template) in templates {
            let route = Route::compile(&self.config, name.into(), template.into())?;
            match index.get(&route.name) {
                Some(&position) => routes[position] = route,
                None => {
                    index.insert(route.name.clone(), routes.len());
                    routes.push(route);
                }
            }
        }

        debug!(routes = routes.len(), "loaded url templates");
        self.routes = routes;
        self.index = index;
        Ok(self)
    }

    /// Consume the registry, load `templates` and return it
    pub fn with_templates<I, K, V>(mut self, templates: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.load(templates)?;
        Ok(self)
    }

    /// Generate the path for template `name`
    ///
    /// `args` is either keyword (matched by placeholder name) or positional
    /// (filled left to right). See [`Args`]. With strict checking, several
    /// unknown keywords are reported by the alphabetically smallest one.
    pub fn get(&self, name: &str, args: impl Into<Args>) -> Result<String, RegistryError> {
        let route = self.route(name).ok_or_else(|| RegistryError::NotFound {
            name: name.to_string(),
        })?;

        let (path, unresolved) = match args.into() {
            Args::Keyword(pairs) => self.substitute_keywords(route, &pairs)?,
            Args::Positional(values) => {
                let mut values = values.iter();
                route.substitute(|_| values.next().map(String::as_str))
            }
            Args::None => route.substitute(|_| None),
        };

        if !unresolved.is_empty() {
            debug!(name, missing = unresolved.len(), "unresolved placeholders");
            return Err(RegistryError::MissingArguments {
                name: route.name.clone(),
                template: route.template.clone(),
                placeholders: unresolved,
            });
        }

        Ok(path)
    }

    fn substitute_keywords(
        &self,
        route: &Route,
        pairs: &[(String, String)],
    ) -> Result<(String, Vec<Placeholder>), RegistryError> {
        if self.config.strict {
            // Report the smallest unknown key
            let unknown = pairs
                .iter()
                .map(|(key, _)| key)
                .filter(|key| !route.has_placeholder(key))
                .min();
            if let Some(param) = unknown {
                return Err(RegistryError::InvalidParameter {
                    name: route.name.clone(),
                    template: route.template.clone(),
                    param: param.clone(),
                });
            }
        }

        let values: HashMap<&str, &str> = pairs
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
            .collect();

        if let Some(placeholder) = route
            .placeholders
            .iter()
            .find(|p| !values.contains_key(p.name.as_str()))
        {
            return Err(RegistryError::MissingParameter {
                name: route.name.clone(),
                template: route.template.clone(),
                placeholder: placeholder.clone(),
            });
        }

        Ok(route.substitute(|p| values.get(p.name.as_str()).copied()))
    }

    /// Find the first template matching `path` and extract its values
    ///
    /// Returns `None` when no template matches or `path` is empty.
    pub fn resolve(&self, path: &str) -> Option<Resolved> {
        if path.is_empty() {
            return None;
        }

        let resolved = self.routes.iter().find_map(|route| {
            let values = route.matcher.captures(path)?;
            let mut kwargs = BTreeMap::new();
            for (placeholder, value) in route.placeholders.iter().zip(values) {
                kwargs.insert(placeholder.name.clone(), value.to_string());
            }
            Some(Resolved {
                name: route.name.clone(),
                kwargs,
            })
        });

        match &resolved {
            Some(r) => trace!(path, name = %r.name, "resolved path"),
            None => trace!(path, "no template matches path"),
        }
        resolved
    }

    fn route(&self, name: &str) -> Option<&Route> {
        self.index.get(name).map(|&position| &self.routes[position])
    }

    /// Check if a template exists
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Raw template registered under `name`
    pub fn template(&self, name: &str) -> Option<&str> {
        self.route(name).map(|r| r.template.as_str())
    }

    /// Placeholder occurrences of template `name`, left to right
    pub fn placeholders(&self, name: &str) -> Option<&[Placeholder]> {
        self.route(name).map(|r| r.placeholders.as_slice())
    }

    /// Compiled matcher of template `name`
    pub fn matcher(&self, name: &str) -> Option<&CompiledMatcher> {
        self.route(name).map(|r| &r.matcher)
    }

    /// Template names in load order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|r| r.name.as_str())
    }

    /// `(name, template)` pairs in load order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.routes
            .iter()
            .map(|r| (r.name.as_str(), r.template.as_str()))
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }
}
