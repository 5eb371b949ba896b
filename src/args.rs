//! Arguments for path generation

use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;
use std::hash::BuildHasher;

/// Values supplied to [`TemplateRegistry::get`](crate::TemplateRegistry::get)
///
/// Keyword arguments are matched to placeholders by name; positional
/// arguments fill placeholders in the order they appear in the template.
/// Values are stored as their `Display` text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Args {
    /// No values at all
    #[default]
    None,
    /// Values filling placeholders left to right
    Positional(Vec<String>),
    /// Values keyed by placeholder name
    Keyword(Vec<(String, String)>),
}

impl Args {
    /// Positional arguments from any displayable values
    pub fn positional<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Display,
    {
        Self::Positional(values.into_iter().map(|v| v.to_string()).collect())
    }

    /// Keyword arguments from `(name, value)` pairs
    pub fn keyword<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Display,
    {
        Self::Keyword(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.to_string()))
                .collect(),
        )
    }
}

impl From<()> for Args {
    fn from(_: ()) -> Self {
        Self::None
    }
}

impl<V: Display> From<Vec<V>> for Args {
    fn from(values: Vec<V>) -> Self {
        Self::positional(values)
    }
}

impl<K: Into<String>, V: Display, S: BuildHasher> From<HashMap<K, V, S>> for Args {
    fn from(map: HashMap<K, V, S>) -> Self {
        Self::keyword(map)
    }
}

impl<K: Into<String>, V: Display> From<BTreeMap<K, V>> for Args {
    fn from(map: BTreeMap<K, V>) -> Self {
        Self::keyword(map)
    }
}

/// Build [`Args`] inline
///
/// ```
/// use url_crossing::{args, Args};
///
/// assert_eq!(args![], Args::None);
/// assert_eq!(args!["loop", 3], Args::Positional(vec!["loop".into(), "3".into()]));
/// assert_eq!(
///     args! { "slug" => "loop" },
///     Args::Keyword(vec![("slug".into(), "loop".into())])
/// );
/// ```
#[macro_export]
macro_rules! args {
    () => {
        $crate::Args::None
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        $crate::Args::Keyword(::std::vec![$((($key).to_string(), ($value).to_string())),+])
    };
    ($($value:expr),+ $(,)?) => {
        $crate::Args::Positional(::std::vec![$(($value).to_string()),+])
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_positional_stringifies_values() {
        assert_eq!(
            Args::positional([16468, 3]),
            Args::Positional(vec!["16468".to_string(), "3".to_string()])
        );
    }

    #[test]
    fn test_from_btreemap_is_keyword() {
        let mut map = BTreeMap::new();
        map.insert("slug", "loop");
        let args: Args = map.into();
        assert_eq!(args, Args::Keyword(vec![("slug".to_string(), "loop".to_string())]));
    }

    #[test]
    fn test_unit_is_none() {
        let args: Args = ().into();
        assert_eq!(args, Args::None);
    }

    #[test]
    fn test_macro_forms() {
        assert_eq!(args![], Args::None);
        assert_eq!(args!["loop", 1 + 2], Args::positional(["loop", "3"]));
        assert_eq!(
            args! { "team_slug" => "loop", "discussion_id" => 3 },
            Args::keyword([("team_slug", "loop"), ("discussion_id", "3")])
        );
    }
}
