use regex::Regex;

type IgnorePredicate = Box<dyn Fn(&str) -> bool + Send + Sync>;

/// A single rule deciding whether a field is excluded from depth accounting.
///
/// Rules match on the field's name (never its alias).
pub enum IgnoreRule {
    /// Matches a field whose name is exactly equal to this string.
    Exact(String),

    /// Matches a field whose name contains a match for this pattern. Patterns
    /// are not implicitly anchored; use `^`/`$` to match the full name.
    Pattern(Regex),

    /// Matches a field for which this predicate returns `true`.
    Predicate(IgnorePredicate),
}
impl IgnoreRule {
    pub fn exact(field_name: impl Into<String>) -> Self {
        Self::Exact(field_name.into())
    }

    pub fn pattern(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self::Pattern(Regex::new(pattern)?))
    }

    pub fn predicate<F>(predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self::Predicate(Box::new(predicate))
    }

    pub fn matches(&self, field_name: &str) -> bool {
        match self {
            Self::Exact(name) => name == field_name,
            Self::Pattern(regex) => regex.is_match(field_name),
            Self::Predicate(predicate) => predicate(field_name),
        }
    }
}

impl std::fmt::Debug for IgnoreRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact(name) => f.debug_tuple("Exact").field(name).finish(),
            Self::Pattern(regex) => f.debug_tuple("Pattern").field(&regex.as_str()).finish(),
            Self::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

impl std::convert::From<&str> for IgnoreRule {
    fn from(value: &str) -> Self {
        Self::Exact(value.to_string())
    }
}

impl std::convert::From<String> for IgnoreRule {
    fn from(value: String) -> Self {
        Self::Exact(value)
    }
}

impl std::convert::From<Regex> for IgnoreRule {
    fn from(value: Regex) -> Self {
        Self::Pattern(value)
    }
}
