use crate::IgnoreRule;

/// Prefix reserved by GraphQL for introspection fields (`__schema`, `__type`,
/// `__typename`).
pub(crate) const INTROSPECTION_FIELD_PREFIX: &str = "__";

/// An ordered list of [`IgnoreRule`]s.
///
/// A field is ignored if *any* rule matches its name. Rules are evaluated in
/// the order they were added and evaluation stops at the first match. The
/// default policy has no rules, so [`IgnorePolicy::is_ignored`] is `false`
/// for every name.
///
/// Introspection fields (names starting with `__`) are not part of any
/// policy: [`DepthLimitRule`](crate::DepthLimitRule) always exempts them,
/// whatever rules the policy holds.
///
/// # Example
///
/// ```
/// use graphql_depth_limit::IgnorePolicy;
/// use graphql_depth_limit::IgnoreRule;
///
/// let policy = IgnorePolicy::new(vec![
///     IgnoreRule::exact("user1"),
///     IgnoreRule::pattern("user2").unwrap(),
///     IgnoreRule::predicate(|name| name == "user3"),
/// ]);
///
/// assert!(policy.is_ignored("user1"));
/// assert!(policy.is_ignored("superuser2"));
/// assert!(policy.is_ignored("user3"));
/// assert!(!policy.is_ignored("user"));
/// ```
#[derive(Debug, Default)]
pub struct IgnorePolicy {
    rules: Vec<IgnoreRule>,
}
impl IgnorePolicy {
    pub fn new(rules: Vec<IgnoreRule>) -> Self {
        Self { rules }
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn is_ignored(&self, field_name: &str) -> bool {
        self.rules.iter().any(|rule| rule.matches(field_name))
    }

    pub fn push(&mut self, rule: impl Into<IgnoreRule>) {
        self.rules.push(rule.into());
    }

    pub fn rules(&self) -> &[IgnoreRule] {
        &self.rules
    }
}

impl<R: Into<IgnoreRule>> std::iter::FromIterator<R> for IgnorePolicy {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().map(Into::into).collect(),
        }
    }
}

pub(crate) fn is_introspection_field(field_name: &str) -> bool {
    field_name.starts_with(INTROSPECTION_FIELD_PREFIX)
}
