use crate::tests::utils::measure_with_ignore;
use crate::IgnorePolicy;
use crate::IgnoreRule;
use regex::Regex;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::sync::Arc;

#[test]
fn default_policy_ignores_nothing() {
    let policy = IgnorePolicy::default();
    assert!(policy.is_empty());
    assert!(!policy.is_ignored("user"));
    assert!(!policy.is_ignored(""));
}

#[test]
fn default_policy_does_not_list_introspection_fields() {
    let policy = IgnorePolicy::default();
    assert!(!policy.is_ignored("__schema"));
    assert!(!policy.is_ignored("__typename"));
}

#[test]
fn introspection_fields_are_exempt_without_any_ignore_rule() {
    let (report, errors) = measure_with_ignore(
        "{ __schema { types { fields { name } } } }",
        1,
        IgnorePolicy::default(),
    );
    assert!(errors.is_empty(), "{errors:#?}");
    assert_eq!(report.get(""), Some(0));
}

#[test]
fn exact_rule_requires_full_name_equality() {
    let rule = IgnoreRule::exact("user1");
    assert!(rule.matches("user1"));
    assert!(!rule.matches("user10"));
    assert!(!rule.matches("User1"));
}

#[test]
fn pattern_rule_is_not_anchored() {
    let rule = IgnoreRule::pattern("user2").unwrap();
    assert!(rule.matches("user2"));
    assert!(rule.matches("superuser2s"));
    assert!(!rule.matches("user3"));

    let anchored = IgnoreRule::pattern("^user2$").unwrap();
    assert!(anchored.matches("user2"));
    assert!(!anchored.matches("superuser2"));
}

#[test]
fn invalid_pattern_is_rejected() {
    assert!(IgnoreRule::pattern("user(").is_err());
}

#[test]
fn predicate_rule_delegates_to_closure() {
    let rule = IgnoreRule::predicate(|name| name.ends_with("Connection"));
    assert!(rule.matches("friendsConnection"));
    assert!(!rule.matches("friends"));
}

#[test]
fn any_matching_rule_ignores_field() {
    let policy: IgnorePolicy = vec![
        IgnoreRule::from("user1"),
        IgnoreRule::from(Regex::new("user2").unwrap()),
        IgnoreRule::predicate(|name| name == "user3"),
    ].into_iter().collect();

    assert!(policy.is_ignored("user1"));
    assert!(policy.is_ignored("user2"));
    assert!(policy.is_ignored("user3"));
    assert!(!policy.is_ignored("user"));
    assert!(!policy.is_ignored("user4"));
}

#[test]
fn evaluation_stops_at_first_match() {
    let calls = Arc::new(AtomicUsize::new(0));
    let predicate_calls = Arc::clone(&calls);

    let mut policy = IgnorePolicy::new(vec![IgnoreRule::exact("user1")]);
    policy.push(IgnoreRule::predicate(move |_| {
        predicate_calls.fetch_add(1, Ordering::SeqCst);
        false
    }));

    assert!(policy.is_ignored("user1"));
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    assert!(!policy.is_ignored("user2"));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn debug_output_describes_rules() {
    let policy: IgnorePolicy = vec![
        IgnoreRule::exact("user1"),
        IgnoreRule::pattern("^user2").unwrap(),
        IgnoreRule::predicate(|_| true),
    ].into_iter().collect();

    assert_eq!(
        format!("{:?}", policy.rules()),
        r#"[Exact("user1"), Pattern("^user2"), Predicate(..)]"#,
    );
}
