//! Shared helpers for depth-limit tests.

use crate::ast;
use crate::DepthLimitRule;
use crate::DepthReport;
use crate::DocumentValidationContext;
use crate::IgnorePolicy;
use crate::ValidationError;

pub fn parse_document(src: &str) -> ast::query::Document {
    ast::query::parse(src).unwrap()
}

/// Run a [`DepthLimitRule`] with the given limit and ignore policy over `src`
/// and return the measured depths along with any reported errors.
pub fn measure_with_ignore(
    src: &str,
    max_depth: u32,
    ignore: IgnorePolicy,
) -> (DepthReport, Vec<ValidationError>) {
    let document = parse_document(src);
    let rule = DepthLimitRule::new(max_depth)
        .unwrap()
        .with_ignore(ignore);
    let mut context = DocumentValidationContext::new(&document);
    let report = rule.check(&mut context).unwrap();
    (report, context.into_errors())
}

pub fn measure(src: &str, max_depth: u32) -> (DepthReport, Vec<ValidationError>) {
    measure_with_ignore(src, max_depth, IgnorePolicy::default())
}

/// Depth of the single (possibly anonymous) operation in `src`, measured with
/// a limit high enough to never be hit.
pub fn depth_of(src: &str) -> u32 {
    let (report, errors) = measure(src, 1_000);
    assert!(errors.is_empty(), "unexpected errors: {errors:#?}");
    assert_eq!(report.len(), 1, "expected a single operation: {report:#?}");
    report.iter().next().unwrap().1
}
