use crate::loc;
use thiserror::Error;

/// Errors that abort a depth-limit validation pass.
///
/// These indicate a document the evaluator cannot measure, as opposed to an
/// operation that is merely too deep (which is reported as a
/// [`ValidationError`](crate::ValidationError) and does not abort the pass).
#[derive(Clone, Debug, Error, PartialEq)]
pub enum DepthLimitError {
    #[error("Fragment cycle detected: {}", format_cycle_path(.cycle_path))]
    FragmentCycle {
        cycle_path: Vec<String>,
        operation_name: String,
        spread_location: loc::SourceLocation,
    },

    #[error("Operation '{operation_name}' spreads undefined fragment '{fragment_name}'")]
    UndefinedFragment {
        fragment_name: String,
        operation_name: String,
        spread_location: loc::SourceLocation,
    },
}

/// Errors raised while configuring a [`DepthLimitRule`](crate::DepthLimitRule).
#[derive(Clone, Debug, Error, PartialEq)]
pub enum DepthLimitConfigError {
    #[error("Maximum operation depth must be a positive integer")]
    NonPositiveMaxDepth,
}

fn format_cycle_path(cycle: &[String]) -> String {
    cycle.join(" → ")
}
