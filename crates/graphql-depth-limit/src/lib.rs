//! A GraphQL validation rule that limits how deeply operations may nest
//! field selections.
//!
//! Depth is the number of nested field levels from an operation's root to its
//! deepest field. Fragment spreads and inline fragments do not count as a
//! level of their own, sibling selections never add up, and fields matched by
//! an [`IgnorePolicy`] (as well as introspection fields such as `__schema`)
//! are left out along with everything beneath them.
//!
//! ```
//! use graphql_depth_limit::ast;
//! use graphql_depth_limit::validate;
//! use graphql_depth_limit::DepthLimitRule;
//!
//! let document = ast::query::parse(r#"
//!     query shallow { user { name } }
//!     query deep { user { pets { owner { name } } } }
//! "#).unwrap();
//!
//! let errors = validate(&document, &[DepthLimitRule::new(2).unwrap()]).unwrap();
//!
//! assert_eq!(errors.len(), 1);
//! assert_eq!(errors[0].message(), "'deep' exceeds maximum operation depth of 2");
//! ```

pub mod ast;
mod definition_index;
mod depth_evaluator;
mod depth_limit_error;
mod depth_limit_rule;
mod depth_node;
mod depth_report;
mod ignore_policy;
mod ignore_rule;
pub mod loc;
mod validation_context;
mod validation_error;
mod validation_rule;

pub use definition_index::operation_key;
pub use definition_index::DefinitionIndex;
pub use definition_index::FragmentTable;
pub use definition_index::OperationTable;
pub use depth_evaluator::DepthEvaluator;
pub use depth_limit_error::DepthLimitConfigError;
pub use depth_limit_error::DepthLimitError;
pub use depth_limit_rule::DepthLimitRule;
pub use depth_node::DepthNode;
pub use depth_report::DepthReport;
pub use ignore_policy::IgnorePolicy;
pub use ignore_rule::IgnoreRule;
pub use validation_context::DocumentValidationContext;
pub use validation_context::ValidationContext;
pub use validation_error::ValidationError;
pub use validation_rule::validate;
pub use validation_rule::ValidationRule;

#[cfg(test)]
mod tests;
