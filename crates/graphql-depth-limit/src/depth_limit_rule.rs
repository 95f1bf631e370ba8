use crate::DefinitionIndex;
use crate::DepthEvaluator;
use crate::DepthLimitConfigError;
use crate::DepthLimitError;
use crate::DepthNode;
use crate::DepthReport;
use crate::IgnorePolicy;
use crate::ValidationContext;
use crate::ValidationRule;

type DepthObserver = Box<dyn Fn(&DepthReport) + Send + Sync>;

/// A [`ValidationRule`] rejecting operations nested deeper than `max_depth`
/// field levels.
///
/// `max_depth` is inclusive: an operation whose deepest field path is exactly
/// `max_depth` levels deep passes. Every operation in the document is
/// measured and each one that goes past the limit gets a single
/// `'<operation name>' exceeds maximum operation depth of <max_depth>` error.
///
/// Introspection fields (names starting with `__`, such as `__schema` or
/// `__typename`) and everything beneath them are always exempt from depth
/// accounting, independent of the configured [`IgnorePolicy`].
///
/// # Example
///
/// ```
/// use graphql_depth_limit::ast;
/// use graphql_depth_limit::DepthLimitRule;
/// use graphql_depth_limit::DocumentValidationContext;
///
/// let document = ast::query::parse("{ user { pets { name } } }").unwrap();
/// let rule = DepthLimitRule::new(1).unwrap();
///
/// let mut context = DocumentValidationContext::new(&document);
/// let report = rule.check(&mut context).unwrap();
///
/// assert_eq!(report.get(""), Some(2));
/// assert_eq!(
///     context.errors()[0].message(),
///     "'' exceeds maximum operation depth of 1",
/// );
/// ```
pub struct DepthLimitRule {
    ignore: IgnorePolicy,
    max_depth: u32,
    observer: Option<DepthObserver>,
}
impl DepthLimitRule {
    /// Create a rule with an empty [`IgnorePolicy`] and no observer.
    ///
    /// Even without ignore rules, `__`-prefixed introspection fields never
    /// count toward depth. Fails if `max_depth` is 0.
    pub fn new(max_depth: u32) -> Result<Self, DepthLimitConfigError> {
        if max_depth == 0 {
            return Err(DepthLimitConfigError::NonPositiveMaxDepth);
        }

        Ok(Self {
            ignore: IgnorePolicy::default(),
            max_depth,
            observer: None,
        })
    }

    /// Exclude fields matching `ignore` (and everything beneath them) from
    /// depth accounting.
    pub fn with_ignore(mut self, ignore: IgnorePolicy) -> Self {
        self.ignore = ignore;
        self
    }

    /// Register a callback that receives the [`DepthReport`] of every
    /// completed validation pass.
    pub fn with_observer<F>(mut self, observer: F) -> Self
    where
        F: Fn(&DepthReport) + Send + Sync + 'static,
    {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn ignore(&self) -> &IgnorePolicy {
        &self.ignore
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Measure every operation in the context's document, report operations
    /// that exceed the maximum depth to the context, and return the measured
    /// depths.
    ///
    /// Returns an error (after logging it) if the document spreads an
    /// undefined fragment or contains a fragment cycle. The observer is not
    /// notified in that case.
    pub fn check<'doc>(
        &self,
        context: &mut dyn ValidationContext<'doc>,
    ) -> Result<DepthReport, DepthLimitError> {
        let index = DefinitionIndex::from_document(context.document());
        let mut report = DepthReport::default();

        for (operation_key, op_def) in index.operations() {
            let mut evaluator = DepthEvaluator::new(
                &mut *context,
                index.fragments(),
                &self.ignore,
                self.max_depth,
                operation_key,
            );
            let depth = evaluator
                .determine_depth(DepthNode::OperationDefinition(*op_def), 0)
                .inspect_err(|err| log::error!(
                    "Aborting depth-limit validation: {err}"
                ))?;

            log::debug!("Operation '{operation_key}' has depth {depth}.");
            report.insert(operation_key.clone(), depth);
        }

        if let Some(observer) = &self.observer {
            observer(&report);
        }

        Ok(report)
    }
}

impl ValidationRule for DepthLimitRule {
    type Error = DepthLimitError;

    fn validate<'doc>(
        &self,
        context: &mut dyn ValidationContext<'doc>,
    ) -> Result<(), Self::Error> {
        self.check(context).map(|_| ())
    }
}

impl std::fmt::Debug for DepthLimitRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DepthLimitRule")
            .field("ignore", &self.ignore)
            .field("max_depth", &self.max_depth)
            .field("observer", &self.observer.as_ref().map(|_| ".."))
            .finish()
    }
}
