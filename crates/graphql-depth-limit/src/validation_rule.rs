use crate::ast;
use crate::DocumentValidationContext;
use crate::ValidationContext;
use crate::ValidationError;

/// A check that can participate in a document validation pass.
///
/// Rules report user-facing problems through
/// [`ValidationContext::report_error`] and return `Err` only when the pass
/// cannot continue.
pub trait ValidationRule {
    type Error: std::error::Error;

    fn validate<'doc>(
        &self,
        context: &mut dyn ValidationContext<'doc>,
    ) -> Result<(), Self::Error>;
}

/// Run each rule in order against `document` and return every reported
/// validation error.
///
/// Stops at the first rule that aborts the pass.
pub fn validate<R: ValidationRule>(
    document: &ast::query::Document,
    rules: &[R],
) -> Result<Vec<ValidationError>, R::Error> {
    let mut context = DocumentValidationContext::new(document);
    for rule in rules {
        rule.validate(&mut context)?;
    }
    Ok(context.into_errors())
}
