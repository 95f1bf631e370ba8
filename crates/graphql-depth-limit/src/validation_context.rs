use crate::ast;
use crate::ValidationError;
use std::path::Path;
use std::path::PathBuf;

/// The view of a validation pass that a [`ValidationRule`](crate::ValidationRule)
/// works against: the document being validated and a sink for the errors it
/// finds.
pub trait ValidationContext<'doc> {
    fn document(&self) -> &'doc ast::query::Document;

    /// Path of the file the document was read from, if any. Used to annotate
    /// error locations.
    fn file_path(&self) -> Option<&Path> {
        None
    }

    fn report_error(&mut self, error: ValidationError);
}

/// A [`ValidationContext`] that collects reported errors in memory.
#[derive(Debug)]
pub struct DocumentValidationContext<'doc> {
    document: &'doc ast::query::Document,
    errors: Vec<ValidationError>,
    file_path: Option<PathBuf>,
}
impl<'doc> DocumentValidationContext<'doc> {
    pub fn new(document: &'doc ast::query::Document) -> Self {
        Self {
            document,
            errors: vec![],
            file_path: None,
        }
    }

    pub fn with_file_path(mut self, file_path: impl AsRef<Path>) -> Self {
        self.file_path = Some(file_path.as_ref().to_path_buf());
        self
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }
}

impl<'doc> ValidationContext<'doc> for DocumentValidationContext<'doc> {
    fn document(&self) -> &'doc ast::query::Document {
        self.document
    }

    fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    fn report_error(&mut self, error: ValidationError) {
        log::debug!("Validation error reported: {error}");
        self.errors.push(error);
    }
}
