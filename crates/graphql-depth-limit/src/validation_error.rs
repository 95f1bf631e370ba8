use crate::loc;

/// A user-facing validation failure associated with one or more locations in
/// the validated document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationError {
    pub(crate) locations: Vec<loc::SourceLocation>,
    pub(crate) message: String,
}
impl ValidationError {
    pub fn new(message: impl Into<String>, locations: Vec<loc::SourceLocation>) -> Self {
        Self {
            locations,
            message: message.into(),
        }
    }

    pub fn locations(&self) -> &[loc::SourceLocation] {
        &self.locations
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        for location in &self.locations {
            write!(f, " (at {location})")?;
        }
        Ok(())
    }
}
impl std::error::Error for ValidationError {}
