//! Base contract system

use dote_core::error::ValidationErrors;

/// Result of contract validation
pub type ValidationResult = Result<(), ValidationErrors>;

/// A validation contract over one entity type
pub trait Contract<T>: Send + Sync {
    /// Validate the entity, collecting every error rather than stopping at
    /// the first
    fn validate(&self, entity: &T) -> ValidationResult;
}

/// Finish a validation pass: empty errors mean success
pub fn finish(errors: ValidationErrors) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
