//! Service result type
//!
//! The outcome of every service call: either the written model, or the
//! validation errors that blocked the write. Store failures surface as base
//! errors so callers deal with a single result shape.

use std::fmt;

use dote_core::error::ValidationErrors;

#[derive(Debug)]
pub struct ServiceResult<T> {
    success: bool,
    result: Option<T>,
    errors: ValidationErrors,
}

impl<T> ServiceResult<T> {
    pub fn success(result: T) -> Self {
        Self {
            success: true,
            result: Some(result),
            errors: ValidationErrors::new(),
        }
    }

    pub fn failure(errors: ValidationErrors) -> Self {
        Self {
            success: false,
            result: None,
            errors,
        }
    }

    pub fn failure_with_error(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = ValidationErrors::new();
        errors.add(field, message);
        Self::failure(errors)
    }

    pub fn failure_with_base_error(message: impl Into<String>) -> Self {
        let mut errors = ValidationErrors::new();
        errors.add_base(message);
        Self::failure(errors)
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn is_failure(&self) -> bool {
        !self.success
    }

    pub fn result(&self) -> Option<&T> {
        self.result.as_ref()
    }

    pub fn take_result(&mut self) -> Option<T> {
        self.result.take()
    }

    /// Unwrap the result, panicking if the call failed
    pub fn unwrap(self) -> T {
        self.result
            .expect("called unwrap on a failed ServiceResult")
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn full_messages(&self) -> Vec<String> {
        self.errors.full_messages()
    }

    pub fn map<U, F>(self, f: F) -> ServiceResult<U>
    where
        F: FnOnce(T) -> U,
    {
        ServiceResult {
            success: self.success,
            result: self.result.map(f),
            errors: self.errors,
        }
    }
}

impl<T> From<Result<T, ValidationErrors>> for ServiceResult<T> {
    fn from(result: Result<T, ValidationErrors>) -> Self {
        match result {
            Ok(value) => ServiceResult::success(value),
            Err(errors) => ServiceResult::failure(errors),
        }
    }
}

impl<T> From<ServiceResult<T>> for Result<T, ValidationErrors> {
    fn from(result: ServiceResult<T>) -> Self {
        match result.result {
            Some(value) if result.success => Ok(value),
            _ => Err(result.errors),
        }
    }
}

impl<T: fmt::Display> fmt::Display for ServiceResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.success {
            match self.result {
                Some(ref result) => write!(f, "Success: {}", result),
                None => write!(f, "Success"),
            }
        } else {
            write!(f, "Failure: {}", self.errors.full_messages().join(", "))
        }
    }
}
