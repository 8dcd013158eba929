//! Guard clauses shared by the assertion helpers.
//!
//! `None` stands for an absent (null) reference throughout. The reference
//! guards fail with the generic [`NullReferenceError`]; the domain checks
//! fail with [`AssertionError::ActionCall`] carrying a deterministic message.

use crate::diagnostics::{describe_exception, Exception};
use crate::error::{AssertionError, NullReferenceError};
use crate::expression::{Reflect, RuntimeType};
use crate::obs;

/// Fail if `value` is absent.
pub fn check_for_null_reference<T: ?Sized>(value: Option<&T>) -> Result<(), NullReferenceError> {
    value.map(|_| ()).ok_or(NullReferenceError)
}

/// Fail if `value` is absent, empty, or only whitespace.
pub fn check_for_not_white_space_string(value: Option<&str>) -> Result<(), NullReferenceError> {
    match value {
        Some(s) if !s.trim().is_empty() => Ok(()),
        _ => Err(NullReferenceError),
    }
}

/// Turn an unexpected exception into an assertion failure.
///
/// # Errors
///
/// `AssertionError::ActionCall` with the message from [`describe_exception`]
/// whenever `exception` is present.
pub fn check_for_exception(exception: Option<&Exception>) -> Result<(), AssertionError> {
    let Some(exception) = exception else {
        return Ok(());
    };

    obs::emit_exception_reported(exception.type_name(), exception.message());
    Err(AssertionError::ActionCall(describe_exception(exception)))
}

/// Whether `value` equals the default of its type.
///
/// `Option<_>` covers reference and nullable types, whose default is `None`.
pub fn check_for_default_value<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

/// Fail if `ty` is a value type that cannot hold null.
pub fn check_if_type_can_be_null(ty: &RuntimeType) -> Result<(), AssertionError> {
    if ty.can_be_null() {
        return Ok(());
    }

    obs::emit_type_not_nullable(ty.name());
    Err(AssertionError::ActionCall(format!(
        "{} cannot be null.",
        ty.name()
    )))
}

/// [`check_if_type_can_be_null`] for a statically known type.
pub fn check_if_type_can_be_null_of<T: Reflect + ?Sized>() -> Result<(), AssertionError> {
    check_if_type_can_be_null(&T::runtime_type())
}
