//! Structured observability hooks for parsing and validation.
//!
//! This module provides:
//! - A parse-scoped tracing span via the `ParseSpan` RAII guard
//! - Emission functions for parser and validator outcomes
//!
//! Parser events are emitted at `debug!` level, assertion failures at `warn!`.
//! Filtering follows `RUST_LOG` once [`crate::telemetry::init_tracing`] ran.

use tracing::{debug, warn};

use crate::expression::ExprShape;

/// RAII guard that enters a span for the duration of one lambda's parsing.
///
/// # Example
///
/// ```ignore
/// let _span = ParseSpan::enter("c");
/// // parser events are now associated with lambda_parameter = "c"
/// ```
pub struct ParseSpan {
    _span: tracing::span::EnteredSpan,
}

impl ParseSpan {
    pub fn enter(lambda_parameter: &str) -> Self {
        let span = tracing::info_span!("webapi.parse", lambda_parameter = %lambda_parameter);
        Self {
            _span: span.entered(),
        }
    }
}

/// Emit event: a method name was read from a lambda body.
pub fn emit_method_parsed(method: &str, arg_count: usize) {
    debug!(event = "parser.method_parsed", method = %method, arg_count = arg_count);
}

/// Emit event: all arguments of a method call were resolved.
pub fn emit_arguments_resolved(method: &str, types: &[&str]) {
    debug!(
        event = "parser.arguments_resolved",
        method = %method,
        types = ?types,
    );
}

/// Emit event: a member name was read from a lambda body.
pub fn emit_member_parsed(member: &str) {
    debug!(event = "parser.member_parsed", member = %member);
}

/// Emit event: the lambda body had the wrong shape.
pub fn emit_shape_rejected(expected: ExprShape, actual: ExprShape) {
    debug!(
        event = "parser.shape_rejected",
        expected = %expected,
        actual = %actual,
    );
}

/// Emit event: an unexpected exception was turned into an assertion failure.
pub fn emit_exception_reported(type_name: &str, message: &str) {
    warn!(
        event = "validator.exception_reported",
        type_name = %type_name,
        exception_message = %message,
    );
}

/// Emit event: a non-nullable type was checked for nullability.
pub fn emit_type_not_nullable(type_name: &str) {
    warn!(event = "validator.type_not_nullable", type_name = %type_name);
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[traced_test]
    #[test]
    fn test_parse_span_wraps_events() {
        let _span = ParseSpan::enter("ctrl");
        emit_method_parsed("Get", 0);

        assert!(logs_contain("webapi.parse"));
        assert!(logs_contain("lambda_parameter=ctrl"));
        assert!(logs_contain("parser.method_parsed"));
    }

    #[traced_test]
    #[test]
    fn test_shape_rejected_names_both_shapes() {
        emit_shape_rejected(ExprShape::MethodCall, ExprShape::Other);

        assert!(logs_contain("parser.shape_rejected"));
        assert!(logs_contain("expected=method_call"));
        assert!(logs_contain("actual=other"));
    }
}
