//! Extracts call and member metadata from lambda expressions.
//!
//! Assertion helpers first ask which method a lambda names and only then,
//! if needed, resolve its arguments. Resolving evaluates each argument on its
//! own; the call itself is never invoked.

use serde::Serialize;

use crate::error::{ParseError, ResolveError};
use crate::expression::{Expr, ExprShape, Lambda, TypeValuePair};
use crate::obs;

/// Method name and resolved arguments of a method-call lambda.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodCallInfo {
    pub method: String,
    pub arguments: Vec<TypeValuePair>,
}

/// Name of the method called in the lambda body.
///
/// # Errors
///
/// `ParseError::NotMethodCall` if the body is not a method call.
pub fn get_method_name(expression: &Lambda) -> Result<String, ParseError> {
    let (method, args) = method_call(expression)?;
    obs::emit_method_parsed(method, args.len());
    Ok(method.to_string())
}

/// Evaluate each argument of the method-call body, in declaration order.
///
/// # Errors
///
/// - `ResolveError::Parse` — the body is not a method call.
/// - `ResolveError::Eval` — an argument failed to evaluate; the underlying
///   [`crate::EvalError`] is passed through untouched.
pub fn resolve_method_arguments(expression: &Lambda) -> Result<Vec<TypeValuePair>, ResolveError> {
    let (method, args) = method_call(expression)?;
    let pairs = args
        .iter()
        .map(Expr::evaluate_typed)
        .collect::<Result<Vec<_>, _>>()?;

    let types: Vec<&str> = pairs.iter().map(|p| p.ty.name()).collect();
    obs::emit_arguments_resolved(method, &types);
    Ok(pairs)
}

/// Name of the member accessed in the lambda body.
///
/// # Errors
///
/// `ParseError::NotMemberAccess` if the body is not a member access.
pub fn get_property_name(expression: &Lambda) -> Result<String, ParseError> {
    match expression.body() {
        Expr::MemberAccess { member, .. } => {
            obs::emit_member_parsed(member);
            Ok(member.clone())
        }
        other => {
            obs::emit_shape_rejected(ExprShape::MemberAccess, other.shape());
            Err(ParseError::NotMemberAccess)
        }
    }
}

/// Method name and resolved arguments in one pass, inside a parse span.
pub fn parse_method_call(expression: &Lambda) -> Result<MethodCallInfo, ResolveError> {
    let _span = obs::ParseSpan::enter(expression.parameter());
    let method = get_method_name(expression)?;
    let arguments = resolve_method_arguments(expression)?;
    Ok(MethodCallInfo { method, arguments })
}

fn method_call(expression: &Lambda) -> Result<(&str, &[Expr]), ParseError> {
    match expression.body() {
        Expr::MethodCall { method, args, .. } => Ok((method.as_str(), args.as_slice())),
        other => {
            obs::emit_shape_rejected(ExprShape::MethodCall, other.shape());
            Err(ParseError::NotMethodCall)
        }
    }
}
