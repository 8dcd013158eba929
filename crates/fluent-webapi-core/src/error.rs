//! Error taxonomy for expression parsing and validation.

use crate::diagnostics::Exception;

/// The supplied lambda body does not have the shape the operation requires.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Provided expression is not a valid method call.")]
    NotMethodCall,

    #[error("Provided expression is not a valid member expression.")]
    NotMemberAccess,
}

/// Evaluating a sub-expression in isolation failed.
///
/// These are never folded into [`ParseError`]: shape problems and evaluation
/// problems stay distinguishable for the caller.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvalError {
    #[error("parameter '{name}' is not bound outside of the enclosing lambda")]
    UnboundParameter { name: String },

    #[error("Object reference not set to an instance of an object.")]
    NullReference,

    #[error("'{type_name}' does not contain a member named '{member}'")]
    MissingMember { type_name: String, member: String },

    #[error("method call '{method}' cannot be evaluated in isolation")]
    NotEvaluable { method: String },

    #[error(transparent)]
    Thrown(#[from] Exception),
}

/// Failure while resolving the arguments of a method-call lambda.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ResolveError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Generic null-access failure raised by the reference guards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Object reference not set to an instance of an object.")]
pub struct NullReferenceError;

/// A domain assertion about an invoked action failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssertionError {
    #[error("{0}")]
    ActionCall(String),
}

impl AssertionError {
    /// The exact message reported to the test runner.
    pub fn message(&self) -> &str {
        match self {
            Self::ActionCall(message) => message,
        }
    }
}
