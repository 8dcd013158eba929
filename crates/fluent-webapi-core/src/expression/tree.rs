//! Lambda expression trees supplied by test authors.
//!
//! A [`Lambda`] binds one parameter (usually the controller under test) and
//! carries a body [`Expr`]. Bodies are inspected, never executed; argument
//! sub-expressions are evaluated one at a time through [`Expr::evaluate`],
//! detached from the call that contains them.

use std::fmt;
use std::sync::Arc;

use crate::diagnostics::Exception;
use crate::error::EvalError;

use super::value::{TypeValuePair, Value};

/// Deferred computation producing an argument value.
pub type Thunk = Arc<dyn Fn() -> Result<Value, Exception> + Send + Sync>;

/// Expression node.
#[derive(Clone)]
pub enum Expr {
    /// Reference to the lambda parameter.
    Parameter { name: String },
    /// Literal value.
    Constant(Value),
    /// Value closed over from the enclosing scope.
    Captured { name: String, value: Value },
    /// Value produced on demand, e.g. a factory call in the test body.
    Computed { label: String, thunk: Thunk },
    MethodCall {
        callee: Box<Expr>,
        method: String,
        args: Vec<Expr>,
    },
    MemberAccess { target: Box<Expr>, member: String },
}

/// Coarse classification of an expression body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExprShape {
    MethodCall,
    MemberAccess,
    Other,
}

impl fmt::Display for ExprShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::MethodCall => "method_call",
            Self::MemberAccess => "member_access",
            Self::Other => "other",
        };
        f.write_str(s)
    }
}

impl Expr {
    pub fn parameter(name: impl Into<String>) -> Self {
        Self::Parameter { name: name.into() }
    }

    pub fn constant(value: impl Into<Value>) -> Self {
        Self::Constant(value.into())
    }

    pub fn captured(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Captured {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn computed<F>(label: impl Into<String>, thunk: F) -> Self
    where
        F: Fn() -> Result<Value, Exception> + Send + Sync + 'static,
    {
        Self::Computed {
            label: label.into(),
            thunk: Arc::new(thunk),
        }
    }

    pub fn call(callee: Expr, method: impl Into<String>, args: impl IntoIterator<Item = Expr>) -> Self {
        Self::MethodCall {
            callee: Box::new(callee),
            method: method.into(),
            args: args.into_iter().collect(),
        }
    }

    pub fn member(target: Expr, member: impl Into<String>) -> Self {
        Self::MemberAccess {
            target: Box::new(target),
            member: member.into(),
        }
    }

    pub fn shape(&self) -> ExprShape {
        match self {
            Self::MethodCall { .. } => ExprShape::MethodCall,
            Self::MemberAccess { .. } => ExprShape::MemberAccess,
            _ => ExprShape::Other,
        }
    }

    /// Evaluate this expression on its own.
    ///
    /// The expression must be closed: parameter references fail, and method
    /// calls are never invoked so the system under test is not run twice.
    /// A nested call whose value is needed, even one on a captured target,
    /// must be written as [`Expr::Computed`].
    pub fn evaluate(&self) -> Result<Value, EvalError> {
        match self {
            Self::Parameter { name } => Err(EvalError::UnboundParameter { name: name.clone() }),
            Self::Constant(value) | Self::Captured { value, .. } => Ok(value.clone()),
            Self::Computed { thunk, .. } => (**thunk)().map_err(EvalError::Thrown),
            Self::MemberAccess { target, member } => target.evaluate()?.member(member),
            Self::MethodCall { method, .. } => Err(EvalError::NotEvaluable {
                method: method.clone(),
            }),
        }
    }

    /// Evaluate and pair the result with its runtime type.
    ///
    /// A null result has no runtime type and fails with
    /// [`EvalError::NullReference`].
    pub fn evaluate_typed(&self) -> Result<TypeValuePair, EvalError> {
        TypeValuePair::from_value(self.evaluate()?)
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parameter { name } => f.debug_struct("Parameter").field("name", name).finish(),
            Self::Constant(value) => f.debug_tuple("Constant").field(value).finish(),
            Self::Captured { name, value } => f
                .debug_struct("Captured")
                .field("name", name)
                .field("value", value)
                .finish(),
            Self::Computed { label, .. } => f
                .debug_struct("Computed")
                .field("label", label)
                .finish_non_exhaustive(),
            Self::MethodCall {
                callee,
                method,
                args,
            } => f
                .debug_struct("MethodCall")
                .field("callee", callee)
                .field("method", method)
                .field("args", args)
                .finish(),
            Self::MemberAccess { target, member } => f
                .debug_struct("MemberAccess")
                .field("target", target)
                .field("member", member)
                .finish(),
        }
    }
}

/// Single-parameter lambda supplied as data.
#[derive(Debug, Clone)]
pub struct Lambda {
    parameter: String,
    body: Expr,
}

impl Lambda {
    pub fn new(parameter: impl Into<String>, body: Expr) -> Self {
        Self {
            parameter: parameter.into(),
            body,
        }
    }

    pub fn parameter(&self) -> &str {
        &self.parameter
    }

    pub fn body(&self) -> &Expr {
        &self.body
    }
}
