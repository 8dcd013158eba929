//! Fluent Web API Core Library
//!
//! Expression parsing and validation shared by the controller assertion
//! helpers:
//! - `parser`: method name, resolved arguments, or member name from a lambda
//! - `validator`: null/blank/default/nullability guards and exception reports
//!
//! Every operation is a pure function over its inputs and may be called from
//! parallel tests.

pub mod diagnostics;
pub mod error;
pub mod expression;
pub mod obs;
pub mod parser;
pub mod telemetry;
pub mod validator;

pub use diagnostics::{describe_exception, Exception, AGGREGATE_EXCEPTION};
pub use error::{AssertionError, EvalError, NullReferenceError, ParseError, ResolveError};
pub use expression::{
    Expr, ExprShape, Lambda, Reflect, RuntimeType, Thunk, TypeKind, TypeValuePair, Value,
};
pub use obs::ParseSpan;
pub use parser::{
    get_method_name, get_property_name, parse_method_call, resolve_method_arguments,
    MethodCallInfo,
};
pub use telemetry::init_tracing;
pub use validator::{
    check_for_default_value, check_for_exception, check_for_not_white_space_string,
    check_for_null_reference, check_if_type_can_be_null, check_if_type_can_be_null_of,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
