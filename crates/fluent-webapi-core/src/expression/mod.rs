//! Expression trees and the values they evaluate to.

pub mod tree;
pub mod value;

pub use tree::{Expr, ExprShape, Lambda, Thunk};
pub use value::{Reflect, RuntimeType, TypeKind, TypeValuePair, Value};
