//! Runtime values, their types, and the `(type, value)` pairs produced for
//! resolved call arguments.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::EvalError;

/// Category of a runtime type, deciding whether it admits null.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    Reference,
    Value,
    Nullable,
}

/// Reflected type of a value or declared type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RuntimeType {
    name: String,
    kind: TypeKind,
}

impl RuntimeType {
    pub fn reference(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: TypeKind::Reference,
        }
    }

    pub fn value(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: TypeKind::Value,
        }
    }

    /// Nullable wrapper around `underlying`.
    ///
    /// Reference and already-nullable types are returned unchanged.
    pub fn nullable(underlying: &RuntimeType) -> Self {
        match underlying.kind {
            TypeKind::Value => Self {
                name: format!("Nullable<{}>", underlying.name),
                kind: TypeKind::Nullable,
            },
            TypeKind::Reference | TypeKind::Nullable => underlying.clone(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    pub fn can_be_null(&self) -> bool {
        !matches!(self.kind, TypeKind::Value)
    }
}

impl fmt::Display for RuntimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Maps a Rust type onto the [`RuntimeType`] assertions reason about.
pub trait Reflect {
    fn runtime_type() -> RuntimeType;
}

macro_rules! reflect_value_type {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl Reflect for $ty {
                fn runtime_type() -> RuntimeType {
                    RuntimeType::value($name)
                }
            }
        )*
    };
}

reflect_value_type! {
    bool => "Boolean",
    i32 => "Int32",
    i64 => "Int64",
    f64 => "Double",
}

impl Reflect for str {
    fn runtime_type() -> RuntimeType {
        RuntimeType::reference("String")
    }
}

impl Reflect for String {
    fn runtime_type() -> RuntimeType {
        RuntimeType::reference("String")
    }
}

impl<T: Reflect> Reflect for Option<T> {
    fn runtime_type() -> RuntimeType {
        RuntimeType::nullable(&T::runtime_type())
    }
}

/// A value obtained by evaluating a sub-expression.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int32(i32),
    Int64(i64),
    Double(f64),
    String(String),
    Object {
        type_name: String,
        fields: BTreeMap<String, Value>,
    },
}

impl Value {
    /// Object instance of `type_name` with the given fields.
    pub fn object<K, V>(type_name: impl Into<String>, fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        Self::Object {
            type_name: type_name.into(),
            fields: fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Runtime type of this value; `None` for null, which has no type.
    pub fn runtime_type(&self) -> Option<RuntimeType> {
        let ty = match self {
            Self::Null => return None,
            Self::Bool(_) => bool::runtime_type(),
            Self::Int32(_) => i32::runtime_type(),
            Self::Int64(_) => i64::runtime_type(),
            Self::Double(_) => f64::runtime_type(),
            Self::String(_) => String::runtime_type(),
            Self::Object { type_name, .. } => RuntimeType::reference(type_name.clone()),
        };
        Some(ty)
    }

    /// Read a member of this value.
    pub fn member(&self, member: &str) -> Result<Value, EvalError> {
        match self {
            Self::Null => Err(EvalError::NullReference),
            Self::Object { fields, type_name } => {
                fields
                    .get(member)
                    .cloned()
                    .ok_or_else(|| EvalError::MissingMember {
                        type_name: type_name.clone(),
                        member: member.to_string(),
                    })
            }
            Self::String(s) if member == "Length" => Ok(Self::Int32(
                i32::try_from(s.chars().count()).unwrap_or(i32::MAX),
            )),
            other => Err(EvalError::MissingMember {
                type_name: other
                    .runtime_type()
                    .map(|ty| ty.name().to_string())
                    .unwrap_or_default(),
                member: member.to_string(),
            }),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int32(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int64(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Double(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

/// Runtime type and value of one resolved call argument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeValuePair {
    #[serde(rename = "type")]
    pub ty: RuntimeType,
    pub value: Value,
}

impl TypeValuePair {
    /// Pair a non-null value with its runtime type.
    pub fn from_value(value: Value) -> Result<Self, EvalError> {
        let ty = value.runtime_type().ok_or(EvalError::NullReference)?;
        Ok(Self { ty, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nullable_wraps_only_value_types() {
        let int = i32::runtime_type();
        let nullable = RuntimeType::nullable(&int);
        assert_eq!(nullable.kind(), TypeKind::Nullable);
        assert_eq!(nullable.name(), "Nullable<Int32>");
        assert_eq!(RuntimeType::nullable(&nullable), nullable);

        let string = String::runtime_type();
        assert_eq!(RuntimeType::nullable(&string), string);
    }

    #[test]
    fn test_option_reflection() {
        assert_eq!(<Option<i32>>::runtime_type().kind(), TypeKind::Nullable);
        assert_eq!(<Option<String>>::runtime_type().kind(), TypeKind::Reference);
        assert!(!i64::runtime_type().can_be_null());
        assert!(<str>::runtime_type().can_be_null());
    }

    #[test]
    fn test_value_runtime_types() {
        assert_eq!(Value::from(5).runtime_type(), Some(RuntimeType::value("Int32")));
        assert_eq!(
            Value::from("x").runtime_type(),
            Some(RuntimeType::reference("String"))
        );
        assert_eq!(
            Value::object("RequestModel", [("Id", 1)]).runtime_type(),
            Some(RuntimeType::reference("RequestModel"))
        );
        assert_eq!(Value::Null.runtime_type(), None);
        assert_eq!(Value::from(None::<i32>), Value::Null);
    }

    #[test]
    fn test_member_lookup() {
        let model = Value::object("RequestModel", [("Name", "Test")]);
        assert_eq!(model.member("Name"), Ok(Value::from("Test")));
        assert_eq!(
            model.member("Missing"),
            Err(EvalError::MissingMember {
                type_name: "RequestModel".to_string(),
                member: "Missing".to_string(),
            })
        );
        assert_eq!(Value::Null.member("Name"), Err(EvalError::NullReference));
        assert_eq!(Value::from("abc").member("Length"), Ok(Value::Int32(3)));
    }

    #[test]
    fn test_pair_from_null_fails() {
        assert_eq!(
            TypeValuePair::from_value(Value::Null),
            Err(EvalError::NullReference)
        );
        let pair = TypeValuePair::from_value(Value::from(1.5)).expect("typed");
        assert_eq!(pair.ty.name(), "Double");
    }
}
