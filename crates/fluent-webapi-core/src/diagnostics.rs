//! Exception descriptors and their translation into assertion messages.
//!
//! An [`Exception`] is either a single failure or an aggregate wrapping an
//! ordered list of inner failures. [`describe_exception`] turns either form
//! into the one-line message reported when an action threw unexpectedly.
//! The wording is asserted on literally by test suites, so it must not drift.

use serde::{Deserialize, Serialize};

/// Type name reported for aggregate exceptions.
pub const AGGREGATE_EXCEPTION: &str = "AggregateException";

/// Message carried by aggregates built without an explicit one.
pub const DEFAULT_AGGREGATE_MESSAGE: &str = "One or more errors occurred.";

const NOT_CAUGHT_SUFFIX: &str = " was thrown but was not caught or expected.";

/// Symbolic description of a caught exception.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Exception {
    #[error("{type_name}: {message}")]
    Single { type_name: String, message: String },

    #[error("AggregateException: {message}")]
    Aggregate {
        message: String,
        inner: Vec<Exception>,
    },
}

impl Exception {
    pub fn single(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Single {
            type_name: type_name.into(),
            message: message.into(),
        }
    }

    /// Aggregate with the default message.
    pub fn aggregate(inner: impl IntoIterator<Item = Exception>) -> Self {
        Self::Aggregate {
            message: DEFAULT_AGGREGATE_MESSAGE.to_string(),
            inner: inner.into_iter().collect(),
        }
    }

    pub fn null_reference(message: impl Into<String>) -> Self {
        Self::single("NullReferenceException", message)
    }

    pub fn invalid_cast(message: impl Into<String>) -> Self {
        Self::single("InvalidCastException", message)
    }

    pub fn invalid_operation(message: impl Into<String>) -> Self {
        Self::single("InvalidOperationException", message)
    }

    pub fn argument(message: impl Into<String>) -> Self {
        Self::single("ArgumentException", message)
    }

    pub fn type_name(&self) -> &str {
        match self {
            Self::Single { type_name, .. } => type_name,
            Self::Aggregate { .. } => AGGREGATE_EXCEPTION,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Single { message, .. } | Self::Aggregate { message, .. } => message,
        }
    }

    pub fn is_aggregate(&self) -> bool {
        matches!(self, Self::Aggregate { .. })
    }

    /// Inner exceptions of an aggregate, or the exception itself.
    ///
    /// Only one level is unwrapped; nested aggregates are returned as-is.
    pub fn flatten(&self) -> Vec<&Exception> {
        match self {
            Self::Aggregate { inner, .. } if !inner.is_empty() => inner.iter().collect(),
            other => vec![other],
        }
    }
}

/// Build the "thrown but not caught" message for an exception.
///
/// An aggregate with at least one inner exception lists each inner exception
/// in order. Inner aggregates are described like single exceptions, and an
/// empty aggregate is described like a single exception too.
pub fn describe_exception(exception: &Exception) -> String {
    let subject = match exception {
        Exception::Aggregate { inner, .. } if !inner.is_empty() => {
            let containing = inner
                .iter()
                .map(describe_single)
                .collect::<Vec<_>>()
                .join(", ");
            format!("{AGGREGATE_EXCEPTION} (containing {containing})")
        }
        other => describe_single(other),
    };

    format!("{subject}{NOT_CAUGHT_SUFFIX}")
}

fn describe_single(exception: &Exception) -> String {
    let message = exception.message();
    if message.is_empty() {
        exception.type_name().to_string()
    } else {
        format!("{} with '{}' message", exception.type_name(), message)
    }
}
