use std::borrow::Cow;
use std::fmt;

use crate::namespace::Namespace;
use crate::number::number_to_string;
use crate::qname::{QName, QualifiedName};

/// A runtime object that is neither a namespace nor a qualified name.
///
/// Such objects take part in coercion only through their textual form.
pub trait RuntimeObject: fmt::Debug {
    /// The object's own string conversion.
    fn to_runtime_string(&self) -> String;
}

/// A dynamic value as seen by namespace construction.
///
/// This borrows from the runtime's own value representation; building one is
/// cheap and it can be passed around by copy.
#[derive(Debug, Clone, Copy)]
pub enum Value<'a> {
    /// The undefined value, also used for missing arguments.
    Undefined,
    Null,
    Boolean(bool),
    Number(f64),
    Text(&'a str),
    Namespace(&'a Namespace),
    QName(&'a dyn QualifiedName),
    /// Any other object.
    Object(&'a dyn RuntimeObject),
}

impl<'a> Value<'a> {
    /// Returns `true` for `Undefined` and `Null`.
    pub fn is_undefined_or_null(&self) -> bool {
        matches!(self, Value::Undefined | Value::Null)
    }

    /// Convert to a string using the runtime's generic string coercion.
    pub fn to_runtime_string(&self) -> Cow<'a, str> {
        match *self {
            Value::Undefined => Cow::Borrowed("undefined"),
            Value::Null => Cow::Borrowed("null"),
            Value::Boolean(b) => Cow::Borrowed(if b { "true" } else { "false" }),
            Value::Number(n) => Cow::Owned(number_to_string(n)),
            Value::Text(s) => Cow::Borrowed(s),
            Value::Namespace(namespace) => Cow::Borrowed(namespace.uri()),
            Value::QName(name) => Cow::Owned(name.to_runtime_string()),
            Value::Object(object) => Cow::Owned(object.to_runtime_string()),
        }
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(s: &'a str) -> Self {
        Value::Text(s)
    }
}

impl<'a> From<&'a String> for Value<'a> {
    fn from(s: &'a String) -> Self {
        Value::Text(s)
    }
}

impl From<f64> for Value<'_> {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value<'_> {
    fn from(n: i32) -> Self {
        Value::Number(n.into())
    }
}

impl From<bool> for Value<'_> {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl<'a> From<&'a Namespace> for Value<'a> {
    fn from(namespace: &'a Namespace) -> Self {
        Value::Namespace(namespace)
    }
}

impl<'a> From<&'a QName> for Value<'a> {
    fn from(name: &'a QName) -> Self {
        Value::QName(name)
    }
}

impl<'a, T: Into<Value<'a>>> From<Option<T>> for Value<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Undefined, Into::into)
    }
}
