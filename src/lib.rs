#![forbid(unsafe_code)]
//! Namespace values for an E4X runtime.
//!
//! A [`Namespace`] pairs a uri with an optional prefix. Scripts create them
//! through the `Namespace` class with zero, one or two arguments of any kind;
//! [`Namespace::construct`] resolves such an argument list to a namespace
//! following the E4X coercion rules.
//!
//! ```rust
//! use e4x_namespace::{Namespace, Value};
//!
//! let namespace = Namespace::construct(&[Value::Text("x"), Value::Text("http://example.com")]);
//! assert_eq!(namespace.prefix(), Some("x"));
//! assert_eq!(namespace.uri(), "http://example.com");
//!
//! // an invalid prefix is dropped, not reported
//! let namespace = Namespace::construct(&[Value::Number(1.0), Value::Text("a")]);
//! assert_eq!(namespace.prefix(), None);
//! ```
//!
//! Every thread also carries a default namespace, see
//! [`default_namespace`] and [`set_default_namespace`].

mod class;
mod coerce;
mod default_namespace;
mod error;
mod namespace;
mod number;
mod prefix;
pub mod property;
mod qname;
mod value;

#[cfg(any(test, feature = "proptest"))]
pub mod proptest;

pub use class::{NamespaceClass, NativeClass};
pub use default_namespace::{
    default_namespace, set_default_namespace, swap_default_namespace, with_default_namespace,
    DefaultNamespaces,
};
pub use error::Error;
pub use namespace::{equals, Namespace};
pub use prefix::is_valid_prefix;
pub use qname::{QName, QualifiedName};
pub use value::{RuntimeObject, Value};
