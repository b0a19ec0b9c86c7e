//! Proptest support for namespace values
//!
//! Generates namespaces, prefixes and constructor arguments for property
//! tests. This can be enabled by adding the `proptest` feature to your
//! `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! e4x-namespace = { version = "0.1", features = ["proptest"] }
//! ```
//!
//! See the [`proptest`](https://docs.rs/proptest/latest/proptest/)
//! documentation for more information.

use proptest::prelude::*;

use crate::namespace::Namespace;
use crate::qname::QName;
use crate::value::Value;

const URIS: &[&str] = &["", "*", "http://example.com/x", "http://example.com/y", "a"];
const VALID_PREFIX: &str = "[A-Za-z_][A-Za-z0-9_.-]{0,8}";
const PREFIX_TEXT: &str = "[ -~]{0,8}";

/// A valid, non-empty prefix.
pub fn arb_valid_prefix() -> impl Strategy<Value = String> {
    VALID_PREFIX
}

/// Printable ASCII text that may or may not be a valid prefix.
pub fn arb_prefix_text() -> impl Strategy<Value = String> {
    PREFIX_TEXT
}

/// A uri, drawn from a small set so that equal uris come up often.
pub fn arb_uri() -> impl Strategy<Value = String> {
    prop::sample::select(URIS).prop_map(str::to_string)
}

/// A namespace built through the checked prefix and uri constructor.
pub fn arb_namespace() -> impl Strategy<Value = Namespace> {
    (prop::option::of(arb_prefix_text()), arb_uri()).prop_map(|(prefix, uri)| {
        Namespace::from_prefix_and_uri(prefix.as_deref(), uri.as_str())
            .unwrap_or_else(|_| Namespace::from_uri(uri.as_str()))
    })
}

/// An owned constructor argument.
///
/// [`Value`] borrows; this owns whatever it refers to so it can be
/// generated.
#[derive(Debug, Clone)]
pub enum Arg {
    Undefined,
    Null,
    Boolean(bool),
    Number(f64),
    Text(String),
    Namespace(Namespace),
    QName(QName),
}

impl Arg {
    /// Borrow this argument as a dynamic value.
    pub fn as_value(&self) -> Value<'_> {
        match self {
            Arg::Undefined => Value::Undefined,
            Arg::Null => Value::Null,
            Arg::Boolean(b) => Value::Boolean(*b),
            Arg::Number(n) => Value::Number(*n),
            Arg::Text(s) => Value::Text(s),
            Arg::Namespace(namespace) => Value::Namespace(namespace),
            Arg::QName(name) => Value::QName(name),
        }
    }
}

fn arb_qname() -> impl Strategy<Value = QName> {
    (prop::option::of(arb_namespace()), arb_valid_prefix()).prop_map(|(namespace, local)| {
        match namespace {
            Some(namespace) => QName::new(namespace, local),
            None => QName::any_namespace(local),
        }
    })
}

/// Any constructor argument.
pub fn arb_arg() -> impl Strategy<Value = Arg> {
    prop_oneof![
        Just(Arg::Undefined),
        Just(Arg::Null),
        any::<bool>().prop_map(Arg::Boolean),
        prop_oneof![Just(1.0), Just(-0.5), Just(f64::NAN), any::<i16>().prop_map(f64::from)]
            .prop_map(Arg::Number),
        prop_oneof![arb_prefix_text(), arb_uri()].prop_map(Arg::Text),
        arb_namespace().prop_map(Arg::Namespace),
        arb_qname().prop_map(Arg::QName),
    ]
}
