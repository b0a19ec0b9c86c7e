// Building a namespace from the arguments of a constructor call.
use std::borrow::Cow;

use tracing::{debug, trace};

use crate::namespace::Namespace;
use crate::prefix::is_valid_prefix;
use crate::value::Value;

impl Namespace {
    /// Construct a namespace from a runtime argument list.
    ///
    /// - No arguments give the public namespace.
    /// - One argument: a namespace is copied as is, prefix included. A
    ///   qualified name contributes its namespace uri, or `*::local` when it
    ///   has none. Anything else is converted to a string and used as the
    ///   uri.
    /// - Two arguments are a prefix and a uri. An undefined or null prefix
    ///   argument is skipped and the uri argument is treated as if it was
    ///   given alone. Otherwise an invalid prefix is dropped rather than
    ///   reported.
    ///
    /// Arguments beyond the second are ignored. This never fails.
    pub fn construct(args: &[Value<'_>]) -> Namespace {
        let namespace = match args {
            [] => Namespace::public(),
            [arg] => from_single(*arg),
            [prefix, uri, ..] if prefix.is_undefined_or_null() => from_single(*uri),
            [prefix, uri, ..] => from_prefix_and_uri(*prefix, *uri),
        };
        trace!(
            args = args.len(),
            uri = namespace.uri(),
            prefix = ?namespace.prefix(),
            "constructed namespace"
        );
        namespace
    }
}

fn from_single(arg: Value<'_>) -> Namespace {
    match arg {
        Value::Namespace(namespace) => namespace.clone(),
        _ => Namespace::from_uri_string(uri_position(arg).into_owned()),
    }
}

fn from_prefix_and_uri(prefix: Value<'_>, uri: Value<'_>) -> Namespace {
    let uri = uri_position(uri).into_owned();
    // a namespace contributes its uri here, a qualified name its rendering
    let candidate = prefix.to_runtime_string();
    let prefix = if candidate.is_empty() {
        Some(String::new())
    } else if !uri.is_empty() && is_valid_prefix(&candidate) {
        Some(candidate.into_owned())
    } else {
        debug!(prefix = %candidate, uri = %uri, "dropping namespace prefix");
        None
    };
    Namespace::from_parts(uri, prefix)
}

/// The string a value contributes when it stands for a uri.
fn uri_position<'a>(value: Value<'a>) -> Cow<'a, str> {
    match value {
        Value::QName(name) => match name.namespace() {
            Some(namespace) => Cow::Borrowed(namespace.uri()),
            None => Cow::Owned(format!("*::{}", name.local_name())),
        },
        _ => value.to_runtime_string(),
    }
}
