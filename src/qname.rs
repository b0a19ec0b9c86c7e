use std::fmt::{self, Display, Formatter};

use crate::namespace::Namespace;

/// The observable shape of a qualified name value.
///
/// Qualified names are owned by the embedding runtime; namespace coercion only
/// needs to see whether a name carries a resolved namespace, its local name,
/// and its textual rendering.
pub trait QualifiedName: fmt::Debug {
    /// The local part of the name.
    fn local_name(&self) -> &str;

    /// The resolved namespace.
    ///
    /// `None` means the name matches any namespace.
    fn namespace(&self) -> Option<&Namespace>;

    /// The conventional textual rendering of this name.
    ///
    /// A name in the public namespace renders as its local name alone, a
    /// name in any other namespace as `uri::local`, and a name without a
    /// resolved namespace as `*::local`.
    fn to_runtime_string(&self) -> String {
        match self.namespace() {
            Some(namespace) if namespace.is_public() => self.local_name().to_string(),
            Some(namespace) => format!("{}::{}", namespace.uri(), self.local_name()),
            None => format!("*::{}", self.local_name()),
        }
    }
}

/// A plain owned qualified name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QName {
    namespace: Option<Namespace>,
    local_name: String,
}

impl QName {
    /// Create a qualified name in a namespace.
    pub fn new(namespace: Namespace, local_name: impl Into<String>) -> Self {
        Self {
            namespace: Some(namespace),
            local_name: local_name.into(),
        }
    }

    /// Create a qualified name without a resolved namespace.
    pub fn any_namespace(local_name: impl Into<String>) -> Self {
        Self {
            namespace: None,
            local_name: local_name.into(),
        }
    }
}

impl QualifiedName for QName {
    fn local_name(&self) -> &str {
        &self.local_name
    }

    fn namespace(&self) -> Option<&Namespace> {
        self.namespace.as_ref()
    }
}

impl Display for QName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_runtime_string())
    }
}
