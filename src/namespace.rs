use std::fmt::{self, Display, Formatter};
use std::hash::{Hash, Hasher};

use crate::error::Error;
use crate::prefix::is_valid_prefix;
use crate::value::Value;

/// A namespace: a uri with an optional prefix.
///
/// The prefix has two distinct "empty" states. `None` means no prefix is
/// associated with the uri; `Some("")` is the default binding. The public
/// namespace has the empty uri and the empty prefix.
///
/// A namespace is immutable once constructed. Equality and hashing consider
/// the uri only; the prefix is lexical decoration.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawNamespace"))]
pub struct Namespace {
    uri: String,
    prefix: Option<String>,
}

impl Namespace {
    /// The public namespace: empty prefix, empty uri.
    pub const fn public() -> Self {
        Self {
            uri: String::new(),
            prefix: Some(String::new()),
        }
    }

    // No checks; callers uphold the empty uri invariant.
    pub(crate) fn from_parts(uri: String, prefix: Option<String>) -> Self {
        debug_assert!(
            !uri.is_empty() || prefix.as_deref().map_or(true, str::is_empty),
            "public namespace with prefix {:?}",
            prefix
        );
        Self { uri, prefix }
    }

    /// Create a namespace from a uri alone.
    ///
    /// The value is converted with the runtime's string coercion, so
    /// `Undefined` gives the uri `"undefined"`. The empty uri gets the empty
    /// prefix, any other uri gets no prefix.
    pub fn from_uri<'a>(uri: impl Into<Value<'a>>) -> Self {
        Self::from_uri_string(uri.into().to_runtime_string().into_owned())
    }

    pub(crate) fn from_uri_string(uri: String) -> Self {
        let prefix = uri.is_empty().then(String::new);
        Self::from_parts(uri, prefix)
    }

    /// Create a namespace from a prefix and a uri.
    ///
    /// An `Undefined` or `Null` prefix means no prefix. Otherwise the prefix
    /// is converted to a string: the empty string is kept, a valid prefix is
    /// kept verbatim, and anything else is dropped.
    ///
    /// Fails with [`Error::IllegalPrefixForPublicNamespace`] when the uri is
    /// empty and the prefix is present and non-empty.
    pub fn from_prefix_and_uri<'a, 'b>(
        prefix: impl Into<Value<'a>>,
        uri: impl Into<Value<'b>>,
    ) -> Result<Self, Error> {
        let uri = uri.into().to_runtime_string().into_owned();
        let prefix = prefix.into();
        if prefix.is_undefined_or_null() {
            return Ok(Self::from_parts(uri, None));
        }
        let prefix = prefix.to_runtime_string();
        if prefix.is_empty() {
            return Ok(Self::from_parts(uri, Some(String::new())));
        }
        if uri.is_empty() {
            return Err(Error::IllegalPrefixForPublicNamespace(prefix.into_owned()));
        }
        let prefix = is_valid_prefix(&prefix).then(|| prefix.into_owned());
        Ok(Self::from_parts(uri, prefix))
    }

    /// The namespace uri.
    #[inline]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// The prefix, if one is associated.
    ///
    /// This may be the empty string, which is distinct from no prefix.
    #[inline]
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// Whether this is the public namespace, i.e. the uri is empty.
    #[inline]
    pub fn is_public(&self) -> bool {
        self.uri.is_empty()
    }
}

/// Compare two possibly null namespaces.
///
/// Two nulls are equal, a null never equals a namespace, and two namespaces
/// are equal when their uris are.
pub fn equals(a: Option<&Namespace>, b: Option<&Namespace>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a.uri == b.uri,
        _ => false,
    }
}

impl PartialEq for Namespace {
    fn eq(&self, other: &Self) -> bool {
        self.uri == other.uri
    }
}

impl Eq for Namespace {}

impl Hash for Namespace {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.uri.hash(state);
    }
}

impl Default for Namespace {
    fn default() -> Self {
        Self::public()
    }
}

impl Display for Namespace {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.uri)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawNamespace {
    uri: String,
    #[serde(default)]
    prefix: Option<String>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawNamespace> for Namespace {
    type Error = Error;

    fn try_from(raw: RawNamespace) -> Result<Self, Self::Error> {
        Namespace::from_prefix_and_uri(raw.prefix.as_deref(), raw.uri.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public() {
        let public = Namespace::public();
        assert_eq!(public.uri(), "");
        assert_eq!(public.prefix(), Some(""));
        assert!(public.is_public());
        assert_eq!(Namespace::default().prefix(), Some(""));
    }

    #[test]
    fn test_from_uri() {
        let namespace = Namespace::from_uri("http://example.com");
        assert_eq!(namespace.uri(), "http://example.com");
        assert_eq!(namespace.prefix(), None);
        assert!(!namespace.is_public());
    }

    #[test]
    fn test_from_uri_empty() {
        let namespace = Namespace::from_uri("");
        assert_eq!(namespace.uri(), "");
        assert_eq!(namespace.prefix(), Some(""));
    }

    #[test]
    fn test_from_uri_coerces() {
        assert_eq!(Namespace::from_uri(Value::Undefined).uri(), "undefined");
        assert_eq!(Namespace::from_uri(Value::Null).uri(), "null");
        assert_eq!(Namespace::from_uri(12.5).uri(), "12.5");
        assert_eq!(Namespace::from_uri(true).uri(), "true");
        assert_eq!(Namespace::from_uri(Value::Undefined).prefix(), None);
    }

    #[test]
    fn test_from_prefix_and_uri() {
        let namespace = Namespace::from_prefix_and_uri("a", "b").unwrap();
        assert_eq!(namespace.prefix(), Some("a"));
        assert_eq!(namespace.uri(), "b");
    }

    #[test]
    fn test_from_prefix_and_uri_absent_prefix() {
        let namespace = Namespace::from_prefix_and_uri(Value::Undefined, "b").unwrap();
        assert_eq!(namespace.prefix(), None);
        let namespace = Namespace::from_prefix_and_uri(Value::Null, "").unwrap();
        assert_eq!(namespace.prefix(), None);
        assert_eq!(namespace.uri(), "");
    }

    #[test]
    fn test_from_prefix_and_uri_invalid_prefix() {
        let namespace = Namespace::from_prefix_and_uri("1ab", "b").unwrap();
        assert_eq!(namespace.prefix(), None);
        let namespace = Namespace::from_prefix_and_uri(1, "b").unwrap();
        assert_eq!(namespace.prefix(), None);
    }

    #[test]
    fn test_from_prefix_and_uri_public() {
        let namespace = Namespace::from_prefix_and_uri("", "").unwrap();
        assert_eq!(namespace.prefix(), Some(""));
        assert_eq!(namespace.uri(), "");
        assert_eq!(
            Namespace::from_prefix_and_uri("a", ""),
            Err(Error::IllegalPrefixForPublicNamespace("a".to_string()))
        );
        // invalid prefixes are rejected too, not degraded
        assert!(Namespace::from_prefix_and_uri("1ab", "").is_err());
    }

    #[test]
    fn test_equality_ignores_prefix() {
        let a = Namespace::from_prefix_and_uri("a", "u").unwrap();
        let b = Namespace::from_prefix_and_uri("b", "u").unwrap();
        let c = Namespace::from_uri("v");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(equals(Some(&a), Some(&b)));
        assert!(!equals(Some(&a), Some(&c)));
        assert!(equals(None, None));
        assert!(!equals(Some(&a), None));
        assert!(!equals(None, Some(&a)));
    }

    #[test]
    fn test_display() {
        let namespace = Namespace::from_prefix_and_uri("a", "http://example.com").unwrap();
        assert_eq!(namespace.to_string(), "http://example.com");
    }
}
