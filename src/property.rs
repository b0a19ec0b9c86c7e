//! Dynamic property view of a namespace.
//!
//! A namespace exposes its uri and prefix to scripts as two enumerable
//! properties. Enumeration walks one-based indices; index `0` is both the
//! starting point and the end marker.
use crate::namespace::Namespace;
use crate::value::Value;

const URI: &str = "uri";
const PREFIX: &str = "prefix";

const PROPERTY_NAMES: [&str; 2] = [URI, PREFIX];

/// The index following `index`, or `0` when enumeration is done.
pub fn next_index(index: u32) -> u32 {
    match index {
        0 => 1,
        1 => 2,
        _ => 0,
    }
}

/// The property name at `index`, if any.
pub fn name_at_index(index: u32) -> Option<&'static str> {
    let index = usize::try_from(index).ok()?.checked_sub(1)?;
    PROPERTY_NAMES.get(index).copied()
}

/// The property value at `index`.
///
/// An index outside the enumeration yields `Undefined`, as does a missing
/// prefix.
pub fn value_at_index(namespace: &Namespace, index: u32) -> Value<'_> {
    match name_at_index(index) {
        Some(name) => get_property(namespace, name),
        None => Value::Undefined,
    }
}

/// Whether the property `name` shows up in enumeration.
///
/// Both properties are always enumerable.
pub fn is_enumerable(_name: &str) -> bool {
    true
}

/// Whether `name` is a property of namespaces.
pub fn has_property(name: &str) -> bool {
    PROPERTY_NAMES.contains(&name)
}

/// Look up a property by name. Unknown names yield `Undefined`.
pub fn get_property<'a>(namespace: &'a Namespace, name: &str) -> Value<'a> {
    match name {
        URI => Value::Text(namespace.uri()),
        PREFIX => namespace.prefix().map_or(Value::Undefined, Value::Text),
        _ => Value::Undefined,
    }
}

/// Iterate over the properties of a namespace in enumeration order.
pub fn properties(namespace: &Namespace) -> Properties<'_> {
    Properties {
        namespace,
        index: 0,
    }
}

/// Iterator over the `(name, value)` properties of a namespace.
#[derive(Debug, Clone)]
pub struct Properties<'a> {
    namespace: &'a Namespace,
    index: u32,
}

impl<'a> Iterator for Properties<'a> {
    type Item = (&'static str, Value<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        self.index = next_index(self.index);
        let name = name_at_index(self.index)?;
        Some((name, get_property(self.namespace, name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enumeration_order() {
        assert_eq!(next_index(0), 1);
        assert_eq!(next_index(1), 2);
        assert_eq!(next_index(2), 0);
        assert_eq!(next_index(7), 0);
    }

    #[test]
    fn test_names() {
        assert_eq!(name_at_index(0), None);
        assert_eq!(name_at_index(1), Some("uri"));
        assert_eq!(name_at_index(2), Some("prefix"));
        assert_eq!(name_at_index(3), None);
        assert_eq!(name_at_index(u32::MAX), None);
    }

    #[test]
    fn test_values() {
        let namespace = Namespace::from_prefix_and_uri("p", "u").unwrap();
        assert!(matches!(value_at_index(&namespace, 1), Value::Text("u")));
        assert!(matches!(value_at_index(&namespace, 2), Value::Text("p")));
        assert!(matches!(value_at_index(&namespace, 0), Value::Undefined));
        assert!(matches!(value_at_index(&namespace, 3), Value::Undefined));
    }

    #[test]
    fn test_absent_prefix_is_undefined() {
        let namespace = Namespace::from_uri("u");
        assert!(matches!(value_at_index(&namespace, 2), Value::Undefined));
        let public = Namespace::public();
        assert!(matches!(value_at_index(&public, 2), Value::Text("")));
    }

    #[test]
    fn test_lookup_by_name() {
        let namespace = Namespace::from_prefix_and_uri("p", "u").unwrap();
        assert!(has_property("uri"));
        assert!(has_property("prefix"));
        assert!(!has_property("localName"));
        assert!(is_enumerable("uri"));
        assert!(is_enumerable("prefix"));
        assert!(matches!(get_property(&namespace, "nope"), Value::Undefined));
    }
}
