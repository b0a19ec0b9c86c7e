#![cfg(feature = "serde")]

use e4x_namespace::Namespace;

#[test]
fn test_serialize() {
    let namespace = Namespace::from_prefix_and_uri("p", "http://example.com").unwrap();
    let json = serde_json::to_string(&namespace).unwrap();
    assert_eq!(json, r#"{"uri":"http://example.com","prefix":"p"}"#);
    let namespace = Namespace::from_uri("http://example.com");
    let json = serde_json::to_string(&namespace).unwrap();
    assert_eq!(json, r#"{"uri":"http://example.com","prefix":null}"#);
}

#[test]
fn test_deserialize() {
    let namespace: Namespace = serde_json::from_str(r#"{"uri":"u","prefix":"p"}"#).unwrap();
    assert_eq!(namespace.prefix(), Some("p"));
    let namespace: Namespace = serde_json::from_str(r#"{"uri":"u"}"#).unwrap();
    assert_eq!(namespace.prefix(), None);
    let namespace: Namespace = serde_json::from_str(r#"{"uri":"u","prefix":"1ab"}"#).unwrap();
    assert_eq!(namespace.prefix(), None);
}

#[test]
fn test_deserialize_rejects_named_public_namespace() {
    let result = serde_json::from_str::<Namespace>(r#"{"uri":"","prefix":"p"}"#);
    let err = result.unwrap_err();
    assert!(err.to_string().contains("illegal prefix 'p' for public namespace"));
}
