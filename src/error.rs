/// Errors raised while constructing namespace values.
///
/// Most malformed input is tolerated: an invalid prefix degrades to an
/// absent prefix. Only a request that would give the public namespace a
/// name is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A non-empty prefix was supplied together with the empty uri.
    #[error("illegal prefix '{0}' for public namespace")]
    IllegalPrefixForPublicNamespace(String),
}

impl Error {
    /// A stable code for this error kind.
    ///
    /// Hosts use this to map errors onto their own coded error tables.
    pub fn code(&self) -> &'static str {
        match self {
            Error::IllegalPrefixForPublicNamespace(_) => "IllegalPrefixForPublicNamespace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = Error::IllegalPrefixForPublicNamespace("a".to_string());
        assert_eq!(err.to_string(), "illegal prefix 'a' for public namespace");
        assert_eq!(err.code(), "IllegalPrefixForPublicNamespace");
    }
}
