use crate::error::Error;
use crate::namespace::Namespace;
use crate::value::Value;

/// A native class as the host object system sees it.
///
/// The host invokes a class either as a function or with `new`, passing the
/// argument list as dynamic values.
pub trait NativeClass {
    /// The instances this class produces.
    type Instance;

    /// The class name as exposed to scripts.
    const NAME: &'static str;

    /// Invoke the class with `new`.
    fn construct(&self, args: &[Value<'_>]) -> Result<Self::Instance, Error>;

    /// Invoke the class as a plain function.
    ///
    /// By default this behaves exactly like [`NativeClass::construct`].
    fn call(&self, args: &[Value<'_>]) -> Result<Self::Instance, Error> {
        self.construct(args)
    }
}

/// The `Namespace` class.
#[derive(Debug, Default, Clone, Copy)]
pub struct NamespaceClass;

impl NamespaceClass {
    /// The checked prefix and uri constructor.
    ///
    /// Unlike calling the class with two arguments this rejects a non-empty
    /// prefix for the public namespace.
    pub fn construct_with_prefix<'a, 'b>(
        &self,
        prefix: impl Into<Value<'a>>,
        uri: impl Into<Value<'b>>,
    ) -> Result<Namespace, Error> {
        Namespace::from_prefix_and_uri(prefix, uri)
    }
}

impl NativeClass for NamespaceClass {
    type Instance = Namespace;

    const NAME: &'static str = "Namespace";

    fn construct(&self, args: &[Value<'_>]) -> Result<Namespace, Error> {
        Ok(Namespace::construct(args))
    }
}
