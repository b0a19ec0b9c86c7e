//! The default namespace register.
//!
//! Each thread of execution has its own current default namespace, which
//! starts out as the public namespace. [`DefaultNamespaces`] is an explicit
//! store keyed by execution context, for hosts that schedule scripts on their
//! own contexts. The free functions keep the register of the calling OS
//! thread.
use std::cell::RefCell;
use std::hash::Hash;

use ahash::HashMap;
use tracing::trace;

use crate::namespace::Namespace;

// `None` resets to the public namespace
fn or_public(namespace: Option<Namespace>) -> Namespace {
    namespace.unwrap_or_else(Namespace::public)
}

/// Default namespaces keyed by execution context.
///
/// A key that was never written reads as the public namespace. Keys are
/// fully isolated from each other.
#[derive(Debug, Clone)]
pub struct DefaultNamespaces<K: Eq + Hash> {
    slots: HashMap<K, Namespace>,
}

impl<K: Eq + Hash> DefaultNamespaces<K> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            slots: HashMap::default(),
        }
    }

    /// The current default namespace for `key`.
    ///
    /// This initializes the slot to the public namespace on first access.
    pub fn get(&mut self, key: K) -> &Namespace {
        self.slots.entry(key).or_insert_with(Namespace::public)
    }

    /// Set the default namespace for `key`. `None` resets it to the public
    /// namespace.
    pub fn set(&mut self, key: K, namespace: Option<Namespace>) {
        self.swap(key, namespace);
    }

    /// Set the default namespace for `key`, returning the one in effect
    /// before.
    pub fn swap(&mut self, key: K, namespace: Option<Namespace>) -> Namespace {
        let namespace = or_public(namespace);
        trace!(uri = namespace.uri(), "swapping keyed default namespace");
        or_public(self.slots.insert(key, namespace))
    }

    /// Forget the slot for `key`, for instance when its context is torn
    /// down.
    pub fn remove(&mut self, key: &K) -> Option<Namespace> {
        self.slots.remove(key)
    }

    /// The number of initialized slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no slot has been initialized.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl<K: Eq + Hash> Default for DefaultNamespaces<K> {
    fn default() -> Self {
        Self::new()
    }
}

thread_local! {
    static CURRENT: RefCell<Option<Namespace>> = const { RefCell::new(None) };
}

/// The default namespace of the calling thread.
pub fn default_namespace() -> Namespace {
    CURRENT.with(|current| {
        current
            .borrow_mut()
            .get_or_insert_with(Namespace::public)
            .clone()
    })
}

/// Set the default namespace of the calling thread. `None` resets it to the
/// public namespace.
pub fn set_default_namespace(namespace: Option<Namespace>) {
    swap_default_namespace(namespace);
}

/// Set the default namespace of the calling thread, returning the one in
/// effect before.
pub fn swap_default_namespace(namespace: Option<Namespace>) -> Namespace {
    let namespace = or_public(namespace);
    trace!(uri = namespace.uri(), "setting default namespace");
    or_public(CURRENT.with(|current| current.replace(Some(namespace))))
}

struct Restore(Option<Namespace>);

impl Drop for Restore {
    fn drop(&mut self) {
        set_default_namespace(self.0.take());
    }
}

/// Run `f` with the default namespace of the calling thread set to
/// `namespace`, restoring the previous default afterwards.
///
/// The previous default is restored even if `f` panics.
pub fn with_default_namespace<R>(namespace: Option<Namespace>, f: impl FnOnce() -> R) -> R {
    let _restore = Restore(Some(swap_default_namespace(namespace)));
    f()
}
