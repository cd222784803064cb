//! Request-scoped context bindings
//!
//! [`Context`] is an immutable, type-keyed value container. The three named
//! bindings (request id, user id, session id) store their strings under
//! private key types, so they can never collide with each other or with
//! values callers stash through [`Context::with_value`].

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

// Identity keys for the named bindings. Being private types, their TypeIds
// are unforgeable from outside this module.
struct RequestId(String);
struct UserId(String);
struct SessionId(String);

/// Immutable container of type-keyed values.
///
/// Every `with_*` call derives a new context; the receiver is never
/// mutated, so a context can be shared across threads and derived from
/// concurrently.
///
/// # Examples
///
/// ```
/// use fieldlog::Context;
///
/// let base = Context::new();
/// let ctx = base.with_request_id("req-1001").with_user_id("user-77");
///
/// assert_eq!(ctx.request_id(), Some("req-1001"));
/// assert_eq!(ctx.user_id(), Some("user-77"));
/// assert_eq!(ctx.session_id(), None);
/// assert_eq!(base.request_id(), None);
/// ```
#[derive(Clone, Default)]
pub struct Context {
    values: HashMap<TypeId, Arc<dyn Any + Send + Sync>>,
}

impl Context {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive a context carrying `value`, keyed by its type.
    ///
    /// Storing a second value of the same type replaces the first in the
    /// derived context only.
    #[must_use]
    pub fn with_value<T: Any + Send + Sync>(&self, value: T) -> Self {
        let mut values = self.values.clone();
        values.insert(TypeId::of::<T>(), Arc::new(value));
        Self { values }
    }

    /// Look up a stored value by its type
    pub fn value<T: Any + Send + Sync>(&self) -> Option<&T> {
        self.values
            .get(&TypeId::of::<T>())
            .and_then(|value| value.downcast_ref::<T>())
    }

    /// Derive a context with the request identifier bound
    #[must_use]
    pub fn with_request_id(&self, id: impl Into<String>) -> Self {
        self.with_value(RequestId(id.into()))
    }

    /// Derive a context with the user identifier bound
    #[must_use]
    pub fn with_user_id(&self, id: impl Into<String>) -> Self {
        self.with_value(UserId(id.into()))
    }

    /// Derive a context with the session identifier bound
    #[must_use]
    pub fn with_session_id(&self, id: impl Into<String>) -> Self {
        self.with_value(SessionId(id.into()))
    }

    /// Bound request identifier, if any
    pub fn request_id(&self) -> Option<&str> {
        self.value::<RequestId>().map(|id| id.0.as_str())
    }

    /// Bound user identifier, if any
    pub fn user_id(&self) -> Option<&str> {
        self.value::<UserId>().map(|id| id.0.as_str())
    }

    /// Bound session identifier, if any
    pub fn session_id(&self) -> Option<&str> {
        self.value::<SessionId>().map(|id| id.0.as_str())
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("request_id", &self.request_id())
            .field("user_id", &self.user_id())
            .field("session_id", &self.session_id())
            .field("values", &self.values.len())
            .finish()
    }
}
