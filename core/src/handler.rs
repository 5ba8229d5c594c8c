//! Handlers — Predicates bound to an action
//!
//! A handler is what a caller registers with its real event source. It owns
//! its predicate and action, keeps no other state, and can be invoked any
//! number of times.

use crate::{KeyEvent, KeyPredicate};
use std::fmt;

/// A predicate bound to an infallible action.
///
/// Created by [`KeyPredicate::then`]. Calling [`handle`](Self::handle) runs
/// the action once if the event matches and does nothing otherwise. A panic
/// raised by the action propagates to the caller of `handle`.
///
/// `Handler<F>` is `Send + Sync` whenever `F` is, so one handler can serve
/// several threads.
///
/// # Example
///
/// ```
/// use fluent_keys::{is, KeyEvent};
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// let letters = AtomicUsize::new(0);
/// let on_key = is().lowercase.letter.then(|| {
///     letters.fetch_add(1, Ordering::Relaxed);
/// });
///
/// for key in ["a", "B", "1", "z"] {
///     on_key.handle(&KeyEvent::new(key));
/// }
/// assert_eq!(letters.load(Ordering::Relaxed), 2);
/// ```
pub struct Handler<F> {
    predicate: KeyPredicate,
    action: F,
}

impl<F: Fn()> Handler<F> {
    pub(crate) fn new(predicate: KeyPredicate, action: F) -> Self {
        Self { predicate, action }
    }

    /// Feed one event to this handler.
    pub fn handle(&self, event: &KeyEvent) {
        if self.predicate.evaluate(event) {
            log::trace!("{} fired on {}", self.predicate, event);
            (self.action)();
        }
    }

    /// Convert into a plain closure for event sources that take `Fn(&KeyEvent)`.
    pub fn into_fn(self) -> impl Fn(&KeyEvent) {
        move |event: &KeyEvent| self.handle(event)
    }
}

impl<F> Handler<F> {
    /// The predicate this handler tests.
    #[must_use]
    pub fn predicate(&self) -> &KeyPredicate {
        &self.predicate
    }
}

impl<F> fmt::Debug for Handler<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("predicate", &self.predicate)
            .finish_non_exhaustive()
    }
}

/// A predicate bound to a fallible action.
///
/// Created by [`KeyPredicate::then_try`]. The action's error is handed back
/// unchanged from [`handle`](Self::handle); the handler neither wraps nor
/// swallows it.
///
/// # Example
///
/// ```
/// use fluent_keys::{matches, KeyEvent};
///
/// let on_key = matches(["q"]).then_try(|| Err::<(), _>("refused to quit"));
///
/// assert_eq!(on_key.handle(&KeyEvent::new("q")), Err("refused to quit"));
/// assert_eq!(on_key.handle(&KeyEvent::new("w")), Ok(false));
/// ```
pub struct TryHandler<F> {
    predicate: KeyPredicate,
    action: F,
}

impl<F, E> TryHandler<F>
where
    F: Fn() -> Result<(), E>,
{
    pub(crate) fn new(predicate: KeyPredicate, action: F) -> Self {
        Self { predicate, action }
    }

    /// Feed one event to this handler.
    ///
    /// # Errors
    ///
    /// Returns whatever error the action returns. Otherwise `Ok(true)` if the
    /// action ran and `Ok(false)` if the event did not match.
    pub fn handle(&self, event: &KeyEvent) -> Result<bool, E> {
        if !self.predicate.evaluate(event) {
            return Ok(false);
        }
        log::trace!("{} fired on {}", self.predicate, event);
        (self.action)()?;
        Ok(true)
    }
}

impl<F> TryHandler<F> {
    /// The predicate this handler tests.
    #[must_use]
    pub fn predicate(&self) -> &KeyPredicate {
        &self.predicate
    }
}

impl<F> fmt::Debug for TryHandler<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TryHandler")
            .field("predicate", &self.predicate)
            .finish_non_exhaustive()
    }
}
