//! Predicate — Key matchers composed with modifier guards
//!
//! A [`KeyPredicate`] is either a leaf [`KeyMatcher`] or a guard that requires
//! one [`Modifier`] before handing the event to the predicate it wraps. Guards
//! stack to any depth; the whole chain is a plain AND of the modifier checks
//! and the leaf test.

use crate::handler::{Handler, TryHandler};
use crate::trace::{GuardStep, LeafStep};
use crate::{KeyError, KeyEvent, KeyMatcher, Modifier, PredicateTrace, MAX_DEPTH};
use regex::Regex;
use std::fmt;

/// A predicate over [`KeyEvent`]s.
///
/// Predicates are immutable values: building one never has side effects and
/// evaluating one reads only the event and the captured matcher data, so the
/// same predicate classifies the same event identically every time.
///
/// # Variants
///
/// - `Leaf` — Tests the key name, ignoring modifiers
/// - `Guard` — Requires `modifier` to be held, then evaluates `inner`
///
/// # Example
///
/// ```
/// use fluent_keys::{alt, ctrl, matches, KeyEvent};
///
/// let three_finger = ctrl(alt(matches(["Delete"])));
/// assert!(three_finger.evaluate(&KeyEvent::new("Delete").with_ctrl().with_alt()));
/// assert!(!three_finger.evaluate(&KeyEvent::new("Delete").with_ctrl()));
/// ```
///
/// Cloning, dropping and formatting walk the guard chain iteratively, so a
/// chain of any depth is safe to bind, trace and drop.
pub enum KeyPredicate {
    /// A leaf test on the key name.
    Leaf(KeyMatcher),

    /// A modifier guard around another predicate.
    Guard {
        /// The modifier that must be held.
        modifier: Modifier,
        /// The predicate evaluated once the modifier is held.
        inner: Box<KeyPredicate>,
    },
}

impl KeyPredicate {
    /// Build a predicate that matches when the key equals any of `keys`.
    ///
    /// Zero keys is accepted and yields a predicate that never matches.
    pub fn matches<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Leaf(KeyMatcher::any_of(keys))
    }

    /// Build a predicate that matches when `pattern` is found in the key.
    ///
    /// # Errors
    ///
    /// See [`KeyMatcher::pattern`].
    pub fn meets(pattern: &str) -> Result<Self, KeyError> {
        KeyMatcher::pattern(pattern).map(Self::Leaf)
    }

    /// Wrap `inner` so that `modifier` must additionally be held.
    #[must_use]
    pub fn guard(modifier: Modifier, inner: KeyPredicate) -> Self {
        Self::Guard {
            modifier,
            inner: Box::new(inner),
        }
    }

    /// Evaluate this predicate against an event.
    ///
    /// Guards are checked outermost first; the first modifier that is not
    /// held ends evaluation without consulting the leaf.
    #[must_use]
    pub fn evaluate(&self, event: &KeyEvent) -> bool {
        let mut node = self;
        loop {
            match node {
                Self::Leaf(matcher) => return matcher.matches(&event.key),
                Self::Guard { modifier, inner } => {
                    if !modifier.is_held(event) {
                        return false;
                    }
                    node = &**inner;
                }
            }
        }
    }

    /// Evaluate with a full trace for debugging.
    ///
    /// The trace follows the same path as [`evaluate()`](Self::evaluate): it
    /// stops at the first guard whose modifier is not held, and its
    /// `matched()` always equals `evaluate()`.
    #[must_use]
    pub fn evaluate_with_trace(&self, event: &KeyEvent) -> PredicateTrace {
        let mut guards = Vec::new();
        let mut node = self;
        let leaf = loop {
            match node {
                Self::Leaf(matcher) => {
                    break Some(LeafStep {
                        matched: matcher.matches(&event.key),
                        matcher: matcher.to_string(),
                    })
                }
                Self::Guard { modifier, inner } => {
                    let held = modifier.is_held(event);
                    guards.push(GuardStep {
                        modifier: *modifier,
                        held,
                    });
                    if !held {
                        break None;
                    }
                    node = &**inner;
                }
            }
        };

        PredicateTrace {
            matched: leaf.as_ref().is_some_and(|l| l.matched),
            key: event.key.clone(),
            guards,
            leaf,
        }
    }

    /// Bind an action, producing a handler.
    ///
    /// The handler runs `action` exactly once for every event this predicate
    /// matches and does nothing otherwise.
    pub fn then<F: Fn()>(&self, action: F) -> Handler<F> {
        Handler::new(self.clone(), action)
    }

    /// Bind a fallible action, producing a handler that returns the action's error.
    pub fn then_try<F, E>(&self, action: F) -> TryHandler<F>
    where
        F: Fn() -> Result<(), E>,
    {
        TryHandler::new(self.clone(), action)
    }

    /// The leaf matcher at the bottom of the guard chain.
    #[must_use]
    pub fn leaf(&self) -> &KeyMatcher {
        let mut node = self;
        loop {
            match node {
                Self::Leaf(matcher) => return matcher,
                Self::Guard { inner, .. } => node = &**inner,
            }
        }
    }

    /// The modifiers this predicate requires, outermost guard first.
    #[must_use]
    pub fn modifiers(&self) -> Vec<Modifier> {
        let mut out = Vec::new();
        let mut node = self;
        while let Self::Guard { modifier, inner } = node {
            out.push(*modifier);
            node = &**inner;
        }
        out
    }

    /// Depth of this predicate: 1 for a leaf, plus 1 per guard.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.modifiers().len() + 1
    }

    /// Validate that this predicate does not exceed [`MAX_DEPTH`].
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::DepthExceeded`] if the guard chain is too deep.
    pub fn validate(&self) -> Result<(), KeyError> {
        let depth = self.depth();
        if depth > MAX_DEPTH {
            return Err(KeyError::DepthExceeded {
                depth,
                max: MAX_DEPTH,
            });
        }
        Ok(())
    }

    /// Move the wrapped predicate out of a guard, leaving an empty leaf behind.
    fn detach_inner(&mut self) -> Option<KeyPredicate> {
        match self {
            Self::Guard { inner, .. } => Some(std::mem::replace(
                &mut **inner,
                Self::Leaf(KeyMatcher::AnyOf(Vec::new())),
            )),
            Self::Leaf(_) => None,
        }
    }

    /// Returns `true` if this is a `Leaf`.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// Returns `true` if this is a `Guard`.
    #[must_use]
    pub fn is_guard(&self) -> bool {
        matches!(self, Self::Guard { .. })
    }
}

impl Clone for KeyPredicate {
    fn clone(&self) -> Self {
        let leaf = Self::Leaf(self.leaf().clone());
        self.modifiers()
            .into_iter()
            .rev()
            .fold(leaf, |inner, modifier| Self::guard(modifier, inner))
    }
}

// Unlinks the chain one guard at a time so dropping never recurses.
impl Drop for KeyPredicate {
    fn drop(&mut self) {
        let mut next = self.detach_inner();
        while let Some(mut node) = next {
            next = node.detach_inner();
        }
    }
}

impl fmt::Debug for KeyPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPredicate")
            .field("modifiers", &self.modifiers())
            .field("leaf", self.leaf())
            .finish()
    }
}

impl From<KeyMatcher> for KeyPredicate {
    fn from(matcher: KeyMatcher) -> Self {
        Self::Leaf(matcher)
    }
}

impl fmt::Display for KeyPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for modifier in self.modifiers() {
            write!(f, "{modifier}+")?;
        }
        write!(f, "{}", self.leaf())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Constructors and combinators
// ═══════════════════════════════════════════════════════════════════════════════

/// Matches when the key equals any of `keys`. See [`KeyPredicate::matches`].
///
/// ```
/// use fluent_keys::{matches, KeyEvent};
///
/// assert!(matches(["Enter", "Escape"]).evaluate(&KeyEvent::new("Escape")));
/// assert!(!matches(Vec::<&str>::new()).evaluate(&KeyEvent::new("Escape")));
/// ```
pub fn matches<I, S>(keys: I) -> KeyPredicate
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    KeyPredicate::matches(keys)
}

/// Matches when `pattern` is found in the key. See [`KeyPredicate::meets`].
///
/// # Errors
///
/// Returns [`KeyError::InvalidPattern`] or [`KeyError::PatternTooLong`].
pub fn meets(pattern: &str) -> Result<KeyPredicate, KeyError> {
    KeyPredicate::meets(pattern)
}

/// Matches when a pre-compiled expression is found in the key.
#[must_use]
pub fn meets_regex(re: Regex) -> KeyPredicate {
    KeyPredicate::Leaf(KeyMatcher::Pattern(re))
}

/// Require control in addition to `inner`.
#[must_use]
pub fn ctrl(inner: KeyPredicate) -> KeyPredicate {
    KeyPredicate::guard(Modifier::Ctrl, inner)
}

/// Require alt in addition to `inner`.
#[must_use]
pub fn alt(inner: KeyPredicate) -> KeyPredicate {
    KeyPredicate::guard(Modifier::Alt, inner)
}

/// Require shift in addition to `inner`.
#[must_use]
pub fn shift(inner: KeyPredicate) -> KeyPredicate {
    KeyPredicate::guard(Modifier::Shift, inner)
}
