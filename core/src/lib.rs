//! fluent-keys - Fluent predicate combinators for keyboard events
//!
//! Classifies a key-press against a declarative predicate and, when it
//! matches, runs a zero-argument action.
//!
//! # Architecture
//!
//! - [`KeyEvent`] — One key-press: key name plus ctrl/alt/shift flags
//! - [`KeyMatcher`] — Leaf test on the key name (exact set or regex search)
//! - [`KeyPredicate`] — Leaf matcher, or a [`Modifier`] guard wrapping another predicate
//! - [`Handler`] — A predicate bound to an action, ready to receive events
//! - [`is()`] — The catalogue of common named predicates, built once per process
//!
//! # Key Design Insights
//!
//! 1. **One capability**: every node answers `then(action) -> Handler`. Leaves
//!    and guards differ only in what they test before delegating.
//!
//! 2. **Guards never touch the event**: a guard checks one modifier flag and
//!    either stops or hands the same event inward.
//!
//! 3. **Nothing mutable**: predicates and handlers hold only captured data, so
//!    one handler may be called from any number of threads.
//!
//! # Example
//!
//! ```
//! use fluent_keys::prelude::*;
//! use std::cell::Cell;
//!
//! let saved = Cell::new(0);
//! let on_key = is().ctrl.and(["s"]).then(|| saved.set(saved.get() + 1));
//!
//! on_key.handle(&KeyEvent::new("s").with_ctrl());
//! on_key.handle(&KeyEvent::new("s"));
//!
//! assert_eq!(saved.get(), 1);
//! ```
//!
//! Handlers are plain values. Wiring them to a real input source (a terminal,
//! a window system, a browser) is left to the caller.

// ═══════════════════════════════════════════════════════════════════════════════
// Modules
// ═══════════════════════════════════════════════════════════════════════════════

mod catalog;
mod event;
mod handler;
mod key_matcher;
mod predicate;
mod trace;

#[cfg(feature = "serde")]
mod spec;

// ═══════════════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════════════

pub use catalog::{is, CaseFamily, CtrlFamily, Is, ModifierFamily};
pub use event::{KeyEvent, Modifier};
pub use handler::{Handler, TryHandler};
pub use key_matcher::KeyMatcher;
pub use predicate::{alt, ctrl, matches, meets, meets_regex, shift, KeyPredicate};
pub use trace::{GuardStep, LeafStep, PredicateTrace};

#[cfg(feature = "serde")]
pub use spec::KeyMatchSpec;

// ═══════════════════════════════════════════════════════════════════════════════
// Prelude
// ═══════════════════════════════════════════════════════════════════════════════

/// Prelude module for convenient imports.
///
/// ```
/// use fluent_keys::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        // Constructors
        alt,
        ctrl,
        // Named table
        is,
        matches,
        meets,
        meets_regex,
        shift,
        // Core types
        Handler,
        KeyError,
        KeyEvent,
        KeyMatcher,
        KeyPredicate,
        Modifier,
        PredicateTrace,
        TryHandler,
    };

    #[cfg(feature = "serde")]
    pub use crate::KeyMatchSpec;
}

// ═══════════════════════════════════════════════════════════════════════════════
// Constants
// ═══════════════════════════════════════════════════════════════════════════════

/// Maximum nesting depth for predicates loaded from configuration.
///
/// A key event has three modifier flags, so real predicates stay shallow.
/// Deeper configs are rejected at load time.
pub const MAX_DEPTH: usize = 32;

/// Maximum number of literal keys in a single `matches` list loaded from configuration.
pub const MAX_KEYS: usize = 256;

/// Maximum length of a literal key name loaded from configuration.
pub const MAX_KEY_LENGTH: usize = 8192;

/// Maximum length for regex patterns.
///
/// Shorter than [`MAX_KEY_LENGTH`] because regex compilation cost grows
/// faster than literal comparison.
pub const MAX_REGEX_PATTERN_LENGTH: usize = 4096;

// ═══════════════════════════════════════════════════════════════════════════════
// Errors
// ═══════════════════════════════════════════════════════════════════════════════

/// Errors from predicate construction and validation.
///
/// All of these surface while a predicate is being built. Evaluating a
/// predicate or invoking a handler never produces a `KeyError`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyError {
    /// A regular expression failed to compile.
    #[error("invalid pattern \"{pattern}\": {reason}")]
    InvalidPattern {
        /// The pattern that failed to compile.
        pattern: String,
        /// The underlying error message.
        reason: String,
    },

    /// A regular expression exceeds [`MAX_REGEX_PATTERN_LENGTH`].
    #[error("pattern length is {len}, but maximum allowed is {max}")]
    PatternTooLong {
        /// Actual length of the pattern.
        len: usize,
        /// Maximum allowed length.
        max: usize,
    },

    /// A literal key name exceeds [`MAX_KEY_LENGTH`].
    #[error("key name length is {len}, but maximum allowed is {max}")]
    KeyTooLong {
        /// Actual length of the key name.
        len: usize,
        /// Maximum allowed length.
        max: usize,
    },

    /// A `matches` list exceeds [`MAX_KEYS`].
    #[error("key list has {count} entries, but maximum allowed is {max}")]
    TooManyKeys {
        /// Actual number of keys.
        count: usize,
        /// Maximum allowed.
        max: usize,
    },

    /// Predicate nesting exceeds [`MAX_DEPTH`].
    #[error(
        "predicate nesting depth is {depth}, but maximum allowed is {max} \
         — a key event only carries three modifiers"
    )]
    DepthExceeded {
        /// Actual depth of the predicate.
        depth: usize,
        /// Maximum allowed depth.
        max: usize,
    },

    /// A named predicate was not found in [`is()`].
    #[error("unknown named predicate \"{name}\" — available: {}", .available.join(", "))]
    UnknownName {
        /// The name that was looked up.
        name: String,
        /// Names that ARE defined (for self-correcting error messages).
        available: Vec<String>,
    },

    /// A modifier name was not one of `ctrl`, `alt`, `shift`.
    #[error("unknown modifier \"{name}\" — expected ctrl, alt or shift")]
    UnknownModifier {
        /// The unrecognised name.
        name: String,
    },

    /// Configuration deserialization failed.
    #[error("invalid config: {reason}")]
    InvalidConfig {
        /// The underlying error message.
        reason: String,
    },
}
