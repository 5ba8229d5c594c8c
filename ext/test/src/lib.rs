//! fluent-keys-test: Helpers for testing key predicates
//!
//! Provides a counting action and event shorthands so tests can assert how
//! often a handler fired. With the `fixtures` feature it also runs the YAML
//! conformance fixtures under `fixtures/`.
//!
//! # Example
//!
//! ```
//! use fluent_keys_test::prelude::*;
//!
//! let recorder = Recorder::new();
//! let handler = is().ctrl.and(["o"]).then(recorder.action());
//!
//! handler.handle(&chord("o", &[Modifier::Ctrl]));
//! handler.handle(&key("o"));
//!
//! assert_eq!(recorder.count(), 1);
//! ```

use fluent_keys::{KeyEvent, Modifier};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[cfg(feature = "fixtures")]
pub mod fixture;

/// Counts how many times its actions have run.
///
/// Clones share the same counter, so a recorder can be moved into a handler
/// on another thread and still be read here.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    calls: Arc<AtomicUsize>,
}

impl Recorder {
    /// Create a recorder with a zero count.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An action that bumps this recorder's count.
    #[must_use]
    pub fn action(&self) -> impl Fn() + Send + Sync + 'static {
        let calls = Arc::clone(&self.calls);
        move || {
            calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    /// Number of times any of this recorder's actions ran.
    #[must_use]
    pub fn count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Reset the count to zero.
    pub fn reset(&self) {
        self.calls.store(0, Ordering::SeqCst);
    }
}

/// An event for `key` with no modifiers.
#[must_use]
pub fn key(key: &str) -> KeyEvent {
    KeyEvent::new(key)
}

/// An event for `key` with the given modifiers held.
#[must_use]
pub fn chord(key: &str, modifiers: &[Modifier]) -> KeyEvent {
    modifiers
        .iter()
        .fold(KeyEvent::new(key), |event, modifier| event.with(*modifier))
}

/// One event per combination of the three modifier flags (eight in total).
#[must_use]
pub fn every_chord(key: &str) -> Vec<KeyEvent> {
    (0..8u8)
        .map(|bits| KeyEvent {
            key: key.to_owned(),
            ctrl_key: bits & 1 != 0,
            alt_key: bits & 2 != 0,
            shift_key: bits & 4 != 0,
        })
        .collect()
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use super::{chord, every_chord, key, Recorder};
    pub use fluent_keys::prelude::*;
}

#[cfg(test)]
mod tests {
    use super::*;
    use fluent_keys::{ctrl, is, matches};

    #[test]
    fn recorder_counts_shared_across_clones() {
        let recorder = Recorder::new();
        let clone = recorder.clone();
        let action = clone.action();

        action();
        action();
        assert_eq!(recorder.count(), 2);

        recorder.reset();
        assert_eq!(clone.count(), 0);
    }

    #[test]
    fn chord_sets_requested_flags() {
        let event = chord("Delete", &[Modifier::Ctrl, Modifier::Alt]);
        assert!(event.ctrl_key);
        assert!(event.alt_key);
        assert!(!event.shift_key);
        assert_eq!(key("x"), KeyEvent::new("x"));
    }

    #[test]
    fn every_chord_is_exhaustive() {
        let events = every_chord("k");
        assert_eq!(events.len(), 8);
        let p = ctrl(matches(["k"]));
        assert_eq!(events.iter().filter(|e| p.evaluate(e)).count(), 4);
    }

    #[test]
    fn recorder_with_handler_on_other_thread() {
        let recorder = Recorder::new();
        let handler = is().alt.matches(["F4"]).then(recorder.action());

        std::thread::spawn(move || {
            handler.handle(&chord("F4", &[Modifier::Alt]));
            handler.handle(&key("F4"));
        })
        .join()
        .unwrap();

        assert_eq!(recorder.count(), 1);
    }
}
