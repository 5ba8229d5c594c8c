//! Evaluation trace for debugging predicate behavior.
//!
//! [`PredicateTrace`] records the path [`KeyPredicate::evaluate`] takes: each
//! guard checked (outermost first) and, if every guard held, what the leaf
//! decided. Produce one with
//! [`KeyPredicate::evaluate_with_trace`](crate::KeyPredicate::evaluate_with_trace).
//!
//! # Example
//!
//! ```
//! use fluent_keys::{is, KeyEvent};
//!
//! let trace = is().ctrl.alt.plus(["Delete"]).evaluate_with_trace(&KeyEvent::new("Delete").with_alt());
//! assert!(!trace.matched());
//! for step in &trace.guards {
//!     println!("{}: held={}", step.modifier, step.held);
//! }
//! ```
//!
//! [`KeyPredicate::evaluate`]: crate::KeyPredicate::evaluate

use crate::Modifier;
use std::fmt;

/// Trace of a predicate evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredicateTrace {
    /// Final result; always equal to `evaluate()` on the same event.
    pub matched: bool,
    /// The key name the event carried.
    pub key: String,
    /// Guards checked, outermost first. Ends at the first guard whose
    /// modifier was not held.
    pub guards: Vec<GuardStep>,
    /// The leaf outcome, or `None` when a guard stopped evaluation.
    pub leaf: Option<LeafStep>,
}

/// One modifier guard that was checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuardStep {
    /// The modifier this guard checks.
    pub modifier: Modifier,
    /// Whether the modifier was held.
    pub held: bool,
}

/// The leaf test on the key name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafStep {
    /// Whether the key matched.
    pub matched: bool,
    /// Display form of the matcher (e.g. `matches("Enter")`).
    pub matcher: String,
}

impl PredicateTrace {
    /// Get the overall match result.
    #[must_use]
    pub fn matched(&self) -> bool {
        self.matched
    }

    /// The guard that stopped evaluation, if any.
    #[must_use]
    pub fn failed_guard(&self) -> Option<Modifier> {
        self.guards.iter().find(|g| !g.held).map(|g| g.modifier)
    }
}

fn verdict(matched: bool) -> &'static str {
    if matched {
        "match"
    } else {
        "no match"
    }
}

/// Renders one line per step, each guard indented one level deeper.
impl fmt::Display for PredicateTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (depth, step) in self.guards.iter().enumerate() {
            let state = if step.held { "held" } else { "not held" };
            writeln!(
                f,
                "{:pad$}{} ({state}): {}",
                "",
                step.modifier,
                verdict(self.matched),
                pad = depth * 2
            )?;
        }
        if let Some(leaf) = &self.leaf {
            writeln!(
                f,
                "{:pad$}{} on {:?}: {}",
                "",
                leaf.matcher,
                self.key,
                verdict(leaf.matched),
                pad = self.guards.len() * 2
            )?;
        }
        Ok(())
    }
}
