//! `KeyMatchSpec` — Config-level predicate specification
//!
//! This type represents a user's *intent* (e.g. "ctrl + alt + Delete") as
//! plain data that deserializes from YAML or JSON. It compiles to a runtime
//! [`KeyPredicate`] via [`compile()`](KeyMatchSpec::compile), which is where
//! all validation happens.
//!
//! # Naming: Spec vs Predicate
//!
//! - [`KeyMatchSpec`] = what the user wrote
//! - [`KeyPredicate`] = what evaluates events

use crate::{is, KeyError, KeyPredicate, Modifier, MAX_DEPTH, MAX_KEYS, MAX_KEY_LENGTH};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A predicate specification from user configuration.
///
/// Uses `#[serde(tag = "type")]` for discriminated union deserialization:
///
/// ```yaml
/// type: ctrl
/// predicate:
///   type: alt
///   predicate:
///     type: matches
///     keys: [Delete]
/// ```
///
/// # Example
///
/// ```
/// use fluent_keys::{KeyEvent, KeyMatchSpec};
///
/// let spec = KeyMatchSpec::Ctrl {
///     predicate: Box::new(KeyMatchSpec::Named { name: "letter".into() }),
/// };
/// let predicate = spec.compile().unwrap();
/// assert!(predicate.evaluate(&KeyEvent::new("k").with_ctrl()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", deny_unknown_fields)]
pub enum KeyMatchSpec {
    /// Key equals any of `keys`. An empty list never matches.
    Matches {
        /// Literal key names, compared exactly. Required; write `keys: []`
        /// for a predicate that never matches.
        keys: Vec<String>,
    },

    /// Regex search on the key (unanchored unless the pattern anchors).
    Meets {
        /// The regular expression.
        pattern: String,
    },

    /// A plain entry of the [`is()`](crate::is) catalogue, by dotted name.
    Named {
        /// E.g. `"enter"` or `"lowercase.letter"`.
        name: String,
    },

    /// Control must be held.
    Ctrl {
        /// The wrapped specification.
        predicate: Box<KeyMatchSpec>,
    },

    /// Alt must be held.
    Alt {
        /// The wrapped specification.
        predicate: Box<KeyMatchSpec>,
    },

    /// Shift must be held.
    Shift {
        /// The wrapped specification.
        predicate: Box<KeyMatchSpec>,
    },
}

impl KeyMatchSpec {
    /// Wrap `inner` in a guard for `modifier`.
    #[must_use]
    pub fn guarded(modifier: Modifier, inner: KeyMatchSpec) -> Self {
        let predicate = Box::new(inner);
        match modifier {
            Modifier::Ctrl => Self::Ctrl { predicate },
            Modifier::Alt => Self::Alt { predicate },
            Modifier::Shift => Self::Shift { predicate },
        }
    }

    /// Split a guard into its modifier and wrapped spec.
    fn as_guard(&self) -> Option<(Modifier, &KeyMatchSpec)> {
        match self {
            Self::Ctrl { predicate } => Some((Modifier::Ctrl, predicate)),
            Self::Alt { predicate } => Some((Modifier::Alt, predicate)),
            Self::Shift { predicate } => Some((Modifier::Shift, predicate)),
            Self::Matches { .. } | Self::Meets { .. } | Self::Named { .. } => None,
        }
    }

    /// Depth of this spec: 1 for a leaf, plus 1 per guard.
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut depth = 1;
        let mut node = self;
        while let Some((_, inner)) = node.as_guard() {
            depth += 1;
            node = inner;
        }
        depth
    }

    /// Validate and compile this spec into a runtime [`KeyPredicate`].
    ///
    /// # Errors
    ///
    /// - [`KeyError::DepthExceeded`] if guards nest deeper than [`MAX_DEPTH`]
    /// - [`KeyError::TooManyKeys`] / [`KeyError::KeyTooLong`] for oversized key lists
    /// - [`KeyError::InvalidPattern`] / [`KeyError::PatternTooLong`] for bad regexes
    /// - [`KeyError::UnknownName`] for a name missing from the catalogue
    pub fn compile(&self) -> Result<KeyPredicate, KeyError> {
        let depth = self.depth();
        if depth > MAX_DEPTH {
            return Err(KeyError::DepthExceeded {
                depth,
                max: MAX_DEPTH,
            });
        }

        self.build()
    }

    /// Recursive build; depth is already bounded by `compile()`.
    fn build(&self) -> Result<KeyPredicate, KeyError> {
        match self {
            Self::Matches { keys } => {
                if keys.len() > MAX_KEYS {
                    return Err(KeyError::TooManyKeys {
                        count: keys.len(),
                        max: MAX_KEYS,
                    });
                }
                if let Some(key) = keys.iter().find(|k| k.len() > MAX_KEY_LENGTH) {
                    return Err(KeyError::KeyTooLong {
                        len: key.len(),
                        max: MAX_KEY_LENGTH,
                    });
                }
                Ok(KeyPredicate::matches(keys.iter().cloned()))
            }
            Self::Meets { pattern } => KeyPredicate::meets(pattern),
            Self::Named { name } => is().lookup(name).cloned(),
            Self::Ctrl { predicate } => Ok(crate::ctrl(predicate.build()?)),
            Self::Alt { predicate } => Ok(crate::alt(predicate.build()?)),
            Self::Shift { predicate } => Ok(crate::shift(predicate.build()?)),
        }
    }
}

impl fmt::Display for KeyMatchSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Matches { keys } => {
                f.write_str("matches(")?;
                for (i, key) in keys.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key:?}")?;
                }
                f.write_str(")")
            }
            Self::Meets { pattern } => write!(f, "meets(/{pattern}/)"),
            Self::Named { name } => write!(f, "is.{name}"),
            Self::Ctrl { predicate } => write!(f, "ctrl+{predicate}"),
            Self::Alt { predicate } => write!(f, "alt+{predicate}"),
            Self::Shift { predicate } => write!(f, "shift+{predicate}"),
        }
    }
}
