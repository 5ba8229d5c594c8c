//! `KeyEvent` — The key-press shape every predicate reads
//!
//! A `KeyEvent` is supplied by the caller per invocation and never retained.
//! [`Modifier`] names one of its three boolean flags, so guards can be
//! parameterised over which flag they inspect.

use crate::KeyError;
use std::fmt;
use std::str::FromStr;

/// One key-press: the key name plus the ctrl/alt/shift flags.
///
/// `key` follows the host convention for key names: printable keys are the
/// character itself (`"a"`, `"?"`, `" "`), named keys are spelled out
/// (`"Enter"`, `"Escape"`, `"Backspace"`). Comparisons are case-sensitive.
///
/// With the `serde` feature the flags use the host field names
/// (`ctrlKey`, `altKey`, `shiftKey`) and default to `false` when absent.
///
/// # Example
///
/// ```
/// use fluent_keys::{KeyEvent, Modifier};
///
/// let event = KeyEvent::new("Delete").with_ctrl().with_alt();
/// assert!(Modifier::Ctrl.is_held(&event));
/// assert!(Modifier::Alt.is_held(&event));
/// assert!(!Modifier::Shift.is_held(&event));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct KeyEvent {
    /// The key name.
    pub key: String,
    /// Whether control was held.
    #[cfg_attr(feature = "serde", serde(default))]
    pub ctrl_key: bool,
    /// Whether alt was held.
    #[cfg_attr(feature = "serde", serde(default))]
    pub alt_key: bool,
    /// Whether shift was held.
    #[cfg_attr(feature = "serde", serde(default))]
    pub shift_key: bool,
}

impl KeyEvent {
    /// Create an event for `key` with no modifiers held.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    /// Mark control as held (builder pattern).
    #[must_use]
    pub fn with_ctrl(mut self) -> Self {
        self.ctrl_key = true;
        self
    }

    /// Mark alt as held (builder pattern).
    #[must_use]
    pub fn with_alt(mut self) -> Self {
        self.alt_key = true;
        self
    }

    /// Mark shift as held (builder pattern).
    #[must_use]
    pub fn with_shift(mut self) -> Self {
        self.shift_key = true;
        self
    }

    /// Mark `modifier` as held (builder pattern).
    #[must_use]
    pub fn with(self, modifier: Modifier) -> Self {
        match modifier {
            Modifier::Ctrl => self.with_ctrl(),
            Modifier::Alt => self.with_alt(),
            Modifier::Shift => self.with_shift(),
        }
    }

    /// Returns the key name.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for modifier in Modifier::ALL {
            if modifier.is_held(self) {
                write!(f, "{modifier}+")?;
            }
        }
        write!(f, "{:?}", self.key)
    }
}

/// A modifier flag on a [`KeyEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Modifier {
    /// The control key (`ctrlKey`).
    Ctrl,
    /// The alt key (`altKey`).
    Alt,
    /// The shift key (`shiftKey`).
    Shift,
}

impl Modifier {
    /// All modifiers, in the order guards are conventionally applied.
    pub const ALL: [Modifier; 3] = [Modifier::Ctrl, Modifier::Alt, Modifier::Shift];

    /// Whether this modifier's flag is set on `event`.
    #[must_use]
    pub fn is_held(self, event: &KeyEvent) -> bool {
        match self {
            Self::Ctrl => event.ctrl_key,
            Self::Alt => event.alt_key,
            Self::Shift => event.shift_key,
        }
    }

    /// Lowercase name used in configs and display.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Ctrl => "ctrl",
            Self::Alt => "alt",
            Self::Shift => "shift",
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Modifier {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => Ok(Self::Ctrl),
            "alt" => Ok(Self::Alt),
            "shift" => Ok(Self::Shift),
            _ => Err(KeyError::UnknownModifier { name: s.to_owned() }),
        }
    }
}
