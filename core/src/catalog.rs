//! Named predicates — The `is()` catalogue
//!
//! Common predicates built once, on first access, and shared for the rest of
//! the process. Plain entries (`is().enter`, `is().letter`) are ready-made
//! [`KeyPredicate`]s; modifier families (`is().ctrl`, `is().ctrl.alt`) are
//! factories that guard whatever keys they are given.
//!
//! # Anchoring
//!
//! Every character-class entry (`letter`, `numeral`, `alphanumeric`, ...) is
//! anchored and matches exactly one character. Multi-character key names such
//! as `"Enter"` are never letters.

use crate::{KeyError, KeyPredicate, Modifier};
use once_cell::sync::Lazy;
use regex::Regex;

static IS: Lazy<Is> = Lazy::new(Is::build);

/// The process-wide catalogue of named predicates.
///
/// ```
/// use fluent_keys::{is, KeyEvent};
///
/// assert!(is().enter.evaluate(&KeyEvent::new("Enter")));
/// assert!(is().ctrl.alt.plus(["Delete"]).evaluate(
///     &KeyEvent::new("Delete").with_ctrl().with_alt()
/// ));
/// ```
#[must_use]
pub fn is() -> &'static Is {
    &IS
}

/// Dotted names of the plain entries, in catalogue order.
const NAMES: [&str; 11] = [
    "enter",
    "escape",
    "space",
    "backspace",
    "delete",
    "letter",
    "lowercase.letter",
    "uppercase.letter",
    "numeral",
    "number",
    "alphanumeric",
];

/// Named predicates. Obtain the shared instance with [`is()`].
#[derive(Debug)]
pub struct Is {
    /// `"Enter"`.
    pub enter: KeyPredicate,
    /// `"Escape"`.
    pub escape: KeyPredicate,
    /// The space bar, `" "`.
    pub space: KeyPredicate,
    /// `"Backspace"`.
    pub backspace: KeyPredicate,
    /// `"Delete"`.
    pub delete: KeyPredicate,
    /// A single ASCII letter.
    pub letter: KeyPredicate,
    /// `lowercase.letter`: a single `a`-`z`.
    pub lowercase: CaseFamily,
    /// `uppercase.letter`: a single `A`-`Z`.
    pub uppercase: CaseFamily,
    /// A single digit.
    pub numeral: KeyPredicate,
    /// Same as [`numeral`](Self::numeral).
    pub number: KeyPredicate,
    /// A single ASCII letter or digit.
    pub alphanumeric: KeyPredicate,
    /// Control-guarded factories, with nested `alt` and `shift` families.
    pub ctrl: CtrlFamily,
    /// Alt-guarded factories.
    pub alt: ModifierFamily,
    /// Shift-guarded factories.
    pub shift: ModifierFamily,
}

impl Is {
    fn build() -> Self {
        let table = Self {
            enter: KeyPredicate::matches(["Enter"]),
            escape: KeyPredicate::matches(["Escape"]),
            space: KeyPredicate::matches([" "]),
            backspace: KeyPredicate::matches(["Backspace"]),
            delete: KeyPredicate::matches(["Delete"]),
            letter: class("^[a-zA-Z]$"),
            lowercase: CaseFamily {
                letter: class("^[a-z]$"),
            },
            uppercase: CaseFamily {
                letter: class("^[A-Z]$"),
            },
            numeral: class("^[0-9]$"),
            number: class("^[0-9]$"),
            alphanumeric: class("^[a-zA-Z0-9]$"),
            ctrl: CtrlFamily {
                own: ModifierFamily::new(&[Modifier::Ctrl]),
                alt: ModifierFamily::new(&[Modifier::Ctrl, Modifier::Alt]),
                shift: ModifierFamily::new(&[Modifier::Ctrl, Modifier::Shift]),
            },
            alt: ModifierFamily::new(&[Modifier::Alt]),
            shift: ModifierFamily::new(&[Modifier::Shift]),
        };
        log::debug!("built named key predicate table ({} entries)", NAMES.len());
        table
    }

    /// Look up a plain entry by its dotted name (e.g. `"lowercase.letter"`).
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&KeyPredicate> {
        let predicate = match name {
            "enter" => &self.enter,
            "escape" => &self.escape,
            "space" => &self.space,
            "backspace" => &self.backspace,
            "delete" => &self.delete,
            "letter" => &self.letter,
            "lowercase.letter" => &self.lowercase.letter,
            "uppercase.letter" => &self.uppercase.letter,
            "numeral" => &self.numeral,
            "number" => &self.number,
            "alphanumeric" => &self.alphanumeric,
            _ => return None,
        };
        Some(predicate)
    }

    /// Like [`get`](Self::get), but reports the available names on a miss.
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::UnknownName`] if `name` is not a plain entry.
    pub fn lookup(&self, name: &str) -> Result<&KeyPredicate, KeyError> {
        self.get(name).ok_or_else(|| KeyError::UnknownName {
            name: name.to_owned(),
            available: NAMES.iter().map(|n| (*n).to_owned()).collect(),
        })
    }

    /// Dotted names of all plain entries, in a stable order.
    #[must_use]
    pub fn names(&self) -> &'static [&'static str] {
        &NAMES
    }
}

/// Compile one of the catalogue's literal patterns.
///
/// These patterns are constants covered by the tests below, so a failure here
/// is a bug in this file rather than a caller error.
#[allow(clippy::expect_used)]
fn class(pattern: &'static str) -> KeyPredicate {
    let re = Regex::new(pattern).expect("catalogue pattern must compile");
    crate::meets_regex(re)
}

/// A case-qualified family: `lowercase.letter`, `uppercase.letter`.
#[derive(Debug)]
pub struct CaseFamily {
    /// A single letter of this case.
    pub letter: KeyPredicate,
}

/// Factories that wrap a leaf in a fixed chain of modifier guards.
///
/// `and`, `plus` and `matches` are synonyms; pick whichever reads best at the
/// call site.
#[derive(Debug, Clone, Copy)]
pub struct ModifierFamily {
    modifiers: &'static [Modifier],
}

impl ModifierFamily {
    fn new(modifiers: &'static [Modifier]) -> Self {
        Self { modifiers }
    }

    /// The guards this family applies, outermost first.
    #[must_use]
    pub fn modifiers(&self) -> &'static [Modifier] {
        self.modifiers
    }

    /// Guarded regex search on the key.
    ///
    /// # Errors
    ///
    /// See [`KeyPredicate::meets`].
    pub fn meets(&self, pattern: &str) -> Result<KeyPredicate, KeyError> {
        KeyPredicate::meets(pattern).map(|leaf| self.wrap(leaf))
    }

    /// Guarded search with a pre-compiled expression.
    #[must_use]
    pub fn meets_regex(&self, re: Regex) -> KeyPredicate {
        self.wrap(crate::meets_regex(re))
    }

    /// Guarded key-set match. Same as [`matches`](Self::matches).
    pub fn and<I, S>(&self, keys: I) -> KeyPredicate
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.matches(keys)
    }

    /// Guarded key-set match. Same as [`matches`](Self::matches).
    pub fn plus<I, S>(&self, keys: I) -> KeyPredicate
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.matches(keys)
    }

    /// Guarded key-set match.
    pub fn matches<I, S>(&self, keys: I) -> KeyPredicate
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.wrap(KeyPredicate::matches(keys))
    }

    /// Wrap `leaf` in this family's guards (outermost first).
    #[must_use]
    pub fn wrap(&self, leaf: KeyPredicate) -> KeyPredicate {
        self.modifiers
            .iter()
            .rev()
            .fold(leaf, |inner, modifier| KeyPredicate::guard(*modifier, inner))
    }
}

/// The `ctrl` family: its own factories plus `ctrl.alt` and `ctrl.shift`.
#[derive(Debug, Clone, Copy)]
pub struct CtrlFamily {
    own: ModifierFamily,
    /// Control and alt.
    pub alt: ModifierFamily,
    /// Control and shift.
    pub shift: ModifierFamily,
}

impl CtrlFamily {
    /// Control-guarded regex search.
    ///
    /// # Errors
    ///
    /// See [`KeyPredicate::meets`].
    pub fn meets(&self, pattern: &str) -> Result<KeyPredicate, KeyError> {
        self.own.meets(pattern)
    }

    /// Control-guarded search with a pre-compiled expression.
    #[must_use]
    pub fn meets_regex(&self, re: Regex) -> KeyPredicate {
        self.own.meets_regex(re)
    }

    /// Control-guarded key-set match.
    pub fn and<I, S>(&self, keys: I) -> KeyPredicate
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.own.matches(keys)
    }

    /// Control-guarded key-set match.
    pub fn plus<I, S>(&self, keys: I) -> KeyPredicate
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.own.matches(keys)
    }

    /// Control-guarded key-set match.
    pub fn matches<I, S>(&self, keys: I) -> KeyPredicate
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.own.matches(keys)
    }

    /// The plain control family, for code that takes a [`ModifierFamily`].
    #[must_use]
    pub fn family(&self) -> ModifierFamily {
        self.own
    }
}
