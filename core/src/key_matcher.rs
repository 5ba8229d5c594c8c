//! `KeyMatcher` — Leaf tests on the key name
//!
//! A `KeyMatcher` looks only at [`KeyEvent::key`](crate::KeyEvent::key) and
//! ignores every modifier. Modifiers are the business of guards in
//! [`KeyPredicate`](crate::KeyPredicate).
//!
//! # Available Matchers
//!
//! - [`KeyMatcher::AnyOf`] — Exact, case-sensitive equality against a key set
//! - [`KeyMatcher::Pattern`] — Regular expression search (unanchored)

use crate::{KeyError, MAX_REGEX_PATTERN_LENGTH};
use regex::Regex;
use std::fmt;

/// A leaf test on the key name.
///
/// # Example
///
/// ```
/// use fluent_keys::KeyMatcher;
///
/// let enter_or_escape = KeyMatcher::any_of(["Enter", "Escape"]);
/// assert!(enter_or_escape.matches("Escape"));
/// assert!(!enter_or_escape.matches("escape")); // case-sensitive
///
/// // Patterns search, they do not anchor: anchor explicitly when needed.
/// let has_digit = KeyMatcher::pattern(r"[0-9]").unwrap();
/// assert!(has_digit.matches("F12"));
/// let one_digit = KeyMatcher::pattern(r"^[0-9]$").unwrap();
/// assert!(!one_digit.matches("F12"));
/// ```
#[derive(Clone)]
pub enum KeyMatcher {
    /// Matches when the key equals any listed name. An empty list never matches.
    AnyOf(Vec<String>),
    /// Matches when the expression finds a match anywhere in the key.
    Pattern(Regex),
}

impl KeyMatcher {
    /// Create a key-set matcher.
    pub fn any_of<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::AnyOf(keys.into_iter().map(Into::into).collect())
    }

    /// Compile a regex matcher.
    ///
    /// The pattern is compiled here, so a bad pattern is reported before any
    /// event is seen.
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::PatternTooLong`] if the pattern exceeds
    /// [`MAX_REGEX_PATTERN_LENGTH`], or [`KeyError::InvalidPattern`] if it
    /// does not compile.
    pub fn pattern(pattern: &str) -> Result<Self, KeyError> {
        if pattern.len() > MAX_REGEX_PATTERN_LENGTH {
            return Err(KeyError::PatternTooLong {
                len: pattern.len(),
                max: MAX_REGEX_PATTERN_LENGTH,
            });
        }
        Regex::new(pattern)
            .map(Self::Pattern)
            .map_err(|e| KeyError::InvalidPattern {
                pattern: pattern.to_owned(),
                reason: e.to_string(),
            })
    }

    /// Check the key name against this matcher.
    #[must_use]
    pub fn matches(&self, key: &str) -> bool {
        match self {
            Self::AnyOf(keys) => keys.iter().any(|k| k == key),
            Self::Pattern(re) => re.is_match(key),
        }
    }

    /// The literal keys, if this is a key-set matcher.
    #[must_use]
    pub fn keys(&self) -> Option<&[String]> {
        match self {
            Self::AnyOf(keys) => Some(keys),
            Self::Pattern(_) => None,
        }
    }

    /// The regex source, if this is a pattern matcher.
    #[must_use]
    pub fn as_pattern(&self) -> Option<&str> {
        match self {
            Self::AnyOf(_) => None,
            Self::Pattern(re) => Some(re.as_str()),
        }
    }
}

impl From<Regex> for KeyMatcher {
    fn from(re: Regex) -> Self {
        Self::Pattern(re)
    }
}

impl fmt::Debug for KeyMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AnyOf(keys) => f.debug_tuple("AnyOf").field(keys).finish(),
            Self::Pattern(re) => f.debug_tuple("Pattern").field(&re.as_str()).finish(),
        }
    }
}

impl fmt::Display for KeyMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AnyOf(keys) => {
                f.write_str("matches(")?;
                for (i, key) in keys.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key:?}")?;
                }
                f.write_str(")")
            }
            Self::Pattern(re) => write!(f, "meets(/{}/)", re.as_str()),
        }
    }
}
