//! Pattern matching shared by the credential check and the list filter.
//!
//! In the default [`PatternMode::Permissive`] mode, caller-supplied text is
//! compiled as a regular expression without escaping and matched anywhere in
//! the subject. A pattern such as `.*` therefore satisfies any credential
//! check, and the list filter accepts arbitrary regex syntax through the
//! username. This is the service's established behavior and is kept as the
//! default; [`PatternMode::Hardened`] is the opt-in alternative.
//!
//! Matching uses the `regex` crate, which runs in time linear in the subject,
//! so a hostile pattern can cost CPU proportional to its size but cannot
//! backtrack catastrophically. A pattern that fails to compile surfaces as
//! [`ResolveError::InvalidPattern`].

use crate::error::{ResolveError, Result};
use regex::Regex;

/// How caller text is interpreted when it is matched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PatternMode {
    /// Caller text is an unescaped regex, matched anywhere in the subject.
    #[default]
    Permissive,
    /// Hardened: credentials and usernames compare by exact equality, and
    /// list filter text is escaped before interpolation.
    Hardened,
}

/// Compile `pattern`, mapping failure to [`ResolveError::InvalidPattern`].
pub fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| ResolveError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })
}

/// Does `pattern`, as a regex, match anywhere within `subject`?
pub fn matches(pattern: &str, subject: &str) -> Result<bool> {
    Ok(compile(pattern)?.is_match(subject))
}

/// Build the list filter pattern: anything, the text, anything.
pub fn list_filter(text: &str) -> String {
    format!("(.*){}(.*)", text)
}

impl PatternMode {
    /// Check caller-supplied `pattern` against a stored `subject`.
    pub fn check(self, pattern: &str, subject: &str) -> Result<bool> {
        match self {
            PatternMode::Permissive => matches(pattern, subject),
            PatternMode::Hardened => Ok(pattern == subject),
        }
    }

    /// Build the compiled list filter for `text`.
    pub fn list_filter(self, text: &str) -> Result<Regex> {
        match self {
            PatternMode::Permissive => compile(&list_filter(text)),
            PatternMode::Hardened => compile(&list_filter(&regex::escape(text))),
        }
    }

    pub fn is_hardened(self) -> bool {
        self == PatternMode::Hardened
    }
}
