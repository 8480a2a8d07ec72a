//! Search matcher
//!
//! Compiles a user-supplied regular expression and matches it against the
//! description, category, and plain amount text of a transaction.

use std::borrow::Cow;

use regex::{Regex, RegexBuilder};

use crate::error::{LedgerError, LedgerResult};
use crate::models::Transaction;

pub const HIGHLIGHT_OPEN: &str = "<mark>";
pub const HIGHLIGHT_CLOSE: &str = "</mark>";

/// A compiled search pattern
#[derive(Debug, Clone)]
pub struct SearchMatcher {
    regex: Regex,
}

impl SearchMatcher {
    /// Compile a pattern, treating empty or invalid input as "no filter".
    ///
    /// An empty pattern and a pattern that fails to compile both return
    /// `None`; use [`SearchMatcher::try_compile`] to tell them apart.
    pub fn compile(pattern: &str, case_sensitive: bool) -> Option<Self> {
        Self::try_compile(pattern, case_sensitive).ok().flatten()
    }

    /// Compile a pattern; `Ok(None)` for empty input, `Err` for a bad pattern
    pub fn try_compile(pattern: &str, case_sensitive: bool) -> LedgerResult<Option<Self>> {
        if pattern.is_empty() {
            return Ok(None);
        }

        let regex = RegexBuilder::new(pattern)
            .case_insensitive(!case_sensitive)
            .build()
            .map_err(|e| LedgerError::InvalidPattern(e.to_string()))?;

        Ok(Some(Self { regex }))
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Whether the description, category or amount text matches
    pub fn matches(&self, record: &Transaction) -> bool {
        self.is_match(&record.description)
            || self.is_match(&record.category)
            || self.is_match(&record.amount.to_plain_string())
    }
}

/// Whether `record` passes the filter; no matcher passes everything
pub fn matches(record: &Transaction, matcher: Option<&SearchMatcher>) -> bool {
    matcher.map_or(true, |m| m.matches(record))
}

/// Records passing the filter, in their given order
pub fn filter<'a>(records: &'a [Transaction], matcher: Option<&SearchMatcher>) -> Vec<&'a Transaction> {
    records.iter().filter(|r| matches(r, matcher)).collect()
}

/// Wrap each match in `<mark>` tags
pub fn highlight<'t>(text: &'t str, matcher: Option<&SearchMatcher>) -> Cow<'t, str> {
    highlight_with(text, matcher, HIGHLIGHT_OPEN, HIGHLIGHT_CLOSE)
}

/// Wrap each match in the given markers
pub fn highlight_with<'t>(
    text: &'t str,
    matcher: Option<&SearchMatcher>,
    open: &str,
    close: &str,
) -> Cow<'t, str> {
    let Some(matcher) = matcher else {
        return Cow::Borrowed(text);
    };

    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    let mut changed = false;

    for m in matcher.regex.find_iter(text) {
        // Empty matches would only insert stray markers
        if m.is_empty() {
            continue;
        }
        out.push_str(&text[last..m.start()]);
        out.push_str(open);
        out.push_str(m.as_str());
        out.push_str(close);
        last = m.end();
        changed = true;
    }

    if !changed {
        return Cow::Borrowed(text);
    }
    out.push_str(&text[last..]);
    Cow::Owned(out)
}
