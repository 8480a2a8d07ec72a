//! Field validation rules
//!
//! Pure predicates over raw field text. Every edit request passes through
//! these rules before the ledger store applies it; each rule has a fixed
//! human-readable message that callers surface to the user.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::models::{Money, TransactionDraft, TransactionInput, TransactionPatch, TransactionPatchInput};

pub const DESCRIPTION_MESSAGE: &str = "No leading/trailing spaces allowed";
pub const DUPLICATE_WORD_MESSAGE: &str = "Duplicate words detected (e.g., \"coffee coffee\")";
pub const AMOUNT_MESSAGE: &str = "Enter a valid amount (e.g., 12.50)";
pub const DATE_MESSAGE: &str = "Use YYYY-MM-DD format";
pub const CATEGORY_MESSAGE: &str = "Letters, spaces, and hyphens only";

static DESCRIPTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\S(?:[^\n\r\x{2028}\x{2029}]*\S)?$").expect("description pattern")
});
static WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("word pattern"));
static AMOUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(0|[1-9][0-9]*)(\.[0-9]{1,2})?$").expect("amount pattern"));
// Day ceiling is 31 for every month, so 2024-02-31 passes. Known limitation.
static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-(0[1-9]|1[0-2])-(0[1-9]|[12][0-9]|3[01])$").expect("date pattern")
});
static CATEGORY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]+(?:[ -][A-Za-z]+)*$").expect("category pattern"));

/// Transaction field a rule applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Description,
    Amount,
    Category,
    Date,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Description => write!(f, "description"),
            Self::Amount => write!(f, "amount"),
            Self::Category => write!(f, "category"),
            Self::Date => write!(f, "date"),
        }
    }
}

/// A violated field rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Leading or trailing whitespace, or empty
    DescriptionFormat,
    /// Two adjacent identical words
    DuplicateWord { word: String },
    Amount,
    Date,
    Category,
}

impl ValidationError {
    /// The field this error belongs to
    pub fn field(&self) -> Field {
        match self {
            Self::DescriptionFormat | Self::DuplicateWord { .. } => Field::Description,
            Self::Amount => Field::Amount,
            Self::Date => Field::Date,
            Self::Category => Field::Category,
        }
    }

    /// The fixed user-facing message for the violated rule
    pub fn message(&self) -> &'static str {
        match self {
            Self::DescriptionFormat => DESCRIPTION_MESSAGE,
            Self::DuplicateWord { .. } => DUPLICATE_WORD_MESSAGE,
            Self::Amount => AMOUNT_MESSAGE,
            Self::Date => DATE_MESSAGE,
            Self::Category => CATEGORY_MESSAGE,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field(), self.message())
    }
}

impl std::error::Error for ValidationError {}

/// Validate a description.
///
/// The whitespace rule is checked first; the duplicate-word rule is only
/// reported when the format is fine.
pub fn validate_description(text: &str) -> Result<(), ValidationError> {
    if !DESCRIPTION_RE.is_match(text) {
        return Err(ValidationError::DescriptionFormat);
    }
    if let Some(word) = find_duplicate_word(text) {
        return Err(ValidationError::DuplicateWord { word });
    }
    Ok(())
}

/// Find the first word immediately repeated (case-insensitive) after whitespace
pub fn find_duplicate_word(text: &str) -> Option<String> {
    let mut words = WORD_RE.find_iter(text);
    let mut prev = words.next()?;

    for word in words {
        let gap = &text[prev.end()..word.start()];
        let separated_by_space = !gap.is_empty() && gap.chars().all(char::is_whitespace);
        if separated_by_space && prev.as_str().to_lowercase() == word.as_str().to_lowercase() {
            return Some(word.as_str().to_string());
        }
        prev = word;
    }

    None
}

/// Validate an amount: non-negative, at most two fractional digits
pub fn validate_amount(text: &str) -> Result<(), ValidationError> {
    if AMOUNT_RE.is_match(text) {
        Ok(())
    } else {
        Err(ValidationError::Amount)
    }
}

/// Validate a `YYYY-MM-DD` date (month 01-12, day 01-31)
pub fn validate_date(text: &str) -> Result<(), ValidationError> {
    if DATE_RE.is_match(text) {
        Ok(())
    } else {
        Err(ValidationError::Date)
    }
}

/// Validate a category: alphabetic words separated by single spaces or hyphens
pub fn validate_category(text: &str) -> Result<(), ValidationError> {
    if CATEGORY_RE.is_match(text) {
        Ok(())
    } else {
        Err(ValidationError::Category)
    }
}

pub fn is_valid_description(text: &str) -> bool {
    validate_description(text).is_ok()
}

pub fn is_valid_amount(text: &str) -> bool {
    validate_amount(text).is_ok()
}

pub fn is_valid_date(text: &str) -> bool {
    validate_date(text).is_ok()
}

pub fn is_valid_category(text: &str) -> bool {
    validate_category(text).is_ok()
}

fn parse_amount(text: &str) -> Result<Money, ValidationError> {
    validate_amount(text)?;
    Money::parse(text).map_err(|_| ValidationError::Amount)
}

/// Validate raw input and turn it into a draft ready for the ledger store.
///
/// Fields are checked in description, amount, category, date order and the
/// first violation is returned.
pub fn validate_input(input: &TransactionInput) -> Result<TransactionDraft, ValidationError> {
    validate_description(&input.description)?;
    let amount = parse_amount(&input.amount)?;
    validate_category(&input.category)?;
    validate_date(&input.date)?;

    Ok(TransactionDraft {
        description: input.description.clone(),
        amount,
        category: input.category.clone(),
        date: input.date.clone(),
    })
}

/// Validate only the fields present in a patch request
pub fn validate_patch(input: &TransactionPatchInput) -> Result<TransactionPatch, ValidationError> {
    if let Some(description) = &input.description {
        validate_description(description)?;
    }
    let amount = input.amount.as_deref().map(parse_amount).transpose()?;
    if let Some(category) = &input.category {
        validate_category(category)?;
    }
    if let Some(date) = &input.date {
        validate_date(date)?;
    }

    Ok(TransactionPatch {
        description: input.description.clone(),
        amount,
        category: input.category.clone(),
        date: input.date.clone(),
    })
}
