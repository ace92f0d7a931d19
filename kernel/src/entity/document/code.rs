use std::fmt::{Display, Formatter};

use vodca::References;

use crate::entity::Denomination;

pub const CONSECUTIVE_DIGITS: usize = 4;

/// Human-facing identifier of a document: the denomination prefix followed by
/// up to four digits. The prefix is never stored separately from the
/// denomination, so the code cannot drift away from it.
#[derive(Debug, Clone, Eq, PartialEq, Hash, References)]
pub struct ConsecutiveCode {
    denomination: Denomination,
    digits: String,
}

impl ConsecutiveCode {
    /// Prefix-only code.
    pub fn new(denomination: Denomination) -> Self {
        Self {
            denomination,
            digits: String::new(),
        }
    }

    /// Builds a code from raw user input. Anything that is not an ASCII digit
    /// is dropped and the rest is cut to four characters.
    pub fn with_digits(denomination: Denomination, input: impl AsRef<str>) -> Self {
        let digits = input
            .as_ref()
            .chars()
            .filter(char::is_ascii_digit)
            .take(CONSECUTIVE_DIGITS)
            .collect();
        Self {
            denomination,
            digits,
        }
    }

    /// Parses a full code such as `MI0001`.
    pub fn parse(code: &str) -> Option<Self> {
        let denomination = Denomination::ALL
            .into_iter()
            .filter(|denomination| code.starts_with(denomination.prefix()))
            .max_by_key(|denomination| denomination.prefix().len())?;
        let digits = &code[denomination.prefix().len()..];
        if digits.len() > CONSECUTIVE_DIGITS || !digits.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        Some(Self {
            denomination,
            digits: digits.to_string(),
        })
    }

    pub fn has_number(&self) -> bool {
        !self.digits.is_empty()
    }

    pub fn as_code(&self) -> String {
        format!("{}{}", self.denomination.prefix(), self.digits)
    }
}

impl Display for ConsecutiveCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.denomination.prefix(), self.digits)
    }
}
