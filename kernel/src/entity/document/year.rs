use error_stack::Report;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use vodca::{AsRefln, Fromln};

use crate::KernelError;

pub const EARLIEST_YEAR: i32 = 1900;

pub fn current_year() -> i32 {
    OffsetDateTime::now_utc().year()
}

/// Four-digit publication year, kept as text because that is how it travels
/// in the form body.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize, Fromln, AsRefln)]
pub struct PublicationYear(String);

impl PublicationYear {
    pub fn new(input: impl AsRef<str>, current_year: i32) -> error_stack::Result<Self, KernelError> {
        let input = input.as_ref().trim();
        if input.len() != 4 || !input.chars().all(|c| c.is_ascii_digit()) {
            return Err(Report::new(KernelError::Invalid)
                .attach_printable(format!("Year must have exactly 4 digits: {input:?}")));
        }
        let year = input
            .parse::<i32>()
            .map_err(|e| Report::new(e).change_context(KernelError::Invalid))?;
        if !(EARLIEST_YEAR..=current_year).contains(&year) {
            return Err(Report::new(KernelError::Invalid).attach_printable(format!(
                "Year must be between {EARLIEST_YEAR} and {current_year}: {year}"
            )));
        }
        Ok(Self(input.to_string()))
    }

    /// Years offered for selection, newest first.
    pub fn selectable(current_year: i32) -> Vec<PublicationYear> {
        (EARLIEST_YEAR..=current_year)
            .rev()
            .map(|year| Self(year.to_string()))
            .collect()
    }
}
