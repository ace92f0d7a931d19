use error_stack::Report;

use kernel::KernelError;

use crate::error::DriverError;

pub use self::{api::*, config::*};

mod api;
mod config;
pub mod error;
pub mod logging;

pub(crate) fn env(key: &str) -> error_stack::Result<String, KernelError> {
    dotenvy::var(key).map_err(|error| {
        Report::new(DriverError::from(error))
            .change_context(KernelError::Internal)
            .attach_printable(format!("Failed to read environment variable {key}"))
    })
}
