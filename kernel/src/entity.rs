mod catalog;
mod common;
mod document;
mod registration;
mod session;
mod user;
mod volume;

pub use self::{catalog::*, common::*, document::*, registration::*, session::*, user::*, volume::*};
