mod catalog;
mod document;
mod session;
mod user;

pub use self::{catalog::*, document::*, session::*, user::*};
