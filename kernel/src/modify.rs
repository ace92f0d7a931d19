mod document;

pub use self::document::*;
