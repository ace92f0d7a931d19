use std::fmt::{Debug, Formatter};

use vodca::{AsRefln, Fromln};

#[derive(Clone, PartialEq, Eq, Fromln, AsRefln)]
pub struct Password(String);

impl Password {
    pub fn new(password: impl Into<String>) -> Self {
        Self(password.into())
    }

    pub fn is_blank(&self) -> bool {
        self.0.is_empty()
    }
}

impl Debug for Password {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password(***)")
    }
}
