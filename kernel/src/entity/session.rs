use std::fmt::{Debug, Formatter};

use vodca::{AsRefln, Fromln, References};

#[derive(Clone, Eq, PartialEq, Fromln, AsRefln)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl Debug for AccessToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

/// Proof of an authenticated user. Everything that talks to the backend on the
/// user's behalf takes one of these explicitly.
#[derive(Debug, Clone, Eq, PartialEq, References)]
pub struct Session {
    token: AccessToken,
}

impl Session {
    pub fn new(token: AccessToken) -> Self {
        Self { token }
    }

    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token.0)
    }
}

#[derive(Clone, Eq, PartialEq, References)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}
