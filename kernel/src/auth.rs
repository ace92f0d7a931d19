use crate::entity::{Credentials, Session};
use crate::KernelError;

#[async_trait::async_trait]
pub trait Authenticator: 'static + Sync + Send {
    async fn login(&self, credentials: &Credentials) -> error_stack::Result<Session, KernelError>;
    async fn logout(&self, session: &Session) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnAuthenticator: 'static + Sync + Send {
    type Authenticator: Authenticator;
    fn authenticator(&self) -> &Self::Authenticator;
}
