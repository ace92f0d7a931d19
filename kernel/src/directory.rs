use crate::entity::{NewUser, Session, User, UserId};
use crate::KernelError;

/// The backend's user accounts.
#[async_trait::async_trait]
pub trait UserDirectory: 'static + Sync + Send {
    async fn find_all(&self, session: &Session) -> error_stack::Result<Vec<User>, KernelError>;
    /// The id the backend assigned, when its answer carried one.
    async fn create(
        &self,
        session: &Session,
        user: &NewUser,
    ) -> error_stack::Result<Option<UserId>, KernelError>;
    async fn update(&self, session: &Session, user: &User) -> error_stack::Result<(), KernelError>;
    async fn delete(&self, session: &Session, id: &UserId) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnUserDirectory: 'static + Sync + Send {
    type UserDirectory: UserDirectory;
    fn user_directory(&self) -> &Self::UserDirectory;
}
