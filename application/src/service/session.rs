use kernel::interface::auth::{Authenticator, DependOnAuthenticator};
use kernel::prelude::entity::{Credentials, Session};
use kernel::KernelError;

use crate::transfer::LoginDto;

#[async_trait::async_trait]
pub trait LoginService: 'static + Sync + Send + DependOnAuthenticator {
    async fn start_session(&self, dto: LoginDto) -> error_stack::Result<Session, KernelError> {
        let credentials = Credentials::new(dto.username, dto.password);
        let session = self.authenticator().login(&credentials).await?;
        tracing::info!(username = %credentials.username(), "Logged in");
        Ok(session)
    }
}

impl<T> LoginService for T where T: DependOnAuthenticator {}

#[async_trait::async_trait]
pub trait LogoutService: 'static + Sync + Send + DependOnAuthenticator {
    /// Consumes the session; it must not be used again even if the backend
    /// could not be told.
    async fn end_session(&self, session: Session) -> error_stack::Result<(), KernelError> {
        let result = self.authenticator().logout(&session).await;
        if let Err(report) = &result {
            tracing::warn!("Logout was not acknowledged: {report:?}");
        }
        result
    }
}

impl<T> LogoutService for T where T: DependOnAuthenticator {}

#[cfg(test)]
mod test {
    use std::sync::Mutex;

    use error_stack::Report;
    use kernel::interface::auth::{Authenticator, DependOnAuthenticator};
    use kernel::prelude::entity::{AccessToken, Credentials, Session};
    use kernel::KernelError;

    use super::{LoginService, LogoutService};
    use crate::transfer::LoginDto;

    #[derive(Default)]
    struct FakeAuthenticator {
        revoked: Mutex<Vec<String>>,
    }

    #[async_trait::async_trait]
    impl Authenticator for FakeAuthenticator {
        async fn login(
            &self,
            credentials: &Credentials,
        ) -> error_stack::Result<Session, KernelError> {
            if credentials.password() != "secret" {
                return Err(Report::new(KernelError::Rejected));
            }
            Ok(Session::new(AccessToken::new(format!(
                "token-{}",
                credentials.username()
            ))))
        }

        async fn logout(&self, session: &Session) -> error_stack::Result<(), KernelError> {
            self.revoked
                .lock()
                .unwrap()
                .push(session.token().as_ref().clone());
            Ok(())
        }
    }

    impl DependOnAuthenticator for FakeAuthenticator {
        type Authenticator = Self;
        fn authenticator(&self) -> &Self::Authenticator {
            self
        }
    }

    #[tokio::test]
    async fn session_round() {
        let auth = FakeAuthenticator::default();
        let session = auth
            .start_session(LoginDto {
                username: "biblioteca".into(),
                password: "secret".into(),
            })
            .await
            .unwrap();
        assert_eq!(session.bearer(), "Bearer token-biblioteca");

        auth.end_session(session).await.unwrap();
        assert_eq!(*auth.revoked.lock().unwrap(), vec!["token-biblioteca".to_string()]);
    }

    #[tokio::test]
    async fn wrong_password_is_rejected() {
        let auth = FakeAuthenticator::default();
        let report = auth
            .start_session(LoginDto {
                username: "biblioteca".into(),
                password: "nope".into(),
            })
            .await
            .unwrap_err();
        assert_eq!(report.current_context(), &KernelError::Rejected);
    }
}
