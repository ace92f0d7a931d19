use error_stack::Report;
use reqwest::header::AUTHORIZATION;
use serde::{Deserialize, Serialize};

use kernel::interface::auth::Authenticator;
use kernel::prelude::entity::{AccessToken, Credentials, Session};
use kernel::KernelError;

use crate::api::{rejection, LibraryApi, LOGIN, LOGOUT};
use crate::error::ConvertError;

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    token: Option<String>,
    access_token: Option<String>,
}

#[async_trait::async_trait]
impl Authenticator for LibraryApi {
    #[tracing::instrument(skip_all, fields(username = %credentials.username()))]
    async fn login(&self, credentials: &Credentials) -> error_stack::Result<Session, KernelError> {
        let response = self
            .client
            .post(self.config.endpoint(LOGIN))
            .json(&LoginRequest {
                username: credentials.username(),
                password: credentials.password(),
            })
            .send()
            .await
            .convert_error()?;
        if !response.status().is_success() {
            return Err(rejection(response).await);
        }
        let body = response.json::<LoginResponse>().await.convert_error()?;
        let token = body.token.or(body.access_token).ok_or_else(|| {
            Report::new(KernelError::Unexpected).attach_printable("Login response carried no token")
        })?;
        Ok(Session::new(AccessToken::new(token)))
    }

    #[tracing::instrument(skip_all)]
    async fn logout(&self, session: &Session) -> error_stack::Result<(), KernelError> {
        let response = self
            .client
            .post(self.config.endpoint(LOGOUT))
            .header(AUTHORIZATION, session.bearer())
            .send()
            .await
            .convert_error()?;
        if !response.status().is_success() {
            return Err(rejection(response).await);
        }
        Ok(())
    }
}
