use reqwest::header::AUTHORIZATION;
use reqwest::{RequestBuilder, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use kernel::interface::directory::UserDirectory;
use kernel::prelude::entity::{
    Email, NewUser, Session, User, UserId, UserName, UserRole, UserStatus,
};
use kernel::KernelError;

use crate::api::{created_id, rejection, scalar, LibraryApi, USERS};
use crate::error::ConvertError;

#[derive(Deserialize)]
#[serde(untagged)]
enum UserBody {
    Rows(Vec<UserRow>),
    Wrapped { data: Vec<UserRow> },
}

impl UserBody {
    fn into_rows(self) -> Vec<UserRow> {
        match self {
            UserBody::Rows(rows) | UserBody::Wrapped { data: rows } => rows,
        }
    }
}

#[derive(Deserialize)]
struct UserRow {
    id: Option<Value>,
    username: Option<String>,
    email: Option<String>,
    is_admin: Option<Value>,
    estado: Option<Value>,
}

impl UserRow {
    /// `None` for a row the backend sent without an id.
    fn into_user(self) -> Option<User> {
        let id = self.id.as_ref().and_then(scalar)?;
        Some(User::new(
            UserId::new(id),
            UserName::new(self.username.unwrap_or_default()),
            Email::new(self.email.unwrap_or_default()),
            UserRole::from_admin_flag(self.is_admin.as_ref().is_some_and(flag)),
            UserStatus::from_active_flag(self.estado.as_ref().is_some_and(flag)),
        ))
    }
}

/// Booleans may come back as `true`, `1` or `"1"` depending on how the
/// backend casts its columns.
fn flag(value: &Value) -> bool {
    match value {
        Value::Bool(value) => *value,
        Value::Number(value) => value.as_f64().is_some_and(|value| value != 0.0),
        Value::String(value) => matches!(
            value.trim().to_lowercase().as_str(),
            "1" | "true" | "activo"
        ),
        _ => false,
    }
}

#[derive(Serialize)]
struct UserPayload<'a> {
    username: &'a str,
    email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    password: Option<&'a str>,
    is_admin: bool,
    estado: bool,
}

impl LibraryApi {
    async fn send_user_request(
        &self,
        request: RequestBuilder,
        session: &Session,
    ) -> error_stack::Result<Response, KernelError> {
        let response = request
            .header(AUTHORIZATION, session.bearer())
            .send()
            .await
            .convert_error()?;
        let status = response.status();
        tracing::debug!(%status, "User directory answered");
        if !status.is_success() {
            return Err(rejection(response).await);
        }
        Ok(response)
    }

    fn user_endpoint(&self, id: &UserId) -> String {
        let id: &String = id.as_ref();
        self.config.endpoint(&format!("{USERS}/{id}"))
    }
}

#[async_trait::async_trait]
impl UserDirectory for LibraryApi {
    #[tracing::instrument(skip_all)]
    async fn find_all(&self, session: &Session) -> error_stack::Result<Vec<User>, KernelError> {
        let request = self.client.get(self.config.endpoint(USERS));
        let response = self.send_user_request(request, session).await?;
        let rows = response.json::<UserBody>().await.convert_error()?.into_rows();
        let received = rows.len();
        let users = rows
            .into_iter()
            .filter_map(UserRow::into_user)
            .collect::<Vec<_>>();
        if users.len() < received {
            tracing::warn!(
                skipped = received - users.len(),
                "User rows without an id were skipped"
            );
        }
        Ok(users)
    }

    #[tracing::instrument(skip_all, fields(username = ?user.name()))]
    async fn create(
        &self,
        session: &Session,
        user: &NewUser,
    ) -> error_stack::Result<Option<UserId>, KernelError> {
        let username: &String = user.name().as_ref();
        let email: &String = user.email().as_ref();
        let password: &String = user.password().as_ref();
        let request = self.client.post(self.config.endpoint(USERS)).json(&UserPayload {
            username,
            email,
            password: Some(password),
            is_admin: user.role().is_admin(),
            estado: user.status().is_active(),
        });
        let response = self.send_user_request(request, session).await?;
        let body = response.text().await.unwrap_or_default();
        Ok(created_id(&body).map(UserId::new))
    }

    #[tracing::instrument(skip_all, fields(id = ?user.id()))]
    async fn update(&self, session: &Session, user: &User) -> error_stack::Result<(), KernelError> {
        let username: &String = user.name().as_ref();
        let email: &String = user.email().as_ref();
        let request = self.client.put(self.user_endpoint(user.id())).json(&UserPayload {
            username,
            email,
            password: None,
            is_admin: user.role().is_admin(),
            estado: user.status().is_active(),
        });
        self.send_user_request(request, session).await?;
        Ok(())
    }

    #[tracing::instrument(skip_all, fields(id = ?id))]
    async fn delete(&self, session: &Session, id: &UserId) -> error_stack::Result<(), KernelError> {
        let request = self.client.delete(self.user_endpoint(id));
        self.send_user_request(request, session).await?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use std::sync::{Arc, Mutex};

    use axum::extract::{Path, State};
    use axum::http::StatusCode;
    use axum::routing::{get, put};
    use axum::{Json, Router};
    use serde_json::{json, Value};

    use application::service::{CreateUserService, DeleteUserService, UpdateUserService};
    use application::transfer::{CreateUserDto, DeleteUserDto, UpdateUserDto};
    use kernel::interface::directory::UserDirectory;
    use kernel::prelude::entity::{AccessToken, Session, UserId, UserRole, UserStatus};
    use kernel::prelude::failure::SaveError;
    use kernel::KernelError;

    use super::flag;
    use crate::api::mock;
    use crate::LibraryApi;

    /// Every write the backend received, as `(method, path, body)`.
    type Writes = Arc<Mutex<Vec<(String, String, Value)>>>;

    fn session() -> Session {
        Session::new(AccessToken::new("token"))
    }

    async fn backend() -> (LibraryApi, Writes) {
        let writes = Writes::default();
        let router = Router::new()
            .route(
                "/usuarios",
                get(|| async {
                    Json(json!({
                        "data": [
                            { "id": 1, "username": "ana", "email": "ana@biblioteca.gov.co", "is_admin": 1, "estado": true },
                            { "id": "2", "username": "bruno", "email": "bruno@biblioteca.gov.co", "is_admin": false, "estado": "0" },
                            { "username": "sin-id", "email": "x@biblioteca.gov.co" }
                        ]
                    }))
                })
                .post(
                    |State(writes): State<Writes>, Json(body): Json<Value>| async move {
                        writes
                            .lock()
                            .unwrap()
                            .push(("POST".into(), "/usuarios".into(), body));
                        (StatusCode::CREATED, Json(json!({ "data": { "id": 9 } })))
                    },
                ),
            )
            .route(
                "/usuarios/:id",
                put(
                    |State(writes): State<Writes>,
                     Path(id): Path<String>,
                     Json(body): Json<Value>| async move {
                        writes
                            .lock()
                            .unwrap()
                            .push(("PUT".into(), format!("/usuarios/{id}"), body));
                        StatusCode::OK
                    },
                )
                .delete(
                    |State(writes): State<Writes>, Path(id): Path<String>| async move {
                        if id != "7" {
                            return (
                                StatusCode::NOT_FOUND,
                                Json(json!({ "message": "Usuario no encontrado" })),
                            );
                        }
                        writes.lock().unwrap().push((
                            "DELETE".into(),
                            format!("/usuarios/{id}"),
                            Value::Null,
                        ));
                        (StatusCode::OK, Json(json!({ "message": "Eliminado" })))
                    },
                ),
            )
            .with_state(writes.clone());
        (mock::serve(router).await, writes)
    }

    #[test]
    fn flags_accept_backend_casts() {
        assert!(flag(&json!(true)));
        assert!(flag(&json!(1)));
        assert!(flag(&json!("1")));
        assert!(!flag(&json!(0)));
        assert!(!flag(&json!("0")));
        assert!(!flag(&json!(null)));
    }

    #[tokio::test]
    async fn listing_reads_wrapped_rows() {
        let (api, _) = backend().await;
        let users = api.find_all(&session()).await.unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].id(), &UserId::new("1"));
        assert_eq!(users[0].role(), &UserRole::Admin);
        assert_eq!(users[0].status(), &UserStatus::Active);
        assert_eq!(users[1].role(), &UserRole::Member);
        assert_eq!(users[1].status(), &UserStatus::Inactive);
    }

    #[tokio::test]
    async fn create_sends_every_field() {
        let (api, writes) = backend().await;
        let id = api
            .create_user(
                &session(),
                CreateUserDto {
                    username: "diana".into(),
                    email: "diana@biblioteca.gov.co".into(),
                    password: "secret".into(),
                    is_admin: false,
                    active: true,
                },
            )
            .await
            .unwrap();
        assert_eq!(id.as_deref(), Some("9"));

        let writes = writes.lock().unwrap();
        let (method, path, body) = &writes[0];
        assert_eq!((method.as_str(), path.as_str()), ("POST", "/usuarios"));
        assert_eq!(
            body,
            &json!({
                "username": "diana",
                "email": "diana@biblioteca.gov.co",
                "password": "secret",
                "is_admin": false,
                "estado": true
            })
        );
    }

    #[tokio::test]
    async fn update_targets_the_user_and_omits_the_password() {
        let (api, writes) = backend().await;
        api.update_user(
            &session(),
            UpdateUserDto {
                id: "7".into(),
                username: "carla".into(),
                email: "carla@biblioteca.gov.co".into(),
                is_admin: true,
                active: false,
            },
        )
        .await
        .unwrap();

        let writes = writes.lock().unwrap();
        let (method, path, body) = &writes[0];
        assert_eq!((method.as_str(), path.as_str()), ("PUT", "/usuarios/7"));
        assert!(body.get("password").is_none());
        assert_eq!(body["is_admin"], json!(true));
        assert_eq!(body["estado"], json!(false));
    }

    #[tokio::test]
    async fn delete_reports_missing_users() {
        let (api, writes) = backend().await;
        api.delete_user(&session(), DeleteUserDto { id: "7".into() })
            .await
            .unwrap();
        assert_eq!(writes.lock().unwrap().len(), 1);

        let report = api
            .delete_user(&session(), DeleteUserDto { id: "8".into() })
            .await
            .unwrap_err();
        assert_eq!(report.current_context(), &KernelError::Rejected);
        assert_eq!(
            SaveError::from_report(&report).message(),
            "Server error: Usuario no encontrado"
        );
    }

    #[tokio::test]
    async fn invalid_user_fails_before_any_request() {
        let api = mock::refused().await;
        let report = api
            .create_user(
                &session(),
                CreateUserDto {
                    username: "".into(),
                    email: "diana@biblioteca.gov.co".into(),
                    password: "secret".into(),
                    is_admin: false,
                    active: true,
                },
            )
            .await
            .unwrap_err();
        assert_eq!(report.current_context(), &KernelError::Invalid);
    }
}
