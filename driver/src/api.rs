use error_stack::Report;
use reqwest::{Client, Response};
use serde::Deserialize;
use serde_json::{Map, Value};

use kernel::interface::auth::DependOnAuthenticator;
use kernel::interface::directory::DependOnUserDirectory;
use kernel::interface::query::DependOnDocumentCatalog;
use kernel::interface::update::DependOnDocumentRegistry;
use kernel::prelude::failure::ServerRejection;
use kernel::KernelError;

use crate::config::ApiConfig;

mod catalog;
mod document;
mod session;
mod user;

#[cfg(test)]
mod mock;

static DOCUMENTS: &str = "bibliotecas";
static LOGIN: &str = "login";
static LOGOUT: &str = "logout";
static USERS: &str = "usuarios";

/// HTTP client for the library backend. Implements every kernel interface, so
/// the application services can be called on it directly.
#[derive(Debug, Clone)]
pub struct LibraryApi {
    client: Client,
    config: ApiConfig,
}

impl LibraryApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn from_env() -> error_stack::Result<Self, KernelError> {
        Ok(Self::new(ApiConfig::from_env()?))
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

impl DependOnDocumentRegistry for LibraryApi {
    type DocumentRegistry = Self;
    fn document_registry(&self) -> &Self::DocumentRegistry {
        self
    }
}

impl DependOnDocumentCatalog for LibraryApi {
    type DocumentCatalog = Self;
    fn document_catalog(&self) -> &Self::DocumentCatalog {
        self
    }
}

impl DependOnAuthenticator for LibraryApi {
    type Authenticator = Self;
    fn authenticator(&self) -> &Self::Authenticator {
        self
    }
}

impl DependOnUserDirectory for LibraryApi {
    type UserDirectory = Self;
    fn user_directory(&self) -> &Self::UserDirectory {
        self
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    errors: Option<Map<String, Value>>,
}

fn messages(value: Value) -> Vec<String> {
    match value {
        Value::Array(values) => values
            .into_iter()
            .filter_map(|value| match value {
                Value::String(message) => Some(message),
                Value::Null => None,
                other => Some(other.to_string()),
            })
            .collect(),
        Value::String(message) => vec![message],
        Value::Null => Vec::new(),
        other => vec![other.to_string()],
    }
}

/// Turns a non-success response into a `Rejected` report carrying whatever
/// the body said. A body that is not the usual JSON shape still yields a
/// rejection, just without a message.
async fn rejection(response: Response) -> Report<KernelError> {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let (message, errors) = match serde_json::from_str::<ErrorBody>(&body) {
        Ok(ErrorBody { message, errors }) => (
            message,
            errors.map(|errors| {
                errors
                    .into_iter()
                    .map(|(field, value)| (field, messages(value)))
                    .collect::<Vec<_>>()
            }),
        ),
        Err(_) => (None, None),
    };
    tracing::warn!(%status, ?message, "Backend rejected the request");
    Report::new(KernelError::Rejected)
        .attach_printable(format!("HTTP {status}"))
        .attach(ServerRejection::new(status.as_u16(), message, errors))
}

/// Id of a freshly created record, from `{ "id": .. }` or
/// `{ "data": { "id": .. } }`.
fn created_id(body: &str) -> Option<String> {
    let body = serde_json::from_str::<Value>(body).ok()?;
    let id = [body.get("id"), body.get("data").and_then(|data| data.get("id"))]
        .into_iter()
        .flatten()
        .find_map(scalar);
    id
}

fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(value) => Some(value.clone()),
        Value::Number(value) => Some(value.to_string()),
        _ => None,
    }
}
