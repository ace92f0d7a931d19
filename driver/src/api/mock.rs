use std::sync::{Arc, Mutex};

use axum::extract::{Multipart, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::Value;

use crate::config::ApiConfig;
use crate::LibraryApi;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Captured {
    pub name: String,
    pub file_name: Option<String>,
    pub mime: Option<String>,
    pub data: Vec<u8>,
}

#[derive(Debug, Default)]
pub struct Request {
    pub authorization: Option<String>,
    pub fields: Vec<Captured>,
}

pub type Requests = Arc<Mutex<Vec<Request>>>;

pub async fn serve(router: Router) -> LibraryApi {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    LibraryApi::new(ApiConfig::new(format!("http://{addr}")))
}

/// An address nothing listens on.
pub async fn refused() -> LibraryApi {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    LibraryApi::new(ApiConfig::new(format!("http://{addr}")))
}

/// Backend whose `POST /bibliotecas` records the multipart body and answers
/// with `status` and `body`.
pub async fn registry(status: StatusCode, body: Value) -> (LibraryApi, Requests) {
    let requests = Requests::default();
    let router = Router::new()
        .route(
            "/bibliotecas",
            post(
                move |State(requests): State<Requests>,
                      headers: HeaderMap,
                      mut multipart: Multipart| async move {
                    let mut fields = Vec::new();
                    while let Some(field) = multipart.next_field().await.unwrap() {
                        let name = field.name().unwrap_or_default().to_string();
                        let file_name = field.file_name().map(str::to_string);
                        let mime = field.content_type().map(str::to_string);
                        let data = field.bytes().await.unwrap().to_vec();
                        fields.push(Captured {
                            name,
                            file_name,
                            mime,
                            data,
                        });
                    }
                    let authorization = headers
                        .get("authorization")
                        .and_then(|value| value.to_str().ok())
                        .map(str::to_string);
                    requests.lock().unwrap().push(Request {
                        authorization,
                        fields,
                    });
                    (status, Json(body))
                },
            ),
        )
        .with_state(requests.clone());
    (serve(router).await, requests)
}
