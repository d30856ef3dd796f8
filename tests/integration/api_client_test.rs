//! API client behavior against a local socket standing in for the
//! tracker service.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::RwLock;

use trackhub_api::ApiClient;
use trackhub_auth::{CredentialStore, MemoryCredentialStore, SessionManager};
use trackhub_core::config::ApiConfig;
use trackhub_core::error::ErrorKind;

use crate::helpers;

/// Serves exactly one request with the given status line and an empty
/// body, then closes the connection.
async fn one_shot_service(status_line: &'static str) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let mut request = [0u8; 4096];
        let _ = stream.read(&mut request).await;
        let response = format!("{status_line}\r\ncontent-length: 0\r\nconnection: close\r\n\r\n");
        stream.write_all(response.as_bytes()).await.unwrap();
        let _ = stream.shutdown().await;
    });
    addr
}

fn signed_in_session(store: Arc<MemoryCredentialStore>) -> Arc<RwLock<SessionManager>> {
    let mut manager = SessionManager::new(store);
    manager
        .login(&helpers::credential(serde_json::json!({
            "sub": "u1",
            "username": "alice",
            "role": "MEMBER",
            "exp": helpers::exp_in_an_hour(),
        })))
        .unwrap();
    Arc::new(RwLock::new(manager))
}

fn client_for(addr: SocketAddr, session: Arc<RwLock<SessionManager>>) -> ApiClient {
    let config = ApiConfig {
        base_url: format!("http://{addr}/api"),
        timeout_seconds: 5,
    };
    ApiClient::new(&config, session).unwrap()
}

#[tokio::test]
async fn test_rejected_credential_forces_logout_and_clears_store() {
    let addr = one_shot_service("HTTP/1.1 401 Unauthorized").await;
    let store = Arc::new(MemoryCredentialStore::new());
    let session = signed_in_session(store.clone());
    let client = client_for(addr, session.clone());

    let err = client.projects().await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Authentication);

    // A 401 from any endpoint revokes the whole session, durable cache
    // included.
    assert!(!session.read().await.is_authenticated());
    assert_eq!(store.get(), None);
}

#[tokio::test]
async fn test_forbidden_response_keeps_session() {
    let addr = one_shot_service("HTTP/1.1 403 Forbidden").await;
    let store = Arc::new(MemoryCredentialStore::new());
    let session = signed_in_session(store.clone());
    let client = client_for(addr, session.clone());

    let err = client.projects().await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Authorization);

    // Only a 401 revokes the session; a plain permission failure does not.
    assert!(session.read().await.is_authenticated());
    assert!(store.get().is_some());
}
