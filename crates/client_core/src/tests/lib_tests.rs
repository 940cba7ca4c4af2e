use super::*;
use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, routing::post, Json, Router};
use serde_json::{json, Value};
use shared::protocol::{GenerateNamesRequest, GeneratePhotoRequest};
use tokio::{
    net::TcpListener,
    sync::{oneshot, Mutex},
};

#[derive(Clone)]
struct CollaboratorState<Req> {
    captured: Arc<Mutex<Option<oneshot::Sender<Req>>>>,
    response: Value,
}

async fn handle_generate<Req: Send>(
    State(state): State<CollaboratorState<Req>>,
    Json(payload): Json<Req>,
) -> Json<Value> {
    if let Some(tx) = state.captured.lock().await.take() {
        let _ = tx.send(payload);
    }
    Json(state.response.clone())
}

async fn spawn_collaborator<Req>(
    route: &'static str,
    response: Value,
) -> (String, oneshot::Receiver<Req>)
where
    Req: serde::de::DeserializeOwned + Clone + Send + Sync + 'static,
{
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let (tx, rx) = oneshot::channel();
    let state = CollaboratorState {
        captured: Arc::new(Mutex::new(Some(tx))),
        response,
    };
    let app = Router::new()
        .route(route, post(handle_generate::<Req>))
        .with_state(state);
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    (format!("http://{addr}"), rx)
}

#[tokio::test]
async fn generate_names_sends_fixed_count_and_returns_collaborator_batch() {
    let names: Vec<Value> = [
        "Noah", "Elijah", "Levi", "Ezra", "Asher", "Caleb", "Micah", "Jonah", "Silas", "Abel",
    ]
    .iter()
    .map(|name| json!(name))
    .collect();
    let (server_url, payload_rx) = spawn_collaborator::<GenerateNamesRequest>(
        "/api/generate-names",
        json!({
            "success": true,
            "names": names,
            "suggestions": ["Consider meaning"],
        }),
    )
    .await;

    let client = BabyVisionClient::new(server_url);
    let batch = client
        .generate_names("biblical names")
        .await
        .expect("name batch");

    assert_eq!(batch.names.len(), 10);
    assert_eq!(batch.names[0], "Noah");
    assert_eq!(batch.suggestions, vec!["Consider meaning".to_string()]);

    let payload = payload_rx.await.expect("payload");
    assert_eq!(payload.user_input, "biblical names");
    assert_eq!(payload.count, NAME_BATCH_SIZE);
}

#[tokio::test]
async fn generate_names_treats_unsuccessful_flag_as_declined() {
    let (server_url, _payload_rx) = spawn_collaborator::<GenerateNamesRequest>(
        "/api/generate-names",
        json!({ "success": false }),
    )
    .await;

    let client = BabyVisionClient::new(server_url);
    let err = client
        .generate_names("anything")
        .await
        .expect_err("declined");

    assert!(matches!(
        err,
        GenerationError::Declined {
            endpoint: "generate-names"
        }
    ));
}

#[tokio::test]
async fn generate_photo_sends_contract_body_and_captures_requested_age() {
    let (server_url, payload_rx) = spawn_collaborator::<GeneratePhotoRequest>(
        "/api/generate-photo",
        json!({
            "success": true,
            "image_url": "https://cdn.example/portrait-7.png",
        }),
    )
    .await;

    let client = BabyVisionClient::new(server_url);
    let portrait = client
        .generate_photo(7, Gender::Girl)
        .await
        .expect("portrait");

    assert_eq!(portrait.image_url, "https://cdn.example/portrait-7.png");
    assert_eq!(portrait.age, 7);

    let payload = payload_rx.await.expect("payload");
    assert_eq!(payload.age, 7);
    assert_eq!(payload.gender, Gender::Girl);
    assert_eq!(payload.style, PORTRAIT_STYLE);
}

#[tokio::test]
async fn generate_photo_surfaces_unsuccessful_flag_as_declined() {
    let (server_url, _payload_rx) = spawn_collaborator::<GeneratePhotoRequest>(
        "/api/generate-photo",
        json!({ "success": false }),
    )
    .await;

    let client = BabyVisionClient::new(server_url);
    let err = client
        .generate_photo(3, Gender::Boy)
        .await
        .expect_err("declined");

    assert!(matches!(
        err,
        GenerationError::Declined {
            endpoint: "generate-photo"
        }
    ));
}

#[tokio::test]
async fn non_success_status_maps_to_transport_error() {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let app = Router::new().route(
        "/api/generate-names",
        post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    let client = BabyVisionClient::new(format!("http://{addr}"));
    let err = client.generate_names("whatever").await.expect_err("5xx");

    assert!(matches!(
        err,
        GenerationError::Transport {
            endpoint: "generate-names",
            ..
        }
    ));
}

#[tokio::test]
async fn fetch_image_bytes_resolves_relative_references_against_base_url() {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let app = Router::new().route(
        "/media/portrait.png",
        get(|| async { b"not-really-a-png".to_vec() }),
    );
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    let client = BabyVisionClient::new(format!("http://{addr}"));
    let bytes = client
        .fetch_image_bytes("/media/portrait.png")
        .await
        .expect("image bytes");

    assert_eq!(bytes, b"not-really-a-png".to_vec());
}

#[test]
fn client_appends_api_suffix_once() {
    let client = BabyVisionClient::new("http://localhost:8001/");
    assert_eq!(client.api_base(), "http://localhost:8001/api");
}
