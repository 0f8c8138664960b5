use axum::Router;
use axum::routing::post;

use super::*;
use crate::config::ServerConfig;

fn state_with(upstream: Option<String>) -> AppState {
    AppState::new(ServerConfig { auth_upstream_url: upstream, ..ServerConfig::default() }).unwrap()
}

async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Fake auth service: `/login` rejects, `/register` echoes the request body.
async fn spawn_upstream() -> String {
    let app = Router::new()
        .route(
            "/login",
            post(|| async {
                (
                    StatusCode::UNAUTHORIZED,
                    [(header::CONTENT_TYPE, JSON)],
                    r#"{"success":false,"message":"Invalid email or password"}"#,
                )
            }),
        )
        .route("/register", post(|body: Bytes| async move { ([(header::CONTENT_TYPE, JSON)], body) }));
    serve_upstream(app).await
}

/// Fake auth service that signs the caller in and reports the cookie it saw.
async fn spawn_session_upstream() -> String {
    serve_upstream(Router::new().route(
        "/login",
        post(|headers: HeaderMap| async move {
            let seen = headers.get(header::COOKIE).and_then(|v| v.to_str().ok()).unwrap_or("").to_owned();
            let mut response =
                ([(header::CONTENT_TYPE, JSON)], format!(r#"{{"success":true,"message":"{seen}"}}"#)).into_response();
            let cookies = response.headers_mut();
            cookies.append(header::SET_COOKIE, "session=abc; Path=/; HttpOnly".parse().unwrap());
            cookies.append(header::SET_COOKIE, "theme=dark; Path=/".parse().unwrap());
            response
        }),
    ))
    .await
}

async fn serve_upstream(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn unconfigured_upstream_answers_503_envelope() {
    let response = login(State(state_with(None)), HeaderMap::new(), Bytes::from_static(b"{}")).await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Authentication service unavailable.");
}

#[tokio::test]
async fn unreachable_upstream_answers_502_envelope() {
    // Bind then drop to get a port with nothing listening.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let state = state_with(Some(format!("http://{addr}")));
    let response = register(State(state), HeaderMap::new(), Bytes::from_static(b"{}")).await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Authentication service unavailable.");
}

#[tokio::test]
async fn upstream_status_and_body_pass_through() {
    let base = spawn_upstream().await;
    let response = login(
        State(state_with(Some(base))),
        HeaderMap::new(),
        Bytes::from_static(br#"{"email":"a@b.test","password":"x"}"#),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Invalid email or password");
}

#[tokio::test]
async fn request_body_is_forwarded_unchanged() {
    let base = spawn_upstream().await;
    let payload = br#"{"name":"Budi","email":"budi@example.test","agree_terms":true}"#;
    let response = register(State(state_with(Some(base))), HeaderMap::new(), Bytes::from_static(payload)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], JSON);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], &payload[..]);
}

#[tokio::test]
async fn session_cookies_travel_both_ways() {
    let base = spawn_session_upstream().await;
    let mut headers = HeaderMap::new();
    headers.insert(header::COOKIE, "visitor=42".parse().unwrap());

    let response = login(State(state_with(Some(base))), headers, Bytes::from_static(b"{}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let set_cookies: Vec<_> =
        response.headers().get_all(header::SET_COOKIE).iter().map(|v| v.to_str().unwrap().to_owned()).collect();
    assert_eq!(set_cookies, vec!["session=abc; Path=/; HttpOnly".to_owned(), "theme=dark; Path=/".to_owned()]);

    let body = body_json(response).await;
    assert_eq!(body["message"], "visitor=42");
}

#[tokio::test]
async fn no_cookie_is_invented_when_the_browser_sends_none() {
    let base = spawn_session_upstream().await;
    let response = login(State(state_with(Some(base))), HeaderMap::new(), Bytes::from_static(b"{}")).await;
    let body = body_json(response).await;
    assert_eq!(body["message"], "");
}

#[test]
fn proxy_error_statuses() {
    assert_eq!(ProxyError::Unconfigured.status(), StatusCode::SERVICE_UNAVAILABLE);
}
