use std::net::SocketAddr;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use crate::{auth, courses, plans, recommendations, users};

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .nest(
            "/api",
            Router::new()
                .merge(auth::router())
                .merge(users::router())
                .merge(plans::router())
                .merge(courses::router())
                .merge(recommendations::router())
                .route("/health", get(|| async { "ok" })),
        )
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &axum::http::Request<_>| {
                    let method = req.method().clone();
                    let uri = req.uri().clone();
                    tracing::info_span!("http_request", %method, uri = %uri, status = tracing::field::Empty)
                })
                .on_response(
                    |res: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &tracing::Span| {
                        let status = res.status();
                        span.record("status", tracing::field::display(status));
                        let latency_ms = latency.as_millis() as u64;
                        if status.is_server_error() {
                            tracing::error!(%status, latency_ms, "response");
                        } else {
                            tracing::info!(%status, latency_ms, "response");
                        }
                    },
                ),
        )
}

pub async fn serve(app: Router) -> anyhow::Result<()> {
    let addr: SocketAddr = format!(
        "{}:{}",
        std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
        std::env::var("APP_PORT").unwrap_or_else(|_| "8080".into())
    )
    .parse()?;

    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::testing::{bearer, send};
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Method, Request, StatusCode},
    };
    use tower::ServiceExt;

    #[tokio::test]
    async fn health_is_public() {
        let res = build_app(AppState::fake())
            .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"ok");
    }

    #[tokio::test]
    async fn protected_routes_require_token() {
        let cases = [
            (Method::GET, "/api/plans/load", None),
            (
                Method::POST,
                "/api/plans/save",
                Some(r#"{"semester":"Freshman Fall","courses":[]}"#),
            ),
            (
                Method::POST,
                "/api/recommendations/generate",
                Some(r#"{"semester":"Freshman Fall"}"#),
            ),
            (Method::GET, "/api/users/profile", None),
            (Method::GET, "/api/auth/me", None),
        ];
        for (method, uri, body) in cases {
            let (status, json) = send(AppState::fake(), method, uri, None, body).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED, "{uri}");
            assert!(json["error"].as_str().unwrap().starts_with("Unauthorized"));
        }
    }

    #[tokio::test]
    async fn garbage_token_is_rejected() {
        let (status, _) = send(
            AppState::fake(),
            Method::GET,
            "/api/plans/load",
            Some("Bearer not-a-jwt".into()),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn blank_search_returns_empty_list() {
        let (status, json) = send(
            AppState::fake(),
            Method::GET,
            "/api/courses/search?q=%20%20",
            None,
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, serde_json::json!({ "courses": [] }));
    }

    #[tokio::test]
    async fn non_numeric_search_limit_is_rejected() {
        let (status, json) = send(
            AppState::fake(),
            Method::GET,
            "/api/courses/search?q=csci&limit=lots",
            None,
            None,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].is_string());
    }

    #[tokio::test]
    async fn bad_query_string_gets_json_error() {
        let (status, json) = send(
            AppState::fake(),
            Method::GET,
            "/api/courses/search?q=a&q=b",
            None,
            None,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].as_str().unwrap().contains("duplicate field"));
    }

    #[tokio::test]
    async fn unknown_semester_is_bad_request() {
        for uri in ["/api/plans/save", "/api/recommendations/generate"] {
            let state = AppState::fake();
            let auth = bearer(&state);
            let (status, json) = send(
                state,
                Method::POST,
                uri,
                Some(auth),
                Some(r#"{"semester":"Freshman Winter","courses":[]}"#),
            )
            .await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert!(json["error"]
                .as_str()
                .unwrap()
                .contains("Freshman Winter"));
        }
    }

    #[tokio::test]
    async fn oversized_plan_is_bad_request() {
        let state = AppState::fake();
        let auth = bearer(&state);
        let courses: Vec<String> = (0..13).map(|n| format!("CSCI-UA.{n:04}")).collect();
        let body = serde_json::json!({ "semester": "Junior Fall", "courses": courses }).to_string();
        let (status, _) = send(state, Method::POST, "/api/plans/save", Some(auth), Some(&body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn malformed_json_is_bad_request() {
        let state = AppState::fake();
        let auth = bearer(&state);
        let (status, json) = send(
            state,
            Method::POST,
            "/api/plans/save",
            Some(auth),
            Some("{not json"),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].is_string());
    }

    #[tokio::test]
    async fn empty_profile_update_is_bad_request() {
        let state = AppState::fake();
        let auth = bearer(&state);
        let (status, _) = send(state, Method::PUT, "/api/users/profile", Some(auth), Some("{}")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn register_validates_before_touching_db() {
        let (status, json) = send(
            AppState::fake(),
            Method::POST,
            "/api/auth/register",
            None,
            Some(r#"{"email":"ada@example.edu","password":"short","name":"Ada"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Password too short");
    }
}
