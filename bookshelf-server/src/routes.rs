//! API routes

use crate::handlers;
use crate::state::AppState;
use axum::{
    http::HeaderValue,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/all", get(handlers::list_books))
        .route("/get/:id", get(handlers::get_book))
        .route("/add", post(handlers::add_book))
        .route("/update", put(handlers::update_book))
        .route("/delete/:id", delete(handlers::delete_book));

    Router::new()
        .nest("/bookapi", api_routes)
        .route("/health", get(handlers::health_check))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(std::env::var("BOOKSHELF_CORS_ORIGINS").ok()))
        .with_state(state)
}

/// CORS for browser front ends.
///
/// `origins` is a comma-separated list, or `*` for any origin. Without it, the usual local
/// development origins are allowed.
fn cors_layer(origins: Option<String>) -> CorsLayer {
    let allow_origin = match origins {
        Some(origins) if origins.trim() == "*" => AllowOrigin::any(),
        Some(origins) => AllowOrigin::list(
            origins
                .split(',')
                .filter_map(|s| s.trim().parse::<HeaderValue>().ok())
                .collect::<Vec<_>>(),
        ),
        None => AllowOrigin::list([
            HeaderValue::from_static("http://localhost:3000"),
            HeaderValue::from_static("http://localhost:5173"),
            HeaderValue::from_static("http://127.0.0.1:3000"),
            HeaderValue::from_static("http://127.0.0.1:5173"),
        ]),
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Library;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let app = create_router(AppState::in_memory(Library::default()));
        let response = app
            .oneshot(Request::get("/bookapi/nothing").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_book_routes_live_under_prefix() {
        let app = create_router(AppState::in_memory(Library::default()));

        let bare = app
            .clone()
            .oneshot(Request::get("/all").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(bare.status(), StatusCode::NOT_FOUND);

        let nested = app
            .clone()
            .oneshot(Request::get("/bookapi/all").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(nested.status(), StatusCode::OK);

        let health = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(health.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_default_cors_allows_vite_dev_server() {
        let app = create_router(AppState::in_memory(Library::default()));
        let response = app
            .oneshot(
                Request::get("/bookapi/all")
                    .header(header::ORIGIN, "http://localhost:5173")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "http://localhost:5173"
        );
    }
}
