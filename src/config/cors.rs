use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

pub fn create_cors_layer(allowed_origins: Option<&str>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(parse_allowed_origins(allowed_origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

fn parse_allowed_origins(allowed_origins: Option<&str>) -> AllowOrigin {
    let Some(origins_str) = allowed_origins else {
        tracing::info!("CORS: CORS_ALLOWED_ORIGINS not set, allowing any origin");
        return AllowOrigin::any();
    };

    let origins: Vec<HeaderValue> = origins_str
        .split(',')
        .filter_map(|origin| {
            let trimmed = origin.trim();
            if trimmed.is_empty() {
                None
            } else {
                match trimmed.parse::<HeaderValue>() {
                    Ok(value) => {
                        tracing::debug!("CORS: Allowing origin: {}", trimmed);
                        Some(value)
                    }
                    Err(e) => {
                        tracing::warn!("CORS: Invalid origin '{}': {}", trimmed, e);
                        None
                    }
                }
            }
        })
        .collect();

    if origins.is_empty() {
        tracing::warn!("CORS: No valid origins configured, allowing any origin");
        AllowOrigin::any()
    } else {
        tracing::info!("CORS: Configured with {} allowed origin(s)", origins.len());
        AllowOrigin::list(origins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::{routing::get, Router};
    use tower::ServiceExt;

    async fn preflight(allowed: Option<&str>, origin: &str) -> Option<HeaderValue> {
        let app = Router::new()
            .route("/api/dates", get(|| async { "ok" }))
            .layer(create_cors_layer(allowed));

        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/api/dates")
                    .header(header::ORIGIN, origin)
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PUT")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .cloned()
    }

    #[tokio::test]
    async fn test_any_origin_when_unset() {
        let allowed = preflight(None, "http://anywhere.test").await;
        assert_eq!(allowed.unwrap(), "*");
    }

    #[tokio::test]
    async fn test_allow_list_filters_origins() {
        let list = Some("http://localhost:5173, http://app.test");
        assert_eq!(
            preflight(list, "http://app.test").await.unwrap(),
            "http://app.test"
        );
        assert!(preflight(list, "http://evil.test").await.is_none());
    }

    #[tokio::test]
    async fn test_only_invalid_entries_fall_back_to_any() {
        let allowed = preflight(Some(" , bad\norigin"), "http://anywhere.test").await;
        assert_eq!(allowed.unwrap(), "*");
    }
}
