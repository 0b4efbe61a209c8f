use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use tower::ServiceExt;

mod common;
use common::{body_string, create_test_app};

#[tokio::test]
async fn test_index_renders_profile_and_projects() {
    let app = create_test_app();

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("Shivam Gupta"));
    assert!(body.contains("E-Commerce Platform"));
    assert!(body.contains("Task Management App"));
    assert!(body.contains("Send me a message"));
}

#[tokio::test]
async fn test_index_category_filter_narrows_the_gallery() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/?category=web")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("E-Commerce Platform"));
    assert!(body.contains("Social Media Platform"));
    assert!(!body.contains("Task Management App"));
    assert!(!body.contains("Financial Dashboard"));
}

#[tokio::test]
async fn test_index_unknown_category_falls_back_to_all() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/?category=nonsense")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("E-Commerce Platform"));
    assert!(body.contains("Task Management App"));
}

#[tokio::test]
async fn test_index_skill_tab_selects_a_group() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/?tab=devops")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("Docker"));
    assert!(body.contains("AWS"));
    assert!(!body.contains("CSS/SCSS"));
}

#[tokio::test]
async fn test_project_detail_page() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/projects/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("E-Commerce Platform"));
    assert!(body.contains("Back to projects"));
}

#[tokio::test]
async fn test_unknown_project_returns_not_found() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/projects/999")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_route_returns_not_found() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/no-such-page")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_stylesheet_is_served_with_css_mime_type() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/static/styles.css")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(content_type.contains("text/css"));
}

#[tokio::test]
async fn test_missing_asset_returns_not_found() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/static/missing.js")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_theme_toggle_sets_cookie_and_redirects() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/theme")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/");

    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(cookie.contains("theme=dark"));
}

#[tokio::test]
async fn test_theme_toggle_flips_back_to_light() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/theme")
                .header(header::COOKIE, "theme=dark")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(cookie.contains("theme=light"));
}

#[tokio::test]
async fn test_dark_theme_cookie_controls_the_page() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/")
                .header(header::COOKIE, "theme=dark")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let body = body_string(response).await;
    assert!(body.contains("data-theme=\"dark\""));
}
