//! トークン発行API Contract Tests
//!
//! POST /token

use axum::body::Body;
use axum::http::{Request, StatusCode};

use crate::support::app::{authed_get, create_test_app, login, login_token, send};

/// シード済みユーザーでのログイン成功
#[tokio::test]
async fn login_succeeds_for_seeded_rw_user() {
    let test_app = create_test_app().await;
    let (status, body) = login(&test_app.app, "rwuser", "rwpassword").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["access_token"].is_string());
    assert_eq!(body["token_type"], "bearer");
}

#[tokio::test]
async fn login_succeeds_for_read_user() {
    let test_app = create_test_app().await;
    let (status, body) = login(&test_app.app, "readuser", "readpassword").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["access_token"].is_string());
}

/// パスワード不一致は401
#[tokio::test]
async fn wrong_password_is_401() {
    let test_app = create_test_app().await;
    let (status, body) = login(&test_app.app, "rwuser", "wrong").await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["detail"], "Invalid username or password");
}

/// 未知のユーザー名はパスワード不一致と同じ応答（列挙攻撃対策）
#[tokio::test]
async fn unknown_user_is_indistinguishable_from_wrong_password() {
    let test_app = create_test_app().await;
    let (unknown_status, unknown_body) = login(&test_app.app, "nobody", "rwpassword").await;
    let (wrong_status, wrong_body) = login(&test_app.app, "rwuser", "bad").await;

    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_status, wrong_status);
    assert_eq!(unknown_body, wrong_body);
}

/// フォームフィールド欠落は400
#[tokio::test]
async fn missing_form_field_is_400() {
    let test_app = create_test_app().await;
    let (status, _) = send(
        &test_app.app,
        Request::builder()
            .method("POST")
            .uri("/token")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from("username=rwuser"))
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

/// 発行されたトークンで保護エンドポイントにアクセスできる
#[tokio::test]
async fn issued_token_grants_access() {
    let test_app = create_test_app().await;
    let token = login_token(&test_app.app, "readuser", "readpassword").await;

    let (status, body) = send(&test_app.app, authed_get("/PhoneBook/list", &token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));
}

/// ログインは最終ログイン日時を更新する
#[tokio::test]
async fn login_updates_last_login() {
    let test_app = create_test_app().await;
    login_token(&test_app.app, "rwuser", "rwpassword").await;

    let last_login: Option<String> =
        sqlx::query_scalar("SELECT last_login FROM users WHERE username = 'rwuser'")
            .fetch_one(&test_app.db_pool)
            .await
            .unwrap();
    assert!(last_login.is_some());
}
