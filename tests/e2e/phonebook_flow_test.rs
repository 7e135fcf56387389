//! 電話帳フローE2Eテスト
//!
//! ログイン → 追加 → 一覧 → 削除 → 一覧 の完全なフロー

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;

use crate::support::app::{
    add_person, authed_get, authed_put, create_test_app, login, login_token, send,
};

#[tokio::test]
async fn complete_readwrite_flow() {
    let test_app = create_test_app().await;

    // Step 1: ReadWriteユーザーでログイン
    let token = login_token(&test_app.app, "rwuser", "rwpassword").await;

    // Step 2: レコードを追加
    let (status, body) = add_person(
        &test_app.app,
        &token,
        "Bruce Schneier",
        "+1(703) 111-2121",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Person added successfully");

    // Step 3: 一覧にそのレコードだけが現れる
    let (status, body) = send(&test_app.app, authed_get("/PhoneBook/list", &token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{ "full_name": "Bruce Schneier", "phone_number": "+1(703) 111-2121" }])
    );

    // Step 4: 氏名で削除
    let (status, body) = send(
        &test_app.app,
        authed_put("/PhoneBook/deleteByName?full_name=Bruce%20Schneier", &token),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Person deleted successfully");

    // Step 5: 一覧は空
    let (status, body) = send(&test_app.app, authed_get("/PhoneBook/list", &token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn read_only_user_can_list_but_not_mutate() {
    let test_app = create_test_app().await;

    let rw_token = login_token(&test_app.app, "rwuser", "rwpassword").await;
    add_person(&test_app.app, &rw_token, "Bruce Schneier", "12345").await;

    let read_token = login_token(&test_app.app, "readuser", "readpassword").await;

    // 一覧は読める
    let (status, body) = send(&test_app.app, authed_get("/PhoneBook/list", &read_token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    // 追加・削除は403
    let (status, _) = add_person(&test_app.app, &read_token, "Someone Else", "67890").await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (status, _) = send(
        &test_app.app,
        authed_put(
            "/PhoneBook/deleteByName?full_name=Bruce%20Schneier",
            &read_token,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // レコードは無傷
    let (_, body) = send(&test_app.app, authed_get("/PhoneBook/list", &rw_token)).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn invalid_credentials_cannot_reach_any_operation() {
    let test_app = create_test_app().await;

    // ログイン失敗
    let (status, _) = login(&test_app.app, "rwuser", "wrong").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // トークンなしでの各操作は401
    for (method, uri) in [
        ("GET", "/PhoneBook/list"),
        ("POST", "/PhoneBook/add"),
        ("PUT", "/PhoneBook/deleteByName?full_name=Bruce"),
        ("PUT", "/PhoneBook/deleteByNumber?phone_number=12345"),
    ] {
        let (status, _) = send(
            &test_app.app,
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{method} {uri}");
    }
}

#[tokio::test]
async fn delete_by_number_flow_with_formatted_number() {
    let test_app = create_test_app().await;
    let token = login_token(&test_app.app, "rwuser", "rwpassword").await;

    add_person(&test_app.app, &token, "Bruce Schneier", "+1(703) 111-2121").await;

    let (status, _) = send(
        &test_app.app,
        authed_put(
            "/PhoneBook/deleteByNumber?phone_number=%2B1(703)%20111-2121",
            &token,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&test_app.app, authed_get("/PhoneBook/list", &token)).await;
    assert_eq!(body, json!([]));
}
