#[cfg(test)]
mod tests {
    use crate::helpers::app::{auth_token, make_test_app};
    use axum::{
        body::Body,
        http::{Request, StatusCode, header::CONTENT_TYPE},
        response::Response,
    };
    use db::models::user::Model as User;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    async fn get_json_body(response: Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn login_success_returns_token() {
        let test_app = make_test_app().await;
        User::create(&test_app.db, "msmith", "msmith@school.test", "hunter42x", false)
            .await
            .unwrap();

        let payload = json!({"email": "msmith@school.test", "password": "hunter42x"});
        let req = Request::builder()
            .method("POST")
            .uri("/api/auth/login")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&payload).unwrap()))
            .unwrap();

        let response = test_app.app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["email"], "msmith@school.test");
        assert!(json["data"]["token"].as_str().is_some());
        assert!(json["data"]["expires_at"].as_str().is_some());
    }

    #[tokio::test]
    async fn login_wrong_password_is_unauthorized() {
        let test_app = make_test_app().await;
        User::create(&test_app.db, "msmith", "msmith@school.test", "hunter42x", false)
            .await
            .unwrap();

        let payload = json!({"email": "msmith@school.test", "password": "wrong"});
        let req = Request::builder()
            .method("POST")
            .uri("/api/auth/login")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&payload).unwrap()))
            .unwrap();

        let response = test_app.app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let json = get_json_body(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Invalid email or password");
    }

    #[tokio::test]
    async fn login_invalid_email_is_rejected() {
        let test_app = make_test_app().await;

        let payload = json!({"email": "not-an-email", "password": "whatever1"});
        let req = Request::builder()
            .method("POST")
            .uri("/api/auth/login")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&payload).unwrap()))
            .unwrap();

        let response = test_app.app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = get_json_body(response).await;
        assert_eq!(json["success"], false);
        assert!(json["message"].as_str().unwrap().contains("email"));
    }

    #[tokio::test]
    async fn me_returns_current_account() {
        let test_app = make_test_app().await;
        let token = auth_token(&test_app.db).await;

        let req = Request::builder()
            .method("GET")
            .uri("/api/auth/me")
            .header("Authorization", format!("Bearer {}", token))
            .body(Body::empty())
            .unwrap();

        let response = test_app.app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        assert_eq!(json["data"]["email"], "teacher@school.test");
    }

    #[tokio::test]
    async fn me_without_token_is_unauthorized() {
        let test_app = make_test_app().await;

        let req = Request::builder()
            .method("GET")
            .uri("/api/auth/me")
            .body(Body::empty())
            .unwrap();

        let response = test_app.app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
