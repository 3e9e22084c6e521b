#[cfg(test)]
mod tests {
    use crate::helpers::app::{auth_token, make_test_app};
    use axum::{
        body::Body,
        http::{Request, StatusCode, header::CONTENT_TYPE},
        response::Response,
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    async fn get_json_body(response: Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    fn json_request(method: &str, uri: &str, token: &str, payload: &Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .header("Authorization", format!("Bearer {}", token))
            .body(Body::from(serde_json::to_vec(payload).unwrap()))
            .unwrap()
    }

    fn empty_request(method: &str, uri: &str, token: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("Authorization", format!("Bearer {}", token))
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn create_student_with_and_without_email() {
        let test_app = make_test_app().await;
        let token = auth_token(&test_app.db).await;

        let payload = json!({
            "student_number": "S-1001",
            "full_name": "Amahle Zulu",
            "email": "amahle@school.test"
        });
        let response = test_app
            .app
            .clone()
            .oneshot(json_request("POST", "/api/students", &token, &payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        // No email at all is fine.
        let payload = json!({"student_number": "S-1002", "full_name": "Bongani Sithole"});
        let response = test_app
            .app
            .clone()
            .oneshot(json_request("POST", "/api/students", &token, &payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let json = get_json_body(response).await;
        assert!(json["data"]["email"].is_null());
    }

    #[tokio::test]
    async fn invalid_email_is_rejected() {
        let test_app = make_test_app().await;
        let token = auth_token(&test_app.db).await;

        let payload = json!({
            "student_number": "S-1001",
            "full_name": "Amahle Zulu",
            "email": "not-an-email"
        });
        let response = test_app
            .app
            .clone()
            .oneshot(json_request("POST", "/api/students", &token, &payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn duplicate_student_number_is_a_conflict() {
        let test_app = make_test_app().await;
        let token = auth_token(&test_app.db).await;

        let payload = json!({"student_number": "S-1001", "full_name": "Amahle Zulu"});
        let response = test_app
            .app
            .clone()
            .oneshot(json_request("POST", "/api/students", &token, &payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let payload = json!({"student_number": "S-1001", "full_name": "Someone Else"});
        let response = test_app
            .app
            .clone()
            .oneshot(json_request("POST", "/api/students", &token, &payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn list_students_filters_by_query() {
        let test_app = make_test_app().await;
        let token = auth_token(&test_app.db).await;

        for (number, name) in [("S-1001", "Thandi Nkosi"), ("S-1002", "Peter Mokoena")] {
            let payload = json!({"student_number": number, "full_name": name});
            test_app
                .app
                .clone()
                .oneshot(json_request("POST", "/api/students", &token, &payload))
                .await
                .unwrap();
        }

        let response = test_app
            .app
            .clone()
            .oneshot(empty_request("GET", "/api/students?query=thandi", &token))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json["data"]["total"], 1);
        assert_eq!(json["data"]["students"][0]["student_number"], "S-1001");
    }

    #[tokio::test]
    async fn edit_and_delete_student() {
        let test_app = make_test_app().await;
        let token = auth_token(&test_app.db).await;

        let payload = json!({"student_number": "S-1001", "full_name": "Amahle Zulu"});
        let response = test_app
            .app
            .clone()
            .oneshot(json_request("POST", "/api/students", &token, &payload))
            .await
            .unwrap();
        let id = get_json_body(response).await["data"]["id"].as_i64().unwrap();

        let payload = json!({
            "student_number": "S-1001",
            "full_name": "Amahle Zulu-Dube",
            "email": "amahle@school.test"
        });
        let response = test_app
            .app
            .clone()
            .oneshot(json_request(
                "PUT",
                &format!("/api/students/{}", id),
                &token,
                &payload,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json["data"]["full_name"], "Amahle Zulu-Dube");
        assert_eq!(json["data"]["email"], "amahle@school.test");

        let response = test_app
            .app
            .clone()
            .oneshot(empty_request("DELETE", &format!("/api/students/{}", id), &token))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = test_app
            .app
            .clone()
            .oneshot(empty_request("GET", &format!("/api/students/{}", id), &token))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
