#[cfg(test)]
mod tests {
    use crate::helpers::app::{TestApp, auth_token, make_test_app};
    use axum::{
        body::Body,
        http::{Request, StatusCode, header::CONTENT_TYPE},
        response::Response,
    };
    use db::models::student::Model as Student;
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

    async fn create_class(test_app: &TestApp, token: &str, name: &str, code: &str) -> i64 {
        let payload = json!({"name": name, "code": code, "subject": null});
        let response = test_app
            .app
            .clone()
            .oneshot(json_request("POST", "/api/classes", token, &payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        get_json_body(response).await["data"]["id"].as_i64().unwrap()
    }

    #[tokio::test]
    async fn class_routes_require_authentication() {
        let test_app = make_test_app().await;

        let req = Request::builder()
            .method("GET")
            .uri("/api/classes")
            .body(Body::empty())
            .unwrap();

        let response = test_app.app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn create_and_get_class() {
        let test_app = make_test_app().await;
        let token = auth_token(&test_app.db).await;

        let payload = json!({"name": "Mathematics 10A", "code": "MATH10A", "subject": "Mathematics"});
        let response = test_app
            .app
            .clone()
            .oneshot(json_request("POST", "/api/classes", &token, &payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let json = get_json_body(response).await;
        assert_eq!(json["message"], "Class created successfully");
        assert_eq!(json["data"]["student_count"], 0);
        let id = json["data"]["id"].as_i64().unwrap();

        let response = test_app
            .app
            .clone()
            .oneshot(empty_request("GET", &format!("/api/classes/{}", id), &token))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json["data"]["code"], "MATH10A");
        assert_eq!(json["data"]["subject"], "Mathematics");
    }

    #[tokio::test]
    async fn duplicate_class_code_is_a_conflict() {
        let test_app = make_test_app().await;
        let token = auth_token(&test_app.db).await;
        create_class(&test_app, &token, "Maths 10", "MATH10").await;

        let payload = json!({"name": "Other", "code": "MATH10", "subject": null});
        let response = test_app
            .app
            .clone()
            .oneshot(json_request("POST", "/api/classes", &token, &payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let json = get_json_body(response).await;
        assert_eq!(json["message"], "A class with this code already exists");
    }

    #[tokio::test]
    async fn list_classes_filters_by_query() {
        let test_app = make_test_app().await;
        let token = auth_token(&test_app.db).await;
        create_class(&test_app, &token, "Physics 11", "PHY11").await;
        create_class(&test_app, &token, "Chemistry 11", "CHEM11").await;

        let response = test_app
            .app
            .clone()
            .oneshot(empty_request("GET", "/api/classes?query=phy", &token))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        assert_eq!(json["data"]["total"], 1);
        assert_eq!(json["data"]["classes"][0]["code"], "PHY11");
    }

    #[tokio::test]
    async fn edit_and_delete_class() {
        let test_app = make_test_app().await;
        let token = auth_token(&test_app.db).await;
        let id = create_class(&test_app, &token, "History 8", "HIS8").await;

        let payload = json!({"name": "History 8B", "code": "HIS8B", "subject": "History"});
        let response = test_app
            .app
            .clone()
            .oneshot(json_request(
                "PUT",
                &format!("/api/classes/{}", id),
                &token,
                &payload,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(get_json_body(response).await["data"]["code"], "HIS8B");

        let response = test_app
            .app
            .clone()
            .oneshot(empty_request("DELETE", &format!("/api/classes/{}", id), &token))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = test_app
            .app
            .clone()
            .oneshot(empty_request("GET", &format!("/api/classes/{}", id), &token))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn roster_enroll_and_unenroll() {
        let test_app = make_test_app().await;
        let token = auth_token(&test_app.db).await;
        let class_id = create_class(&test_app, &token, "Biology 9", "BIO9").await;

        let zan = Student::create(&test_app.db, "S-1", "Zanele Khumalo", None)
            .await
            .unwrap();
        let abe = Student::create(&test_app.db, "S-2", "Abel Maseko", None)
            .await
            .unwrap();

        for student in [&zan, &abe] {
            let payload = json!({"student_id": student.id});
            let response = test_app
                .app
                .clone()
                .oneshot(json_request(
                    "POST",
                    &format!("/api/classes/{}/students", class_id),
                    &token,
                    &payload,
                ))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::CREATED);
        }

        // Enrolling the same student again is a conflict.
        let payload = json!({"student_id": zan.id});
        let response = test_app
            .app
            .clone()
            .oneshot(json_request(
                "POST",
                &format!("/api/classes/{}/students", class_id),
                &token,
                &payload,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        // Roster comes back ordered by name.
        let response = test_app
            .app
            .clone()
            .oneshot(empty_request(
                "GET",
                &format!("/api/classes/{}/students", class_id),
                &token,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        let names: Vec<_> = json["data"]["students"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["full_name"].as_str().unwrap().to_owned())
            .collect();
        assert_eq!(names, vec!["Abel Maseko", "Zanele Khumalo"]);

        let response = test_app
            .app
            .clone()
            .oneshot(empty_request(
                "DELETE",
                &format!("/api/classes/{}/students/{}", class_id, abe.id),
                &token,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        // A second unenroll finds nothing.
        let response = test_app
            .app
            .clone()
            .oneshot(empty_request(
                "DELETE",
                &format!("/api/classes/{}/students/{}", class_id, abe.id),
                &token,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn enrolling_unknown_student_is_not_found() {
        let test_app = make_test_app().await;
        let token = auth_token(&test_app.db).await;
        let class_id = create_class(&test_app, &token, "Biology 9", "BIO9").await;

        let payload = json!({"student_id": 9999});
        let response = test_app
            .app
            .clone()
            .oneshot(json_request(
                "POST",
                &format!("/api/classes/{}/students", class_id),
                &token,
                &payload,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
