#[cfg(test)]
mod tests {
    use crate::helpers::app::{auth_token, make_test_app};
    use axum::{
        body::Body,
        http::{Request, StatusCode, header::CONTENT_TYPE},
        response::Response,
    };
    use chrono::NaiveDate;
    use db::models::{
        class::Model as Class, enrollment::Model as Enrollment, exam::Model as Exam,
        exam_result::Model as ExamResult, student::Model as Student,
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

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[tokio::test]
    async fn create_exam_for_class() {
        let test_app = make_test_app().await;
        let token = auth_token(&test_app.db).await;
        let class = Class::create(&test_app.db, "Maths 10", "MATH10", None)
            .await
            .unwrap();

        let payload = json!({
            "class_id": class.id,
            "name": "Midterm",
            "date": "2026-09-10",
            "total_score": 100
        });
        let response = test_app
            .app
            .clone()
            .oneshot(json_request("POST", "/api/exams", &token, &payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let json = get_json_body(response).await;
        assert_eq!(json["data"]["release_status"], "draft");
        assert_eq!(json["data"]["class_code"], "MATH10");
        assert_eq!(json["data"]["auto_release"], false);
        assert_eq!(json["data"]["graded_count"], 0);
    }

    #[tokio::test]
    async fn create_exam_for_unknown_class_is_not_found() {
        let test_app = make_test_app().await;
        let token = auth_token(&test_app.db).await;

        let payload = json!({
            "class_id": 9999,
            "name": "Midterm",
            "date": "2026-09-10",
            "total_score": 100
        });
        let response = test_app
            .app
            .clone()
            .oneshot(json_request("POST", "/api/exams", &token, &payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn zero_total_score_is_rejected() {
        let test_app = make_test_app().await;
        let token = auth_token(&test_app.db).await;
        let class = Class::create(&test_app.db, "Maths 10", "MATH10", None)
            .await
            .unwrap();

        let payload = json!({
            "class_id": class.id,
            "name": "Midterm",
            "date": "2026-09-10",
            "total_score": 0
        });
        let response = test_app
            .app
            .clone()
            .oneshot(json_request("POST", "/api/exams", &token, &payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn list_reports_grading_progress_over_current_roster() {
        let test_app = make_test_app().await;
        let token = auth_token(&test_app.db).await;
        let class = Class::create(&test_app.db, "Maths 10", "MATH10", None)
            .await
            .unwrap();
        let exam = Exam::create(&test_app.db, class.id, "Midterm", date("2026-09-10"), 100, false)
            .await
            .unwrap();

        let a = Student::create(&test_app.db, "S-1", "Amahle Zulu", None)
            .await
            .unwrap();
        let b = Student::create(&test_app.db, "S-2", "Bongani Sithole", None)
            .await
            .unwrap();
        Enrollment::enroll(&test_app.db, class.id, a.id).await.unwrap();
        Enrollment::enroll(&test_app.db, class.id, b.id).await.unwrap();
        ExamResult::replace_for_exam(&test_app.db, exam.id, &[(a.id, Some(70)), (b.id, None)])
            .await
            .unwrap();

        let response = test_app
            .app
            .clone()
            .oneshot(empty_request(
                "GET",
                &format!("/api/exams?class_id={}", class.id),
                &token,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        let entry = &json["data"]["exams"][0];
        assert_eq!(entry["graded_count"], 1);
        assert_eq!(entry["total_students"], 2);

        // Unenrolling a graded student shrinks both counts.
        Enrollment::unenroll(&test_app.db, class.id, a.id).await.unwrap();
        let response = test_app
            .app
            .clone()
            .oneshot(empty_request(
                "GET",
                &format!("/api/exams?class_id={}", class.id),
                &token,
            ))
            .await
            .unwrap();
        let json = get_json_body(response).await;
        let entry = &json["data"]["exams"][0];
        assert_eq!(entry["graded_count"], 0);
        assert_eq!(entry["total_students"], 1);
    }

    #[tokio::test]
    async fn list_for_unknown_class_is_not_found() {
        let test_app = make_test_app().await;
        let token = auth_token(&test_app.db).await;

        let response = test_app
            .app
            .clone()
            .oneshot(empty_request("GET", "/api/exams?class_id=9999", &token))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn released_exam_cannot_be_edited() {
        let test_app = make_test_app().await;
        let token = auth_token(&test_app.db).await;
        let class = Class::create(&test_app.db, "Maths 10", "MATH10", None)
            .await
            .unwrap();
        let exam = Exam::create(&test_app.db, class.id, "Final", date("2026-11-20"), 100, false)
            .await
            .unwrap();
        Exam::mark_released(&test_app.db, exam.id).await.unwrap();

        let payload = json!({
            "class_id": class.id,
            "name": "Final (edited)",
            "date": "2026-11-21",
            "total_score": 80
        });
        let response = test_app
            .app
            .clone()
            .oneshot(json_request(
                "PUT",
                &format!("/api/exams/{}", exam.id),
                &token,
                &payload,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn delete_exam_removes_it() {
        let test_app = make_test_app().await;
        let token = auth_token(&test_app.db).await;
        let class = Class::create(&test_app.db, "Maths 10", "MATH10", None)
            .await
            .unwrap();
        let exam = Exam::create(&test_app.db, class.id, "Quiz 1", date("2026-02-01"), 20, false)
            .await
            .unwrap();

        let response = test_app
            .app
            .clone()
            .oneshot(empty_request("DELETE", &format!("/api/exams/{}", exam.id), &token))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = test_app
            .app
            .clone()
            .oneshot(empty_request("GET", &format!("/api/exams/{}", exam.id), &token))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
