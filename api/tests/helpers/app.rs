use api::auth::generate_jwt;
use api::routes::routes;
use api::services::email::{MailError, Mailer, ResultEmail};
use api::state::AppState;
use axum::{Router, body::Body, http::Request, response::Response};
use sea_orm::DatabaseConnection;
use std::collections::HashSet;
use std::convert::Infallible;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;
use tower::util::BoxCloneService;

/// Recording `Mailer` double. Every attempted delivery is captured; specific
/// addresses can be told to fail to exercise partial-failure paths.
#[derive(Default)]
pub struct RecordingMailer {
    attempts: Mutex<Vec<(String, ResultEmail)>>,
    fail_for: Mutex<HashSet<String>>,
}

impl RecordingMailer {
    pub fn fail_for(&self, email: &str) {
        self.fail_for.lock().unwrap().insert(email.to_owned());
    }

    /// Addresses of every attempted delivery, in dispatch order.
    pub fn attempted(&self) -> Vec<String> {
        self.attempts
            .lock()
            .unwrap()
            .iter()
            .map(|(to, _)| to.clone())
            .collect()
    }

    pub fn last_email_to(&self, to: &str) -> Option<ResultEmail> {
        self.attempts
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(addr, _)| addr == to)
            .map(|(_, email)| email.clone())
    }
}

#[async_trait::async_trait]
impl Mailer for RecordingMailer {
    async fn send_result_email(
        &self,
        to_email: &str,
        email: &ResultEmail,
    ) -> Result<(), MailError> {
        self.attempts
            .lock()
            .unwrap()
            .push((to_email.to_owned(), email.clone()));

        if self.fail_for.lock().unwrap().contains(to_email) {
            return Err("simulated SMTP failure".into());
        }
        Ok(())
    }
}

/// One fully wired application over a fresh in-memory database.
pub struct TestApp {
    pub app: BoxCloneService<Request<Body>, Response, Infallible>,
    pub db: DatabaseConnection,
    pub mailer: Arc<RecordingMailer>,
}

pub async fn make_test_app() -> TestApp {
    let db = db::test_utils::setup_test_db().await;
    let mailer = Arc::new(RecordingMailer::default());

    let state = AppState::new(db.clone(), mailer.clone());
    let router = Router::new().nest("/api", routes(state));

    TestApp {
        app: router.into_service().boxed_clone(),
        db,
        mailer,
    }
}

/// A bearer token for a freshly created teacher account.
pub async fn auth_token(db: &DatabaseConnection) -> String {
    let user = db::models::user::Model::create(db, "teacher", "teacher@school.test", "password123", false)
        .await
        .expect("Failed to create test account");
    let (token, _) = generate_jwt(user.id, user.admin);
    token
}
