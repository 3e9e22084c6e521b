use chrono::NaiveDate;
use db::models::{class, exam};
use sea_orm::{DatabaseConnection, DbErr};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body shared by exam create and edit.
#[derive(Debug, Deserialize, Validate)]
pub struct ExamRequest {
    pub class_id: i64,

    #[validate(length(min = 1, max = 100, message = "Exam name must be 1-100 characters"))]
    pub name: String,

    /// ISO date, e.g. `2026-09-10`.
    pub date: NaiveDate,

    #[validate(range(min = 1, message = "Total score must be at least 1"))]
    pub total_score: i32,

    #[serde(default)]
    pub auto_release: bool,
}

/// An exam joined with its class and grading progress.
#[derive(Debug, Serialize, Default)]
pub struct ExamResponse {
    pub id: i64,
    pub class_id: i64,
    pub class_name: String,
    pub class_code: String,
    pub name: String,
    pub date: String,
    pub total_score: i32,
    pub release_status: String,
    pub auto_release: bool,
    /// Results with a score, counted over the current roster only.
    pub graded_count: u64,
    /// Current roster size of the exam's class.
    pub total_students: u64,
    pub created_at: String,
    pub updated_at: String,
}

impl ExamResponse {
    pub fn from_model(
        exam: exam::Model,
        class: &class::Model,
        graded_count: u64,
        total_students: u64,
    ) -> Self {
        Self {
            id: exam.id,
            class_id: exam.class_id,
            class_name: class.name.clone(),
            class_code: class.code.clone(),
            name: exam.name,
            date: exam.date.to_string(),
            total_score: exam.total_score,
            release_status: exam.release_status.to_string(),
            auto_release: exam.auto_release,
            graded_count,
            total_students,
            created_at: exam.created_at.to_rfc3339(),
            updated_at: exam.updated_at.to_rfc3339(),
        }
    }
}

/// Builds the joined response for one exam, resolving its class and counts.
pub async fn build_exam_response(
    db: &DatabaseConnection,
    exam: exam::Model,
) -> Result<Option<ExamResponse>, DbErr> {
    let Some(found) = class::Model::get_by_id(db, exam.class_id).await? else {
        return Ok(None);
    };

    let graded =
        db::models::exam_result::Model::graded_count(db, exam.id, exam.class_id).await?;
    let roster_size =
        db::models::enrollment::Model::count_for_class(db, exam.class_id).await?;

    Ok(Some(ExamResponse::from_model(
        exam,
        &found,
        graded,
        roster_size,
    )))
}

#[derive(Debug, Serialize, Default)]
pub struct ExamListResponse {
    pub exams: Vec<ExamResponse>,
}
