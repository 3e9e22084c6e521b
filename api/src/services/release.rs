//! The release coordinator: turns a teacher's "release" intent into a set of
//! outbound notifications plus a durable state transition.
//!
//! The contract is "we attempted delivery to everyone eligible", not
//! "everyone received it": per-recipient failures are logged and recorded in
//! the outcome, and the exam is marked released after dispatch regardless of
//! individual delivery results. The only fatal condition is the release-state
//! write itself failing, which leaves the exam in draft and is surfaced to
//! the caller.

use crate::services::email::{Mailer, ResultEmail};
use db::models::{
    class, enrollment::Model as Enrollment, exam, exam_result::Model as ExamResult,
    student,
};
use futures::future::join_all;
use sea_orm::{DatabaseConnection, DbErr};
use serde::Serialize;
use std::collections::HashMap;

/// One qualifying student: currently enrolled in the exam's class and holding
/// a non-null score.
#[derive(Debug, Clone)]
pub struct ReleaseEntry {
    pub student: student::Model,
    pub score: i32,
}

/// Per-recipient delivery result. Failures carry the transport error text for
/// the logs and the outcome report; they never abort the batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "status", content = "detail")]
pub enum DispatchStatus {
    Sent,
    SkippedNoEmail,
    Failed(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct DispatchReport {
    pub student_id: i64,
    pub student_name: String,
    #[serde(flatten)]
    pub status: DispatchStatus,
}

/// Aggregate result of a release attempt, reported back to the caller.
#[derive(Debug, Default, Serialize)]
pub struct ReleaseOutcome {
    /// Whether the exam is in the released state after this call.
    pub released: bool,
    /// Set when the exam was already released; no dispatch happened.
    pub already_released: bool,
    pub sent: usize,
    pub skipped_no_email: usize,
    pub failed: usize,
    pub reports: Vec<DispatchReport>,
}

impl ReleaseOutcome {
    fn from_reports(reports: Vec<DispatchReport>) -> Self {
        let sent = reports
            .iter()
            .filter(|r| r.status == DispatchStatus::Sent)
            .count();
        let skipped_no_email = reports
            .iter()
            .filter(|r| r.status == DispatchStatus::SkippedNoEmail)
            .count();
        let failed = reports.len() - sent - skipped_no_email;

        Self {
            released: true,
            already_released: false,
            sent,
            skipped_no_email,
            failed,
            reports,
        }
    }
}

/// Computes the set of (student, score) tuples eligible for notification.
///
/// Qualifying rows are exam results with a non-null score whose student is
/// *currently* enrolled in the exam's class; results left behind by
/// since-unenrolled students are excluded. If the exam's class cannot be
/// resolved the set is empty and release proceeds as a no-op.
pub async fn compute_release_set(
    db: &DatabaseConnection,
    exam: &exam::Model,
) -> Result<Vec<ReleaseEntry>, DbErr> {
    if class::Model::get_by_id(db, exam.class_id).await?.is_none() {
        return Ok(Vec::new());
    }

    let roster = Enrollment::roster(db, exam.class_id).await?;
    let scores: HashMap<i64, i32> = ExamResult::get_for_exam(db, exam.id)
        .await?
        .into_iter()
        .filter_map(|r| r.score.map(|s| (r.student_id, s)))
        .collect();

    let entries = roster
        .into_iter()
        .filter_map(|student| {
            scores
                .get(&student.id)
                .map(|&score| ReleaseEntry { student, score })
        })
        .collect();

    Ok(entries)
}

/// Dispatches one notification per entry, fully in parallel.
///
/// Recipients share no state and no ordering: each send is independent and a
/// failure in one never blocks or rolls back another. Students without a
/// stored email address are recorded as skipped, not failed.
pub async fn dispatch_notifications(
    mailer: &dyn Mailer,
    exam: &exam::Model,
    class_label: &str,
    entries: &[ReleaseEntry],
) -> Vec<DispatchReport> {
    let sends = entries.iter().map(|entry| async move {
        let status = match entry.student.email.as_deref() {
            None => DispatchStatus::SkippedNoEmail,
            Some(address) => {
                let payload = ResultEmail {
                    student_name: entry.student.full_name.clone(),
                    exam_name: exam.name.clone(),
                    class_label: class_label.to_owned(),
                    score: entry.score,
                    total_score: exam.total_score,
                };

                match mailer.send_result_email(address, &payload).await {
                    Ok(()) => DispatchStatus::Sent,
                    Err(e) => {
                        tracing::warn!(
                            exam_id = exam.id,
                            student_id = entry.student.id,
                            error = %e,
                            "Failed to send result notification"
                        );
                        DispatchStatus::Failed(e.to_string())
                    }
                }
            }
        };

        DispatchReport {
            student_id: entry.student.id,
            student_name: entry.student.full_name.clone(),
            status,
        }
    });

    join_all(sends).await
}

/// Marks the exam released and clears its auto-release flag. Monotonic: the
/// released state is never left once entered.
pub async fn finalize_release(db: &DatabaseConnection, exam_id: i64) -> Result<(), DbErr> {
    exam::Model::mark_released(db, exam_id).await?;
    Ok(())
}

/// Releases an exam end to end: compute the eligible set, attempt delivery to
/// every member, then flip the release state.
///
/// - An unresolvable exam yields a no-op success (nothing to send, nothing to
///   mark).
/// - An already-released exam yields a no-op success with zero dispatch
///   attempts, so hitting release twice never re-mails anyone.
/// - A release with zero qualifying recipients still transitions the exam.
/// - A failed state write is the one error path out of here.
pub async fn release(
    db: &DatabaseConnection,
    mailer: &dyn Mailer,
    exam_id: i64,
) -> Result<ReleaseOutcome, DbErr> {
    let Some(exam) = exam::Model::get_by_id(db, exam_id).await? else {
        return Ok(ReleaseOutcome::default());
    };

    if exam.release_status == exam::ReleaseStatus::Released {
        return Ok(ReleaseOutcome {
            released: true,
            already_released: true,
            ..Default::default()
        });
    }

    let entries = compute_release_set(db, &exam).await?;

    let class_label = match class::Model::get_by_id(db, exam.class_id).await? {
        Some(class) => format!("{} ({})", class.name, class.code),
        None => String::new(),
    };

    let reports = dispatch_notifications(mailer, &exam, &class_label, &entries).await;

    // The state transition happens after dispatch was attempted, regardless
    // of per-recipient outcomes. If this write fails the exam stays in draft
    // and the caller sees the error.
    finalize_release(db, exam.id).await?;

    tracing::info!(
        exam_id = exam.id,
        eligible = entries.len(),
        sent = reports
            .iter()
            .filter(|r| r.status == DispatchStatus::Sent)
            .count(),
        "Exam results released"
    );

    Ok(ReleaseOutcome::from_reports(reports))
}
