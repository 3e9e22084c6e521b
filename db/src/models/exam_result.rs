use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::TransactionTrait;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One student's score for one exam, in the `exam_results` table.
///
/// `score` is nullable: the score sheet persists blank cells so a half-graded
/// sheet survives a save. At most one row exists per (exam, student) pair.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "exam_results")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub exam_id: i64,
    pub student_id: i64,
    pub score: Option<i32>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::exam::Entity",
        from = "Column::ExamId",
        to = "super::exam::Column::Id",
        on_delete = "Cascade"
    )]
    Exam,

    #[sea_orm(
        belongs_to = "super::student::Entity",
        from = "Column::StudentId",
        to = "super::student::Column::Id",
        on_delete = "Cascade"
    )]
    Student,
}

impl Related<super::exam::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Exam.def()
    }
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn get_for_exam(
        db: &DatabaseConnection,
        exam_id: i64,
    ) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::ExamId.eq(exam_id))
            .all(db)
            .await
    }

    /// Replaces the entire result set of an exam with `entries` in one
    /// transaction: a full overwrite, never a merge. A student omitted from
    /// `entries` loses their stored score.
    pub async fn replace_for_exam(
        db: &DatabaseConnection,
        exam_id: i64,
        entries: &[(i64, Option<i32>)],
    ) -> Result<(), DbErr> {
        let txn = db.begin().await?;

        Entity::delete_many()
            .filter(Column::ExamId.eq(exam_id))
            .exec(&txn)
            .await?;

        let now = Utc::now();
        for (student_id, score) in entries {
            let row = ActiveModel {
                exam_id: Set(exam_id),
                student_id: Set(*student_id),
                score: Set(*score),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            };
            row.insert(&txn).await?;
        }

        txn.commit().await
    }

    /// Counts results with a non-null score whose student is still on the
    /// class roster. Rows left behind by since-unenrolled students do not
    /// count; this is the one graded-count definition used everywhere.
    pub async fn graded_count(
        db: &DatabaseConnection,
        exam_id: i64,
        class_id: i64,
    ) -> Result<u64, DbErr> {
        let roster: HashSet<i64> = super::enrollment::Model::roster_ids(db, class_id)
            .await?
            .into_iter()
            .collect();

        let results = Self::get_for_exam(db, exam_id).await?;
        let count = results
            .iter()
            .filter(|r| r.score.is_some() && roster.contains(&r.student_id))
            .count();

        Ok(count as u64)
    }
}
