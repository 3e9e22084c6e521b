use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::{Condition, QueryOrder};
use serde::{Deserialize, Serialize};

/// A student record in the `students` table.
///
/// `email` is optional: students without one are still graded, they are just
/// skipped when results are mailed out.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_number: String,
    pub full_name: String,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::enrollment::Entity")]
    Enrollment,

    #[sea_orm(has_many = "super::exam_result::Entity")]
    ExamResult,
}

impl Related<super::enrollment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollment.def()
    }
}

impl Related<super::exam_result::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExamResult.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DatabaseConnection,
        student_number: &str,
        full_name: &str,
        email: Option<&str>,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        let student = ActiveModel {
            student_number: Set(student_number.to_owned()),
            full_name: Set(full_name.to_owned()),
            email: Set(email.map(str::to_owned)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        student.insert(db).await
    }

    pub async fn edit(
        db: &DatabaseConnection,
        id: i64,
        student_number: &str,
        full_name: &str,
        email: Option<&str>,
    ) -> Result<Model, DbErr> {
        let student = ActiveModel {
            id: Set(id),
            student_number: Set(student_number.to_owned()),
            full_name: Set(full_name.to_owned()),
            email: Set(email.map(str::to_owned)),
            updated_at: Set(Utc::now()),
            ..Default::default()
        };

        student.update(db).await
    }

    /// Deletes a student. Enrollments and exam results cascade at the
    /// database level.
    pub async fn delete(db: &DatabaseConnection, id: i64) -> Result<bool, DbErr> {
        let res = Entity::delete_by_id(id).exec(db).await?;
        Ok(res.rows_affected > 0)
    }

    pub async fn get_by_id(db: &DatabaseConnection, id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    pub async fn get_all(db: &DatabaseConnection) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .order_by_asc(Column::FullName)
            .all(db)
            .await
    }

    /// Pages through students, optionally filtered by a substring match on
    /// name, student number or email.
    pub async fn filter(
        db: &DatabaseConnection,
        page: u64,
        per_page: u64,
        query: Option<&str>,
    ) -> Result<(Vec<Model>, u64), DbErr> {
        let mut find = Entity::find().order_by_asc(Column::FullName);

        if let Some(q) = query {
            find = find.filter(
                Condition::any()
                    .add(Column::FullName.contains(q))
                    .add(Column::StudentNumber.contains(q))
                    .add(Column::Email.contains(q)),
            );
        }

        let paginator = find.paginate(db, per_page.max(1));
        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(page.saturating_sub(1)).await?;

        Ok((rows, total))
    }
}
