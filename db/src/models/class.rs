use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::{Condition, QueryOrder};
use serde::{Deserialize, Serialize};

/// A class taught by the teacher, in the `classes` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "classes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub code: String,
    pub subject: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::enrollment::Entity")]
    Enrollment,

    #[sea_orm(has_many = "super::exam::Entity")]
    Exam,
}

impl Related<super::enrollment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollment.def()
    }
}

impl Related<super::exam::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Exam.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DatabaseConnection,
        name: &str,
        code: &str,
        subject: Option<&str>,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        let class = ActiveModel {
            name: Set(name.to_owned()),
            code: Set(code.to_owned()),
            subject: Set(subject.map(str::to_owned)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        class.insert(db).await
    }

    pub async fn edit(
        db: &DatabaseConnection,
        id: i64,
        name: &str,
        code: &str,
        subject: Option<&str>,
    ) -> Result<Model, DbErr> {
        let class = ActiveModel {
            id: Set(id),
            name: Set(name.to_owned()),
            code: Set(code.to_owned()),
            subject: Set(subject.map(str::to_owned)),
            updated_at: Set(Utc::now()),
            ..Default::default()
        };

        class.update(db).await
    }

    /// Deletes a class. Enrollments and exams (with their results) cascade at
    /// the database level.
    pub async fn delete(db: &DatabaseConnection, id: i64) -> Result<bool, DbErr> {
        let res = Entity::delete_by_id(id).exec(db).await?;
        Ok(res.rows_affected > 0)
    }

    pub async fn get_by_id(db: &DatabaseConnection, id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    /// Pages through classes, optionally filtered by a case-insensitive
    /// substring match on name or code. Returns the page plus the filtered
    /// total so callers can render pagination.
    pub async fn filter(
        db: &DatabaseConnection,
        page: u64,
        per_page: u64,
        query: Option<&str>,
    ) -> Result<(Vec<Model>, u64), DbErr> {
        let mut find = Entity::find().order_by_asc(Column::Name);

        if let Some(q) = query {
            // SQLite LIKE is case-insensitive for ASCII, which is what we want here.
            find = find.filter(
                Condition::any()
                    .add(Column::Name.contains(q))
                    .add(Column::Code.contains(q)),
            );
        }

        let paginator = find.paginate(db, per_page.max(1));
        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(page.saturating_sub(1)).await?;

        Ok((rows, total))
    }
}
