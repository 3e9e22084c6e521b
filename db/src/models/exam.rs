use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::DeriveActiveEnum;
use sea_orm::entity::prelude::*;
use sea_orm::QueryOrder;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// A gradable assessment tied to one class, in the `exams` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "exams")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub class_id: i64,
    pub name: String,
    pub date: NaiveDate,

    /// Maximum achievable score; scores are validated against this bound.
    pub total_score: i32,

    pub release_status: ReleaseStatus,

    /// Data-only flag carried from exam setup; cleared when the exam is
    /// released. Nothing in the server schedules off it.
    pub auto_release: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One-way release state: `draft --release--> released`. No reverse
/// transition exists in the API; unreleasing is a manual database override.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "release_status_enum")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ReleaseStatus {
    #[sea_orm(string_value = "draft")]
    Draft,

    #[sea_orm(string_value = "released")]
    Released,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::class::Entity",
        from = "Column::ClassId",
        to = "super::class::Column::Id",
        on_delete = "Cascade"
    )]
    Class,

    #[sea_orm(has_many = "super::exam_result::Entity")]
    ExamResult,
}

impl Related<super::class::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Class.def()
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
        class_id: i64,
        name: &str,
        date: NaiveDate,
        total_score: i32,
        auto_release: bool,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        let exam = ActiveModel {
            class_id: Set(class_id),
            name: Set(name.to_owned()),
            date: Set(date),
            total_score: Set(total_score),
            release_status: Set(ReleaseStatus::Draft),
            auto_release: Set(auto_release),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        exam.insert(db).await
    }

    pub async fn edit(
        db: &DatabaseConnection,
        id: i64,
        class_id: i64,
        name: &str,
        date: NaiveDate,
        total_score: i32,
        auto_release: bool,
    ) -> Result<Model, DbErr> {
        let exam = ActiveModel {
            id: Set(id),
            class_id: Set(class_id),
            name: Set(name.to_owned()),
            date: Set(date),
            total_score: Set(total_score),
            auto_release: Set(auto_release),
            updated_at: Set(Utc::now()),
            ..Default::default()
        };

        exam.update(db).await
    }

    /// Deletes an exam. Its results cascade at the database level.
    pub async fn delete(db: &DatabaseConnection, id: i64) -> Result<bool, DbErr> {
        let res = Entity::delete_by_id(id).exec(db).await?;
        Ok(res.rows_affected > 0)
    }

    pub async fn get_by_id(db: &DatabaseConnection, id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    /// All exams, newest exam date first.
    pub async fn get_all(db: &DatabaseConnection) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .order_by_desc(Column::Date)
            .all(db)
            .await
    }

    pub async fn get_for_class(
        db: &DatabaseConnection,
        class_id: i64,
    ) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::ClassId.eq(class_id))
            .order_by_desc(Column::Date)
            .all(db)
            .await
    }

    /// Marks the exam as released and clears the auto-release flag.
    ///
    /// Monotonic: applying it to an already-released exam rewrites the same
    /// state. Callers that must not re-dispatch notifications check
    /// `release_status` before getting here.
    pub async fn mark_released(db: &DatabaseConnection, id: i64) -> Result<Model, DbErr> {
        let exam = ActiveModel {
            id: Set(id),
            release_status: Set(ReleaseStatus::Released),
            auto_release: Set(false),
            updated_at: Set(Utc::now()),
            ..Default::default()
        };

        exam.update(db).await
    }
}
