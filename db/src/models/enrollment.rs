use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::QueryOrder;
use serde::{Deserialize, Serialize};

/// Membership of a student in a class, in the `enrollments` table.
///
/// Existence-only: the pair (class, student) is the whole record. Eligibility
/// for an exam's results is derived transitively through this table, so
/// removing a row here immediately excludes the student from graded counts
/// and from release dispatch.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "enrollments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub class_id: i64,
    #[sea_orm(primary_key, auto_increment = false)]
    pub student_id: i64,
    pub created_at: DateTime<Utc>,
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

    #[sea_orm(
        belongs_to = "super::student::Entity",
        from = "Column::StudentId",
        to = "super::student::Column::Id",
        on_delete = "Cascade"
    )]
    Student,
}

impl Related<super::class::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Class.def()
    }
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Enrolls a student. Fails with a unique-constraint error if the pair
    /// already exists; callers map that to a conflict response.
    pub async fn enroll(
        db: &DatabaseConnection,
        class_id: i64,
        student_id: i64,
    ) -> Result<Model, DbErr> {
        let enrollment = ActiveModel {
            class_id: Set(class_id),
            student_id: Set(student_id),
            created_at: Set(Utc::now()),
        };

        enrollment.insert(db).await
    }

    /// Removes a student from a class. Returns whether a row was deleted.
    pub async fn unenroll(
        db: &DatabaseConnection,
        class_id: i64,
        student_id: i64,
    ) -> Result<bool, DbErr> {
        let res = Entity::delete_many()
            .filter(Column::ClassId.eq(class_id))
            .filter(Column::StudentId.eq(student_id))
            .exec(db)
            .await?;
        Ok(res.rows_affected > 0)
    }

    pub async fn is_enrolled(
        db: &DatabaseConnection,
        class_id: i64,
        student_id: i64,
    ) -> Result<bool, DbErr> {
        let found = Entity::find()
            .filter(Column::ClassId.eq(class_id))
            .filter(Column::StudentId.eq(student_id))
            .one(db)
            .await?;
        Ok(found.is_some())
    }

    /// The ids of all students currently enrolled in a class.
    pub async fn roster_ids(db: &DatabaseConnection, class_id: i64) -> Result<Vec<i64>, DbErr> {
        let rows = Entity::find()
            .filter(Column::ClassId.eq(class_id))
            .all(db)
            .await?;
        Ok(rows.into_iter().map(|e| e.student_id).collect())
    }

    /// The current roster of a class as full student records, ordered by name.
    pub async fn roster(
        db: &DatabaseConnection,
        class_id: i64,
    ) -> Result<Vec<super::student::Model>, DbErr> {
        let ids = Self::roster_ids(db, class_id).await?;
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        super::student::Entity::find()
            .filter(super::student::Column::Id.is_in(ids))
            .order_by_asc(super::student::Column::FullName)
            .all(db)
            .await
    }

    pub async fn count_for_class(db: &DatabaseConnection, class_id: i64) -> Result<u64, DbErr> {
        Entity::find()
            .filter(Column::ClassId.eq(class_id))
            .count(db)
            .await
    }
}
