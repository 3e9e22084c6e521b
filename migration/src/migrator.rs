use sea_orm_migration::prelude::*;

use crate::migrations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(migrations::m202608300001_create_users::Migration),
            Box::new(migrations::m202608300002_create_classes::Migration),
            Box::new(migrations::m202608300003_create_students::Migration),
            Box::new(migrations::m202608300004_create_enrollments::Migration),
            Box::new(migrations::m202608300005_create_exams::Migration),
            Box::new(migrations::m202608300006_create_exam_results::Migration),
        ]
    }
}
