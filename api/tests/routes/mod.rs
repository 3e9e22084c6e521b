pub mod auth_test;
pub mod classes_test;
pub mod exams_test;
pub mod health_test;
pub mod students_test;
