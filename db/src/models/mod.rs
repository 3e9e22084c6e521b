pub mod class;
pub mod enrollment;
pub mod exam;
pub mod exam_result;
pub mod student;
pub mod user;

pub use class::Entity as Class;
pub use enrollment::Entity as Enrollment;
pub use exam::Entity as Exam;
pub use exam_result::Entity as ExamResult;
pub use student::Entity as Student;
pub use user::Entity as User;
