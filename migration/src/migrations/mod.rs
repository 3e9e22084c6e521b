pub mod m202608300001_create_users;
pub mod m202608300002_create_classes;
pub mod m202608300003_create_students;
pub mod m202608300004_create_enrollments;
pub mod m202608300005_create_exams;
pub mod m202608300006_create_exam_results;
