pub mod course;
pub mod enrollment;
pub mod error;
pub mod student;
