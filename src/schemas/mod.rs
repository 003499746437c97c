pub mod question;
pub mod submission;
pub mod task;
