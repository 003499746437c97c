pub mod grading;
pub mod lock;
pub mod reconcile;

pub use grading::{GradeTarget, UngradableSubmission};
pub use lock::{is_locked, latest_test_content};
pub use reconcile::{merge_submissions, unify_response};
