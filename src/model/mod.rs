pub use self::assignment::{Assignment, AssignmentId};
pub use self::gradebook::Gradebook;
pub use self::student::{Student, StudentId};
pub use self::submission::Submission;

mod assignment;
mod gradebook;
mod student;
mod submission;
