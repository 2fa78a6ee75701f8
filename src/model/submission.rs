use super::{AssignmentId, StudentId};

/// One graded record from the submissions directory. Several submissions may
/// exist for the same (student, assignment) pair; all of them count.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Submission {
    pub student: StudentId,
    pub assignment: AssignmentId,
    pub score: f64,
}
