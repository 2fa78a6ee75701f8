use super::{Assignment, AssignmentId, Student, StudentId, Submission};

/// All loaded data behind read-only accessors. Populated once at startup and
/// never mutated afterwards.
#[derive(Debug)]
pub struct Gradebook {
    pub students: Vec<Student>,
    pub assignments: Vec<Assignment>,
    pub submissions: Vec<Submission>,
}

impl Gradebook {
    pub fn new(
        students: Vec<Student>,
        assignments: Vec<Assignment>,
        submissions: Vec<Submission>,
    ) -> Gradebook {
        Gradebook {
            students,
            assignments,
            submissions,
        }
    }

    pub fn assignment(&self, id: AssignmentId) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.id == id)
    }

    /// First roster entry with this exact name. Names are assumed unique in
    /// practice but not enforced, so duplicates resolve to the earliest entry.
    pub fn student_by_name(&self, name: &str) -> Option<StudentId> {
        self.students.iter().find(|s| s.name == name).map(|s| s.id)
    }

    pub fn assignment_by_name(&self, name: &str) -> Option<AssignmentId> {
        self.assignments
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.id)
    }

    pub fn submissions_for(&self, student: StudentId) -> impl Iterator<Item = &Submission> {
        self.submissions.iter().filter(move |s| s.student == student)
    }

    /// Every recorded score for an assignment, in load order.
    pub fn scores_for(&self, assignment: AssignmentId) -> Vec<f64> {
        self.submissions
            .iter()
            .filter(|s| s.assignment == assignment)
            .map(|s| s.score)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book() -> Gradebook {
        Gradebook::new(
            vec![
                Student {
                    id: StudentId(101),
                    name: "Jane Doe".into(),
                },
                Student {
                    id: StudentId(102),
                    name: "Jane Doe".into(),
                },
                Student {
                    id: StudentId(103),
                    name: "John Roe".into(),
                },
            ],
            vec![Assignment {
                id: AssignmentId(7),
                name: "HW1".into(),
                max_points: 100,
            }],
            vec![
                Submission {
                    student: StudentId(101),
                    assignment: AssignmentId(7),
                    score: 95.5,
                },
                Submission {
                    student: StudentId(103),
                    assignment: AssignmentId(7),
                    score: 60.0,
                },
                Submission {
                    student: StudentId(101),
                    assignment: AssignmentId(7),
                    score: 80.0,
                },
            ],
        )
    }

    #[test]
    fn name_lookup_returns_first_match() {
        let book = book();
        assert_eq!(book.student_by_name("Jane Doe"), Some(StudentId(101)));
        assert_eq!(book.student_by_name("John Roe"), Some(StudentId(103)));
        assert_eq!(book.student_by_name("Nobody"), None);
        assert_eq!(book.assignment_by_name("HW1"), Some(AssignmentId(7)));
        assert_eq!(book.assignment_by_name("HW2"), None);
    }

    #[test]
    fn scores_keep_duplicates_and_order() {
        let book = book();
        assert_eq!(book.scores_for(AssignmentId(7)), vec![95.5, 60.0, 80.0]);
        assert_eq!(book.submissions_for(StudentId(101)).count(), 2);
    }
}
