use crate::model::{Gradebook, StudentId};
use eyre::{Result, eyre};
use std::fmt;

/// Course total the weighted sum is graded against. The course is assumed to
/// be worth exactly this many points, independently of what the catalog sums
/// to.
pub const TOTAL_COURSE_POINTS: f64 = 1000.0;

/// Weighted course percentage for one student, rounded to the nearest
/// integer. Every submission counts, duplicates included. A submission
/// referencing an assignment missing from the catalog is a query-time error.
pub fn course_grade(book: &Gradebook, student: StudentId) -> Result<i64> {
    let mut total = 0.0;
    for submission in book.submissions_for(student) {
        let assignment = book.assignment(submission.assignment).ok_or_else(|| {
            eyre!(
                "submission for student {} references unknown assignment id {}",
                student.0,
                submission.assignment.0
            )
        })?;
        total += assignment.weighted_points(submission.score);
    }
    Ok((total / TOTAL_COURSE_POINTS * 100.0).round() as i64)
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ScoreStats {
    pub min: i64,
    pub avg: i64,
    pub max: i64,
}

/// Minimum, arithmetic mean and maximum of the given scores, each rounded to
/// the nearest integer. `None` when there is nothing to aggregate.
pub fn score_stats(scores: &[f64]) -> Option<ScoreStats> {
    if scores.is_empty() {
        return None;
    }
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut sum = 0.0;
    for &score in scores {
        min = min.min(score);
        max = max.max(score);
        sum += score;
    }
    Some(ScoreStats {
        min: min.round() as i64,
        avg: (sum / scores.len() as f64).round() as i64,
        max: max.round() as i64,
    })
}

impl fmt::Display for ScoreStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Min: {}%\nAvg: {}%\nMax: {}%",
            self.min, self.avg, self.max
        )
    }
}
