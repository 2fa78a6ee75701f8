#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct AssignmentId(pub u32);

#[derive(Clone, Debug)]
pub struct Assignment {
    pub id: AssignmentId,
    pub name: String,
    pub max_points: u32,
}

impl Assignment {
    /// Points earned for a percentage score on this assignment.
    pub fn weighted_points(&self, score: f64) -> f64 {
        f64::from(self.max_points) * score / 100.0
    }
}

#[test]
fn test_weighted_points() {
    let a = Assignment {
        id: AssignmentId(7),
        name: "HW1".into(),
        max_points: 100,
    };
    assert_eq!(a.weighted_points(95.5), 95.5);
    let a = Assignment { max_points: 40, ..a };
    assert_eq!(a.weighted_points(50.0), 20.0);
    assert_eq!(a.weighted_points(0.0), 0.0);
}
