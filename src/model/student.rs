#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub struct StudentId(pub u32);

#[derive(Clone, Debug)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
}
