use crate::model::{Student, StudentId};
use eyre::{Result, WrapErr, eyre};
use std::fs;
use std::path::Path;
use tracing::info;

/// Reads the student roster. Each line starts with a 3-character numeric id,
/// the rest of the line is the student's name. A repeated id overwrites the
/// earlier name without complaint.
pub fn load_roster(path: &Path) -> Result<Vec<Student>> {
    let text = fs::read_to_string(path)
        .wrap_err_with(|| format!("cannot read roster file {}", path.display()))?;
    let students = parse_roster(&text, path)?;
    info!("loaded {} students from {}", students.len(), path.display());
    Ok(students)
}

fn parse_roster(text: &str, path: &Path) -> Result<Vec<Student>> {
    let mut students: Vec<Student> = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let (id, name) = parse_roster_line(line.trim())
            .wrap_err_with(|| format!("{}:{}: malformed roster line", path.display(), index + 1))?;
        match students.iter_mut().find(|s| s.id == id) {
            Some(existing) => existing.name = name,
            None => students.push(Student { id, name }),
        }
    }
    Ok(students)
}

fn parse_roster_line(line: &str) -> Result<(StudentId, String)> {
    let prefix = line
        .get(..3)
        .ok_or_else(|| eyre!("line is shorter than the 3-character id prefix"))?;
    let id = prefix
        .parse::<u32>()
        .wrap_err_with(|| format!("student id {prefix:?} is not numeric"))?;
    Ok((StudentId(id), line[3..].trim().to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_id_prefix_and_name() {
        let (id, name) = parse_roster_line("101Jane Doe").unwrap();
        assert_eq!(id, StudentId(101));
        assert_eq!(name, "Jane Doe");
    }

    #[test]
    fn rejects_short_and_non_numeric_lines() {
        assert!(parse_roster_line("10").is_err());
        assert!(parse_roster_line("").is_err());
        assert!(parse_roster_line("1a2Jane Doe").is_err());
    }

    #[test]
    fn repeated_id_overwrites_earlier_entry() {
        let path = Path::new("students.txt");
        let students = parse_roster("101Jane Doe\n102John Roe\n101Jane D.\n", path).unwrap();
        assert_eq!(students.len(), 2);
        assert_eq!(students[0].id, StudentId(101));
        assert_eq!(students[0].name, "Jane D.");
        assert_eq!(students[1].name, "John Roe");
    }

    #[test]
    fn error_carries_file_and_line() {
        let path = Path::new("students.txt");
        let err = parse_roster("101Jane Doe\nxyz\n", path).unwrap_err();
        assert!(format!("{err}").contains("students.txt:2"));
    }

    #[test]
    fn loading_is_idempotent() {
        let path = Path::new("students.txt");
        let text = "101Jane Doe\n102John Roe\n";
        let first = parse_roster(text, path).unwrap();
        let second = parse_roster(text, path).unwrap();
        assert_eq!(first.len(), second.len());
        assert!(
            first
                .iter()
                .zip(&second)
                .all(|(a, b)| a.id == b.id && a.name == b.name)
        );
    }
}
