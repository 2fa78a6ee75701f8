use crate::model::{AssignmentId, StudentId, Submission};
use eyre::{Result, WrapErr};
use std::fs::{self, File};
use std::io;
use std::path::Path;
use tracing::{debug, info};

/// Reads every regular file directly inside the submissions directory, in
/// directory-listing order. Each accepted record is a pipe-delimited
/// `student_id|assignment_id|score` triple; records with any other field
/// count are skipped.
pub fn load_submissions(dir: &Path) -> Result<Vec<Submission>> {
    let mut submissions = Vec::new();
    let mut skipped = 0;
    let entries = fs::read_dir(dir)
        .wrap_err_with(|| format!("cannot read submissions directory {}", dir.display()))?;
    for entry in entries {
        let entry = entry
            .wrap_err_with(|| format!("cannot list submissions directory {}", dir.display()))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let file = File::open(&path)
            .wrap_err_with(|| format!("cannot read submission file {}", path.display()))?;
        parse_submissions(file, &path, &mut submissions, &mut skipped)?;
    }
    info!(
        "loaded {} submissions from {}",
        submissions.len(),
        dir.display()
    );
    if skipped > 0 {
        debug!("skipped {skipped} malformed submission records");
    }
    Ok(submissions)
}

fn parse_submissions<R: io::Read>(
    input: R,
    path: &Path,
    out: &mut Vec<Submission>,
    skipped: &mut usize,
) -> Result<()> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'|')
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input);
    for record in reader.records() {
        let record =
            record.wrap_err_with(|| format!("cannot parse records in {}", path.display()))?;
        let line = record.position().map_or(0, |p| p.line());
        if record.len() != 3 {
            debug!(
                "{}:{}: skipping record with {} fields",
                path.display(),
                line,
                record.len()
            );
            *skipped += 1;
            continue;
        }
        let student = record[0].parse::<u32>().wrap_err_with(|| {
            format!("{}:{}: student id is not an integer", path.display(), line)
        })?;
        let assignment = record[1].parse::<u32>().wrap_err_with(|| {
            format!(
                "{}:{}: assignment id is not an integer",
                path.display(),
                line
            )
        })?;
        let score = record[2]
            .parse::<f64>()
            .wrap_err_with(|| format!("{}:{}: score is not a number", path.display(), line))?;
        out.push(Submission {
            student: StudentId(student),
            assignment: AssignmentId(assignment),
            score,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> (Vec<Submission>, usize) {
        let mut out = Vec::new();
        let mut skipped = 0;
        parse_submissions(
            text.as_bytes(),
            Path::new("week1.txt"),
            &mut out,
            &mut skipped,
        )
        .unwrap();
        (out, skipped)
    }

    #[test]
    fn accepts_three_field_records() {
        let (out, skipped) = parse("101|7|95.5\n102|7|60\n");
        assert_eq!(skipped, 0);
        assert_eq!(
            out,
            vec![
                Submission {
                    student: StudentId(101),
                    assignment: AssignmentId(7),
                    score: 95.5,
                },
                Submission {
                    student: StudentId(102),
                    assignment: AssignmentId(7),
                    score: 60.0,
                },
            ]
        );
    }

    #[test]
    fn skips_records_with_wrong_field_count() {
        let (out, skipped) = parse("101|7\n101|7|95.5\n101|7|95.5|extra\n");
        assert_eq!(out.len(), 1);
        assert_eq!(skipped, 2);
    }

    #[test]
    fn duplicate_records_are_all_kept() {
        let (out, _) = parse("101|7|95.5\n101|7|95.5\n");
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn bad_number_in_full_record_is_an_error() {
        let mut out = Vec::new();
        let mut skipped = 0;
        let err = parse_submissions(
            "101|seven|95.5\n".as_bytes(),
            Path::new("week1.txt"),
            &mut out,
            &mut skipped,
        )
        .unwrap_err();
        assert!(format!("{err}").contains("week1.txt:1"));
    }
}
