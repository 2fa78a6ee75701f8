use crate::model::{Assignment, AssignmentId};
use eyre::{Result, WrapErr, ensure};
use std::fs;
use std::path::Path;
use tracing::info;

/// Reads the assignment catalog. Lines come in groups of three: assignment
/// name, assignment id, point value. The first malformed group aborts the
/// whole load.
pub fn load_catalog(path: &Path) -> Result<Vec<Assignment>> {
    let text = fs::read_to_string(path)
        .wrap_err_with(|| format!("cannot read catalog file {}", path.display()))?;
    let assignments = parse_catalog(&text, path)?;
    info!(
        "loaded {} assignments from {}",
        assignments.len(),
        path.display()
    );
    Ok(assignments)
}

fn parse_catalog(text: &str, path: &Path) -> Result<Vec<Assignment>> {
    let lines = text.lines().collect::<Vec<_>>();
    ensure!(
        lines.len() % 3 == 0,
        "{}: catalog must hold records of 3 lines, found {} lines",
        path.display(),
        lines.len()
    );
    let mut assignments: Vec<Assignment> = Vec::new();
    for (group, chunk) in lines.chunks(3).enumerate() {
        let lineno = group * 3 + 1;
        let name = chunk[0].trim().to_owned();
        let id = chunk[1].trim().parse::<u32>().wrap_err_with(|| {
            format!(
                "{}:{}: assignment id {:?} is not an integer",
                path.display(),
                lineno + 1,
                chunk[1].trim()
            )
        })?;
        let max_points = chunk[2].trim().parse::<u32>().wrap_err_with(|| {
            format!(
                "{}:{}: point value {:?} is not an integer",
                path.display(),
                lineno + 2,
                chunk[2].trim()
            )
        })?;
        let id = AssignmentId(id);
        match assignments.iter_mut().find(|a| a.id == id) {
            Some(existing) => {
                existing.name = name;
                existing.max_points = max_points;
            }
            None => assignments.push(Assignment {
                id,
                name,
                max_points,
            }),
        }
    }
    Ok(assignments)
}
