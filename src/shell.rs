use crate::config::RenderConfig;
use crate::histogram;
use crate::model::Gradebook;
use crate::stats;
use eyre::{Result, WrapErr};
use std::io::{self, Write};
use tracing::debug;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Selection {
    StudentGrade,
    AssignmentStats,
    AssignmentGraph,
}

fn parse_selection(input: &str) -> Option<Selection> {
    match input {
        "1" => Some(Selection::StudentGrade),
        "2" => Some(Selection::AssignmentStats),
        "3" => Some(Selection::AssignmentGraph),
        _ => None,
    }
}

/// Shows the menu, handles exactly one selection, then returns. There is no
/// loop back to the menu.
pub fn run(book: &Gradebook, render: &RenderConfig) -> Result<()> {
    println!("1. Student grade\n2. Assignment statistics\n3. Assignment graph\n");
    let input = prompt("Enter your selection: ")?;
    let Some(selection) = parse_selection(&input) else {
        println!("Invalid selection.");
        return Ok(());
    };
    debug!("handling selection {selection:?}");
    match selection {
        Selection::StudentGrade => {
            let name = prompt("What is the student's name: ")?;
            match book.student_by_name(&name) {
                Some(student) => println!("{}%", stats::course_grade(book, student)?),
                None => println!("Student not found"),
            }
        }
        Selection::AssignmentStats => {
            let name = prompt("What is the assignment name: ")?;
            match book.assignment_by_name(&name) {
                Some(assignment) => match stats::score_stats(&book.scores_for(assignment)) {
                    Some(stats) => println!("{stats}"),
                    None => println!("No submissions found for {name}"),
                },
                None => println!("Assignment not found"),
            }
        }
        Selection::AssignmentGraph => {
            let name = prompt("What is the assignment name: ")?;
            match book.assignment_by_name(&name) {
                Some(assignment) => {
                    let scores = book.scores_for(assignment);
                    let path = histogram::render(&name, &scores, render)?;
                    println!("Histogram saved to {}", path.display());
                }
                None => println!("Assignment not found"),
            }
        }
    }
    Ok(())
}

fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush().wrap_err("cannot flush stdout")?;
    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .wrap_err("cannot read from standard input")?;
    Ok(line.trim().to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_literal_digits_select_a_query() {
        assert_eq!(parse_selection("1"), Some(Selection::StudentGrade));
        assert_eq!(parse_selection("2"), Some(Selection::AssignmentStats));
        assert_eq!(parse_selection("3"), Some(Selection::AssignmentGraph));
        assert_eq!(parse_selection("4"), None);
        assert_eq!(parse_selection(""), None);
        assert_eq!(parse_selection("1 "), None);
    }
}
