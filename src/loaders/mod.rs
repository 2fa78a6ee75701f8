use crate::config::DataConfig;
use crate::model::Gradebook;
use eyre::{Result, WrapErr};

pub use self::catalog::load_catalog;
pub use self::roster::load_roster;
pub use self::submissions::load_submissions;

mod catalog;
mod roster;
mod submissions;

/// Loads the three data sources configured in `data`. Everything is read up
/// front; queries afterwards only touch the returned structure.
pub fn load_gradebook(data: &DataConfig) -> Result<Gradebook> {
    let students = load_roster(&data.students_path()).wrap_err("cannot load student roster")?;
    let assignments =
        load_catalog(&data.assignments_path()).wrap_err("cannot load assignment catalog")?;
    let submissions =
        load_submissions(&data.submissions_dir()).wrap_err("cannot load submissions")?;
    Ok(Gradebook::new(students, assignments, submissions))
}
