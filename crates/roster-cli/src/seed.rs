//! Load initial students from a CSV file.
//!
//! The file needs an `id,name,age,department` header. Every row is parsed
//! before any student is admitted, so a bad row leaves the roster untouched.

use std::path::{Path, PathBuf};

use roster_core::RecordManager;
use roster_model::{ModelError, Student, StudentForm};
use roster_store::PersistenceSink;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file {}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("invalid student in {} at row {row}", path.display())]
    InvalidRow {
        path: PathBuf,
        row: usize,
        #[source]
        source: ModelError,
    },
}

/// Read and parse all students from `path`, in file order.
pub fn read_seed_file(path: &Path) -> Result<Vec<Student>, SeedError> {
    let csv_error = |source| SeedError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(csv_error)?;

    let mut students = Vec::new();
    for (index, result) in reader.deserialize::<StudentForm>().enumerate() {
        let form = result.map_err(csv_error)?;
        let student = form.parse().map_err(|source| SeedError::InvalidRow {
            path: path.to_path_buf(),
            row: index + 1,
            source,
        })?;
        students.push(student);
    }
    debug!(path = %path.display(), rows = students.len(), "seed file parsed");
    Ok(students)
}

/// Admit every student from `path` through the regular add path.
pub fn seed_from_csv<S: PersistenceSink>(
    manager: &mut RecordManager<S>,
    path: &Path,
) -> Result<usize, SeedError> {
    let students = read_seed_file(path)?;
    let count = students.len();
    for student in students {
        manager.add(student);
    }
    info!(path = %path.display(), count, "roster seeded");
    Ok(count)
}
