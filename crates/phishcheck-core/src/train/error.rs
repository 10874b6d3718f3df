//! Training job errors. All of them abort the job.

use std::path::PathBuf;

use crate::model::ModelError;

#[derive(Debug, thiserror::Error)]
pub enum TrainError {
    #[error("read dataset {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("dataset {} has no `{column}` column", path.display())]
    MissingColumn { path: PathBuf, column: &'static str },
    #[error("dataset line {line}: label {value:?} is not 0 or 1")]
    InvalidLabel { line: u64, value: String },
    #[error("dataset is empty")]
    EmptyDataset,
    #[error("dataset has no {0} rows")]
    MissingClass(&'static str),
    /// A stratified split needs at least one row of each class on each side.
    #[error("class {label} has {count} row(s); at least 2 are needed for a train/test split")]
    ClassTooSmall { label: &'static str, count: usize },
    #[error("test_fraction must be in (0, 1), got {0}")]
    InvalidTestFraction(f64),
    #[error(transparent)]
    Model(#[from] ModelError),
}
