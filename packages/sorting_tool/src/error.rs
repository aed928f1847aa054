use ::thiserror::Error;

/// Reasons the command line is rejected. Each one ends the run before any
/// input is read.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ArgsError {
    #[error("No sorting type defined !")]
    NoSortingType,

    #[error("No data type defined !")]
    NoDataType,

    #[error("No filename defined !")]
    NoFileName,

    #[error("{0} is not a valid parameter. It will be skipped.")]
    InvalidParameter(String),
}

#[derive(Error, Debug)]
pub enum SortError {
    #[error("\"{0}\" is not a long. It will be skipped.")]
    NotALong(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
