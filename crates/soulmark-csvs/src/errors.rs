use thiserror::Error;

pub type CsvResult<T> = Result<T, CsvError>;

#[derive(Error, Debug)]
pub enum CsvError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid row {line}: expected name,address")]
    MalformedRow { line: u64 },

    #[error("invalid row {line}: name is empty")]
    EmptyName { line: u64 },

    #[error("invalid row {line}: invalid Ethereum address {value:?}")]
    InvalidAddress { line: u64, value: String },

    #[error("no valid entries found in CSV")]
    NoEntries,
}
