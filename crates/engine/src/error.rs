use sorttable_dom::DomError;
use thiserror::Error;

/// Errors that can occur while loading a page or replaying events on it
#[derive(Error, Debug)]
pub enum PageError {
    #[error("Document error: {0}")]
    Dom(#[from] DomError),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Control not found: #{id}")]
    UnknownControl { id: String },

    #[error("Select #{control} has no option with value '{value}'")]
    UnknownOption { control: String, value: String },

    #[error("Table index out of bounds: {index} (page has {count} sortable tables)")]
    UnknownTable { index: usize, count: usize },

    #[error("Column {column} of table {table} is not sortable (header has {count} cells)")]
    UnknownColumn {
        table: usize,
        column: usize,
        count: usize,
    },
}

pub type Result<T> = std::result::Result<T, PageError>;
