use thiserror::Error;

#[derive(Error, Debug)]
pub enum ComposeError {
    #[error("No records to compose")]
    EmptyReport,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, ComposeError>;
