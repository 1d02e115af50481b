use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unable to read program: {0}")]
    Io(#[from] std::io::Error),

    #[error("program image is empty")]
    EmptyProgram,

    #[error("tmpx image is missing its load address")]
    MissingLoadAddress,
}
