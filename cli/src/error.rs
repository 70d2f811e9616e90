use pathclose::svg::ParseError;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Cannot open file {path}: {source}")]
    Open { path: String, source: io::Error },
    #[error("Cannot create file {path}: {source}")]
    Create { path: String, source: io::Error },
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("Invalid path data: {0}")]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Pattern(#[from] regex::Error),
}
