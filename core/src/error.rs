use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unable to read program image: {0}")]
    Io(#[from] io::Error),
    #[error("program of {size} bytes does not fit in the {capacity} bytes available")]
    ProgramTooLarge { size: usize, capacity: usize },
    #[error("frontend failure: {0}")]
    Frontend(String),
}
