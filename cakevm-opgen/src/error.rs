use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Two instruction definitions claim the same byte code. Fatal: the run
    /// aborts and no artifact is produced.
    #[error("opcode collision: code {code} is claimed by both '{first}' and '{second}'")]
    OpcodeCollision {
        code: u8,
        first: &'static str,
        second: &'static str,
    },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
