use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("coordinate system {requested} is not supported, use one of {supported:?}")]
    UnsupportedFrame {
        requested: String,
        supported: Vec<&'static str>,
    },

    #[error("failed to load boundary from {}: {reason}", path.display())]
    DataLoad { path: PathBuf, reason: String },

    #[error("no coordinate accepted after {attempts} attempts")]
    SamplingExhausted { attempts: u64 },
}
