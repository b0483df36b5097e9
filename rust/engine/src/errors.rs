use thiserror::Error;

/// Why a line that carried a recognized marker could not be applied.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("missing game number after \"Starting Game\"")]
    MissingGameNumber,
    #[error("no quoted card codes found")]
    MissingCards,
    #[error("no player label before \"{marker}\"")]
    MissingPlayer { marker: &'static str },
    #[error("points token missing")]
    MissingPoints,
    #[error("points token {token:?} is not an integer")]
    InvalidPoints { token: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReplayError {
    #[error("no games with recorded plays were found")]
    NoData,
    #[error("game index {index} out of range ({available} games available)")]
    GameOutOfRange { index: usize, available: usize },
}
