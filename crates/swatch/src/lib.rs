use thiserror::Error;

pub mod commands {
    pub mod check;
    pub mod contrast;
    pub mod generate;
}

pub mod config;
mod report;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("An IO error occurred: {0}")]
    IoError(#[from] std::io::Error),
    #[error(transparent)]
    Palette(#[from] palette_generator::Error),
    #[error("Could not serialize palette: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    General(String),
}
