use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Carousel needs at least one item")]
    EmptyCarousel,

    #[error("Index {index} out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Scene error: {0}")]
    Scene(String),

    #[error("Submission failed: {0}")]
    Submit(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;
