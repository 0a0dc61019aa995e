use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("unknown location id `{0}`")]
    UnknownLocation(String),
}
