use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, PartialEq, Error)]
pub enum Error {
    #[error("HTTP client couldn't be created.")]
    CantCreateClient,
}
