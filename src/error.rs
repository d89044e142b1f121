use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("n = {0} is not supported")]
    UnsupportedN(usize),
}
