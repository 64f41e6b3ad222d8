use crate::notify::NotifyError;
use thiserror::Error;

pub type LoginResult<T> = Result<T, LoginError>;

#[derive(Error, Debug)]
pub enum LoginError {
    #[error("Failed to acknowledge the login action")]
    Notify(#[from] NotifyError),
}
