use thiserror::Error;

pub(crate) const TYPE_MISMATCH_MESSAGE: &str = "argument must be a reference to a record";

#[derive(Debug, Clone, PartialEq, Error)]
#[error("urlvalues: {message}")]
pub struct EncodeError {
    pub code: ErrorCode,
    pub message: String,
}

impl EncodeError {
    pub fn new(code: ErrorCode, message: String) -> EncodeError {
        EncodeError { code, message }
    }

    pub fn type_mismatch() -> EncodeError {
        EncodeError::new(ErrorCode::TypeMismatch, TYPE_MISMATCH_MESSAGE.to_string())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorCode {
    TypeMismatch,
}
