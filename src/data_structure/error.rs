use thiserror::Error;

pub type Result<T> = std::result::Result<T, ListError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    #[error("type mismatch: expected `{expected}`, found `{found}`")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
    #[error("list index {index} out of range for length {len}")]
    IndexOutOfRange { index: i128, len: usize },
    #[error("list.{op}(x): x not in list")]
    ValueNotFound { op: &'static str },
}
