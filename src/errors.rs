use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("Fixed-arity node expects {expected} child slots, got {found}")]
    ChildCount {
        expected: usize,
        found: usize,
    },

    #[error("NaN cannot be inserted into an ordered tree")]
    NotANumber,

    #[error("Configuration error: {message}")]
    Config {
        message: String,
    },
}

impl TreeError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

pub type TreeResult<T> = Result<T, TreeError>;
