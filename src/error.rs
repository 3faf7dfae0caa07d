use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DigitError {
    #[error("invalid digit '{0}': digits must be in 0..=9")]
    InvalidDigit(String),

    #[error("a digit list needs at least one digit")]
    EmptyList,

    #[error("index {index} is out of range for a {len}-digit number")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("cannot subtract {subtrahend} from {minuend}: result would be negative")]
    Underflow { minuend: String, subtrahend: String },

    #[error("{0} does not fit in a u64")]
    Overflow(String),
}

pub type Result<T> = std::result::Result<T, DigitError>;
