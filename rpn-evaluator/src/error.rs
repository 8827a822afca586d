use thiserror::Error;

/// The arithmetic step that left the representable range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverflowSite {
    Parse,
    Add,
    Subtract,
}

impl std::fmt::Display for OverflowSite {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            OverflowSite::Parse => write!(f, "parsing"),
            OverflowSite::Add => write!(f, "addition"),
            OverflowSite::Subtract => write!(f, "subtraction"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    #[error("stack overflow: capacity of {capacity} values exceeded")]
    StackOverflow { capacity: usize },

    #[error("stack underflow: operator needs two operands")]
    StackUnderflow,

    #[error("malformed operand {0:?}: expected digits or one of '+', '-'")]
    MalformedOperand(String),

    #[error("numeric overflow during {0}")]
    NumericOverflow(OverflowSite),
}

impl ErrorKind {
    /// Stable per-kind code, shared by the exit status mapping and the C ABI.
    pub fn code(&self) -> i32 {
        match self {
            ErrorKind::StackOverflow { .. } => 1,
            ErrorKind::StackUnderflow => 2,
            ErrorKind::MalformedOperand(_) => 3,
            ErrorKind::NumericOverflow(_) => 4,
        }
    }

    pub(crate) fn at(self, index: usize) -> EvalError {
        EvalError { index, kind: self }
    }
}

/// An aborted evaluation: what went wrong and on which token.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} at token {index}")]
pub struct EvalError {
    /// Zero-based position in the input token sequence.
    pub index: usize,
    pub kind: ErrorKind,
}
