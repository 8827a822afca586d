pub mod config;
pub mod error;
pub mod exit_status;
pub mod ffi;
pub mod rpn_evaluator;
pub mod stack;
pub mod tokenizer;

pub use config::{EvaluatorConfig, OverflowPolicy, DEFAULT_CAPACITY};
pub use error::{ErrorKind, EvalError, OverflowSite};
pub use rpn_evaluator::RpnEvaluator;
