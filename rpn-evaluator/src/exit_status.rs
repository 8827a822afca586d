//! Mapping from evaluation outcomes onto 8-bit process exit statuses.
//!
//! Successful results are reduced modulo [`SUCCESS_MODULUS`] into `0..=127`.
//! Failures land on `ERROR_STATUS_BASE + ErrorKind::code()`, which is outside
//! that range, so a computed result can never be mistaken for an error.

use crate::error::EvalError;

pub const SUCCESS_MODULUS: i64 = 128;
pub const ERROR_STATUS_BASE: i32 = 192;
/// Reported for command-line usage errors.
pub const USAGE_STATUS: i32 = 200;

/// Reduce a result into the success range. `-7` maps to `121`.
pub fn success_status(result: i64) -> i32 {
    result.rem_euclid(SUCCESS_MODULUS) as i32
}

pub fn error_status(err: &EvalError) -> i32 {
    ERROR_STATUS_BASE + err.kind.code()
}

pub fn status(outcome: &Result<i64, EvalError>) -> i32 {
    match outcome {
        Ok(result) => success_status(*result),
        Err(err) => error_status(err),
    }
}

/// Truncating cast to a C `int` followed by the host's 8-bit cut. Errors
/// are not distinguishable in this mode.
pub fn raw_status(result: i64) -> i32 {
    (result as i32) & 0xff
}
