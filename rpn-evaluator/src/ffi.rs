use libc::{c_char, c_int, c_longlong, size_t};
use std::ffi::CStr;

use crate::exit_status;
use crate::rpn_evaluator::RpnEvaluator;

/// Returned for null pointers or arguments that are not valid UTF-8.
pub const INVALID_ARGUMENT: c_int = -1;

/// Copy `error` into the caller's buffer as a NUL-terminated string,
/// truncating it if the buffer is too small.
unsafe fn fill_error_buffer(output_error: *mut c_char, output_error_len: size_t, error: &str) {
    if output_error.is_null() || output_error_len == 0 {
        return;
    }

    let output_error = std::slice::from_raw_parts_mut(output_error as *mut u8, output_error_len);
    let len = error.len().min(output_error_len - 1);
    output_error[..len].copy_from_slice(&error.as_bytes()[..len]);
    output_error[len] = 0;
}

/// Evaluate `argv[0..argc]` as a postfix expression with the default
/// configuration.
///
/// # Arguments
///
/// * `argc` - The number of tokens.
/// * `argv` - The tokens, without the program name.
/// * `out_result` - Receives the untruncated result on success.
/// * `output_error` - The buffer to write the error message to.
/// * `output_error_len` - The length of the error buffer.
///
/// # Returns
///
/// `0` on success, the error kind code on evaluation failure, or
/// [`INVALID_ARGUMENT`] if the arguments could not be read.
///
/// # Safety
///
/// `argv` must point to `argc` valid NUL-terminated strings, `out_result` must
/// be valid for writes, and `output_error` must be null or valid for
/// `output_error_len` bytes.
#[no_mangle]
pub unsafe extern "C" fn rpn_evaluate(
    argc: c_int,
    argv: *const *const c_char,
    out_result: *mut c_longlong,
    output_error: *mut c_char,
    output_error_len: size_t,
) -> c_int {
    if out_result.is_null() || (argv.is_null() && argc > 0) || argc < 0 {
        fill_error_buffer(output_error, output_error_len, "Invalid argument pointer!");
        return INVALID_ARGUMENT;
    }

    let args: &[*const c_char] = if argc == 0 {
        &[]
    } else {
        std::slice::from_raw_parts(argv, argc as usize)
    };

    let mut tokens = Vec::with_capacity(args.len());
    for (index, arg) in args.iter().enumerate() {
        if arg.is_null() {
            fill_error_buffer(
                output_error,
                output_error_len,
                &format!("Token {} is a null pointer!", index),
            );
            return INVALID_ARGUMENT;
        }

        match CStr::from_ptr(*arg).to_str() {
            Ok(token) => tokens.push(token),
            Err(_) => {
                fill_error_buffer(
                    output_error,
                    output_error_len,
                    &format!("Token {} is not valid UTF-8!", index),
                );
                return INVALID_ARGUMENT;
            }
        }
    }

    match RpnEvaluator::default().evaluate(tokens) {
        Ok(result) => {
            *out_result = result;
            0
        }
        Err(e) => {
            fill_error_buffer(
                output_error,
                output_error_len,
                &format!("Failed to evaluate the expression: {}", e),
            );
            e.kind.code()
        }
    }
}

/// Map a successful result onto the 8-bit exit status range.
#[no_mangle]
pub extern "C" fn rpn_exit_status(value: c_longlong) -> c_int {
    exit_status::success_status(value)
}
