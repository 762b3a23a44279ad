//! Pure operations behind [`crate::Library`].
//!
//! Every function here is total and free of side effects apart from a
//! `debug!` event. `add` and `multiply` wrap on overflow; the `checked_*`
//! variants report it instead.

use tracing::debug;

use crate::error::{CoreError, CoreResult, Operation};

/// Return a greeting message for `name`.
pub fn greet(name: &str) -> String {
    format!("Hello, {name}!")
}

/// Add two integers, wrapping on overflow.
pub fn add(a: i32, b: i32) -> i32 {
    debug!(a, b, "performing addition");
    a.wrapping_add(b)
}

/// Multiply two integers, wrapping on overflow.
pub fn multiply(a: i32, b: i32) -> i32 {
    debug!(a, b, "performing multiplication");
    a.wrapping_mul(b)
}

/// Add two integers, failing if the sum is not representable.
pub fn checked_add(a: i32, b: i32) -> CoreResult<i32> {
    a.checked_add(b).ok_or(CoreError::Overflow {
        op: Operation::Add,
        a,
        b,
    })
}

/// Multiply two integers, failing if the product is not representable.
pub fn checked_multiply(a: i32, b: i32) -> CoreResult<i32> {
    a.checked_mul(b).ok_or(CoreError::Overflow {
        op: Operation::Multiply,
        a,
        b,
    })
}
