// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons.
//!
//! Progress percentages and zoom translations are `f32` values computed from
//! divisions, so tests compare them with the `approx` crate's assertion
//! macros instead of `assert_eq!`.

pub use approx::assert_abs_diff_eq;
