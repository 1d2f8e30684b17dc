// Copyright 2026 Martin Pool

//! The driver routine the harness runs once after target initialization.

use tracing::debug;

use crate::call::Call;
use crate::factorial::factorial;

/// The largest input the driver feeds to the function under test.
///
/// The swept domain is the closed interval `0..=MAX_INPUT`, well inside the
/// exact range of u64 factorials.
pub const MAX_INPUT: u64 = 7;

/// Sweep the fixed input domain through the function under test.
///
/// Feeds each input in `0..=MAX_INPUT`, in strictly ascending order, to
/// `caller` along with [`factorial`]. The sequence is fixed at compile time;
/// verification of the recorded outputs is entirely the caller's concern.
pub fn run_test(caller: &mut dyn Call) {
    debug!(max_input = MAX_INPUT, "sweep factorial");
    for n in 0..=MAX_INPUT {
        caller.call(factorial, n);
    }
}
