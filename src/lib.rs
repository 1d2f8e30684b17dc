// Copyright 2026 Martin Pool

//! A single on-target test case: factorial, driven through an injectable
//! call interface.
//!
//! The harness that would normally run this on hardware is deliberately
//! absent: [`run_test`] depends only on the [`Call`] capability, so the case
//! can be exercised host-side against the in-memory [`Recorder`].

mod call;
mod driver;
mod factorial;

pub use crate::call::{Call, Invocation, Recorder};
pub use crate::driver::{run_test, MAX_INPUT};
pub use crate::factorial::factorial;
