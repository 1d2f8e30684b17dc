// Copyright 2026 Martin Pool

//! The invocation capability: execute a function under test with one
//! argument and capture what it returned.
//!
//! On real hardware the harness supplies this and relays each observation
//! to the verifying host; the [`Recorder`] here keeps the observations in
//! memory so a case can be exercised with no target attached.

use std::fmt;

use serde::Serialize;
use tracing::trace;

/// One observed execution of the function under test.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct Invocation {
    /// The argument the driver passed in.
    pub argument: u64,
    /// The value the function returned.
    pub output: u64,
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "f({}) = {}", self.argument, self.output)
    }
}

/// Executes a function with an argument and records the result.
///
/// How the record is reported (serial log, in-memory buffer, ...) is the
/// implementor's concern; callers only promise to hand over a pure function
/// and its argument.
pub trait Call {
    fn call(&mut self, function: fn(u64) -> u64, argument: u64);
}

/// A [`Call`] implementation that buffers every invocation in memory.
#[derive(Debug, Default)]
pub struct Recorder {
    invocations: Vec<Invocation>,
}

impl Recorder {
    pub fn new() -> Recorder {
        Recorder::default()
    }

    /// All invocations observed so far, in call order.
    pub fn invocations(&self) -> &[Invocation] {
        &self.invocations
    }

    pub fn into_invocations(self) -> Vec<Invocation> {
        self.invocations
    }
}

impl Call for Recorder {
    fn call(&mut self, function: fn(u64) -> u64, argument: u64) {
        let output = function(argument);
        let invocation = Invocation { argument, output };
        trace!(%invocation, "recorded invocation");
        self.invocations.push(invocation);
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn recorder_captures_argument_and_output() {
        let mut recorder = Recorder::new();
        recorder.call(|n| n + 1, 41);
        assert_eq!(
            recorder.invocations(),
            [Invocation {
                argument: 41,
                output: 42
            }]
        );
    }

    #[test]
    fn invocation_display() {
        let invocation = Invocation {
            argument: 5,
            output: 120,
        };
        assert_eq!(invocation.to_string(), "f(5) = 120");
    }

    #[test]
    fn invocation_serializes_to_argument_and_output() {
        let invocation = Invocation {
            argument: 7,
            output: 5040,
        };
        assert_eq!(
            serde_json::to_value(invocation).unwrap(),
            serde_json::json!({"argument": 7, "output": 5040})
        );
    }
}
