//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that drives the coordinator end to
//! end against a recording event sink, with simulated time.
//! `console_tests` runs the host binary over a pipe instead.

mod config_tests;
mod console_tests;
mod mock_sink;
mod scenario_tests;
