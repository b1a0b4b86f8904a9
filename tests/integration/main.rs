//! Integration test harness
//!
//! All integration tests live in this one binary so they share helpers and
//! build once.

mod helpers;

mod cli_test;
mod session_test;
