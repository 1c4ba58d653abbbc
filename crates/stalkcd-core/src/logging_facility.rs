//! Structured logging facility for stalkcd
//!
//! - Single initialization point via `init(profile)`
//! - Structured logging macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions
//!
//! Comparisons and classifications emit one `start` and one `end` event per
//! call. Divergence is reported as an `end` event carrying counts, never as
//! `end_error`: only harness failures (golden profile mismatch) use the
//! error event.
//!
//! # Usage
//!
//! ```rust
//! use stalkcd_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
