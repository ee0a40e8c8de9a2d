//! CLI command implementations.

mod get;
mod trace;

pub use get::{run_get, GetArgs};
pub use trace::{run_trace, TraceArgs};
