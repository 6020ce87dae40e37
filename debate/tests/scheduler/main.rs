//! Scheduler integration tests: full runs through the public API.

#[path = "../init_logging.rs"]
mod init_logging;

mod common;
mod failure;
mod run_order;
