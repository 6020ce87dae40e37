//! Debate CLI library: option handling, per-turn rendering and the streaming run loop.
//!
//! The binary (`src/main.rs`) parses args into [`RunOptions`] and calls [`run`].

pub mod display;
mod run;

pub use run::{run, stream_to, RunError, RunOptions};
