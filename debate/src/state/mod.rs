//! Turn state for one debate run.
//!
//! One [`TurnState`] is created per run and threaded through every handler. Its
//! [`Step`] marker drives routing; result fields are filled progressively and each is
//! written exactly once.
//!
//! # Example
//!
//! ```rust
//! use debate::{Instructions, Step, TurnState};
//!
//! let state = TurnState::new("Should remote work be mandatory?", Instructions::default()).unwrap();
//! assert_eq!(state.step, Step::Initial);
//! assert!(state.verdict.is_none());
//! ```

mod step;
mod turn_state;

pub use step::Step;
pub use turn_state::{Instructions, TurnState};
