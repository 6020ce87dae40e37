//! Scheduler build error.
//!
//! Returned by `SchedulerBuilder::build` when a role has no handler or more than one.

use thiserror::Error;

use super::Role;

/// Error when building a scheduler from registered handlers.
#[derive(Debug, Error)]
pub enum BuildError {
    /// No handler was registered for this role.
    #[error("no handler registered for {0}")]
    MissingHandler(Role),

    /// More than one handler was registered for this role.
    #[error("more than one handler registered for {0}")]
    DuplicateHandler(Role),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_error_display_names_role() {
        let s = BuildError::MissingHandler(Role::Negative).to_string();
        assert!(s.contains("no handler"), "{}", s);
        assert!(s.contains("Negative"), "{}", s);
        let s = BuildError::DuplicateHandler(Role::Judge).to_string();
        assert!(s.contains("more than one"), "{}", s);
    }
}
