//! The three fixed participants.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A debate participant; one handler per role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Judge,
    Affirmative,
    Negative,
}

impl Role {
    /// Every role, in registration order.
    pub const ALL: [Role; 3] = [Role::Judge, Role::Affirmative, Role::Negative];

    /// Name used in the output stream.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Judge => "Judge",
            Role::Affirmative => "Affirmative",
            Role::Negative => "Negative",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
