//! Consumer login flag.
//!
//! The consumer area has no onboarding lifecycle: the login flow records the
//! literal `"true"` under the session key and the guard checks for exactly
//! that value.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

const LOGGED_IN_TOKEN: &str = "true";

/// Whether a successful consumer login has been recorded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionFlag(bool);

impl SessionFlag {
    /// Parse the stored flag. Only the exact string `"true"` counts.
    pub fn from_stored(raw: Option<&str>) -> Self {
        Self(raw == Some(LOGGED_IN_TOKEN))
    }

    pub fn is_logged_in(self) -> bool {
        self.0
    }
}
