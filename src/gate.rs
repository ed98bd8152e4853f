//! Shared-secret gate for restricted views.
//!
//! This is an access toggle, not authentication: there is no user identity,
//! no expiry, no lockout and no rate limiting. Any of the accepted tokens
//! unlocks every restricted view for the rest of the session.

pub const ACCEPTED_TOKENS: [&str; 3] = ["12300", "12400", "12500"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccessGate {
    unlocked: bool,
}

impl AccessGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff the trimmed candidate equals one of the accepted tokens.
    pub fn check(&self, candidate: &str) -> bool {
        let candidate = candidate.trim();
        ACCEPTED_TOKENS.iter().any(|token| *token == candidate)
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    // There is deliberately no way back to locked.
    pub fn unlock(&mut self) {
        self.unlocked = true;
    }
}
