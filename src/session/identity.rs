//! The authentication gate in front of a session.
//!
//! Login, signup and tokens belong to an external identity provider. The
//! only thing a session needs to know is whether the check passed.

/// External "is authenticated" check.
pub trait IdentityProvider {
    /// True once the user has signed in.
    fn is_authenticated(&self) -> bool;
}

/// A fixed answer, for hosts that authenticate elsewhere and for tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StaticIdentity {
    authenticated: bool,
}

impl StaticIdentity {
    /// An identity that passes the check.
    #[must_use]
    pub const fn authenticated() -> Self {
        Self { authenticated: true }
    }

    /// An identity that fails the check.
    #[must_use]
    pub const fn anonymous() -> Self {
        Self { authenticated: false }
    }
}

impl IdentityProvider for StaticIdentity {
    fn is_authenticated(&self) -> bool {
        self.authenticated
    }
}
