//! User identity and token verification.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Verified identifier for a registered user.
///
/// # Examples
/// ```
/// use savora_core::UserId;
///
/// let user = UserId::new("user-42");
/// assert_eq!(user.as_str(), "user-42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct UserId(String);

impl UserId {
    /// Wrap a raw identifier string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// View the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolve an opaque identity token to a verified user.
///
/// Verification failure of any kind (an invalid or expired token, or a
/// network error while checking it) is reported as `None` and must never
/// surface as an error to the caller. Callers fall back to anonymous
/// behaviour when no user id is available.
///
/// # Examples
/// ```
/// use savora_core::{UserId, UserVerifier};
///
/// struct AcceptAll;
///
/// impl UserVerifier for AcceptAll {
///     fn verify(&self, id_token: &str) -> Option<UserId> {
///         (!id_token.is_empty()).then(|| UserId::new(id_token))
///     }
/// }
///
/// assert!(AcceptAll.verify("").is_none());
/// assert_eq!(AcceptAll.verify("tok").map(|u| u.as_str().to_owned()), Some("tok".to_owned()));
/// ```
pub trait UserVerifier: Send + Sync {
    /// Return the verified user id for `id_token`, or `None`.
    fn verify(&self, id_token: &str) -> Option<UserId>;
}
