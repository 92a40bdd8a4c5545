//! Persistence seam for registrations, feedback, and cuisine history.
//!
//! The [`PreferenceStore`] trait is the narrow interface over whatever
//! datastore backs user preferences. The engine only reads aggregate
//! cuisine counts and past recommendation ids; the storage schema is
//! opaque to it.

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{CuisineHistory, PlaceId, UserId};

/// Errors returned by [`Feedback::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    /// The feedback referenced no recommended places.
    #[error("feedback must reference at least one recommended place")]
    EmptyRecommendations,
    /// The chosen place was not among the recommended ones.
    #[error("chosen place {chosen} was not among the recommended places")]
    ChosenNotRecommended {
        /// The offending place id.
        chosen: PlaceId,
    },
}

/// A user's reaction to a served recommendation batch.
///
/// # Examples
/// ```
/// use savora_core::{Feedback, PlaceId, UserId};
///
/// # fn main() -> Result<(), savora_core::FeedbackError> {
/// let feedback = Feedback::new(
///     UserId::new("user-1"),
///     vec![PlaceId::new("a"), PlaceId::new("b")],
///     Some(PlaceId::new("a")),
///     false,
/// )?;
/// assert_eq!(feedback.chosen, Some(PlaceId::new("a")));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Feedback {
    /// The user the recommendations were served to.
    pub user: UserId,
    /// Identifiers of all recommended places, in served order.
    pub recommended: Vec<PlaceId>,
    /// The place the user picked, if any.
    pub chosen: Option<PlaceId>,
    /// Whether the user asked for a fresh batch instead of choosing.
    pub try_again: bool,
}

impl Feedback {
    /// Validate and construct feedback.
    ///
    /// # Errors
    /// Returns [`FeedbackError`] when `recommended` is empty or `chosen`
    /// names a place outside `recommended`.
    pub fn new(
        user: UserId,
        recommended: Vec<PlaceId>,
        chosen: Option<PlaceId>,
        try_again: bool,
    ) -> Result<Self, FeedbackError> {
        if recommended.is_empty() {
            return Err(FeedbackError::EmptyRecommendations);
        }
        if let Some(id) = &chosen {
            if !recommended.contains(id) {
                return Err(FeedbackError::ChosenNotRecommended { chosen: id.clone() });
            }
        }
        Ok(Self {
            user,
            recommended,
            chosen,
            try_again,
        })
    }
}

/// Errors from [`PreferenceStore`] operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreferenceError {
    /// The backing datastore failed.
    #[error("preference store request failed: {message}")]
    Backend {
        /// Human-readable description from the datastore client.
        message: String,
    },
    /// The user has never been registered.
    #[error("user {user} is not registered")]
    UnknownUser {
        /// The unknown user id.
        user: UserId,
    },
}

/// Read and write user preference data.
///
/// Implementations are thin adapters over the external datastore and must
/// be safe to share across threads.
pub trait PreferenceStore: Send + Sync {
    /// Report whether `user` has registered.
    fn is_registered(&self, user: &UserId) -> Result<bool, PreferenceError>;

    /// Register `user`; registering twice is a no-op.
    fn register_user(&self, user: &UserId) -> Result<(), PreferenceError>;

    /// Record the user's reaction to a served recommendation batch.
    fn record_feedback(&self, feedback: &Feedback) -> Result<(), PreferenceError>;

    /// Return the user's historical cuisine choice counts.
    fn preferred_cuisines(&self, user: &UserId) -> Result<CuisineHistory, PreferenceError>;

    /// Return ids of previously recommended places, optionally restricted
    /// to those the user chose.
    fn past_recommendations(
        &self,
        user: &UserId,
        only_chosen: bool,
    ) -> Result<Vec<PlaceId>, PreferenceError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn feedback_requires_recommendations() {
        let result = Feedback::new(UserId::new("u"), Vec::new(), None, false);
        assert_eq!(result, Err(FeedbackError::EmptyRecommendations));
    }

    #[rstest]
    fn chosen_place_must_be_recommended() {
        let result = Feedback::new(
            UserId::new("u"),
            vec![PlaceId::new("a")],
            Some(PlaceId::new("z")),
            false,
        );
        assert_eq!(
            result,
            Err(FeedbackError::ChosenNotRecommended {
                chosen: PlaceId::new("z")
            })
        );
    }

    #[rstest]
    fn try_again_without_choice_is_valid() {
        let feedback = Feedback::new(UserId::new("u"), vec![PlaceId::new("a")], None, true)
            .expect("valid feedback");
        assert!(feedback.try_again);
        assert!(feedback.chosen.is_none());
    }
}
