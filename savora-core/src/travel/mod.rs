//! Estimate driving durations from candidate places to the user.
//!
//! The [`DurationProvider`] trait abstracts the external distance-matrix
//! service. Callers supply a batch of [`Place`](crate::Place)s and a
//! destination and receive one estimated driving duration per place.
//!
//! Errors are reserved for transport-level failures; a single unroutable
//! place maps to the caller-supplied fallback instead.

mod error;
mod provider;

pub use error::DurationError;
pub use provider::{DurationMap, DurationProvider};
