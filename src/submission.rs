// src/submission.rs

//! Outcome and service seam for operations that would talk to a backend.
//!
//! Checkout and the contact form go through [`SubmissionService`]. The shipped
//! implementations only wait for a configured delay and then succeed, so views
//! are written against the trait and never against the delay.

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionResult<T> {
    Pending,
    Success(T),
    Failure(String),
}

impl<T> SubmissionResult<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            Self::Success(ack) => Some(ack),
            _ => None,
        }
    }

    /// Converts a finished submission into a `Result`. A still-pending
    /// submission is reported as a failure of `operation`.
    pub fn into_result(self, operation: &str) -> Result<T> {
        match self {
            Self::Success(ack) => Ok(ack),
            Self::Failure(reason) => Err(Error::submission(operation, reason).source(operation)),
            Self::Pending => Err(Error::submission(
                operation,
                format!("{} has not completed", operation),
            )),
        }
    }
}

impl<T> fmt::Display for SubmissionResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Success(_) => write!(f, "success"),
            Self::Failure(reason) => write!(f, "failure: {}", reason),
        }
    }
}

/// Sends a request somewhere and reports the acknowledgment
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait SubmissionService<R>: Send + Sync
where
    R: Send + Sync + 'static,
{
    type Ack;

    /// Short name used in logs and errors
    fn operation(&self) -> &str;

    async fn submit(&self, request: &R) -> SubmissionResult<Self::Ack>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_into_result() {
        let ok: SubmissionResult<u32> = SubmissionResult::Success(7);
        assert_eq!(ok.into_result("checkout").unwrap(), 7);

        let failed: SubmissionResult<u32> = SubmissionResult::Failure("offline".to_string());
        let err = failed.into_result("checkout").unwrap_err();
        assert_eq!(
            err.kind,
            ErrorKind::Submission {
                operation: "checkout".to_string()
            }
        );
        assert_eq!(err.message, "offline");

        let pending: SubmissionResult<u32> = SubmissionResult::Pending;
        assert!(pending.is_pending());
        assert!(pending.into_result("contact").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(SubmissionResult::<()>::Pending.to_string(), "pending");
        assert_eq!(
            SubmissionResult::<()>::Failure("timeout".into()).to_string(),
            "failure: timeout"
        );
    }
}
