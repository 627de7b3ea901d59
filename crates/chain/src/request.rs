//! Request type and stage failures

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Incoming request carried through the chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    /// Sender address
    pub email: String,
    /// Request body
    pub message: String,
}

impl Request {
    /// Create a new request
    pub fn new(email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            message: message.into(),
        }
    }

    /// Both fields carry non-whitespace content
    pub fn is_valid(&self) -> bool {
        !self.email.trim().is_empty() && !self.message.trim().is_empty()
    }

    /// Sender belongs to the trusted mail domain
    pub fn is_authenticated(&self) -> bool {
        self.email.contains("@gmail.com")
    }

    /// Sender holds an administrator account
    pub fn is_authorized(&self) -> bool {
        self.email.contains("_admin")
    }
}

/// Reason a stage stopped the chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChainError {
    /// Blank email or message
    #[error("the request is not valid")]
    InvalidRequest,

    /// Sender outside the trusted domain
    #[error("the user is not authenticated")]
    NotAuthenticated,

    /// Sender is not an administrator
    #[error("the user is not authorized")]
    NotAuthorized,
}
