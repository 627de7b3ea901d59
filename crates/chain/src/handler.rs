//! Stages as trait objects
//!
//! Each handler owns its successor, so a chain is assembled inside-out:
//!
//! ```
//! use patterns_chain::{AuthenticationHandler, AuthorizationHandler, Handler, Request, ValidationHandler};
//!
//! let chain = ValidationHandler::new(Some(Box::new(AuthenticationHandler::new(Some(
//!     Box::new(AuthorizationHandler::new(None)),
//! )))));
//!
//! let request = Request::new("guilherme_admin@gmail.com", "deploy");
//! assert_eq!(chain.handle(request.clone()), Ok(request));
//! ```

use crate::request::{ChainError, Request};
use tracing::debug;

/// One processing stage
pub trait Handler: Send + Sync {
    /// Process the request, forwarding it to the successor on success
    fn handle(&self, request: Request) -> Result<Request, ChainError>;
}

fn forward(next: &Option<Box<dyn Handler>>, request: Request) -> Result<Request, ChainError> {
    match next {
        Some(next) => next.handle(request),
        None => Ok(request),
    }
}

/// Rejects requests with a blank email or message
pub struct ValidationHandler {
    next: Option<Box<dyn Handler>>,
}

impl ValidationHandler {
    /// Create the stage with an optional successor
    pub fn new(next: Option<Box<dyn Handler>>) -> Self {
        Self { next }
    }
}

impl Handler for ValidationHandler {
    fn handle(&self, request: Request) -> Result<Request, ChainError> {
        if !request.is_valid() {
            debug!(email = %request.email, "Request rejected by validation");
            return Err(ChainError::InvalidRequest);
        }
        forward(&self.next, request)
    }
}

/// Rejects senders outside the trusted mail domain
pub struct AuthenticationHandler {
    next: Option<Box<dyn Handler>>,
}

impl AuthenticationHandler {
    /// Create the stage with an optional successor
    pub fn new(next: Option<Box<dyn Handler>>) -> Self {
        Self { next }
    }
}

impl Handler for AuthenticationHandler {
    fn handle(&self, request: Request) -> Result<Request, ChainError> {
        if !request.is_authenticated() {
            debug!(email = %request.email, "Request rejected by authentication");
            return Err(ChainError::NotAuthenticated);
        }
        forward(&self.next, request)
    }
}

/// Rejects senders without an administrator account
pub struct AuthorizationHandler {
    next: Option<Box<dyn Handler>>,
}

impl AuthorizationHandler {
    /// Create the stage with an optional successor
    pub fn new(next: Option<Box<dyn Handler>>) -> Self {
        Self { next }
    }
}

impl Handler for AuthorizationHandler {
    fn handle(&self, request: Request) -> Result<Request, ChainError> {
        if !request.is_authorized() {
            debug!(email = %request.email, "Request rejected by authorization");
            return Err(ChainError::NotAuthorized);
        }
        forward(&self.next, request)
    }
}
