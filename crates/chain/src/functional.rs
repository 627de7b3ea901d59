//! Stages as composed closures
//!
//! A stage constructor takes the optional successor and returns the stage
//! itself, so `validation_handler(Some(authentication_handler(None)))`
//! mirrors the trait-object chain without any named types.

use crate::request::{ChainError, Request};
use tracing::debug;

/// A composed processing stage
pub type HandlerFn = Box<dyn Fn(Request) -> Result<Request, ChainError> + Send + Sync>;

/// Constructor for one stage given its successor
pub type Stage = fn(Option<HandlerFn>) -> HandlerFn;

fn stage<P>(name: &'static str, passes: P, error: ChainError, next: Option<HandlerFn>) -> HandlerFn
where
    P: Fn(&Request) -> bool + Send + Sync + 'static,
{
    Box::new(move |request: Request| {
        if !passes(&request) {
            debug!(stage = name, email = %request.email, "Request rejected");
            return Err(error);
        }
        match &next {
            Some(next) => next(request),
            None => Ok(request),
        }
    })
}

/// Stage rejecting blank requests
pub fn validation_handler(next: Option<HandlerFn>) -> HandlerFn {
    stage("validation", Request::is_valid, ChainError::InvalidRequest, next)
}

/// Stage rejecting senders outside the trusted domain
pub fn authentication_handler(next: Option<HandlerFn>) -> HandlerFn {
    stage(
        "authentication",
        Request::is_authenticated,
        ChainError::NotAuthenticated,
        next,
    )
}

/// Stage rejecting non-administrators
pub fn authorization_handler(next: Option<HandlerFn>) -> HandlerFn {
    stage(
        "authorization",
        Request::is_authorized,
        ChainError::NotAuthorized,
        next,
    )
}

/// Compose stages so the first one listed runs first.
///
/// An empty list yields a chain that returns every request unchanged.
pub fn build_chain(stages: &[Stage]) -> HandlerFn {
    match stages.split_last() {
        None => Box::new(Ok::<Request, ChainError>),
        Some((last, rest)) => rest
            .iter()
            .rev()
            .fold(last(None), |next, wrap| wrap(Some(next))),
    }
}
