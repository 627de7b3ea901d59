//! Chain of responsibility: request processing stages
//!
//! A request travels through validation, authentication and authorization.
//! Each stage either rejects the request or passes it to its successor; the
//! last stage hands the request back unchanged.
//!
//! Two renditions are provided:
//! - [`handler`]: stages as trait objects that own their successor
//! - [`functional`]: stages as boxed closures composed by [`build_chain`]

#![warn(missing_docs)]

pub mod functional;
pub mod handler;
pub mod request;

pub use functional::{
    authentication_handler, authorization_handler, build_chain, validation_handler, HandlerFn,
    Stage,
};
pub use handler::{AuthenticationHandler, AuthorizationHandler, Handler, ValidationHandler};
pub use request::{ChainError, Request};
