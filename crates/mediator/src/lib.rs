//! Mediator pattern: airstrip landing coordination
//!
//! An [`AirstripControlTower`] mediates between flights and runways so
//! neither side refers to the other. Flights ask the tower for a runway; the
//! tower hands out the first free one in registration order, or denies the
//! flight when every runway is occupied. A runway stays occupied for a
//! simulated landing time, after which the tower frees it, counts the
//! landing and marks the flight as landed.
//!
//! This crate provides:
//! - The synchronous tower state machine with one tagged-event entry point
//! - An asynchronous coordinator task that serializes concurrent requests
//!   and runs the landing timers
//! - Episode helpers that drive a full run from configuration
//!
//! # Examples
//!
//! ```no_run
//! use patterns_core::AirstripConfig;
//! use patterns_mediator::{AirstripControlTower, AirstripCoordinator};
//!
//! # async fn demo() -> Result<(), patterns_mediator::CoordinatorError> {
//! let mut tower = AirstripControlTower::new();
//! tower.add_runway("09L");
//! let flight = tower.add_flight("AC101");
//!
//! let (handle, _task) = AirstripCoordinator::spawn(tower, &AirstripConfig::default());
//! let ticket = handle.request_landing(flight).await?;
//! let outcome = ticket.wait().await?;
//! assert!(outcome.has_landed());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod coordinator;
pub mod episode;
pub mod error;
pub mod event;
pub mod model;
pub mod tower;

pub use coordinator::{AirstripCoordinator, CoordinatorHandle, LandingTicket};
pub use episode::{run_episode, EpisodeReport, FlightReport};
pub use error::{CoordinatorError, CoordinatorResult, TowerError};
pub use event::{LandingOutcome, TowerEvent, TowerReply};
pub use model::{Flight, FlightId, FlightStatus, Runway, RunwayId, RunwayState};
pub use tower::{AirstripControlTower, TowerSnapshot};
