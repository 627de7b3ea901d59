//! Asynchronous airstrip coordinator
//!
//! A single task owns the [`AirstripControlTower`] and is the only writer
//! of runway and flight state. Flights talk to it through a cloneable
//! [`CoordinatorHandle`]; every request travels through one bounded
//! mailbox and is decided in arrival order, so two flights can never both
//! see the same runway as free.
//!
//! Simulated landings are timers in a `JoinSet` owned by the same task.
//! When a timer fires the task feeds `RunwayCleared` into the tower and
//! wakes the flight's [`LandingTicket`]. Due completions are handled before
//! newly arrived requests.

use crate::error::{CoordinatorError, CoordinatorResult, TowerError};
use crate::event::{LandingOutcome, TowerEvent, TowerReply};
use crate::model::{FlightId, RunwayId};
use crate::tower::{AirstripControlTower, TowerSnapshot};
use patterns_core::AirstripConfig;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::task::{JoinError, JoinHandle, JoinSet};
use tracing::{debug, error, info, warn};

/// Messages accepted by the coordinator task
#[derive(Debug)]
enum Command {
    /// A flight asks for a runway
    RequestLanding {
        flight: FlightId,
        reply: oneshot::Sender<Result<Clearance, TowerError>>,
    },
    /// Copy the tower registries
    Snapshot { reply: oneshot::Sender<TowerSnapshot> },
}

#[derive(Debug)]
enum Clearance {
    Cleared {
        runway: RunwayId,
        completion: oneshot::Receiver<RunwayId>,
    },
    Denied,
}

/// Decision for one landing request.
///
/// Returned as soon as the tower has decided; the landing itself may still
/// be in progress. Call [`LandingTicket::wait`] to join on the outcome.
#[derive(Debug)]
pub struct LandingTicket {
    flight: FlightId,
    clearance: Clearance,
}

impl LandingTicket {
    /// Flight this ticket belongs to
    pub fn flight(&self) -> FlightId {
        self.flight
    }

    /// Runway assigned to the flight, if it was cleared
    pub fn runway(&self) -> Option<RunwayId> {
        match &self.clearance {
            Clearance::Cleared { runway, .. } => Some(*runway),
            Clearance::Denied => None,
        }
    }

    /// Check if the flight was cleared to land
    pub fn is_cleared(&self) -> bool {
        matches!(self.clearance, Clearance::Cleared { .. })
    }

    /// Wait until the landing completes.
    ///
    /// Denied tickets resolve immediately.
    pub async fn wait(self) -> CoordinatorResult<LandingOutcome> {
        match self.clearance {
            Clearance::Denied => Ok(LandingOutcome::Denied),
            Clearance::Cleared { completion, .. } => completion
                .await
                .map(|runway| LandingOutcome::Landed { runway })
                .map_err(|_| CoordinatorError::TowerUnavailable),
        }
    }
}

/// Cloneable client of a running coordinator
#[derive(Debug, Clone)]
pub struct CoordinatorHandle {
    mailbox: mpsc::Sender<Command>,
}

impl CoordinatorHandle {
    /// Ask the tower for a runway.
    ///
    /// Resolves once the tower has decided, not when the landing ends.
    pub async fn request_landing(&self, flight: FlightId) -> CoordinatorResult<LandingTicket> {
        let (reply, response) = oneshot::channel();
        self.mailbox
            .send(Command::RequestLanding { flight, reply })
            .await
            .map_err(|_| CoordinatorError::TowerUnavailable)?;

        let clearance = response
            .await
            .map_err(|_| CoordinatorError::TowerUnavailable)??;

        Ok(LandingTicket { flight, clearance })
    }

    /// Ask for a runway and wait for the landing to finish
    pub async fn land(&self, flight: FlightId) -> CoordinatorResult<LandingOutcome> {
        self.request_landing(flight).await?.wait().await
    }

    /// Copy the current tower registries
    pub async fn snapshot(&self) -> CoordinatorResult<TowerSnapshot> {
        let (reply, response) = oneshot::channel();
        self.mailbox
            .send(Command::Snapshot { reply })
            .await
            .map_err(|_| CoordinatorError::TowerUnavailable)?;

        response.await.map_err(|_| CoordinatorError::TowerUnavailable)
    }

    /// Check if the coordinator task has stopped
    pub fn is_closed(&self) -> bool {
        self.mailbox.is_closed()
    }
}

/// Owner task of an [`AirstripControlTower`]
pub struct AirstripCoordinator {
    tower: AirstripControlTower,
    mailbox: mpsc::Receiver<Command>,
    /// Simulated landings in progress
    landings: JoinSet<RunwayId>,
    /// Completion signals keyed by landing flight
    waiters: HashMap<FlightId, oneshot::Sender<RunwayId>>,
    landing_duration: Duration,
}

impl AirstripCoordinator {
    /// Start a coordinator task for `tower`.
    ///
    /// The task runs until every handle is dropped and all granted landings
    /// have completed, then yields the final snapshot. If the tower panics
    /// on a broken contract, or a landing timer fails, the task aborts and
    /// handles report [`CoordinatorError::TowerUnavailable`].
    pub fn spawn(
        tower: AirstripControlTower,
        config: &AirstripConfig,
    ) -> (CoordinatorHandle, JoinHandle<TowerSnapshot>) {
        let (coordinator, handle) = Self::new(tower, config);
        let task = tokio::spawn(coordinator.run());
        (handle, task)
    }

    fn new(tower: AirstripControlTower, config: &AirstripConfig) -> (Self, CoordinatorHandle) {
        let (sender, mailbox) = mpsc::channel(config.mailbox_capacity.max(1));

        let coordinator = Self {
            tower,
            mailbox,
            landings: JoinSet::new(),
            waiters: HashMap::new(),
            landing_duration: config.landing_duration(),
        };
        (coordinator, CoordinatorHandle { mailbox: sender })
    }

    /// Wait for a coordinator task to finish and take its final snapshot.
    ///
    /// A task that ended in a panic or was aborted maps to
    /// [`CoordinatorError::TowerUnavailable`].
    pub async fn join(task: JoinHandle<TowerSnapshot>) -> CoordinatorResult<TowerSnapshot> {
        task.await.map_err(|e| {
            error!(error = %e, "Control tower stopped abnormally");
            CoordinatorError::TowerUnavailable
        })
    }

    async fn run(mut self) -> TowerSnapshot {
        info!(
            runways = self.tower.runway_ids().len(),
            flights = self.tower.flight_ids().len(),
            landing_ms = self.landing_duration.as_millis() as u64,
            "Control tower open"
        );

        let mut accepting = true;
        while accepting || !self.landings.is_empty() {
            tokio::select! {
                biased;

                Some(elapsed) = self.landings.join_next() => {
                    self.on_landing_elapsed(elapsed);
                }

                command = self.mailbox.recv(), if accepting => {
                    match command {
                        Some(command) => self.dispatch(command),
                        None => {
                            accepting = false;
                            debug!(
                                in_progress = self.landings.len(),
                                "All handles dropped, draining landings"
                            );
                        }
                    }
                }
            }
        }

        let snapshot = self.tower.snapshot();
        info!(
            total_landings = snapshot.total_landings(),
            "Control tower closed"
        );
        snapshot
    }

    fn dispatch(&mut self, command: Command) {
        match command {
            Command::RequestLanding { flight, reply } => {
                let clearance = self.decide(flight);
                if reply.send(clearance).is_err() {
                    debug!(flight = %flight, "Requester dropped before the decision arrived");
                }
            }
            Command::Snapshot { reply } => {
                let _ = reply.send(self.tower.snapshot());
            }
        }
    }

    fn decide(&mut self, flight: FlightId) -> Result<Clearance, TowerError> {
        match self.tower.notify(TowerEvent::LandingRequested { flight }) {
            Ok(TowerReply::Cleared { runway, .. }) => {
                let completion = self.schedule_landing(flight, runway);
                Ok(Clearance::Cleared { runway, completion })
            }
            Ok(TowerReply::Denied { .. }) => Ok(Clearance::Denied),
            Ok(reply @ TowerReply::Landed { .. }) => {
                unreachable!("LandingRequested answered with {:?}", reply)
            }
            Err(e) => {
                warn!(flight = %flight, error = %e, "Landing request rejected");
                Err(e)
            }
        }
    }

    fn schedule_landing(&mut self, flight: FlightId, runway: RunwayId) -> oneshot::Receiver<RunwayId> {
        let (done, completion) = oneshot::channel();
        self.waiters.insert(flight, done);

        let duration = self.landing_duration;
        self.landings.spawn(async move {
            tokio::time::sleep(duration).await;
            runway
        });

        completion
    }

    fn on_landing_elapsed(&mut self, elapsed: Result<RunwayId, JoinError>) {
        // A lost timer would leave its runway occupied forever.
        let runway = match elapsed {
            Ok(runway) => runway,
            Err(e) => panic!("landing timer failed: {}", e),
        };

        if let Ok(TowerReply::Landed { flight, runway, .. }) =
            self.tower.notify(TowerEvent::RunwayCleared { runway })
        {
            if let Some(done) = self.waiters.remove(&flight) {
                if done.send(runway).is_err() {
                    debug!(flight = %flight, "Landing completed with nobody waiting");
                }
            }
        }
    }
}
