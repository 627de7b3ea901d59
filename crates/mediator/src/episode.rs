//! One coordination episode driven from configuration

use crate::coordinator::{AirstripCoordinator, LandingTicket};
use crate::error::CoordinatorResult;
use crate::event::LandingOutcome;
use crate::model::FlightId;
use crate::tower::AirstripControlTower;
use futures_util::future::join_all;
use patterns_core::{AirstripConfig, EpisodeMode};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::info;

/// Outcome of one flight within an episode
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlightReport {
    /// Flight identity
    pub flight: FlightId,
    /// Flight callsign
    pub callsign: String,
    /// Whether and where the flight landed
    pub outcome: LandingOutcome,
    /// Designator of the runway used, if any
    pub runway: Option<String>,
}

/// Summary of a finished episode
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EpisodeReport {
    /// How requests were issued
    pub mode: EpisodeMode,
    /// Completed landings keyed by runway designator
    pub landings: BTreeMap<String, u32>,
    /// Per-flight outcomes in request order
    pub flights: Vec<FlightReport>,
}

impl EpisodeReport {
    /// Number of flights that landed
    pub fn landed_count(&self) -> usize {
        self.flights
            .iter()
            .filter(|f| f.outcome.has_landed())
            .count()
    }

    /// Sum of all runway counters
    pub fn total_landings(&self) -> u32 {
        self.landings.values().sum()
    }

    /// Landed flags in request order
    pub fn landed_flags(&self) -> Vec<bool> {
        self.flights
            .iter()
            .map(|f| f.outcome.has_landed())
            .collect()
    }
}

/// Run one episode: register the configured runways and flights, issue
/// every landing request, wait for every outcome and report.
pub async fn run_episode(config: &AirstripConfig) -> CoordinatorResult<EpisodeReport> {
    config.validate()?;

    let mut tower = AirstripControlTower::new();
    for designator in &config.runways {
        tower.add_runway(designator.clone());
    }
    let flights: Vec<(FlightId, String)> = config
        .flights
        .iter()
        .map(|callsign| (tower.add_flight(callsign.clone()), callsign.clone()))
        .collect();

    info!(
        mode = ?config.mode,
        runways = config.runways.len(),
        flights = flights.len(),
        "Episode started"
    );

    let (handle, task) = AirstripCoordinator::spawn(tower, config);

    let outcomes = match config.mode {
        EpisodeMode::Concurrent => {
            // Requests are queued in the order the futures are polled,
            // which is request order.
            let tickets = join_all(flights.iter().map(|(id, _)| handle.request_landing(*id)))
                .await
                .into_iter()
                .collect::<CoordinatorResult<Vec<LandingTicket>>>()?;

            join_all(tickets.into_iter().map(LandingTicket::wait))
                .await
                .into_iter()
                .collect::<CoordinatorResult<Vec<LandingOutcome>>>()?
        }
        EpisodeMode::Sequential => {
            let mut outcomes = Vec::with_capacity(flights.len());
            for (id, _) in &flights {
                outcomes.push(handle.land(*id).await?);
            }
            outcomes
        }
    };

    drop(handle);
    let snapshot = AirstripCoordinator::join(task).await?;

    let flights = flights
        .into_iter()
        .zip(outcomes)
        .map(|((flight, callsign), outcome)| {
            let runway = match outcome {
                LandingOutcome::Landed { runway } => {
                    snapshot.runway(runway).map(|r| r.designator.clone())
                }
                LandingOutcome::Denied => None,
            };
            FlightReport {
                flight,
                callsign,
                outcome,
                runway,
            }
        })
        .collect();

    let report = EpisodeReport {
        mode: config.mode,
        landings: snapshot.landings_by_designator(),
        flights,
    };

    info!(
        landed = report.landed_count(),
        total_landings = report.total_landings(),
        "Episode finished"
    );

    Ok(report)
}
