//! Control tower benchmarks
//!
//! Measures the synchronous mediator on its own, without the coordinator task:
//! - Runway grant and release for a batch of flights
//! - Denial when every runway is occupied
//! - Snapshot cost as the number of runways grows

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use patterns_mediator::{AirstripControlTower, FlightId, TowerEvent, TowerReply};

fn build_tower(runways: usize, flights: usize) -> (AirstripControlTower, Vec<FlightId>) {
    let mut tower = AirstripControlTower::new();
    for i in 0..runways {
        tower.add_runway(format!("RW{:03}", i));
    }
    let ids = (0..flights)
        .map(|i| tower.add_flight(format!("AC{:04}", i)))
        .collect();
    (tower, ids)
}

/// Benchmark: every flight is cleared and lands on a single runway
fn bench_land_sequential(c: &mut Criterion) {
    let sizes = vec![10, 100, 1000];

    for size in sizes {
        c.bench_with_input(
            BenchmarkId::new("tower_land_sequential", size),
            &size,
            |b, &size| {
                b.iter_batched(
                    || build_tower(1, size),
                    |(mut tower, flights)| {
                        for flight in flights {
                            let reply = tower
                                .notify(TowerEvent::LandingRequested { flight })
                                .unwrap();
                            if let TowerReply::Cleared { runway, .. } = reply {
                                black_box(tower.notify(TowerEvent::RunwayCleared { runway }).unwrap());
                            }
                        }
                        tower
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

/// Benchmark: requests against an airstrip where every runway is busy
fn bench_deny_when_full(c: &mut Criterion) {
    let runways = vec![1, 8, 64];

    for count in runways {
        c.bench_with_input(
            BenchmarkId::new("tower_deny_when_full", count),
            &count,
            |b, &count| {
                b.iter_batched(
                    || {
                        let (mut tower, flights) = build_tower(count, count + 100);
                        for flight in &flights[..count] {
                            tower
                                .notify(TowerEvent::LandingRequested { flight: *flight })
                                .unwrap();
                        }
                        (tower, flights[count..].to_vec())
                    },
                    |(mut tower, waiting)| {
                        for flight in waiting {
                            black_box(
                                tower
                                    .notify(TowerEvent::LandingRequested { flight })
                                    .unwrap(),
                            );
                        }
                        tower
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

/// Benchmark: snapshot of a busy airstrip
fn bench_snapshot(c: &mut Criterion) {
    let (mut tower, flights) = build_tower(32, 64);
    for flight in flights {
        tower
            .notify(TowerEvent::LandingRequested { flight })
            .unwrap();
    }

    c.bench_function("tower_snapshot", |b| {
        b.iter(|| black_box(tower.snapshot()))
    });
}

criterion_group!(
    benches,
    bench_land_sequential,
    bench_deny_when_full,
    bench_snapshot
);
criterion_main!(benches);
