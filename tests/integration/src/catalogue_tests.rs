//! The behavioral and structural patterns used side by side

use crate::test_utils::{airstrip, init_test_logging};
use patterns_bridge::{AdvancedRemote, BasicRemote, Device, Radio, Remote, Tv};
use patterns_chain::{
    build_chain, AuthenticationHandler, AuthorizationHandler, ChainError, Handler, Request,
    ValidationHandler, authentication_handler, authorization_handler, validation_handler,
};
use patterns_core::EpisodeMode;
use patterns_flyweight::{Canvas, Forest, TreeType};
use patterns_mediator::run_episode;
use patterns_observer::{
    EmailSubscriber, ListenerRegistry, MailerService, Subscriber, SystemEventType,
    SystemEventsManager,
};
use std::sync::Arc;

fn object_chain() -> ValidationHandler {
    ValidationHandler::new(Some(Box::new(AuthenticationHandler::new(Some(Box::new(
        AuthorizationHandler::new(None),
    ))))))
}

#[test]
fn test_both_chain_styles_agree() {
    let objects = object_chain();
    let closures = build_chain(&[validation_handler, authentication_handler, authorization_handler]);

    let cases = [
        (Request::new("ops_admin@gmail.com", "open runway"), None),
        (Request::new("ops_admin@gmail.com", " "), Some(ChainError::InvalidRequest)),
        (Request::new("ops_admin@corp.com", "open runway"), Some(ChainError::NotAuthenticated)),
        (Request::new("ops@gmail.com", "open runway"), Some(ChainError::NotAuthorized)),
    ];

    for (request, expected) in cases {
        let object_result = objects.handle(request.clone());
        let closure_result = closures(request.clone());

        assert_eq!(object_result, closure_result);
        match expected {
            None => assert_eq!(object_result, Ok(request)),
            Some(error) => assert_eq!(object_result, Err(error)),
        }
    }
}

#[tokio::test(start_paused = true)]
async fn test_authorized_operator_runs_episode_and_notifies() {
    init_test_logging();

    let chain = object_chain();
    let request = Request::new("tower_admin@gmail.com", "start episode");
    assert!(chain.handle(request).is_ok());

    let mut manager = SystemEventsManager::new();
    let email = Arc::new(EmailSubscriber::new());
    manager.subscribe(email.clone(), SystemEventType::SystemOff);

    let mut registry = ListenerRegistry::new();
    let mailer = Arc::new(MailerService::new());
    registry.subscribe(MailerService::listener(&mailer), SystemEventType::SystemOff);

    let config = airstrip(&["09L"], &["AC101", "AC102", "AC103"], EpisodeMode::Concurrent);
    let report = run_episode(&config).await.unwrap();

    let summary = format!("{} of {} flights landed", report.landed_count(), report.flights.len());
    assert_eq!(manager.notify(SystemEventType::SystemOff, &summary), 1);
    assert_eq!(registry.notify(SystemEventType::SystemOff, &summary), 1);

    assert_eq!(email.outbox().len(), 1);
    assert!(email.outbox()[0].ends_with("1 of 3 flights landed"));
    assert_eq!(mailer.sent()[0].message, "1 of 3 flights landed");
}

#[test]
fn test_unsubscribed_subscriber_misses_later_events() {
    let mut manager = SystemEventsManager::new();
    let email: Arc<dyn Subscriber> = Arc::new(EmailSubscriber::new());

    manager.subscribe(Arc::clone(&email), SystemEventType::SystemOn);
    assert_eq!(manager.notify(SystemEventType::SystemOn, "first"), 1);

    manager.unsubscribe(&email);
    assert_eq!(manager.notify(SystemEventType::SystemOn, "second"), 0);
}

#[test]
fn test_every_remote_drives_every_device() {
    let mut remotes: Vec<Box<dyn Remote>> = vec![
        Box::new(BasicRemote::new(Tv::new())),
        Box::new(BasicRemote::new(Radio::new())),
        Box::new(AdvancedRemote::new(Tv::new())),
        Box::new(AdvancedRemote::new(Radio::with_battery(30))),
    ];

    for remote in &mut remotes {
        let start = remote.device().channel();
        remote.toggle_power();
        remote.channel_up();
        remote.volume_down();

        let device: &dyn Device = remote.device();
        assert!(device.is_enabled());
        assert_eq!(device.channel(), start + 1.0);
        assert_eq!(device.volume(), 49);
    }
}

struct AsciiCanvas {
    width: usize,
    rows: Vec<Vec<char>>,
}

impl AsciiCanvas {
    fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            rows: vec![vec!['.'; width]; height],
        }
    }
}

impl Canvas for AsciiCanvas {
    fn draw_tree(&mut self, x: i32, y: i32, kind: &TreeType) {
        let glyph = kind.name.chars().next().unwrap_or('?');
        if let Some(row) = self.rows.get_mut(y as usize) {
            if (x as usize) < self.width {
                row[x as usize] = glyph;
            }
        }
    }
}

#[test]
fn test_forest_renders_shared_types() {
    let mut forest = Forest::new();
    forest
        .plant_tree(0, 0, "Pine Tree", "dark_green", "pine.jpg")
        .plant_tree(2, 0, "Oak Tree", "light_green", "oak.jpg")
        .plant_tree(1, 1, "Pine Tree", "dark_green", "pine.jpg");

    let mut canvas = AsciiCanvas::new(3, 2);
    forest.draw(&mut canvas);

    let rendered: Vec<String> = canvas.rows.iter().map(|r| r.iter().collect()).collect();
    assert_eq!(rendered, vec!["P.O".to_string(), ".P.".to_string()]);
    assert_eq!(forest.type_count(), 2);
}
