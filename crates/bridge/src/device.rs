//! Devices driven by remotes

use serde::{Deserialize, Serialize};

/// Lowest accepted volume
pub const MIN_VOLUME: i32 = 0;

/// Highest accepted volume
pub const MAX_VOLUME: i32 = 100;

const INITIAL_VOLUME: i32 = 50;

/// Operations every device exposes to a remote
pub trait Device {
    /// Device is powered on
    fn is_enabled(&self) -> bool;
    /// Power on
    fn enable(&mut self);
    /// Power off
    fn disable(&mut self);
    /// Current volume
    fn volume(&self) -> i32;
    /// Set the volume, clamped to `MIN_VOLUME..=MAX_VOLUME`
    fn set_volume(&mut self, volume: i32);
    /// Current channel or frequency
    fn channel(&self) -> f64;
    /// Tune to a channel or frequency
    fn set_channel(&mut self, channel: f64);
}

/// Television starting on channel 0
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tv {
    enabled: bool,
    volume: i32,
    channel: f64,
}

impl Tv {
    /// Powered-off television at half volume
    pub fn new() -> Self {
        Self {
            enabled: false,
            volume: INITIAL_VOLUME,
            channel: 0.0,
        }
    }
}

impl Default for Tv {
    fn default() -> Self {
        Self::new()
    }
}

impl Device for Tv {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn enable(&mut self) {
        self.enabled = true;
    }

    fn disable(&mut self) {
        self.enabled = false;
    }

    fn volume(&self) -> i32 {
        self.volume
    }

    fn set_volume(&mut self, volume: i32) {
        self.volume = volume.clamp(MIN_VOLUME, MAX_VOLUME);
    }

    fn channel(&self) -> f64 {
        self.channel
    }

    fn set_channel(&mut self, channel: f64) {
        self.channel = channel;
    }
}

/// Battery powered radio starting at 90.0
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Radio {
    enabled: bool,
    volume: i32,
    channel: f64,
    /// Remaining charge in percent
    pub battery_percentage: u8,
}

impl Radio {
    /// Powered-off radio with the given charge
    pub fn with_battery(battery_percentage: u8) -> Self {
        Self {
            enabled: false,
            volume: INITIAL_VOLUME,
            channel: 90.0,
            battery_percentage: battery_percentage.min(100),
        }
    }

    /// Powered-off, fully charged radio
    pub fn new() -> Self {
        Self::with_battery(100)
    }
}

impl Default for Radio {
    fn default() -> Self {
        Self::new()
    }
}

impl Device for Radio {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn enable(&mut self) {
        self.enabled = true;
    }

    fn disable(&mut self) {
        self.enabled = false;
    }

    fn volume(&self) -> i32 {
        self.volume
    }

    fn set_volume(&mut self, volume: i32) {
        self.volume = volume.clamp(MIN_VOLUME, MAX_VOLUME);
    }

    fn channel(&self) -> f64 {
        self.channel
    }

    fn set_channel(&mut self, channel: f64) {
        self.channel = channel;
    }
}
