//! Remote controls

use crate::device::Device;
use tracing::debug;

/// Control surface shared by every remote.
///
/// Implementors only provide access to their device; the basic controls are
/// provided in terms of [`Device`].
pub trait Remote {
    /// Device driven by this remote
    fn device(&self) -> &dyn Device;

    /// Mutable access to the driven device
    fn device_mut(&mut self) -> &mut dyn Device;

    /// Switch the device on when off, off when on
    fn toggle_power(&mut self) {
        let device = self.device_mut();
        if device.is_enabled() {
            device.disable();
        } else {
            device.enable();
        }
        debug!(enabled = device.is_enabled(), "Power toggled");
    }

    /// Lower the volume by one step
    fn volume_down(&mut self) {
        let device = self.device_mut();
        device.set_volume(device.volume() - 1);
    }

    /// Raise the volume by one step
    fn volume_up(&mut self) {
        let device = self.device_mut();
        device.set_volume(device.volume() + 1);
    }

    /// Previous channel
    fn channel_down(&mut self) {
        let device = self.device_mut();
        device.set_channel(device.channel() - 1.0);
    }

    /// Next channel
    fn channel_up(&mut self) {
        let device = self.device_mut();
        device.set_channel(device.channel() + 1.0);
    }
}

/// Remote with only the basic controls
#[derive(Debug, Clone)]
pub struct BasicRemote<D> {
    device: D,
}

impl<D: Device> BasicRemote<D> {
    /// Pair a remote with a device
    pub fn new(device: D) -> Self {
        Self { device }
    }

    /// Release the device
    pub fn into_device(self) -> D {
        self.device
    }
}

impl<D: Device> Remote for BasicRemote<D> {
    fn device(&self) -> &dyn Device {
        &self.device
    }

    fn device_mut(&mut self) -> &mut dyn Device {
        &mut self.device
    }
}

/// Remote adding mute and direct channel entry
#[derive(Debug, Clone)]
pub struct AdvancedRemote<D> {
    device: D,
}

impl<D: Device> AdvancedRemote<D> {
    /// Pair a remote with a device
    pub fn new(device: D) -> Self {
        Self { device }
    }

    /// Release the device
    pub fn into_device(self) -> D {
        self.device
    }

    /// Drop the volume to zero
    pub fn mute(&mut self) {
        self.device.set_volume(0);
        debug!("Muted");
    }

    /// Tune directly to `channel`
    pub fn digit_channel(&mut self, channel: f64) {
        self.device.set_channel(channel);
    }
}

impl<D: Device> Remote for AdvancedRemote<D> {
    fn device(&self) -> &dyn Device {
        &self.device
    }

    fn device_mut(&mut self) -> &mut dyn Device {
        &mut self.device
    }
}
