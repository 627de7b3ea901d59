//! Bridge pattern: remotes and devices
//!
//! Remotes (the abstraction) and devices (the implementation) vary
//! independently. Every remote works with every device because remotes only
//! talk to the [`Device`] trait.
//!
//! ```
//! use patterns_bridge::{AdvancedRemote, Device, Remote, Tv};
//!
//! let mut remote = AdvancedRemote::new(Tv::new());
//! remote.toggle_power();
//! remote.digit_channel(42.0);
//! remote.mute();
//!
//! assert!(remote.device().is_enabled());
//! assert_eq!(remote.device().channel(), 42.0);
//! assert_eq!(remote.device().volume(), 0);
//! ```

#![warn(missing_docs)]

pub mod device;
pub mod remote;

pub use device::{Device, Radio, Tv, MAX_VOLUME, MIN_VOLUME};
pub use remote::{AdvancedRemote, BasicRemote, Remote};
