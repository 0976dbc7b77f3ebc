//!This is the core library for driving an NXP PCA9685, a 16 channel, 12 bit PWM controller on an I2C bus.
//!
//! All register traffic goes through a [`Transport`], so the same [`Pca9685`] controller runs against real
//! hardware (see the `pca9685_rpi` crate or [`HalBus`]) or against the in-memory [`FakeBus`] in tests.

pub mod controller;
pub mod error;
pub mod fake;
pub mod prescale;
pub mod range;
pub mod registers;
pub mod selector;
pub mod transport;

pub use controller::Pca9685;
pub use error::Error;
pub use fake::{FakeBus, FakeBusError};
pub use range::{check_range, OutOfRange, RangeKind};
pub use selector::ChannelSelector;
pub use transport::{HalBus, Transport};
