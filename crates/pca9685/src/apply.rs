use std::collections::BTreeMap;

use pca9685_core::{
    registers::{mask, mode1},
    Error, Pca9685, Transport,
};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::DeviceConfig;

///State of the chip as read back after configuration.
#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct DeviceSnapshot {
    pub address: u8,
    pub bus: Option<u8>,
    pub frequency_hz: u32,
    pub mode_1: u8,
    pub asleep: bool,
    pub channels: BTreeMap<String, u16>,
}

//writes the configured frequency and channel values to the device
pub fn apply<T: Transport>(
    device: &mut Pca9685<T>,
    config: &DeviceConfig,
) -> Result<(), Error<T::Error>> {
    if let Some(frequency_hz) = config.frequency_hz {
        info!("setting pwm frequency to {}Hz", frequency_hz);
        device.set_frequency(frequency_hz)?;
    }
    for (name, channel) in &config.channels {
        debug!("setting {} (channel {}) to {}", name, channel.channel, channel.value);
        device.set_channel_value(channel.channel, channel.value)?;
    }
    Ok(())
}

pub fn snapshot<T: Transport>(
    device: &mut Pca9685<T>,
    config: &DeviceConfig,
) -> Result<DeviceSnapshot, Error<T::Error>> {
    let mut channels = BTreeMap::new();
    for (name, channel) in &config.channels {
        channels.insert(name.clone(), device.get_channel_value(channel.channel)?);
    }
    let mode_1 = device.mode_1()?;
    Ok(DeviceSnapshot {
        address: device.address(),
        bus: device.bus_number(),
        frequency_hz: device.get_frequency()?,
        mode_1,
        asleep: mode_1 & mask(mode1::SLEEP) != 0,
        channels,
    })
}
