use std::collections::BTreeMap;

use config_rs::{Config, ConfigError, File};
use serde::Deserialize;

#[derive(Deserialize, Debug, Default)]
pub struct MetadataConfig {
    pub name: Option<String>,
    pub description: Option<String>,
}

//one named pwm output on the chip
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelConfig {
    pub channel: u8,
    pub value: u16,
}

//corresponds to 1 pwm chip instance
#[derive(Deserialize, Debug)]
pub struct DeviceConfig {
    pub i2c_address: u8,
    //when absent the first /dev/i2c-* bus is used
    pub bus: Option<u8>,
    pub frequency_hz: Option<u32>,
    #[serde(default)]
    pub channels: BTreeMap<String, ChannelConfig>,
}

#[derive(Deserialize, Debug)]
pub struct AppConfig {
    #[serde(default)]
    pub metadata: MetadataConfig,
    pub device: DeviceConfig,
}

impl AppConfig {
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name(path))
            .build()
            .and_then(|config| config.try_deserialize::<AppConfig>())
    }
}
