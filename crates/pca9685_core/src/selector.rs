use std::str::FromStr;

use crate::range::RangeKind;

const PREFIX: &str = "channel_";

///Result of parsing a channel name such as `channel_7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelSelector {
    Channel(u8),
    Invalid,
}

impl ChannelSelector {
    ///Accepts `channel_<N>` with N one or two decimal digits naming a channel in 0..=15.
    pub fn parse(name: &str) -> Self {
        let Some(digits) = name.strip_prefix(PREFIX) else {
            return Self::Invalid;
        };
        if digits.is_empty() || digits.len() > 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Self::Invalid;
        }
        let (_, max) = RangeKind::Channel.bounds();
        match digits.parse::<u8>() {
            Ok(channel) if i64::from(channel) <= max => Self::Channel(channel),
            _ => Self::Invalid,
        }
    }

    pub fn channel(&self) -> Option<u8> {
        match *self {
            Self::Channel(channel) => Some(channel),
            Self::Invalid => None,
        }
    }
}

///The offending name, returned when `str::parse::<ChannelSelector>` fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSelector(pub String);

impl FromStr for ChannelSelector {
    type Err = UnknownSelector;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Self::parse(s) {
            Self::Invalid => Err(UnknownSelector(s.to_string())),
            valid => Ok(valid),
        }
    }
}
