//!Bounds for every value a caller can hand to the controller.
use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeKind {
    ///PWM output frequency in hertz.
    Frequency,
    ///Channel number.
    Channel,
    ///12 bit duty cycle of a channel.
    ChannelValue,
    ///Raw register byte.
    RegisterValue,
}

impl RangeKind {
    ///Inclusive `(min, max)` pair.
    pub const fn bounds(&self) -> (i64, i64) {
        match *self {
            Self::Frequency => (24, 1526),
            Self::Channel => (0, 15),
            Self::ChannelValue => (0, 4095),
            Self::RegisterValue => (0, 255),
        }
    }

    pub const fn name(&self) -> &'static str {
        match *self {
            Self::Frequency => "pwm_frequency",
            Self::Channel => "channel",
            Self::ChannelValue => "channel_value",
            Self::RegisterValue => "register_value",
        }
    }
}

impl fmt::Display for RangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{kind} must be between {min} and {max}, got {value}")]
pub struct OutOfRange {
    pub kind: RangeKind,
    pub value: i64,
    pub min: i64,
    pub max: i64,
}

pub fn check_range(kind: RangeKind, value: impl Into<i64>) -> Result<(), OutOfRange> {
    let value = value.into();
    let (min, max) = kind.bounds();
    if value < min || value > max {
        Err(OutOfRange {
            kind,
            value,
            min,
            max,
        })
    } else {
        Ok(())
    }
}
