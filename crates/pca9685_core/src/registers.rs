//!Register map of the PCA9685, as given by the NXP datasheet.

///Internal oscillator frequency in hertz.
pub const OSCILLATOR_CLOCK_HZ: u32 = 25_000_000;

///Number of steps in one PWM period (12 bit counter).
pub const PWM_STEPS: u32 = 4096;

pub const MODE_1: u8 = 0x00;
pub const MODE_2: u8 = 0x01;

///LED0_ON_L, the first register of the LED block.
pub const LED_STRIP_START: u8 = 0x06;

///Offset from a channel's ON_L register to its OFF_L register.
const OFF_LOW_OFFSET: u8 = 2;

///Each channel owns ON_L, ON_H, OFF_L and OFF_H.
const REGISTERS_PER_CHANNEL: u8 = 4;

///Prescaler for the PWM output frequency. Only writable while MODE1 SLEEP is set.
pub const PRE_SCALE: u8 = 0xFE;

///Bit positions in the MODE1 register.
pub mod mode1 {
    pub const RESTART: u8 = 7;
    pub const EXTCLK: u8 = 6;
    pub const AI: u8 = 5;
    pub const SLEEP: u8 = 4;
    pub const SUB1: u8 = 3;
    pub const SUB2: u8 = 2;
    pub const SUB3: u8 = 1;
    pub const ALLCALL: u8 = 0;
}

///Bit positions in the MODE2 register.
pub mod mode2 {
    pub const INVRT: u8 = 4;
    pub const OCH: u8 = 3;
    pub const OUTDRV: u8 = 2;
    pub const OUTNE1: u8 = 1;
    pub const OUTNE0: u8 = 0;
}

///Single bit mask for a bit position.
pub const fn mask(bit: u8) -> u8 {
    1 << bit
}

///OFF_L register of `channel`. OFF_H follows at the next address.
///
/// The channel is not validated here; callers check it against `RangeKind::Channel` first.
pub const fn channel_register(channel: u8) -> u8 {
    LED_STRIP_START + OFF_LOW_OFFSET + channel * REGISTERS_PER_CHANNEL
}

///Low byte of a 12 bit channel value.
pub const fn value_low(value: u16) -> u8 {
    (value & 0xFF) as u8
}

///High byte of a 12 bit channel value.
pub const fn value_high(value: u16) -> u8 {
    ((value >> 8) & 0xFF) as u8
}

///Joins the OFF_L and OFF_H bytes back into a channel value.
pub const fn join_value(low: u8, high: u8) -> u16 {
    low as u16 + (high as u16) * 256
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_register() {
        assert_eq!(channel_register(0), 8);
        assert_eq!(channel_register(4), 24);
        //OFF_H of the last channel is LED15_OFF_H, 0x45
        assert_eq!(channel_register(15) + 1, 0x45);
    }

    #[test]
    fn test_split_and_join() {
        assert_eq!(value_low(1042), 18);
        assert_eq!(value_high(1042), 4);
        assert_eq!(value_high(4095), 0x0F);
        assert_eq!(join_value(255, 7), 2047);
        for value in [0u16, 1, 255, 256, 2047, 4095] {
            assert_eq!(join_value(value_low(value), value_high(value)), value);
        }
    }

    #[test]
    fn test_masks() {
        assert_eq!(mask(mode1::SLEEP), 0b0001_0000);
        assert_eq!(mask(mode1::RESTART), 0b1000_0000);
        assert_eq!(mask(mode2::OUTDRV), 0b0000_0100);
    }
}
