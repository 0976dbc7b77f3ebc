//!PRE_SCALE math from the datasheet: `prescale = round(osc_clock / (4096 * update_rate)) - 1`.
use crate::registers::{OSCILLATOR_CLOCK_HZ, PWM_STEPS};

///Prescale byte for a PWM frequency in hertz.
///
/// The frequency is not validated here. Anything in `RangeKind::Frequency` gives a prescale in 3..=253.
pub fn calc_prescale(frequency_hz: u32) -> u8 {
    let prescale =
        (f64::from(OSCILLATOR_CLOCK_HZ) / (f64::from(PWM_STEPS) * f64::from(frequency_hz))).round() - 1.0;
    prescale.clamp(0.0, f64::from(u8::MAX)) as u8
}

///PWM frequency in hertz produced by a prescale byte, rounded to the nearest integer.
pub fn calc_frequency(prescale: u8) -> u32 {
    (f64::from(OSCILLATOR_CLOCK_HZ) / ((f64::from(prescale) + 1.0) * f64::from(PWM_STEPS))).round() as u32
}
