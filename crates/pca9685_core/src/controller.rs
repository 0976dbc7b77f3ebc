use tracing::{debug, trace};

use crate::{
    error::Error,
    prescale::{calc_frequency, calc_prescale},
    range::{check_range, RangeKind},
    registers::{channel_register, join_value, mask, mode1, value_high, value_low, MODE_1, PRE_SCALE},
    selector::ChannelSelector,
    transport::Transport,
};

///Register-level controller for one PCA9685 at a fixed I2C address.
///
/// The controller owns its transport. Operations made of several writes (a channel value, a frequency
/// change) are not atomic; callers sharing one controller across threads must serialize access themselves.
pub struct Pca9685<T: Transport> {
    address: u8,
    bus_number: Option<u8>,
    transport: T,
}

impl<T: Transport> Pca9685<T> {
    ///Wraps an already opened transport.
    pub fn new(address: u8, transport: T) -> Self {
        Self {
            address,
            bus_number: None,
            transport,
        }
    }

    ///Opens the controller on `bus_number`, or on the first bus `discover` returns when none is given.
    ///
    /// The discovered candidates are used in the order given; no sorting is applied.
    pub fn connect<D, I, F>(
        address: u8,
        bus_number: Option<u8>,
        discover: D,
        open: F,
    ) -> Result<Self, Error<T::Error>>
    where
        D: FnOnce() -> I,
        I: IntoIterator<Item = u8>,
        F: FnOnce(u8) -> Result<T, T::Error>,
    {
        let bus_number = match bus_number {
            Some(bus_number) => bus_number,
            None => discover().into_iter().next().ok_or(Error::NoBusFound)?,
        };
        debug!("opening PCA9685 at {:#04x} on i2c bus {}", address, bus_number);
        let transport = open(bus_number).map_err(Error::Transport)?;
        Ok(Self {
            address,
            bus_number: Some(bus_number),
            transport,
        })
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    ///The bus this controller was opened on by [`Pca9685::connect`]. `None` when built with [`Pca9685::new`].
    pub fn bus_number(&self) -> Option<u8> {
        self.bus_number
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    ///Gives the transport back.
    pub fn release(self) -> T {
        self.transport
    }

    ///Sets the 12 bit OFF count of `channel`. Low byte is written first, then the high byte.
    pub fn set_channel_value(&mut self, channel: u8, value: u16) -> Result<(), Error<T::Error>> {
        check_range(RangeKind::Channel, channel)?;
        check_range(RangeKind::ChannelValue, value)?;

        let register = channel_register(channel);
        self.write_register(register, value_low(value))?;
        self.write_register(register + 1, value_high(value))
    }

    pub fn get_channel_value(&mut self, channel: u8) -> Result<u16, Error<T::Error>> {
        check_range(RangeKind::Channel, channel)?;
        self.read_channel_register(channel_register(channel))
    }

    ///Reads a channel named like `channel_3`.
    pub fn get_channel_by_name(&mut self, name: &str) -> Result<u16, Error<T::Error>> {
        match ChannelSelector::parse(name) {
            ChannelSelector::Channel(channel) => self.get_channel_value(channel),
            ChannelSelector::Invalid => Err(Error::UnknownSelector(name.to_string())),
        }
    }

    fn read_channel_register(&mut self, register: u8) -> Result<u16, Error<T::Error>> {
        let low = self.read(register)?;
        let high = self.read(register + 1)?;
        Ok(join_value(low, high))
    }

    pub fn mode_1(&mut self) -> Result<u8, Error<T::Error>> {
        self.read(MODE_1)
    }

    pub fn is_asleep(&mut self) -> Result<bool, Error<T::Error>> {
        Ok(self.mode_1()? & mask(mode1::SLEEP) != 0)
    }

    ///Stops the oscillator by setting MODE1 SLEEP.
    pub fn sleep(&mut self) -> Result<(), Error<T::Error>> {
        debug!("sleep the controller");
        let mode = self.mode_1()?;
        self.write_register(MODE_1, mode | mask(mode1::SLEEP))
    }

    ///Restarts the oscillator by clearing MODE1 SLEEP.
    pub fn wake(&mut self) -> Result<(), Error<T::Error>> {
        debug!("wake up the controller");
        let mode = self.mode_1()?;
        self.write_register(MODE_1, mode & !mask(mode1::SLEEP))
    }

    ///Sets the PWM frequency of all outputs.
    ///
    /// PRE_SCALE only accepts writes while the oscillator is stopped, so this is sleep, write, wake.
    /// A bus error part way leaves the device asleep.
    pub fn set_frequency(&mut self, frequency_hz: u32) -> Result<(), Error<T::Error>> {
        check_range(RangeKind::Frequency, frequency_hz)?;
        let prescale = calc_prescale(frequency_hz);
        debug!("calculated prescale value is {} for {}Hz", prescale, frequency_hz);

        self.sleep()?;
        self.write_register(PRE_SCALE, prescale)?;
        self.wake()
    }

    pub fn get_frequency(&mut self) -> Result<u32, Error<T::Error>> {
        let prescale = self.read(PRE_SCALE)?;
        Ok(calc_frequency(prescale))
    }

    ///Writes a raw byte to `register`. Values above 255 are rejected.
    pub fn write(&mut self, register: u8, value: u16) -> Result<(), Error<T::Error>> {
        check_range(RangeKind::RegisterValue, value)?;
        self.write_register(register, value as u8)
    }

    pub fn read(&mut self, register: u8) -> Result<u8, Error<T::Error>> {
        let value = self
            .transport
            .read_byte(self.address, register)
            .map_err(Error::Transport)?;
        trace!("read '{}' from register '{}'", value, register);
        Ok(value)
    }

    fn write_register(&mut self, register: u8, value: u8) -> Result<(), Error<T::Error>> {
        debug!("write '{}' to register '{}'", value, register);
        self.transport
            .write_byte(self.address, register, value)
            .map_err(Error::Transport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::{FakeBus, FakeBusError};
    use crate::range::OutOfRange;

    fn device() -> Pca9685<FakeBus> {
        Pca9685::new(0x40, FakeBus::new(0))
    }

    #[test]
    fn test_connect_uses_first_discovered_bus() {
        let dev = Pca9685::connect(0, None, || vec![8, 1], |bus| Ok(FakeBus::new(bus))).unwrap();
        assert_eq!(dev.bus_number(), Some(8));
        assert_eq!(dev.transport().bus_number(), 8);
    }

    #[test]
    fn test_connect_prefers_explicit_bus() {
        let dev = Pca9685::connect(
            0,
            Some(3),
            || -> Vec<u8> { panic!("discovery must not run") },
            |bus| Ok(FakeBus::new(bus)),
        )
        .unwrap();
        assert_eq!(dev.bus_number(), Some(3));
    }

    #[test]
    fn test_connect_without_bus() {
        let res = Pca9685::connect(0, None, Vec::new, |bus| Ok(FakeBus::new(bus)));
        assert!(matches!(res, Err(Error::NoBusFound)));
    }

    #[test]
    fn test_connect_propagates_open_error() {
        let res: Result<Pca9685<FakeBus>, _> =
            Pca9685::connect(0, Some(1), Vec::new, |_| Err(FakeBusError::Injected));
        assert!(matches!(res, Err(Error::Transport(FakeBusError::Injected))));
    }

    #[test]
    fn test_set_frequency_write_sequence() {
        let mut dev = device();
        dev.set_frequency(200).unwrap();
        assert_eq!(dev.transport().writes(), &[(0, 17), (254, 30), (0, 1)]);
    }

    #[test]
    fn test_set_frequency_wrong_input() {
        let mut dev = device();
        for hz in [2000, 10, 0, 23, 1527] {
            let err = dev.set_frequency(hz).unwrap_err();
            assert!(matches!(
                err,
                Error::OutOfRange(OutOfRange {
                    kind: RangeKind::Frequency,
                    min: 24,
                    max: 1526,
                    ..
                })
            ));
        }
        assert!(dev.transport().writes().is_empty());
    }

    #[test]
    fn test_get_frequency() {
        let mut dev = device();
        dev.set_frequency(197).unwrap();
        assert_eq!(dev.get_frequency().unwrap(), 197);
    }

    #[test]
    fn test_set_channel_value() {
        let mut dev = device();
        dev.set_channel_value(4, 1042).unwrap();
        assert_eq!(dev.transport().value(24), Some(18));
        assert_eq!(dev.transport().value(25), Some(4));
        assert_eq!(dev.transport().writes(), &[(24, 18), (25, 4)]);
        assert_eq!(dev.get_channel_value(4).unwrap(), 1042);
    }

    #[test]
    fn test_set_channel_value_validates_before_writing() {
        let mut dev = device();
        assert!(matches!(
            dev.set_channel_value(16, 0),
            Err(Error::OutOfRange(OutOfRange { kind: RangeKind::Channel, value: 16, .. }))
        ));
        assert!(matches!(
            dev.set_channel_value(0, 4096),
            Err(Error::OutOfRange(OutOfRange { kind: RangeKind::ChannelValue, value: 4096, .. }))
        ));
        assert!(dev.transport().writes().is_empty());
    }

    #[test]
    fn test_channel_getter_default() {
        let mut dev = device();
        assert_eq!(dev.get_channel_value(0).unwrap(), 2047);
    }

    #[test]
    fn test_channel_getter_by_name() {
        let mut dev = device();
        assert_eq!(dev.get_channel_by_name("channel_0").unwrap(), 2047);
        assert!(matches!(
            dev.get_channel_by_name("channel_42"),
            Err(Error::UnknownSelector(name)) if name == "channel_42"
        ));
        assert!(matches!(dev.get_channel_by_name("teve"), Err(Error::UnknownSelector(_))));
    }

    #[test]
    fn test_sleep_and_wake_toggle_only_sleep_bit() {
        let mut dev = device();
        dev.wake().unwrap();
        assert_eq!(dev.mode_1().unwrap(), 0b0000_0001);
        assert!(!dev.is_asleep().unwrap());
        dev.sleep().unwrap();
        assert_eq!(dev.mode_1().unwrap(), 0b0001_0001);
        assert!(dev.is_asleep().unwrap());
    }

    #[test]
    fn test_raw_write_checks_register_value() {
        let mut dev = device();
        dev.write(0x01, 255).unwrap();
        assert!(matches!(
            dev.write(0x01, 256),
            Err(Error::OutOfRange(OutOfRange { kind: RangeKind::RegisterValue, value: 256, .. }))
        ));
        assert_eq!(dev.transport().writes(), &[(0x01, 255)]);
        assert_eq!(dev.read(0x01).unwrap(), 255);
    }

    #[test]
    fn test_read_propagates_transport_error() {
        let mut dev = device();
        assert!(matches!(
            dev.get_frequency(),
            Err(Error::Transport(FakeBusError::UnsetRegister(0xFE)))
        ));
    }
}
