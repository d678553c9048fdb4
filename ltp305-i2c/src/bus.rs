//! Register-level access to the chip.

use embedded_hal::blocking::i2c::Write;

use crate::Error;

/// Largest block written in one transfer: a full 8-byte matrix buffer.
pub const MAX_PAYLOAD: usize = 8;

/// An I2C handle bound to one device address.
///
/// Every [`write_register`](Self::write_register) is a single I2C write
/// transaction. Nothing is buffered between calls.
pub struct RegisterBus<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C, E> RegisterBus<I2C>
where
    I2C: Write<Error = E>,
{
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    /// Writes `payload` starting at `register`.
    ///
    /// The register byte and the payload go out as one contiguous transfer.
    /// Transport errors are returned as-is, there is no retry.
    pub fn write_register(&mut self, register: u8, payload: &[u8]) -> Result<(), Error<E>> {
        if payload.len() > MAX_PAYLOAD {
            return Err(Error::PayloadTooLong(payload.len()));
        }

        let mut frame = [0u8; MAX_PAYLOAD + 1];
        let len = payload.len() + 1;
        frame[0] = register;
        frame[1..len].copy_from_slice(payload);

        self.i2c.write(self.address, &frame[..len]).map_err(|err| {
            #[cfg(feature = "defmt")]
            defmt::warn!("write to register {=u8:#x} failed", register);
            Error::Bus(err)
        })
    }

    /// Gives back the I2C handle.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use embedded_hal_mock::eh0::i2c::{Mock as I2cMock, Transaction as I2cTransaction};
    use embedded_hal_mock::eh0::MockError;
    use std::io::ErrorKind;

    #[test]
    fn register_byte_is_prepended_to_payload() {
        let expectations = [
            I2cTransaction::write(0x61, vec![0x19, 64]),
            I2cTransaction::write(0x61, vec![0x0E, 1, 2, 3, 4, 5, 6, 7, 8]),
        ];
        let mut bus = RegisterBus::new(I2cMock::new(&expectations), 0x61);

        bus.write_register(0x19, &[64]).unwrap();
        bus.write_register(0x0E, &[1, 2, 3, 4, 5, 6, 7, 8]).unwrap();

        bus.release().done();
    }

    #[test]
    fn empty_payload_sends_register_only() {
        let expectations = [I2cTransaction::write(0x63, vec![0x0C])];
        let mut bus = RegisterBus::new(I2cMock::new(&expectations), 0x63);

        bus.write_register(0x0C, &[]).unwrap();
        assert_eq!(bus.address(), 0x63);

        bus.release().done();
    }

    #[test]
    fn oversized_payload_is_rejected_without_traffic() {
        let mut bus = RegisterBus::new(I2cMock::new(&[]), 0x61);

        let err = bus.write_register(0x0E, &[0; 9]).unwrap_err();
        assert!(matches!(err, Error::PayloadTooLong(9)));

        bus.release().done();
    }

    #[test]
    fn transport_error_is_surfaced() {
        let expectations = [I2cTransaction::write(0x61, vec![0x0C, 0x01])
            .with_error(MockError::Io(ErrorKind::Other))];
        let mut bus = RegisterBus::new(I2cMock::new(&expectations), 0x61);

        let err = bus.write_register(0x0C, &[0x01]).unwrap_err();
        assert!(matches!(err, Error::Bus(MockError::Io(ErrorKind::Other))));

        bus.release().done();
    }
}
