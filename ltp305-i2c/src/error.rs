/// Errors returned by the driver.
///
/// `E` is the error type of the underlying I2C implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// The I2C transfer failed (NACK, arbitration loss, absent device, timeout).
    Bus(E),
    /// The glyph table has no bitmap for this code point.
    UndefinedGlyph(u32),
    /// A register block was longer than the chip accepts in one write.
    PayloadTooLong(usize),
}

impl<E: core::fmt::Debug> core::fmt::Display for Error<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Bus(err) => write!(f, "I2C bus error: {err:?}"),
            Self::UndefinedGlyph(code) => write!(f, "undefined glyph for code point {code:#x}"),
            Self::PayloadTooLong(len) => write!(f, "register payload of {len} bytes is too long"),
        }
    }
}

#[cfg(feature = "std")]
impl<E: core::fmt::Debug> std::error::Error for Error<E> {}
