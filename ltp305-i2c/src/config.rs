//! Chip constants for the IS31FL3730 matrix driver.
//!
//! Register addresses and the fixed mode/option bytes live in a
//! [`ChipConfig`] value handed to the display at construction time.

/// Default 7-bit I2C address of the LTP305 breakout.
pub const ADDRESS_DEFAULT: u8 = 0x61;
pub const ADDRESS_ALT1: u8 = 0x62;
pub const ADDRESS_ALT2: u8 = 0x63;

/// Every address the breakout can be strapped to.
pub const ADDRESSES: [u8; 3] = [ADDRESS_DEFAULT, ADDRESS_ALT1, ADDRESS_ALT2];

/// Returns true if `address` is one the breakout can be strapped to.
///
/// The driver itself accepts any address; this is for callers that want to
/// warn about a likely typo.
#[must_use]
pub fn is_known_address(address: u8) -> bool {
    ADDRESSES.contains(&address)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RegisterMap {
    pub mode: u8,
    /// Matrix 1 data, drives the right-hand 5x7 module.
    pub matrix_right: u8,
    pub update: u8,
    pub options: u8,
    /// Matrix 2 data, drives the left-hand 5x7 module.
    pub matrix_left: u8,
    pub brightness: u8,
}

/// Fixed per-chip configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChipConfig {
    pub mode: u8,
    pub options: u8,
    pub registers: RegisterMap,
}

impl ChipConfig {
    /// IS31FL3730 as fitted to the LTP305 breakout: both matrices enabled,
    /// 8x8 matrix mode, 35 mA output current.
    pub const IS31FL3730: Self = Self {
        mode: 0b0001_1000,
        // 0b1110 = 35 mA, 0b0000 = 40 mA
        options: 0b0000_1110,
        registers: RegisterMap {
            mode: 0x00,
            matrix_right: 0x01,
            update: 0x0C,
            options: 0x0D,
            matrix_left: 0x0E,
            brightness: 0x19,
        },
    };
}

impl Default for ChipConfig {
    fn default() -> Self {
        Self::IS31FL3730
    }
}
