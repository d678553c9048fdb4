//! Driver for the LTP305 dual 5x7 LED matrix breakout, an IS31FL3730
//! charlieplex controller on I2C.
//!
//! Drawing only touches an in-memory frame; [`MatrixDisplay::show`] pushes it
//! to the chip. The two matrices are packed differently:
//!
//! ```text
//! left  (matrix 2): byte = column 0..4, bit = row 0..6, byte 7 bit 6 = decimal
//! right (matrix 1): byte = row 0..6,    bit = column 0..4, byte 6 bit 7 = decimal
//! ```
//!
//! Calls that reach the bus block until the transfer finishes. The driver
//! holds no lock; sharing one display between threads needs an outer mutex.

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(unsafe_code)]

pub mod brightness;
pub mod bus;
pub mod config;
pub mod error;
pub mod font;

pub use brightness::Brightness;
pub use bus::RegisterBus;
pub use config::{ChipConfig, RegisterMap, ADDRESSES, ADDRESS_DEFAULT};
pub use error::Error;
pub use font::{Codepoint, Font5x7, Glyph, GlyphTable};

use embedded_hal::blocking::i2c::Write;

/// Logical width in pixels, both matrices side by side.
pub const WIDTH: u8 = 10;
pub const HEIGHT: u8 = 7;

const MATRIX_WIDTH: u8 = 5;
// Glyph columns are full bytes, so rendering covers bit 7 as well.
const GLYPH_ROWS: u8 = 8;

const LEFT_DECIMAL_BYTE: usize = 7;
const LEFT_DECIMAL_MASK: u8 = 0b0100_0000;
const RIGHT_DECIMAL_BYTE: usize = 6;
const RIGHT_DECIMAL_MASK: u8 = 0b1000_0000;

const UPDATE_LATCH: u8 = 0x01;

/// Two 5x7 matrices side by side, drawn through an in-memory frame.
pub struct MatrixDisplay<I2C, F = Font5x7> {
    bus: RegisterBus<I2C>,
    config: ChipConfig,
    font: F,
    brightness: Brightness,
    left: [u8; 8],
    right: [u8; 8],
}

impl<I2C, E> MatrixDisplay<I2C, Font5x7>
where
    I2C: Write<Error = E>,
{
    /// Binds the display at `address` with half brightness and a blank frame.
    ///
    /// Nothing is written to the chip until [`show`](Self::show).
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self::with_brightness(i2c, address, 0.5)
    }

    /// Like [`new`](Self::new), with an initial brightness level in `0.0..=1.0`.
    pub fn with_brightness(i2c: I2C, address: u8, level: f32) -> Self {
        Self {
            bus: RegisterBus::new(i2c, address),
            config: ChipConfig::default(),
            font: Font5x7,
            brightness: Brightness::from_level(level),
            left: [0; 8],
            right: [0; 8],
        }
    }
}

impl<I2C, E, F> MatrixDisplay<I2C, F>
where
    I2C: Write<Error = E>,
    F: GlyphTable,
{
    /// Uses another chip configuration for every following commit.
    #[must_use]
    pub fn with_config(mut self, config: ChipConfig) -> Self {
        self.config = config;
        self
    }

    /// Swaps the glyph table used by [`set_character`](Self::set_character).
    pub fn with_font<G: GlyphTable>(self, font: G) -> MatrixDisplay<I2C, G> {
        MatrixDisplay {
            bus: self.bus,
            config: self.config,
            font,
            brightness: self.brightness,
            left: self.left,
            right: self.right,
        }
    }

    /// Clears both matrices, decimal points included.
    pub fn clear(&mut self) {
        self.left = [0; 8];
        self.right = [0; 8];
    }

    /// Sets the brightness from a level in `0.0..=1.0`.
    ///
    /// With `apply` the new value is written straight away, otherwise it goes
    /// out with the next [`show`](Self::show). A failed write still keeps the
    /// new value.
    pub fn set_brightness(&mut self, level: f32, apply: bool) -> Result<(), Error<E>> {
        self.brightness = Brightness::from_level(level);
        if apply {
            self.bus
                .write_register(self.config.registers.brightness, &[self.brightness.get()])?;
        }
        Ok(())
    }

    /// Sets or clears one pixel.
    ///
    /// `x` 0..=4 addresses the left matrix, 5..=9 the right one. Coordinates
    /// are not range checked: a bit or byte index that falls outside a buffer
    /// is ignored, anything else lands on the corresponding raw bit.
    pub fn set_pixel(&mut self, x: u8, y: u8, on: bool) {
        if x < MATRIX_WIDTH {
            write_bit(&mut self.left, x, y, on);
        } else {
            write_bit(&mut self.right, y, x - MATRIX_WIDTH, on);
        }
    }

    pub fn pixel(&self, x: u8, y: u8) -> bool {
        if x < MATRIX_WIDTH {
            read_bit(&self.left, x, y)
        } else {
            read_bit(&self.right, y, x - MATRIX_WIDTH)
        }
    }

    /// Sets the decimal points. `None` leaves that side as it is.
    pub fn set_decimal(&mut self, left: Option<bool>, right: Option<bool>) {
        if let Some(on) = left {
            apply_mask(&mut self.left[LEFT_DECIMAL_BYTE], LEFT_DECIMAL_MASK, on);
        }
        if let Some(on) = right {
            apply_mask(&mut self.right[RIGHT_DECIMAL_BYTE], RIGHT_DECIMAL_MASK, on);
        }
    }

    pub fn decimal(&self) -> (bool, bool) {
        (
            self.left[LEFT_DECIMAL_BYTE] & LEFT_DECIMAL_MASK != 0,
            self.right[RIGHT_DECIMAL_BYTE] & RIGHT_DECIMAL_MASK != 0,
        )
    }

    /// Draws one character with its left edge at `x_offset`.
    ///
    /// `0` fills the left matrix, `5` the right one; anything in between
    /// straddles both. All 8 bits of each glyph column are drawn, so a glyph
    /// with bit 7 set writes row 7, which has no LED. Fails with
    /// [`Error::UndefinedGlyph`] without touching the frame if the font has
    /// no bitmap for `ch`.
    pub fn set_character<C: Into<Codepoint>>(&mut self, x_offset: u8, ch: C) -> Result<(), Error<E>> {
        let glyph = self.lookup(ch.into())?;
        self.draw_glyph(x_offset, glyph);
        Ok(())
    }

    /// Draws the first two characters of `text`, one per matrix.
    ///
    /// A missing character blanks its matrix; characters past the second
    /// are ignored. Both glyphs are resolved before anything is drawn.
    pub fn write_text(&mut self, text: &str) -> Result<(), Error<E>> {
        let mut cells: [Option<Glyph>; 2] = [None; 2];
        for (cell, ch) in cells.iter_mut().zip(text.chars()) {
            *cell = Some(self.lookup(ch.into())?);
        }
        for (x_offset, cell) in [0, MATRIX_WIDTH].into_iter().zip(cells) {
            self.draw_glyph(x_offset, cell.unwrap_or_default());
        }
        Ok(())
    }

    pub const fn shape(&self) -> (u8, u8) {
        (WIDTH, HEIGHT)
    }

    /// Writes the frame and settings to the chip and latches them.
    ///
    /// Six register writes go out in a fixed order, the update latch last.
    /// The first failing write aborts the sequence and is returned; the chip
    /// is then left with whatever was written before it.
    pub fn show(&mut self) -> Result<(), Error<E>> {
        let regs = self.config.registers;
        self.bus.write_register(regs.matrix_left, &self.left)?;
        self.bus.write_register(regs.matrix_right, &self.right)?;
        self.bus.write_register(regs.mode, &[self.config.mode])?;
        self.bus.write_register(regs.options, &[self.config.options])?;
        self.bus.write_register(regs.brightness, &[self.brightness.get()])?;
        self.bus.write_register(regs.update, &[UPDATE_LATCH])?;

        #[cfg(feature = "defmt")]
        defmt::trace!("frame committed: left={:x} right={:x}", self.left, self.right);
        Ok(())
    }

    pub fn left_buffer(&self) -> &[u8; 8] {
        &self.left
    }

    pub fn right_buffer(&self) -> &[u8; 8] {
        &self.right
    }

    pub fn brightness(&self) -> Brightness {
        self.brightness
    }

    pub fn config(&self) -> &ChipConfig {
        &self.config
    }

    pub fn address(&self) -> u8 {
        self.bus.address()
    }

    pub fn release(self) -> I2C {
        self.bus.release()
    }

    fn lookup(&self, code: Codepoint) -> Result<Glyph, Error<E>> {
        self.font.glyph(code).ok_or(Error::UndefinedGlyph(code.0))
    }

    fn draw_glyph(&mut self, x_offset: u8, glyph: Glyph) {
        for (cx, column) in (0u8..).zip(glyph) {
            for cy in 0..GLYPH_ROWS {
                self.set_pixel(x_offset.saturating_add(cx), cy, column & (1 << cy) != 0);
            }
        }
    }
}

fn apply_mask(byte: &mut u8, mask: u8, on: bool) {
    if on {
        *byte |= mask;
    } else {
        *byte &= !mask;
    }
}

fn write_bit(buf: &mut [u8; 8], index: u8, bit: u8, on: bool) {
    let Some(byte) = buf.get_mut(usize::from(index)) else {
        return;
    };
    if let Some(mask) = 1u8.checked_shl(u32::from(bit)) {
        apply_mask(byte, mask, on);
    }
}

fn read_bit(buf: &[u8; 8], index: u8, bit: u8) -> bool {
    match (buf.get(usize::from(index)), 1u8.checked_shl(u32::from(bit))) {
        (Some(byte), Some(mask)) => byte & mask != 0,
        _ => false,
    }
}
