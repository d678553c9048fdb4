//! Property tests for the in-memory frame and brightness scaling.

use embedded_hal_mock::eh0::i2c::Mock as I2cMock;
use ltp305_i2c::{Brightness, MatrixDisplay, ADDRESS_DEFAULT};
use proptest::prelude::*;

fn display() -> MatrixDisplay<I2cMock> {
    MatrixDisplay::new(I2cMock::new(&[]), ADDRESS_DEFAULT)
}

/// Arbitrary frame contents, decimals included.
fn scribble(display: &mut MatrixDisplay<I2cMock>, pixels: &[(u8, u8, bool)], dots: (bool, bool)) {
    for &(x, y, on) in pixels {
        display.set_pixel(x, y, on);
    }
    display.set_decimal(Some(dots.0), Some(dots.1));
}

proptest! {
    /// Setting then clearing a pixel restores both buffers exactly.
    #[test]
    fn pixel_toggle_restores_frame(
        pixels in prop::collection::vec((0u8..10, 0u8..7, any::<bool>()), 0..40),
        dots in any::<(bool, bool)>(),
        x in 0u8..10,
        y in 0u8..7,
    ) {
        let mut display = display();
        scribble(&mut display, &pixels, dots);
        display.set_pixel(x, y, false);
        let (left, right) = (*display.left_buffer(), *display.right_buffer());

        display.set_pixel(x, y, true);
        display.set_pixel(x, y, false);

        prop_assert_eq!(display.left_buffer(), &left);
        prop_assert_eq!(display.right_buffer(), &right);
        display.release().done();
    }

    /// A pixel read back reflects the last write, and nothing else moves.
    #[test]
    fn pixel_write_is_visible_and_local(
        pixels in prop::collection::vec((0u8..10, 0u8..7, any::<bool>()), 0..40),
        x in 0u8..10,
        y in 0u8..7,
        on in any::<bool>(),
    ) {
        let mut display = display();
        scribble(&mut display, &pixels, (true, false));
        let before: Vec<bool> = (0..10u8)
            .flat_map(|px| (0..7u8).map(move |py| (px, py)))
            .map(|(px, py)| display.pixel(px, py))
            .collect();

        display.set_pixel(x, y, on);

        prop_assert_eq!(display.pixel(x, y), on);
        prop_assert_eq!(display.decimal(), (true, false));
        for (i, (px, py)) in (0..10u8).flat_map(|px| (0..7u8).map(move |py| (px, py))).enumerate() {
            if (px, py) != (x, y) {
                prop_assert_eq!(display.pixel(px, py), before[i]);
            }
        }
        display.release().done();
    }

    /// Decimal updates only ever touch their own bit.
    #[test]
    fn left_decimal_leaves_right_buffer(
        pixels in prop::collection::vec((0u8..10, 0u8..7, any::<bool>()), 0..40),
        on in any::<bool>(),
    ) {
        let mut display = display();
        scribble(&mut display, &pixels, (!on, true));
        let left = *display.left_buffer();
        let right = *display.right_buffer();

        display.set_decimal(Some(on), None);

        prop_assert_eq!(display.right_buffer(), &right);
        prop_assert_eq!(&display.left_buffer()[..7], &left[..7]);
        prop_assert_eq!(display.left_buffer()[7] & 0b1011_1111, left[7] & 0b1011_1111);
        prop_assert_eq!(display.decimal().0, on);
        display.release().done();
    }

    /// Stored brightness is the truncated, clamped scale of the level.
    #[test]
    fn brightness_scaling(level in 0.0f32..=1.0) {
        let mut display = display();
        display.set_brightness(level, false).unwrap();
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let expected = (level * 127.0) as u8;
        prop_assert_eq!(display.brightness().get(), expected.min(127));
        display.release().done();
    }

    /// Any level, in range or not, stays within the register range.
    #[test]
    fn brightness_is_always_in_range(level in any::<f32>()) {
        prop_assert!(Brightness::from_level(level).get() <= 127);
    }

    /// Clear always produces two all-zero buffers.
    #[test]
    fn clear_zeroes_everything(
        pixels in prop::collection::vec((0u8..10, 0u8..7, any::<bool>()), 0..40),
        dots in any::<(bool, bool)>(),
    ) {
        let mut display = display();
        scribble(&mut display, &pixels, dots);
        display.clear();
        prop_assert_eq!(display.left_buffer(), &[0u8; 8]);
        prop_assert_eq!(display.right_buffer(), &[0u8; 8]);
        display.release().done();
    }
}
