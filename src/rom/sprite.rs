//! # Sprite ROM
//!
//! 64 16x16 sprites, read from the sheet in raster order. Each sprite is eight
//! 8x4 bands emitted in the order the sprite hardware fetches them:
//!
//! ```text
//! 5 1
//! 6 2
//! 7 3
//! 4 0
//! ```
//!
//! The right half goes first, starting from its bottom band, then wrapping to
//! the top. The left half follows the same pattern.

use log::debug;

use super::{tile::encode_8x4, SPRITE_BYTES, SPRITE_COUNT, SPRITE_DIM};
use crate::{error::ConvertError, indexed::IndexedPixels};

/// Reference pixel (bottom-right of each 8x4 band) relative to the sprite origin,
/// in output order. This is fixed by the hardware and has no shorter loop form.
const SPRITE_BAND_ORDER: [(u32, u32); 8] = [
    (15, 15),
    (15, 3),
    (15, 7),
    (15, 11),
    (7, 15),
    (7, 3),
    (7, 7),
    (7, 11),
];

pub fn encode_sprites<P: IndexedPixels + ?Sized>(pixels: &P) -> Result<Vec<u8>, ConvertError> {
    let sprites_w = pixels.width() / SPRITE_DIM;
    let sprites_h = pixels.height() / SPRITE_DIM;
    let count = (sprites_w * sprites_h) as usize;

    if pixels.width() % SPRITE_DIM != 0 || pixels.height() % SPRITE_DIM != 0 || count != SPRITE_COUNT
    {
        return Err(ConvertError::SizeMismatch {
            what: "16x16 sprites",
            expected: SPRITE_COUNT,
            actual: count,
        });
    }

    let mut out = Vec::with_capacity(SPRITE_COUNT * SPRITE_BYTES);
    for sy in 0..sprites_h {
        for sx in 0..sprites_w {
            encode_sprite(pixels, sx * SPRITE_DIM, sy * SPRITE_DIM, &mut out);
        }
    }

    debug!("Encoded {} sprites ({}x{} grid)", count, sprites_w, sprites_h);
    Ok(out)
}

fn encode_sprite<P: IndexedPixels + ?Sized>(pixels: &P, x0: u32, y0: u32, out: &mut Vec<u8>) {
    for &(dx, dy) in &SPRITE_BAND_ORDER {
        out.extend_from_slice(&encode_8x4(pixels, x0 + dx, y0 + dy));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indexed::tests::grid_from_fn;

    /// Top-left 0, top-right 1, bottom-left 2, bottom-right 3
    fn quadrant_index(x: u32, y: u32) -> u8 {
        let right = (x % 16 >= 8) as u8;
        let bottom = (y % 16 >= 8) as u8;
        bottom * 2 + right
    }

    #[test]
    fn test_sheet_size() {
        for (w, h) in [(128, 128), (256, 64), (1024, 16)] {
            let grid = grid_from_fn(w, h, |_, _| 0);
            assert_eq!(encode_sprites(&grid).unwrap().len(), 4096, "{}x{}", w, h);
        }
    }

    #[test]
    fn test_wrong_sprite_count() {
        for (w, h, actual) in [(16 * 63, 16, 63usize), (16 * 65, 16, 65), (256, 256, 256)] {
            let grid = grid_from_fn(w, h, |_, _| 0);
            match encode_sprites(&grid) {
                Err(ConvertError::SizeMismatch { expected, actual: got, .. }) => {
                    assert_eq!(expected, 64);
                    assert_eq!(got, actual);
                }
                other => panic!("expected size mismatch, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_character_sized_sheet_rejected() {
        // Valid as 256 characters but not as sprites
        let grid = grid_from_fn(8 * 256, 8, |_, _| 0);
        assert!(encode_sprites(&grid).is_err());
    }

    #[test]
    fn test_band_order_within_sprite() {
        let grid = grid_from_fn(16, 16, quadrant_index);
        let mut out = Vec::new();
        encode_sprite(&grid, 0, 0, &mut out);
        assert_eq!(out.len(), SPRITE_BYTES);

        // Right half: bottom-right lower, top-right upper, top-right lower, bottom-right upper
        let expected_bands = [0xFF, 0x0F, 0x0F, 0xFF, 0xF0, 0x00, 0x00, 0xF0];
        for (band, &value) in out.chunks(8).zip(&expected_bands) {
            assert_eq!(band, &[value; 8]);
        }
    }

    #[test]
    fn test_band_order_distinguishes_rows() {
        // Each 4-row slice of the right half gets its own index
        let grid = grid_from_fn(16, 16, |x, y| if x >= 8 { (y / 4) as u8 } else { 0 });
        let mut out = Vec::new();
        encode_sprite(&grid, 0, 0, &mut out);
        // Bands 0..4 reference rows 15, 3, 7, 11
        let expected = [0xFF, 0x00, 0x0F, 0xF0];
        for (band, &value) in out.chunks(8).take(4).zip(&expected) {
            assert_eq!(band, &[value; 8]);
        }
    }

    #[test]
    fn test_sprites_in_raster_order() {
        // Sprite n (raster order) filled with n % 4
        let grid = grid_from_fn(128, 128, |x, y| (((y / 16) * 8 + x / 16) % 4) as u8);
        let out = encode_sprites(&grid).unwrap();
        let expected = [0x00, 0x0F, 0xF0, 0xFF];
        for (n, block) in out.chunks(SPRITE_BYTES).enumerate() {
            assert!(block.iter().all(|&b| b == expected[n % 4]), "sprite {}", n);
        }
    }

    #[test]
    fn test_first_sprite_of_sheet() {
        let grid = grid_from_fn(128, 128, |x, y| if x < 16 && y < 16 { quadrant_index(x, y) } else { 0 });
        let out = encode_sprites(&grid).unwrap();
        assert_eq!(&out[..8], &[0xFF; 8]);
        assert_eq!(&out[32..40], &[0xF0; 8]);
        assert!(out[SPRITE_BYTES..].iter().all(|&b| b == 0));
    }
}
