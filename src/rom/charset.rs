//! # Character ROM
//!
//! 256 8x8 characters, read from the sheet in raster order.

use log::debug;

use super::{tile::encode_tile, CHAR_COUNT, CHAR_DIM, TILE_BYTES};
use crate::{error::ConvertError, indexed::IndexedPixels};

pub fn encode_chars<P: IndexedPixels + ?Sized>(pixels: &P) -> Result<Vec<u8>, ConvertError> {
    let chars_w = pixels.width() / CHAR_DIM;
    let chars_h = pixels.height() / CHAR_DIM;
    let count = (chars_w * chars_h) as usize;

    if pixels.width() % CHAR_DIM != 0 || pixels.height() % CHAR_DIM != 0 || count != CHAR_COUNT {
        return Err(ConvertError::SizeMismatch {
            what: "8x8 characters",
            expected: CHAR_COUNT,
            actual: count,
        });
    }

    let mut out = Vec::with_capacity(CHAR_COUNT * TILE_BYTES);
    for cy in 0..chars_h {
        for cx in 0..chars_w {
            encode_tile(pixels, cx * CHAR_DIM, cy * CHAR_DIM, &mut out);
        }
    }

    debug!("Encoded {} characters ({}x{} grid)", count, chars_w, chars_h);
    Ok(out)
}
