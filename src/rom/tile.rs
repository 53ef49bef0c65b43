//! # Bitplane Tiles
//!
//! The video hardware stores 2bpp graphics one byte per pixel column, four rows
//! at a time: plane 0 (bit 0 of each index) in the low nibble and plane 1 (bit 1)
//! in the high nibble. Columns run right to left and rows bottom to top, both
//! counted from a reference pixel at the bottom-right of the 8x4 block.

use crate::indexed::IndexedPixels;

pub const BAND_WIDTH: u32 = 8;
pub const BAND_HEIGHT: u32 = 4;
pub const BAND_BYTES: usize = BAND_WIDTH as usize;

/// Encode the 8x4 block whose bottom-right pixel is (x, y)
///
/// Byte `col` holds the column `x - col`; within it bit `row` is plane 0 and
/// bit `4 + row` is plane 1 of the pixel at `y - row`.
pub fn encode_8x4<P: IndexedPixels + ?Sized>(pixels: &P, x: u32, y: u32) -> [u8; BAND_BYTES] {
    let mut out = [0u8; BAND_BYTES];
    for (col, byte) in out.iter_mut().enumerate() {
        let col = col as u32;
        for row in 0..BAND_HEIGHT {
            let pix = pixels.colour_index_at(x - col, y - row);
            *byte |= (pix & 0x01) << row;
            *byte |= ((pix & 0x02) >> 1) << (4 + row);
        }
    }
    out
}

/// Encode the 8x8 tile at pixel origin (x0, y0): lower band first, then upper
pub fn encode_tile<P: IndexedPixels + ?Sized>(pixels: &P, x0: u32, y0: u32, out: &mut Vec<u8>) {
    out.extend_from_slice(&encode_8x4(pixels, x0 + 7, y0 + 7));
    out.extend_from_slice(&encode_8x4(pixels, x0 + 7, y0 + 3));
}
