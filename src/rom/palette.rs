//! # Colour PROM
//!
//! One byte per colour, packed as `bbgggrrr`: the top 2 bits of blue, the top
//! 3 bits of green and the top 3 bits of red. Channels are truncated, never
//! rounded.

use image::Rgb;
use log::debug;

use super::PALETTE_SIZE;
use crate::error::ConvertError;

const BLUE_MASK: u8 = 0xC0; // 1100 0000
const GREEN_RED_MASK: u8 = 0xE0; // 1110 0000

pub fn encode_colour(colour: Rgb<u8>) -> u8 {
    let [r, g, b] = colour.0;
    (b & BLUE_MASK) | ((g & GREEN_RED_MASK) >> 2) | ((r & GREEN_RED_MASK) >> 5)
}

/// Expand a packed colour byte back to 8-bit channels, scaling each field linearly
pub fn decode_colour(byte: u8) -> Rgb<u8> {
    let r = byte & 0x07;
    let g = (byte >> 3) & 0x07;
    let b = (byte >> 6) & 0x03;
    Rgb([scale(r, 7), scale(g, 7), scale(b, 3)])
}

fn scale(value: u8, max: u16) -> u8 {
    (value as u16 * 255 / max) as u8
}

/// Encode a full 32-entry palette, preserving order
pub fn encode_palette(palette: &[Rgb<u8>]) -> Result<Vec<u8>, ConvertError> {
    if palette.len() != PALETTE_SIZE {
        return Err(ConvertError::SizeMismatch {
            what: "palette colours",
            expected: PALETTE_SIZE,
            actual: palette.len(),
        });
    }

    let out: Vec<u8> = palette.iter().map(|&c| encode_colour(c)).collect();
    for (i, (c, byte)) in palette.iter().zip(&out).enumerate() {
        debug!("colour {:2}: {:?} => 0x{:02x}", i, c.0, byte);
    }
    Ok(out)
}
