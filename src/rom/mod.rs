//! ROM image encoding for the arcade video hardware
//!
//! Three outputs are supported: the 32-byte colour PROM, the 256-character
//! tile ROM and the 64-sprite ROM.

pub mod charset;
pub mod palette;
pub mod sprite;
pub mod tile;

use std::fmt;

use serde::Serialize;

use crate::{error::ConvertError, indexed::IndexedImage};

pub use charset::encode_chars;
pub use palette::{decode_colour, encode_colour, encode_palette};
pub use sprite::encode_sprites;

pub const PALETTE_SIZE: usize = 32;
pub const CHAR_COUNT: usize = 256;
pub const CHAR_DIM: u32 = 8;
pub const TILE_BYTES: usize = 16;
pub const SPRITE_COUNT: usize = 64;
pub const SPRITE_DIM: u32 = 16;
pub const SPRITE_BYTES: usize = 64;

/// Output selected for one conversion
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Palette,
    Tiles,
    Sprites,
}

impl Mode {
    /// Palette-only takes precedence over sprites; neither means tiles
    pub fn from_flags(palette_only: bool, sprites: bool) -> Self {
        if palette_only {
            Mode::Palette
        } else if sprites {
            Mode::Sprites
        } else {
            Mode::Tiles
        }
    }

    /// Number of colours, characters or sprites this mode emits
    pub fn unit_count(self) -> usize {
        match self {
            Mode::Palette => PALETTE_SIZE,
            Mode::Tiles => CHAR_COUNT,
            Mode::Sprites => SPRITE_COUNT,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Palette => write!(f, "palette"),
            Mode::Tiles => write!(f, "8x8 characters"),
            Mode::Sprites => write!(f, "16x16 sprites"),
        }
    }
}

/// Encode the whole output for `mode` in memory
pub fn convert(mode: Mode, image: &IndexedImage) -> Result<Vec<u8>, ConvertError> {
    match mode {
        Mode::Palette => encode_palette(image.palette()),
        Mode::Tiles => encode_chars(image),
        Mode::Sprites => encode_sprites(image),
    }
}
