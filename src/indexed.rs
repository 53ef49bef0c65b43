//! # Indexed Images
//!
//! Palette-indexed pixel grids. The encoders only need read access to colour
//! indices, so they work against the `IndexedPixels` trait; `IndexedImage` is
//! the concrete grid produced by decoding an indexed PNG.

use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use image::Rgb;
use png::{BitDepth, ColorType, Decoder, Transformations};

use crate::error::ConvertError;

/// Read-only access to a grid of palette indices
pub trait IndexedPixels {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    /// Palette index of the pixel at (x, y). Callers stay inside the grid.
    fn colour_index_at(&self, x: u32, y: u32) -> u8;
}

#[derive(Clone, Debug)]
pub struct IndexedImage {
    width: u32,
    height: u32,
    indices: Vec<u8>, // row-major, one index per pixel
    palette: Vec<Rgb<u8>>,
}

impl IndexedImage {
    /// `indices` must hold exactly `width * height` entries in row-major order.
    pub fn new(width: u32, height: u32, indices: Vec<u8>, palette: Vec<Rgb<u8>>) -> Self {
        debug_assert_eq!(indices.len(), (width * height) as usize);
        IndexedImage {
            width,
            height,
            indices,
            palette,
        }
    }

    pub fn palette(&self) -> &[Rgb<u8>] {
        &self.palette
    }

    pub fn from_png_file<P: AsRef<Path>>(path: P) -> Result<Self, ConvertError> {
        let file = File::open(path)?;
        Self::from_png_reader(BufReader::new(file))
    }

    /// Decode an indexed PNG without expanding the palette
    pub fn from_png_reader<R: Read>(reader: R) -> Result<Self, ConvertError> {
        let mut decoder = Decoder::new(reader);
        decoder.set_transformations(Transformations::IDENTITY);
        let mut reader = decoder.read_info()?;

        let palette: Vec<Rgb<u8>> = {
            let info = reader.info();
            if info.color_type != ColorType::Indexed {
                return Err(ConvertError::NotPaletted);
            }
            let plte = info.palette.as_ref().ok_or(ConvertError::NotPaletted)?;
            plte.chunks_exact(3)
                .map(|c| Rgb([c[0], c[1], c[2]]))
                .collect()
        };

        let mut buf = vec![0u8; reader.output_buffer_size()];
        let frame = reader.next_frame(&mut buf)?;

        let indices = unpack_indices(
            &buf,
            frame.width,
            frame.height,
            frame.line_size,
            frame.bit_depth,
        )?;

        Ok(IndexedImage::new(frame.width, frame.height, indices, palette))
    }
}

impl IndexedPixels for IndexedImage {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn colour_index_at(&self, x: u32, y: u32) -> u8 {
        self.indices[(y * self.width + x) as usize]
    }
}

/// Expand packed scanlines (MSB first) into one index per pixel
fn unpack_indices(
    data: &[u8],
    width: u32,
    height: u32,
    line_size: usize,
    bit_depth: BitDepth,
) -> Result<Vec<u8>, ConvertError> {
    let bits = match bit_depth {
        BitDepth::One => 1,
        BitDepth::Two => 2,
        BitDepth::Four => 4,
        BitDepth::Eight => 8,
        // Indexed PNGs cannot be 16-bit
        BitDepth::Sixteen => return Err(ConvertError::NotPaletted),
    };
    let per_byte = 8 / bits;
    let mask = ((1u16 << bits) - 1) as u8;

    let mut indices = Vec::with_capacity((width * height) as usize);
    for line in data.chunks(line_size).take(height as usize) {
        for x in 0..width as usize {
            let byte = line[x / per_byte];
            let shift = 8 - bits * (x % per_byte + 1);
            indices.push((byte >> shift) & mask);
        }
    }
    Ok(indices)
}
