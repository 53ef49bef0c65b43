//! # Hardware Preview
//!
//! Renders the source sheet through the colour PROM quantisation so the
//! result shows the colours the hardware can actually produce.

use std::{fs, path::Path};

use image::{Rgb, RgbImage};
use log::{debug, warn};

use crate::{
    error::ConvertError,
    indexed::{IndexedImage, IndexedPixels},
    rom::{decode_colour, encode_colour},
};

/// Map every pixel's palette entry through the colour byte and back.
/// Indices past the end of the palette render black.
pub fn render_preview(image: &IndexedImage) -> RgbImage {
    let quantised: Vec<Rgb<u8>> = image
        .palette()
        .iter()
        .map(|&c| decode_colour(encode_colour(c)))
        .collect();

    RgbImage::from_fn(image.width(), image.height(), |x, y| {
        let idx = image.colour_index_at(x, y) as usize;
        quantised.get(idx).copied().unwrap_or(Rgb([0, 0, 0]))
    })
}

pub fn save_preview(image: &IndexedImage, path: &Path) -> Result<(), ConvertError> {
    let preview = render_preview(image);
    let temp_path = path.with_extension("temp.png");
    preview.save(&temp_path)?;

    let mut options = oxipng::Options::from_preset(2);
    options.bit_depth_reduction = true;
    options.interlace = None;

    match oxipng::optimize(
        &oxipng::InFile::Path(temp_path.clone()),
        &oxipng::OutFile::Path(Some(path.to_path_buf())),
        &options,
    ) {
        Ok(_) => {
            let _ = fs::remove_file(&temp_path);
            debug!("Optimised preview {}", path.display());
        }
        Err(e) => {
            fs::rename(&temp_path, path)?;
            warn!(
                "oxipng optimisation failed for {}: {}. File saved unoptimised.",
                path.display(),
                e
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_quantises_colours() {
        let palette = vec![Rgb([0x1F, 0x40, 0x7F]), Rgb([255, 255, 255])];
        let img = IndexedImage::new(2, 1, vec![0, 1], palette);
        let preview = render_preview(&img);

        assert_eq!(preview.dimensions(), (2, 1));
        // r 0x1F -> 0, g 0x40 -> 2, b 0x7F -> 1
        assert_eq!(*preview.get_pixel(0, 0), Rgb([0, 72, 85]));
        assert_eq!(*preview.get_pixel(1, 0), Rgb([255, 255, 255]));
    }

    #[test]
    fn test_preview_out_of_range_index_is_black() {
        let img = IndexedImage::new(1, 1, vec![7], vec![Rgb([255, 255, 255])]);
        assert_eq!(*render_preview(&img).get_pixel(0, 0), Rgb([0, 0, 0]));
    }

    #[test]
    fn test_save_preview() {
        let test_dir = std::env::temp_dir().join("pacrom_test_preview");
        fs::create_dir_all(&test_dir).unwrap();
        let path = test_dir.join("preview.png");

        let palette = vec![Rgb([0, 0, 0]), Rgb([255, 0, 0])];
        let img = IndexedImage::new(16, 16, (0..256).map(|i| (i % 2) as u8).collect(), palette);
        save_preview(&img, &path).unwrap();

        let loaded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(loaded.dimensions(), (16, 16));
        assert_eq!(*loaded.get_pixel(1, 0), Rgb([255, 0, 0]));
        assert!(!path.with_extension("temp.png").exists());

        fs::remove_dir_all(&test_dir).unwrap();
    }
}
