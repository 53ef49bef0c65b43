//! JSON summary of a conversion

use std::{fs::File, hash::Hasher, path::Path};

use serde::Serialize;
use twox_hash::XxHash64;

use crate::{error::ConvertError, rom::Mode};

#[derive(Serialize, Debug, Clone)]
pub struct ConversionReport {
    pub input: String,
    pub output: String,
    pub mode: Mode,
    /// Width of the source image in pixels.
    pub width: u32,
    /// Height of the source image in pixels.
    pub height: u32,
    /// Number of entries in the source PNG palette (not just the 32 encoded ones).
    pub palette_entries: usize,
    /// Colours, characters or sprites written.
    pub units: usize,
    pub bytes_written: usize,
    /// XXH64 (seed 0) of the output bytes as 16 hex digits.
    pub xxhash64: String,
}

impl ConversionReport {
    pub fn new(
        input: &Path,
        output: &Path,
        mode: Mode,
        (width, height): (u32, u32),
        palette_entries: usize,
        rom: &[u8],
    ) -> Self {
        ConversionReport {
            input: input.display().to_string(),
            output: output.display().to_string(),
            mode,
            width,
            height,
            palette_entries,
            units: mode.unit_count(),
            bytes_written: rom.len(),
            xxhash64: format!("{:016x}", rom_hash(rom)),
        }
    }

    pub fn write(&self, path: &Path) -> Result<(), ConvertError> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}

fn rom_hash(data: &[u8]) -> u64 {
    let mut hasher = XxHash64::default();
    hasher.write(data);
    hasher.finish()
}
